//! Option descriptors and the small grammar they are declared with:
//!
//! ```text
//! -x, --long <value>
//! ```
//!
//! Any subset of the short name, the long name and the placeholder is
//! accepted, as long as they come in this order. `<value>` means the flag
//! requires a value, `[value]` means the value may be omitted.
use std::fmt;

use crate::{Error, FlagName, Result};

macro_rules! bail {
    ($decl:expr, $reason:literal) => {
        return Err(Error::MalformedOptionSpec { decl: $decl.to_string(), reason: $reason })
    };
}

/// The value slot of an option, `<name>` or `[name]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    name: String,
    optional: bool,
}

impl Placeholder {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the flag may be given without a value.
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (l, r) = if self.optional { ("[", "]") } else { ("<", ">") };
        write!(f, "{l}{}{r}", self.name)
    }
}

/// Declarative record of a single option's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    short: Option<char>,
    long: Option<String>,
    placeholder: Option<Placeholder>,
    description: String,
    default: Option<String>,
}

impl OptionDescriptor {
    /// Parses a declaration such as `-o, --output <dir>`.
    pub fn parse(decl: &str) -> Result<OptionDescriptor> {
        let (names, placeholder) = match decl.find(['<', '[']) {
            Some(idx) => (&decl[..idx], Some(placeholder(decl, &decl[idx..])?)),
            None => (decl, None),
        };

        let mut short = None;
        let mut long: Option<String> = None;
        for piece in names.split(|c: char| c == ',' || c.is_whitespace()).filter(|it| !it.is_empty())
        {
            if let Some(name) = piece.strip_prefix("--") {
                if long.is_some() {
                    bail!(decl, "more than one long name")
                }
                if name.is_empty() {
                    bail!(decl, "long name is empty")
                }
                if name.starts_with('-') {
                    bail!(decl, "long name can't begin with `-`")
                }
                if name.contains('=') {
                    bail!(decl, "long name can't contain `=`")
                }
                long = Some(name.to_string());
            } else if let Some(name) = piece.strip_prefix('-') {
                if long.is_some() {
                    bail!(decl, "short name must come before the long name")
                }
                if short.is_some() {
                    bail!(decl, "more than one short name")
                }
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => short = Some(c),
                    _ => bail!(decl, "short name must be a single character"),
                }
            } else {
                bail!(decl, "expected `-x` or `--name`")
            }
        }

        if short.is_none() && long.is_none() {
            bail!(decl, "expected at least one of `-x` or `--name`")
        }

        Ok(OptionDescriptor { short, long, placeholder, description: String::new(), default: None })
    }

    /// The built-in `-h, --help` flag every command carries.
    pub(crate) fn help() -> OptionDescriptor {
        OptionDescriptor {
            short: Some('h'),
            long: Some("help".to_string()),
            placeholder: None,
            description: "Prints help information.".to_string(),
            default: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> OptionDescriptor {
        self.description = description.into();
        self
    }

    pub fn with_default(mut self, default: Option<&str>) -> OptionDescriptor {
        self.default = default.map(str::to_string);
        self
    }

    /// Key under which the option's value is bound: the long name if there
    /// is one, otherwise the short name.
    pub fn id(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => unreachable!("descriptor without a name"),
        }
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn takes_value(&self) -> bool {
        self.placeholder.is_some()
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn matches_long(&self, name: &str) -> bool {
        self.long.as_deref() == Some(name)
    }

    pub fn matches_short(&self, c: char) -> bool {
        self.short == Some(c)
    }

    /// Whether `name` is the identifier, long name or short name of this option.
    pub fn answers_to(&self, name: &str) -> bool {
        if self.matches_long(name) {
            return true;
        }
        let mut chars = name.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if self.matches_short(c))
    }

    pub(crate) fn is_help(&self) -> bool {
        self.matches_long("help")
    }

    /// All names under which this option can be spelled on the command line.
    pub(crate) fn flag_names(&self) -> impl Iterator<Item = FlagName> + '_ {
        self.short.map(FlagName::Short).into_iter().chain(self.long.clone().map(FlagName::Long))
    }
}

fn placeholder(decl: &str, text: &str) -> Result<Placeholder> {
    let text = text.trim_end();
    let (optional, inner) = if let Some(rest) = text.strip_prefix('<') {
        match rest.strip_suffix('>') {
            Some(inner) => (false, inner),
            None => bail!(decl, "unterminated placeholder, expected `>` at the end"),
        }
    } else if let Some(rest) = text.strip_prefix('[') {
        match rest.strip_suffix(']') {
            Some(inner) => (true, inner),
            None => bail!(decl, "unterminated placeholder, expected `]` at the end"),
        }
    } else {
        unreachable!("placeholder starts with `<` or `[`")
    };

    let inner = inner.trim();
    if inner.is_empty() {
        bail!(decl, "placeholder name is empty")
    }
    if inner.contains(['<', '>', '[', ']']) {
        bail!(decl, "only one placeholder is allowed")
    }
    Ok(Placeholder { name: inner.to_string(), optional })
}
