//! What a successful parse hands back to the caller.
use std::{collections::BTreeMap, fmt};

use crate::{help, Command};

/// A bound option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Str(String),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bool(_) => None,
            Value::Str(it) => Some(it),
        }
    }

    /// `true` for `Bool(true)` and for any string value.
    pub fn is_set(&self) -> bool {
        match self {
            Value::Bool(it) => *it,
            Value::Str(_) => true,
        }
    }
}

/// Result of [`Command::parse`].
#[derive(Debug)]
pub enum Outcome<'a> {
    Matched(Matches<'a>),
    /// `-h` or `--help` was given. Nothing after it was looked at.
    Help(HelpRequest<'a>),
}

/// A command on the resolved path together with the options bound on it.
pub struct Level<'a> {
    pub(crate) command: &'a Command,
    pub(crate) values: BTreeMap<String, Value>,
}

impl<'a> Level<'a> {
    pub fn command(&self) -> &'a Command {
        self.command
    }

    /// All bound values, keyed by option identifier.
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    /// Looks a value up by identifier, long name or short name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let id = self.command.find_option(name)?.id();
        self.values.get(&id)
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Whether the option is bound to `true` or to any string.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).map_or(false, Value::is_set)
    }
}

impl fmt::Debug for Level<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Level")
            .field("command", &self.command.name())
            .field("values", &self.values)
            .finish()
    }
}

/// Parsed arguments.
///
/// Holds one [`Level`] per command from the root to the invoked subcommand,
/// and the positional arguments left over for that subcommand. The shortcut
/// accessors all read the last level.
#[derive(Debug)]
pub struct Matches<'a> {
    pub(crate) levels: Vec<Level<'a>>,
    pub(crate) positionals: Vec<String>,
}

impl<'a> Matches<'a> {
    /// The invoked command, the root if no subcommand was selected.
    pub fn command(&self) -> &'a Command {
        self.leaf().command
    }

    /// Names of the commands from the root to the invoked one.
    pub fn path(&self) -> Vec<&'a str> {
        self.levels.iter().map(|it| it.command.name()).collect()
    }

    pub fn levels(&self) -> &[Level<'a>] {
        &self.levels
    }

    pub fn values(&self) -> &BTreeMap<String, Value> {
        self.leaf().values()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.leaf().get(name)
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.leaf().value_of(name)
    }

    pub fn flag(&self, name: &str) -> bool {
        self.leaf().flag(name)
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// The positional bound to a declared, non-variadic argument.
    pub fn arg(&self, name: &str) -> Option<&str> {
        let (idx, decl) = self.find_arg(name)?;
        if decl.is_variadic() {
            return None;
        }
        self.positionals.get(idx).map(String::as_str)
    }

    /// The positionals collected by a declared variadic argument, or the
    /// single value of a plain one.
    pub fn arg_values(&self, name: &str) -> &[String] {
        match self.find_arg(name) {
            Some((idx, decl)) if idx < self.positionals.len() => {
                let end = if decl.is_variadic() { self.positionals.len() } else { idx + 1 };
                &self.positionals[idx..end]
            }
            _ => &[],
        }
    }

    fn find_arg(&self, name: &str) -> Option<(usize, &'a crate::ArgDescriptor)> {
        self.command().args().iter().enumerate().find(|(_, it)| it.name() == name)
    }

    fn leaf(&self) -> &Level<'a> {
        self.levels.last().expect("the root level is always present")
    }
}

/// Signals that help was asked for on `command()`.
#[derive(Debug)]
pub struct HelpRequest<'a> {
    pub(crate) path: Vec<&'a Command>,
}

impl<'a> HelpRequest<'a> {
    /// The command whose help was requested.
    pub fn command(&self) -> &'a Command {
        self.path[self.path.len() - 1]
    }

    pub fn render(&self) -> String {
        help::render(&self.path)
    }

    /// Prints help to stdout and terminates the process with status 0.
    pub fn exit(&self) -> ! {
        print!("{}", self.render());
        std::process::exit(0)
    }
}
