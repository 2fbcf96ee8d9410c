//! Splits the raw argument vector into tokens.
//!
//! The tokenizer knows nothing about declared options: whether `-ofile` is
//! two boolean flags or `-o` with an inline value is decided by the resolver.

/// A single lexical element of the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `--name` or `--name=value`.
    LongFlag { name: String, value: Option<String> },
    /// `-x`.
    ShortFlag(char),
    /// `-xyz`, holds the characters after the dash.
    ShortFlagCluster(String),
    /// A bare `--`.
    DoubleDash,
    /// Anything else, including every argument after `--`.
    PlainWord(String),
}

impl Token {
    /// Whether this token would be read as a flag rather than a value.
    pub fn is_flag(&self) -> bool {
        !matches!(self, Token::PlainWord(_))
    }

    /// Spells the token back the way it appeared on the command line.
    pub(crate) fn into_raw(self) -> String {
        match self {
            Token::LongFlag { name, value: Some(value) } => format!("--{name}={value}"),
            Token::LongFlag { name, value: None } => format!("--{name}"),
            Token::ShortFlag(c) => format!("-{c}"),
            Token::ShortFlagCluster(cluster) => format!("-{cluster}"),
            Token::DoubleDash => "--".to_string(),
            Token::PlainWord(word) => word,
        }
    }
}

pub fn tokenize<I, T>(args: I) -> Vec<Token>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut after_double_dash = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: String| {
            if after_double_dash {
                return Token::PlainWord(arg);
            }
            if arg == "--" {
                after_double_dash = true;
                return Token::DoubleDash;
            }
            if let Some(flag) = arg.strip_prefix("--") {
                let (name, value) = match flag.split_once('=') {
                    Some((name, value)) => (name.to_string(), Some(value.to_string())),
                    None => (flag.to_string(), None),
                };
                return Token::LongFlag { name, value };
            }
            if let Some(flags) = arg.strip_prefix('-') {
                let mut chars = flags.chars();
                match (chars.next(), chars.next()) {
                    (None, _) => {}
                    (Some(c), None) => return Token::ShortFlag(c),
                    (Some(_), Some(_)) => return Token::ShortFlagCluster(flags.to_string()),
                }
            }
            Token::PlainWord(arg)
        })
        .collect()
}
