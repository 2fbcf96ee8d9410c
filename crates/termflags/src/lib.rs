//! Moderately simple declarative command line parser.
//!
//! A program describes its interface as a tree of [`Command`]s built at
//! startup, then hands the raw argument vector to [`Command::parse`]:
//!
//! ```
//! use termflags::{Command, Outcome};
//!
//! let cmd = Command::new("demo", "Shows off termflags.")
//!     .option("-o, --output <dir>", "Where to put things.", Some("out"))?
//!     .subcommand(Command::new("build", "Builds the thing.").option("-r, --release", "", None)?)?;
//!
//! match cmd.parse(["build", "-r"])? {
//!     Outcome::Matched(m) => {
//!         assert_eq!(m.command().name(), "build");
//!         assert!(m.flag("release"));
//!     }
//!     Outcome::Help(help) => print!("{}", help.render()),
//! }
//! # Ok::<(), termflags::Error>(())
//! ```
//!
//! Parsing never mutates the tree: results are returned as [`Matches`],
//! which borrow the commands they were resolved against.
//!
//! The [`prompt`] module carries a few line-oriented helpers for asking the
//! user questions once the arguments are known.

mod command;
mod help;
mod lex;
mod matches;
mod option;
mod rt;

pub mod prompt;

use std::fmt;

pub use crate::{
    command::{ArgDescriptor, Command},
    help::render,
    lex::{tokenize, Token},
    matches::{HelpRequest, Level, Matches, Outcome, Value},
    option::{OptionDescriptor, Placeholder},
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A flag as the user would type it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagName {
    Short(char),
    Long(String),
}

impl FlagName {
    /// The name without leading dashes.
    pub fn name(&self) -> String {
        match self {
            FlagName::Short(c) => c.to_string(),
            FlagName::Long(it) => it.clone(),
        }
    }
}

impl fmt::Display for FlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagName::Short(c) => write!(f, "-{c}"),
            FlagName::Long(it) => write!(f, "--{it}"),
        }
    }
}

/// Everything that can go wrong while declaring a command tree or parsing
/// arguments against it.
///
/// The first three variants are programmer errors raised while building the
/// tree, the rest are caused by user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Malformed option declaration `{decl}`: {reason}")]
    MalformedOptionSpec { decl: String, reason: &'static str },

    #[error("Malformed argument declaration `{decl}`: {reason}")]
    MalformedArgSpec { decl: String, reason: &'static str },

    #[error("Flag declared more than once: `{0}`")]
    DuplicateOption(FlagName),

    #[error("Subcommand declared more than once: `{0}`")]
    DuplicateSubcommand(String),

    #[error("Unknown flag: `{0}`. Use `--help` for more information")]
    UnknownOption(FlagName),

    #[error("expected a value for `{0}`")]
    MissingOptionValue(FlagName),

    #[error("Flag `{0}` doesn't take a value")]
    UnexpectedOptionValue(FlagName),

    #[error("Argument is required: `{0}`. Use `--help` for more information")]
    MissingArgument(String),
}

impl Error {
    /// Prints the error to stderr and terminates the process with status 1.
    pub fn exit(&self) -> ! {
        eprintln!("error: {self}");
        std::process::exit(1)
    }
}
