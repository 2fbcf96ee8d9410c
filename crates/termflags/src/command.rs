use std::{ffi::OsString, fmt};

use crate::{rt, Error, FlagName, Matches, OptionDescriptor, Outcome, Result};

/// A node of the command tree: the program itself or one of its subcommands.
///
/// Commands are built once, before parsing, and are never modified by
/// [`Command::parse`].
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    description: String,
    options: Vec<OptionDescriptor>,
    args: Vec<ArgDescriptor>,
    subcommands: Vec<Command>,
}

impl Command {
    /// Creates a command with only the built-in `-h, --help` flag.
    ///
    /// The root command may have an empty name.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Command {
        Command {
            name: name.into(),
            description: description.into(),
            options: vec![OptionDescriptor::help()],
            args: Vec::new(),
            subcommands: Vec::new(),
        }
    }

    /// Declares an option, see [`OptionDescriptor::parse`] for the syntax.
    pub fn option(
        mut self,
        decl: &str,
        description: impl Into<String>,
        default: Option<&str>,
    ) -> Result<Command> {
        let opt = OptionDescriptor::parse(decl)?.with_description(description).with_default(default);
        self.add_option(opt)?;
        Ok(self)
    }

    pub fn add_option(&mut self, opt: OptionDescriptor) -> Result<()> {
        // `-x` and `--x` would both bind under `x`, so names clash across
        // short and long spellings too.
        let clash = opt.flag_names().find(|name| self.find_option(&name.name()).is_some());
        if let Some(name) = clash {
            return Err(Error::DuplicateOption(name));
        }
        // `--help` is always listed last.
        let idx = self.options.len() - 1;
        self.options.insert(idx, opt);
        Ok(())
    }

    /// Declares a positional argument: `<name>`, `[name]`, `<name>...` or `[name]...`.
    pub fn arg(mut self, decl: &str, description: impl Into<String>) -> Result<Command> {
        let arg = ArgDescriptor::parse(decl)?.with_description(description);
        self.add_arg(arg)?;
        Ok(self)
    }

    pub fn add_arg(&mut self, arg: ArgDescriptor) -> Result<()> {
        let malformed =
            |reason: &'static str| Err(Error::MalformedArgSpec { decl: arg.to_string(), reason });
        if self.args.iter().any(|it| it.name == arg.name) {
            return malformed("argument declared more than once");
        }
        if self.args.last().map_or(false, |it| it.variadic) {
            return malformed("variadic argument must be the last one");
        }
        if arg.required && self.args.iter().any(|it| !it.required) {
            return malformed("required argument can't follow an optional one");
        }
        self.args.push(arg);
        Ok(())
    }

    /// Registers `cmd` as a subcommand, selected by its name.
    pub fn subcommand(mut self, cmd: Command) -> Result<Command> {
        self.add_subcommand(cmd)?;
        Ok(self)
    }

    pub fn add_subcommand(&mut self, cmd: Command) -> Result<()> {
        if self.find_subcommand(&cmd.name).is_some() {
            return Err(Error::DuplicateSubcommand(cmd.name));
        }
        self.subcommands.push(cmd);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Options in declaration order, followed by `--help`.
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    pub fn args(&self) -> &[ArgDescriptor] {
        &self.args
    }

    pub fn subcommands(&self) -> &[Command] {
        &self.subcommands
    }

    pub fn find_subcommand(&self, name: &str) -> Option<&Command> {
        self.subcommands.iter().find(|it| it.name == name)
    }

    /// Looks an option up by identifier, long name or short name.
    pub fn find_option(&self, name: &str) -> Option<&OptionDescriptor> {
        self.options.iter().find(|it| it.answers_to(name))
    }

    pub(crate) fn find_flag(&self, name: &FlagName) -> Option<&OptionDescriptor> {
        match name {
            FlagName::Short(c) => self.options.iter().find(|it| it.matches_short(*c)),
            FlagName::Long(long) => self.options.iter().find(|it| it.matches_long(long)),
        }
    }

    /// Resolves `args` (without the program name) against this command tree.
    pub fn parse<I, T>(&self, args: I) -> Result<Outcome<'_>>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        rt::parse(self, args)
    }

    /// Parses the arguments of the current process.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn parse_env(&self) -> Result<Outcome<'_>> {
        let args = std::env::args_os().skip(1).map(|it: OsString| it.to_string_lossy().into_owned());
        self.parse(args)
    }

    /// Like [`Command::parse_env`], but prints help and exits with status 0
    /// when help was requested, or prints the error and exits with status 1.
    pub fn parse_env_or_exit(&self) -> Matches<'_> {
        match self.parse_env() {
            Ok(Outcome::Matched(matches)) => matches,
            Ok(Outcome::Help(help)) => help.exit(),
            Err(err) => err.exit(),
        }
    }
}

/// Declaration of a positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgDescriptor {
    name: String,
    description: String,
    required: bool,
    variadic: bool,
}

impl ArgDescriptor {
    pub fn parse(decl: &str) -> Result<ArgDescriptor> {
        let malformed =
            |reason: &'static str| Err(Error::MalformedArgSpec { decl: decl.to_string(), reason });

        let text = decl.trim();
        let (text, variadic) = match text.strip_suffix("...") {
            Some(rest) => (rest, true),
            None => (text, false),
        };
        let (required, name) = if let Some(name) =
            text.strip_prefix('<').and_then(|it| it.strip_suffix('>'))
        {
            (true, name)
        } else if let Some(name) = text.strip_prefix('[').and_then(|it| it.strip_suffix(']')) {
            (false, name)
        } else {
            return malformed("expected `<name>` or `[name]`");
        };

        let name = name.trim();
        if name.is_empty() {
            return malformed("argument name is empty");
        }
        if name.contains(['<', '>', '[', ']']) {
            return malformed("expected `<name>` or `[name]`");
        }
        Ok(ArgDescriptor { name: name.to_string(), description: String::new(), required, variadic })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> ArgDescriptor {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether this argument collects all remaining positionals.
    pub fn is_variadic(&self) -> bool {
        self.variadic
    }
}

impl fmt::Display for ArgDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (l, r) = if self.required { ("<", ">") } else { ("[", "]") };
        let dots = if self.variadic { "..." } else { "" };
        write!(f, "{l}{}{r}{dots}", self.name)
    }
}
