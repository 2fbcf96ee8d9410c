//! Resolves a token stream against a command tree.
use std::collections::BTreeMap;

use log::{debug, trace};

use crate::{
    lex::{self, Token},
    Command, Error, FlagName, HelpRequest, Level, Matches, OptionDescriptor, Outcome, Result,
    Value,
};

pub(crate) fn parse<'a, I, T>(root: &'a Command, args: I) -> Result<Outcome<'a>>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let tokens = lex::tokenize(args);
    trace!(tokens:?; "Tokenized arguments");

    let mut p = Parser::new(tokens);
    let mut levels = vec![Level { command: root, values: BTreeMap::new() }];
    let mut positionals = Vec::new();

    while let Some(token) = p.next() {
        let cmd = levels[levels.len() - 1].command;
        match token {
            Token::DoubleDash => {
                positionals.extend(p.rest());
                break;
            }
            Token::LongFlag { name, value } => {
                let flag = FlagName::Long(name);
                let opt = lookup(cmd, &flag)?;
                let value = match (opt.takes_value(), value) {
                    (true, Some(value)) => Value::Str(value),
                    (true, None) => p.next_value(&flag, opt)?,
                    (false, Some(_)) => return Err(Error::UnexpectedOptionValue(flag)),
                    (false, None) => Value::Bool(true),
                };
                if opt.is_help() {
                    return Ok(help(&levels));
                }
                bind(&mut levels, opt, value);
            }
            Token::ShortFlag(c) => {
                let flag = FlagName::Short(c);
                let opt = lookup(cmd, &flag)?;
                if opt.is_help() {
                    return Ok(help(&levels));
                }
                let value =
                    if opt.takes_value() { p.next_value(&flag, opt)? } else { Value::Bool(true) };
                bind(&mut levels, opt, value);
            }
            Token::ShortFlagCluster(cluster) => {
                for (idx, c) in cluster.char_indices() {
                    let flag = FlagName::Short(c);
                    let opt = lookup(cmd, &flag)?;
                    if opt.is_help() {
                        return Ok(help(&levels));
                    }
                    if !opt.takes_value() {
                        bind(&mut levels, opt, Value::Bool(true));
                        continue;
                    }
                    // The first flag that takes a value swallows the rest of the cluster.
                    let rest = &cluster[idx + c.len_utf8()..];
                    let value = if rest.is_empty() {
                        p.next_value(&flag, opt)?
                    } else {
                        Value::Str(rest.to_string())
                    };
                    bind(&mut levels, opt, value);
                    break;
                }
            }
            Token::PlainWord(word) => {
                if positionals.is_empty() {
                    if let Some(sub) = cmd.find_subcommand(&word) {
                        debug!(subcommand = sub.name(); "Descending into subcommand");
                        levels.push(Level { command: sub, values: BTreeMap::new() });
                        continue;
                    }
                }
                positionals.push(word);
            }
        }
    }

    let leaf = levels.len() - 1;
    let level = &mut levels[leaf];
    let cmd = level.command;
    for opt in cmd.options() {
        if let Some(default) = opt.default() {
            let id = opt.id();
            if !level.values.contains_key(&id) {
                debug!(option = id.as_str(), default; "Binding default value");
                level.values.insert(id, Value::Str(default.to_string()));
            }
        }
    }

    let required = cmd.args().iter().filter(|it| it.is_required()).count();
    if positionals.len() < required {
        let missing = &cmd.args()[positionals.len()];
        return Err(Error::MissingArgument(missing.name().to_string()));
    }

    Ok(Outcome::Matched(Matches { levels, positionals }))
}

fn lookup<'a>(cmd: &'a Command, flag: &FlagName) -> Result<&'a OptionDescriptor> {
    cmd.find_flag(flag).ok_or_else(|| Error::UnknownOption(flag.clone()))
}

fn bind(levels: &mut [Level<'_>], opt: &OptionDescriptor, value: Value) {
    let level = levels.last_mut().expect("the root level is always present");
    let id = opt.id();
    trace!(option = id.as_str(), value:?; "Binding option");
    if let Some(previous) = level.values.insert(id, value) {
        debug!(option = opt.id(), previous:?; "Option given more than once, keeping the last value");
    }
}

fn help<'a>(levels: &[Level<'a>]) -> Outcome<'a> {
    let path = levels.iter().map(|it| it.command).collect::<Vec<_>>();
    debug!(command = path[path.len() - 1].name(); "Help requested");
    Outcome::Help(HelpRequest { path })
}

struct Parser {
    rtokens: Vec<Token>,
}

impl Parser {
    fn new(mut tokens: Vec<Token>) -> Self {
        tokens.reverse();
        Self { rtokens: tokens }
    }

    fn next(&mut self) -> Option<Token> {
        self.rtokens.pop()
    }

    /// Takes the following word as the value of `flag`.
    ///
    /// A flag with an optional placeholder that is not followed by a word is
    /// bound as present.
    fn next_value(&mut self, flag: &FlagName, opt: &OptionDescriptor) -> Result<Value> {
        if self.rtokens.last().map_or(false, |it| !it.is_flag()) {
            if let Some(Token::PlainWord(word)) = self.next() {
                return Ok(Value::Str(word));
            }
        }
        match opt.placeholder() {
            Some(it) if it.is_optional() => Ok(Value::Bool(true)),
            _ => Err(Error::MissingOptionValue(flag.clone())),
        }
    }

    /// Everything that is left, spelled as it was on the command line.
    fn rest(&mut self) -> impl Iterator<Item = String> + '_ {
        self.rtokens.drain(..).rev().map(Token::into_raw)
    }
}
