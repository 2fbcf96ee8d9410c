//! Line-oriented questions for the user.
//!
//! ```no_run
//! let mut prompt = termflags::prompt::Prompt::stdio();
//! let name = prompt.ask("Project name", Some("demo"))?;
//! if prompt.confirm(&format!("Create `{name}`?"), true)? {
//!     let idx = prompt.choose("License", &["MIT", "Apache-2.0"], Some(0))?;
//!     println!("creating {name} under {}", ["MIT", "Apache-2.0"][idx]);
//! }
//! # Ok::<(), std::io::Error>(())
//! ```
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::trace;

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Prompt::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    /// Asks for a line of text. An empty answer picks `default`; without a
    /// default the question is repeated.
    pub fn ask(&mut self, question: &str, default: Option<&str>) -> io::Result<String> {
        loop {
            match default {
                Some(default) => write!(self.output, "{question} [{default}]: ")?,
                None => write!(self.output, "{question}: ")?,
            }
            self.output.flush()?;

            let answer = match self.read_line()? {
                Some(it) => it,
                None => return default.map(str::to_string).ok_or_else(eof),
            };
            trace!(question, answer = answer.as_str(); "Got an answer");
            match (answer.is_empty(), default) {
                (false, _) => return Ok(answer),
                (true, Some(default)) => return Ok(default.to_string()),
                (true, None) => continue,
            }
        }
    }

    /// Asks a yes/no question.
    pub fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.output, "{question} {hint} ")?;
            self.output.flush()?;

            let answer = match self.read_line()? {
                Some(it) => it.to_ascii_lowercase(),
                None => return Ok(default),
            };
            trace!(question, answer = answer.as_str(); "Got an answer");
            match answer.as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer `y` or `n`.")?,
            }
        }
    }

    /// Lets the user pick one of `choices` by number or by name, returns the
    /// index of the pick.
    pub fn choose(
        &mut self,
        question: &str,
        choices: &[&str],
        default: Option<usize>,
    ) -> io::Result<usize> {
        if choices.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "nothing to choose from"));
        }
        if default.map_or(false, |it| it >= choices.len()) {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "default is out of range"));
        }

        writeln!(self.output, "{question}:")?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {choice}", i + 1)?;
        }
        loop {
            match default {
                Some(idx) => write!(self.output, "Choice [{}]: ", idx + 1)?,
                None => write!(self.output, "Choice: ")?,
            }
            self.output.flush()?;

            let answer = match self.read_line()? {
                Some(it) => it,
                None => return default.ok_or_else(eof),
            };
            trace!(question, answer = answer.as_str(); "Got an answer");
            if answer.is_empty() {
                if let Some(idx) = default {
                    return Ok(idx);
                }
                continue;
            }
            if let Some(idx) = choices.iter().position(|it| *it == answer) {
                return Ok(idx);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => return Ok(n - 1),
                _ => writeln!(
                    self.output,
                    "Please enter a number between 1 and {}.",
                    choices.len()
                )?,
            }
        }
    }

    /// Reads one line without the line terminator, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}

fn eof() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "no answer given")
}
