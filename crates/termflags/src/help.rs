//! Help text for a command.
use std::fmt::Write;

use crate::{Command, OptionDescriptor};

macro_rules! w {
    ($($tt:tt)*) => {
        { let _ = write!($($tt)*); }
    };
}

impl Command {
    /// Help for this command, as if it were the program itself.
    pub fn help(&self) -> String {
        render(&[self])
    }
}

/// Renders help for the last command of `path`.
///
/// `path` lists the commands from the root down to the one help is rendered
/// for, and is used to spell the usage line.
pub fn render(path: &[&Command]) -> String {
    let mut buf = String::new();
    let cmd = match path.last() {
        Some(it) => *it,
        None => return buf,
    };

    let names = path.iter().map(|it| it.name()).filter(|it| !it.is_empty()).collect::<Vec<_>>();
    if !names.is_empty() {
        w!(buf, "{}\n", names.join(" "));
    }
    if !cmd.description().is_empty() {
        write_lines_indented(&mut buf, cmd.description(), 2);
    }
    if !buf.is_empty() {
        blank_line(&mut buf);
    }

    w!(buf, "USAGE:\n    {}\n", usage(&names, cmd));

    if !cmd.args().is_empty() {
        blank_line(&mut buf);
        w!(buf, "ARGS:\n");
        let rows = cmd
            .args()
            .iter()
            .map(|arg| (arg.to_string(), arg.description().to_string()))
            .collect::<Vec<_>>();
        write_rows(&mut buf, &rows);
    }

    blank_line(&mut buf);
    w!(buf, "OPTIONS:\n");
    let rows = cmd.options().iter().map(|opt| (flag_column(opt), option_doc(opt))).collect::<Vec<_>>();
    write_rows(&mut buf, &rows);

    if !cmd.subcommands().is_empty() {
        blank_line(&mut buf);
        w!(buf, "SUBCOMMANDS:\n");
        let rows = cmd
            .subcommands()
            .iter()
            .map(|sub| (sub.name().to_string(), sub.description().to_string()))
            .collect::<Vec<_>>();
        write_rows(&mut buf, &rows);
    }

    buf
}

fn usage(names: &[&str], cmd: &Command) -> String {
    let mut parts = names.iter().map(|it| it.to_string()).collect::<Vec<_>>();
    if !cmd.subcommands().is_empty() {
        parts.push("[subcommand]".to_string());
    }
    parts.push("[options]".to_string());
    if cmd.args().is_empty() {
        parts.push("[args]".to_string());
    } else {
        parts.extend(cmd.args().iter().map(|it| it.to_string()));
    }
    parts.join(" ")
}

fn flag_column(opt: &OptionDescriptor) -> String {
    let mut res = String::new();
    match (opt.short(), opt.long()) {
        (Some(short), Some(long)) => w!(res, "-{short}, --{long}"),
        (Some(short), None) => w!(res, "-{short}"),
        (None, Some(long)) => w!(res, "    --{long}"),
        (None, None) => (),
    }
    if let Some(placeholder) = opt.placeholder() {
        w!(res, " {placeholder}");
    }
    res
}

fn option_doc(opt: &OptionDescriptor) -> String {
    match opt.default() {
        Some(default) if opt.description().is_empty() => format!("[default: {default}]"),
        Some(default) => format!("{} [default: {default}]", opt.description()),
        None => opt.description().to_string(),
    }
}

/// Two aligned columns. Continuation lines of the right column line up with
/// its first line.
fn write_rows(buf: &mut String, rows: &[(String, String)]) {
    let width = rows.iter().map(|(left, _)| left.chars().count()).max().unwrap_or(0);
    for (left, right) in rows {
        let mut lines = right.split('\n').map(str::trim_end);
        let first = lines.next().unwrap_or_default();
        if first.is_empty() {
            w!(buf, "    {left}\n");
        } else {
            w!(buf, "    {left:width$}  {first}\n");
        }
        for line in lines {
            if line.is_empty() {
                blank_line(buf);
            } else {
                w!(buf, "{blank:indent$}{line}\n", blank = "", indent = width + 6);
            }
        }
    }
}

fn write_lines_indented(buf: &mut String, multiline_str: &str, indent: usize) {
    for line in multiline_str.split('\n').map(str::trim_end) {
        if line.is_empty() {
            w!(buf, "\n")
        } else {
            w!(buf, "{blank:indent$}{line}\n", blank = "");
        }
    }
}

fn blank_line(buf: &mut String) {
    w!(buf, "\n");
}
