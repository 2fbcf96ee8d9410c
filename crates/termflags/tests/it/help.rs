use expect_test::{expect, Expect};
use termflags::{Command, Outcome};

use crate::{anon, smoke};

fn check(cmd: &Command, args: &str, expect: Expect) {
    let args = args.split_ascii_whitespace().collect::<Vec<_>>();
    match cmd.parse(args) {
        Ok(Outcome::Help(help)) => expect.assert_eq(&help.render()),
        Ok(Outcome::Matched(matches)) => panic!("expected help, got {matches:?}"),
        Err(err) => panic!("expected help, got {err}"),
    }
}

#[test]
fn root_help() {
    let cmd = smoke::cmd().unwrap();
    check(
        &cmd,
        "--help",
        expect![[r#"
            foo
              Does foo things.

            USAGE:
                foo [subcommand] [options] [args]

            OPTIONS:
                -o, --output <dir>  Output directory.
                -f, --force         Overwrite existing files.
                -v, --verbose       More output.
                -j, --jobs <n>      Parallel jobs. [default: 4]
                -c, --color [when]  Colorize output.
                -h, --help          Prints help information.

            SUBCOMMANDS:
                build   Builds the project.
                remote  Manages remotes.
        "#]],
    );
}

#[test]
fn subcommand_help() {
    let cmd = smoke::cmd().unwrap();
    check(
        &cmd,
        "build -h",
        expect![[r#"
            foo build
              Builds the project.

            USAGE:
                foo build [options] [target]

            ARGS:
                [target]  What to build.

            OPTIONS:
                -o, --output <dir>  Output directory. [default: target]
                -r, --release       Build with optimizations.
                -h, --help          Prints help information.
        "#]],
    );
    check(
        &cmd,
        "remote --help",
        expect![[r#"
            foo remote
              Manages remotes.

            USAGE:
                foo remote [subcommand] [options] [args]

            OPTIONS:
                -h, --help  Prints help information.

            SUBCOMMANDS:
                add     Adds a remote.
                remove  Removes remotes.
        "#]],
    );
    check(
        &cmd,
        "remote add -h",
        expect![[r#"
            foo remote add
              Adds a remote.

            USAGE:
                foo remote add [options] <name> <url>

            ARGS:
                <name>
                <url>

            OPTIONS:
                -h, --help  Prints help information.
        "#]],
    );
}

#[test]
fn anonymous_help() {
    let help = anon::cmd().unwrap().help();
    assert_eq!(
        help,
        "USAGE:\n    [options] [args]\n\nOPTIONS:\n        --long-only\n    -s               Short only.\n                     With a second line.\n    -h, --help       Prints help information.\n"
    );
}

#[test]
fn help_is_stable() {
    let cmd = smoke::cmd().unwrap();
    let sub = cmd.find_subcommand("build").unwrap();
    assert_eq!(cmd.help(), cmd.help());
    assert_eq!(termflags::render(&[&cmd, sub]), termflags::render(&[&cmd, sub]));
    assert!(termflags::render(&[]).is_empty());
}
