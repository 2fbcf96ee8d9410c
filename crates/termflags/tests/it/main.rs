mod smoke;
mod help;

use std::fmt::Write;

use expect_test::{expect, Expect};
use termflags::{Command, Error, FlagName, Matches, Outcome, Value};

fn check(cmd: &Command, args: &str, expect: Expect) {
    let args = args.split_ascii_whitespace().collect::<Vec<_>>();
    match cmd.parse(args) {
        Ok(Outcome::Matched(matches)) => expect.assert_eq(&summary(&matches)),
        Ok(Outcome::Help(help)) => expect.assert_eq(&format!("help: {}", help.command().name())),
        Err(err) => expect.assert_eq(&err.to_string()),
    }
}

fn summary(matches: &Matches<'_>) -> String {
    let mut buf = String::new();
    for level in matches.levels() {
        writeln!(buf, "{}", level.command().name()).unwrap();
        for (id, value) in level.values() {
            writeln!(buf, "  {id} = {value:?}").unwrap();
        }
    }
    writeln!(buf, "args: {:?}", matches.positionals()).unwrap();
    buf
}

fn matched<'a>(cmd: &'a Command, args: &[&str]) -> Matches<'a> {
    match cmd.parse(args.iter().copied()) {
        Ok(Outcome::Matched(matches)) => matches,
        Ok(Outcome::Help(help)) => panic!("unexpected help for {}", help.command().name()),
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn smoke() {
    let cmd = smoke::cmd().unwrap();
    check(
        &cmd,
        "",
        expect![[r#"
            foo
              jobs = Str("4")
            args: []
        "#]],
    );
    check(
        &cmd,
        "-o src -v -j 8 a b",
        expect![[r#"
            foo
              jobs = Str("8")
              output = Str("src")
              verbose = Bool(true)
            args: ["a", "b"]
        "#]],
    );
    check(
        &cmd,
        "--unknown",
        expect!["Unknown flag: `--unknown`. Use `--help` for more information"],
    );
    check(&cmd, "-x", expect!["Unknown flag: `-x`. Use `--help` for more information"]);
    check(&cmd, "-o", expect!["expected a value for `-o`"]);
    check(&cmd, "--output --force", expect!["expected a value for `--output`"]);
    check(&cmd, "--force=yes", expect!["Flag `--force` doesn't take a value"]);
}

#[test]
fn unknown_option_is_structured() {
    let cmd = smoke::cmd().unwrap();
    let err = cmd.parse(["-v", "--unknown", "build"]).unwrap_err();
    assert_eq!(err, Error::UnknownOption(FlagName::Long("unknown".to_string())));

    // The tree is untouched by a failed parse.
    let matches = matched(&cmd, &["-v"]);
    assert!(matches.flag("verbose"));
    assert_eq!(matches.values().len(), 2);
}

#[test]
fn value_spellings_agree() {
    let cmd = smoke::cmd().unwrap();
    let expected = summary(&matched(&cmd, &["--output", "src"]));
    assert_eq!(summary(&matched(&cmd, &["--output=src"])), expected);
    assert_eq!(summary(&matched(&cmd, &["-o", "src"])), expected);
    assert_eq!(summary(&matched(&cmd, &["-osrc"])), expected);

    let matches = matched(&cmd, &["-o", "src"]);
    assert_eq!(matches.value_of("output"), Some("src"));
    assert_eq!(matches.value_of("o"), Some("src"));
    assert_eq!(matches.get("output"), Some(&Value::Str("src".to_string())));
}

#[test]
fn values() {
    let cmd = smoke::cmd().unwrap();
    check(
        &cmd,
        "--output= -o - --jobs=-1",
        expect![[r#"
            foo
              jobs = Str("-1")
              output = Str("-")
            args: []
        "#]],
    );
    check(
        &cmd,
        "-o a -o b",
        expect![[r#"
            foo
              jobs = Str("4")
              output = Str("b")
            args: []
        "#]],
    );
}

#[test]
fn optional_value() {
    let cmd = smoke::cmd().unwrap();
    check(
        &cmd,
        "-c",
        expect![[r#"
            foo
              color = Bool(true)
              jobs = Str("4")
            args: []
        "#]],
    );
    check(
        &cmd,
        "--color always",
        expect![[r#"
            foo
              color = Str("always")
              jobs = Str("4")
            args: []
        "#]],
    );
    check(
        &cmd,
        "--color --force",
        expect![[r#"
            foo
              color = Bool(true)
              force = Bool(true)
              jobs = Str("4")
            args: []
        "#]],
    );
    check(
        &cmd,
        "--color=never",
        expect![[r#"
            foo
              color = Str("never")
              jobs = Str("4")
            args: []
        "#]],
    );

    let matches = matched(&cmd, &["-c"]);
    assert!(matches.flag("color"));
    assert_eq!(matches.value_of("color"), None);
}

#[test]
fn clusters() {
    let cmd = smoke::cmd().unwrap();
    check(
        &cmd,
        "-fv",
        expect![[r#"
            foo
              force = Bool(true)
              jobs = Str("4")
              verbose = Bool(true)
            args: []
        "#]],
    );
    // `o` takes a value: it comes from the next argument when `o` ends the
    // cluster, and from the rest of the cluster otherwise.
    check(
        &cmd,
        "-fo out",
        expect![[r#"
            foo
              force = Bool(true)
              jobs = Str("4")
              output = Str("out")
            args: []
        "#]],
    );
    check(
        &cmd,
        "-foout",
        expect![[r#"
            foo
              force = Bool(true)
              jobs = Str("4")
              output = Str("out")
            args: []
        "#]],
    );
    check(
        &cmd,
        "-ofv",
        expect![[r#"
            foo
              jobs = Str("4")
              output = Str("fv")
            args: []
        "#]],
    );
    // Same for an optional value.
    check(
        &cmd,
        "-cf",
        expect![[r#"
            foo
              color = Str("f")
              jobs = Str("4")
            args: []
        "#]],
    );
    check(&cmd, "-fo", expect!["expected a value for `-o`"]);
    check(&cmd, "-fx", expect!["Unknown flag: `-x`. Use `--help` for more information"]);
    check(
        &cmd,
        "-fc",
        expect![[r#"
            foo
              color = Bool(true)
              force = Bool(true)
              jobs = Str("4")
            args: []
        "#]],
    );
}

#[test]
fn double_dash() {
    let cmd = smoke::cmd().unwrap();
    check(
        &cmd,
        "-- --output",
        expect![[r#"
            foo
              jobs = Str("4")
            args: ["--output"]
        "#]],
    );
    check(
        &cmd,
        "a -f -- -v -- build",
        expect![[r#"
            foo
              force = Bool(true)
              jobs = Str("4")
            args: ["a", "-v", "--", "build"]
        "#]],
    );
    check(&cmd, "-o --", expect!["expected a value for `-o`"]);
}

#[test]
fn subcommands() {
    let cmd = smoke::cmd().unwrap();
    check(
        &cmd,
        "build -o out",
        expect![[r#"
            foo
            build
              output = Str("out")
            args: []
        "#]],
    );
    check(
        &cmd,
        "-v -o dist build -r x y",
        expect![[r#"
            foo
              output = Str("dist")
              verbose = Bool(true)
            build
              output = Str("target")
              release = Bool(true)
            args: ["x", "y"]
        "#]],
    );
    check(
        &cmd,
        "remote add origin https://example.com",
        expect![[r#"
            foo
            remote
            add
            args: ["origin", "https://example.com"]
        "#]],
    );
    check(
        &cmd,
        "src build",
        expect![[r#"
            foo
              jobs = Str("4")
            args: ["src", "build"]
        "#]],
    );
    check(
        &cmd,
        "build build",
        expect![[r#"
            foo
            build
              output = Str("target")
            args: ["build"]
        "#]],
    );
    check(&cmd, "-r build", expect!["Unknown flag: `-r`. Use `--help` for more information"]);
    check(&cmd, "build -f", expect!["Unknown flag: `-f`. Use `--help` for more information"]);
}

#[test]
fn subcommand_values_are_scoped() {
    let cmd = smoke::cmd().unwrap();
    let matches = matched(&cmd, &["build", "-o", "out"]);
    assert_eq!(matches.command().name(), "build");
    assert_eq!(matches.path(), ["foo", "build"]);
    assert_eq!(matches.value_of("output"), Some("out"));

    let root = &matches.levels()[0];
    assert_eq!(root.get("output"), None);
    assert_eq!(root.get("jobs"), None);
    assert!(!root.flag("verbose"));
}

#[test]
fn positional_arguments() {
    let cmd = smoke::cmd().unwrap();
    check(
        &cmd,
        "remote add origin",
        expect!["Argument is required: `url`. Use `--help` for more information"],
    );
    check(
        &cmd,
        "remote remove",
        expect!["Argument is required: `name`. Use `--help` for more information"],
    );

    let matches = matched(&cmd, &["remote", "add", "origin", "https://example.com"]);
    assert_eq!(matches.arg("name"), Some("origin"));
    assert_eq!(matches.arg("url"), Some("https://example.com"));
    assert_eq!(matches.arg("nope"), None);

    let matches = matched(&cmd, &["remote", "remove", "a", "b", "c"]);
    assert_eq!(matches.arg("name"), None);
    assert_eq!(matches.arg_values("name"), ["a", "b", "c"]);

    let matches = matched(&cmd, &["build"]);
    assert_eq!(matches.arg("target"), None);
    assert!(matches.arg_values("target").is_empty());
}

#[test]
fn help_short_circuits() {
    let cmd = smoke::cmd().unwrap();
    check(&cmd, "--help", expect!["help: foo"]);
    check(&cmd, "-v -h --unknown", expect!["help: foo"]);
    check(&cmd, "-vh", expect!["help: foo"]);
    check(&cmd, "build -h", expect!["help: build"]);
    check(&cmd, "remote add --help", expect!["help: add"]);
    check(&cmd, "--help=yes", expect!["Flag `--help` doesn't take a value"]);
    check(
        &cmd,
        "-- -h",
        expect![[r#"
            foo
              jobs = Str("4")
            args: ["-h"]
        "#]],
    );
}

#[test]
fn anonymous_root() {
    let cmd = anon::cmd().unwrap();
    let matches = matched(&cmd, &["--long-only", "-s", "x"]);
    assert_eq!(matches.path(), [""]);
    assert!(matches.flag("long-only"));
    assert!(matches.flag("s"));
    assert_eq!(matches.positionals(), ["x"]);
}
