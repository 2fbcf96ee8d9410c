use log::{debug, info, LevelFilter};
use termflags::{prompt::Prompt, Command};

fn cli() -> termflags::Result<Command> {
    Command::new("hello", "Greets people.")
        .option("-v, --verbose", "Log what is going on.", None)?
        .option("-e, --emoji", "Add some flair.", None)?
        .arg("[name]", "Who to greet, asked for when missing.")?
        .subcommand(
            Command::new("many", "Greets several people at once.")
                .option("-s, --separator <text>", "Goes between names.", Some(", "))?
                .arg("<names>...", "Who to greet.")?,
        )
}

fn main() {
    let cli = cli().unwrap_or_else(|err| err.exit());
    let matches = cli.parse_env_or_exit();

    let root = &matches.levels()[0];
    let log_level = if root.flag("verbose") { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::from_env(env_logger::Env::default()).filter_level(log_level).init();
    debug!(path:? = matches.path(); "Parsed arguments");

    let bang = if root.flag("emoji") { "❣️" } else { "!" };
    match matches.command().name() {
        "many" => {
            let separator = matches.value_of("separator").unwrap_or_default();
            println!("Hello {}{bang}", matches.arg_values("names").join(separator));
        }
        _ => {
            let name = match matches.arg("name") {
                Some(name) => name.to_string(),
                None => Prompt::stdio().ask("Name", Some("world")).unwrap_or_else(|err| {
                    eprintln!("error: {err}");
                    std::process::exit(1)
                }),
            };
            println!("Hello {name}{bang}");
        }
    }
    info!("Done");
}
