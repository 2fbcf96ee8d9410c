use termflags::{Command, Result};

pub fn cmd() -> Result<Command> {
    Command::new("foo", "Does foo things.")
        .option("-o, --output <dir>", "Output directory.", None)?
        .option("-f, --force", "Overwrite existing files.", None)?
        .option("-v, --verbose", "More output.", None)?
        .option("-j, --jobs <n>", "Parallel jobs.", Some("4"))?
        .option("-c, --color [when]", "Colorize output.", None)?
        .subcommand(
            Command::new("build", "Builds the project.")
                .option("-o, --output <dir>", "Output directory.", Some("target"))?
                .option("-r, --release", "Build with optimizations.", None)?
                .arg("[target]", "What to build.")?,
        )?
        .subcommand(
            Command::new("remote", "Manages remotes.")
                .subcommand(
                    Command::new("add", "Adds a remote.").arg("<name>", "")?.arg("<url>", "")?,
                )?
                .subcommand(Command::new("remove", "Removes remotes.").arg("<name>...", "")?)?,
        )
}
