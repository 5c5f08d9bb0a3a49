mod config;
mod prompt;
mod run;

use {
    crate::{config::Config, prompt::print_json_pretty, run::RunCmd},
    clap::Parser,
    config_parser::parse_config,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Path to a TOML config file. Values can be overridden by `BALLOT__*`
    /// environment variables.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Replay a script of calls through a fresh engine
    Run(RunCmd),

    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: Config = parse_config(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run(cmd) => cmd.run(cfg),
        Command::Config => print_json_pretty(&cfg),
    }
}
