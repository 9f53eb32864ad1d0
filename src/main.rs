use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use corkboard::cli::{Cli, Commands};
use corkboard::commands::{cmd_config, cmd_replay, cmd_show};
use corkboard::config::Config;

/// Environment variable holding the log filter (e.g. `corkboard=debug`)
const LOG_ENV: &str = "CORKBOARD_LOG";

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = Config::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Show { output } => cmd_show(&config, output),
        Commands::Replay { script, output } => cmd_replay(&config, &script, output),
        Commands::Config => cmd_config(&config),
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
