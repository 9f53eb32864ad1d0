use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "corkboard")]
#[command(about = "Drag-and-drop kanban board engine")]
#[command(version)]
pub struct Cli {
    /// Config file (default: $CORKBOARD_CONFIG or ./corkboard.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overrides CORKBOARD_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the seed board
    Show {
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Replay a YAML script of edits and drag gestures against the seed board
    Replay {
        /// Path to the script file
        script: PathBuf,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Print the effective configuration as YAML
    Config,
}

/// Output flags shared by board-printing commands
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show card ids in text output
    #[arg(long)]
    pub ids: bool,
}
