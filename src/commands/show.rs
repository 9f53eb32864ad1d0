use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::display::{FormatOptions, format_board};
use crate::error::Result;

/// Print the seed board from the loaded configuration
pub fn cmd_show(config: &Config, output: OutputOptions) -> Result<()> {
    let board = config.seed_board();

    CommandOutput::new(json!({
        "lists": board.lists(),
        "card_count": board.card_count(),
    }))
    .with_text(format_board(
        &board,
        FormatOptions {
            show_ids: output.ids,
        },
    ))
    .print(output)
}
