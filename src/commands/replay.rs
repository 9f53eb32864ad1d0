use std::path::Path;

use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use super::CommandOutput;
use crate::board::BoardSession;
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::display::{FormatOptions, format_board, format_step_record};
use crate::error::Result;
use crate::script::Script;

/// Replay a script against the seed board and print each step and the result
pub fn cmd_replay(config: &Config, script_path: &Path, output: OutputOptions) -> Result<()> {
    let script = Script::load(script_path)?;
    let mut session = BoardSession::new(config.seed_board());
    let measure = config.layout.measure();

    let records = script.run(&mut session, &measure)?;
    let board = session.board();

    let mut text = String::new();
    for record in &records {
        text.push_str(&format_step_record(record));
    }
    text.push_str(&format!(
        "\n{}\n",
        "Final board:".if_supports_color(Stream::Stdout, |t| t.bold())
    ));
    text.push_str(&format_board(
        board,
        FormatOptions {
            show_ids: output.ids,
        },
    ));

    CommandOutput::new(json!({
        "steps": records,
        "board": {
            "lists": board.lists(),
            "card_count": board.card_count(),
        },
    }))
    .with_text(text)
    .print(output)
}
