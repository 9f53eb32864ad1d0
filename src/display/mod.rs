//! Text rendering of boards, placeholders and replay records for the CLI

use owo_colors::{OwoColorize, Stream};

use crate::board::{Board, List, PlaceholderRect};
use crate::script::StepRecord;

/// Format options for board display
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Prefix each card with its short id
    pub show_ids: bool,
}

/// Render the whole board, one block per list
pub fn format_board(board: &Board, options: FormatOptions) -> String {
    if board.is_empty() {
        return format!(
            "{}\n",
            "(no lists)".if_supports_color(Stream::Stdout, |t| t.dimmed())
        );
    }

    board
        .lists()
        .iter()
        .map(|list| format_list(list, options))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_list(list: &List, options: FormatOptions) -> String {
    let header = format!("{} ({})", list.title(), list.len());
    let mut output = format!(
        "{}\n",
        header.if_supports_color(Stream::Stdout, |t| t.bold())
    );

    if list.is_empty() {
        output.push_str(&format!(
            "  {}\n",
            "(empty)".if_supports_color(Stream::Stdout, |t| t.dimmed())
        ));
        return output;
    }

    for (idx, card) in list.cards().iter().enumerate() {
        let id = if options.show_ids {
            format!(
                "{} ",
                card.id()
                    .short()
                    .if_supports_color(Stream::Stdout, |t| t.cyan())
            )
        } else {
            String::new()
        };
        output.push_str(&format!("  {}. {}{}\n", idx, id, card.content()));
    }
    output
}

/// One-line description of a placeholder hint
pub fn format_placeholder(rect: Option<PlaceholderRect>) -> String {
    match rect {
        Some(r) => format!(
            "gap at ({}, {}) {}x{}",
            r.offset_x, r.offset_y, r.width, r.height
        ),
        None => "no gap".to_string(),
    }
}

/// Render one replayed step with its placeholder trail and outcome
pub fn format_step_record(record: &StepRecord) -> String {
    let mut output = format!(
        "{} {}\n",
        format!("{:>3}.", record.step).if_supports_color(Stream::Stdout, |t| t.dimmed()),
        record.description
    );
    for rect in &record.placeholders {
        output.push_str(&format!("       {}\n", format_placeholder(*rect)));
    }
    if let Some(outcome) = &record.outcome {
        output.push_str(&format!(
            "       => {}\n",
            outcome.if_supports_color(Stream::Stdout, |t| t.green())
        ));
    }
    output
}
