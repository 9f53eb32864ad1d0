//! Scripted gesture replay
//!
//! A script is a YAML list of steps run in order against a `BoardSession`.
//! Drag steps go through the same start/update/end sequence a pointer-driven
//! drag source would produce, so placeholder predictions are recorded along
//! the way.
//!
//! ```yaml
//! steps:
//!   - op: add_card
//!     list: 0
//!     content: write tests
//!   - op: drag
//!     kind: card
//!     source: { container_index: 0, item_index: 1 }
//!     hover:
//!       - { container_index: 1, item_index: 0 }
//!     destination: { container_index: 1, item_index: 0 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{BoardSession, DragLocation, DragOutcome, Measure, PlaceholderRect};
use crate::error::{BoardError, Result};
use crate::types::{DragKind, DraggableId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    AddList {
        #[serde(default)]
        title: String,
    },
    RemoveList {
        list: usize,
    },
    RenameList {
        list: usize,
        title: String,
    },
    AddCard {
        list: usize,
        #[serde(default)]
        content: String,
    },
    RemoveCard {
        list: usize,
        card: usize,
    },
    EditCard {
        list: usize,
        card: usize,
        content: String,
    },
    Drag {
        kind: DragKind,
        source: DragLocation,
        /// Destinations the pointer passes over before the drop; `~` for none
        #[serde(default)]
        hover: Vec<Option<DragLocation>>,
        /// Missing means the card was dropped outside every list
        #[serde(default)]
        destination: Option<DragLocation>,
        /// End with an external abort instead of a drop
        #[serde(default)]
        abort: bool,
    },
}

impl Step {
    /// Short human-readable description
    pub fn describe(&self) -> String {
        match self {
            Step::AddList { title } => format!("add list \"{title}\""),
            Step::RemoveList { list } => format!("remove list {list}"),
            Step::RenameList { list, title } => format!("rename list {list} to \"{title}\""),
            Step::AddCard { list, content } => format!("add card \"{content}\" to list {list}"),
            Step::RemoveCard { list, card } => format!("remove card {card} from list {list}"),
            Step::EditCard {
                list,
                card,
                content,
            } => format!("edit card {card} in list {list} to \"{content}\""),
            Step::Drag {
                kind,
                source,
                destination,
                abort,
                ..
            } => {
                let from = format_location(*kind, *source);
                match (abort, destination) {
                    (true, _) => format!("drag {kind} {from}, aborted"),
                    (false, Some(to)) => {
                        format!("drag {kind} {from} -> {}", format_location(*kind, *to))
                    }
                    (false, None) => format!("drag {kind} {from}, dropped outside"),
                }
            }
        }
    }
}

fn format_location(kind: DragKind, location: DragLocation) -> String {
    match kind {
        DragKind::List => format!("[{}]", location.container_index),
        DragKind::Card => format!("[{}:{}]", location.container_index, location.item_index),
    }
}

/// What happened during one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub description: String,
    /// Placeholder after drag start and after each hover, in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub placeholders: Vec<Option<PlaceholderRect>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}

impl Script {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BoardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read script at {}: {}", path.display(), e),
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Run every step, stopping at the first failure
    ///
    /// Failures report the 1-based step number. Steps before the failure have
    /// already been applied to the session.
    pub fn run(
        &self,
        session: &mut BoardSession,
        measure: &impl Measure,
    ) -> Result<Vec<StepRecord>> {
        self.steps
            .iter()
            .enumerate()
            .map(|(idx, step)| {
                let number = idx + 1;
                run_step(session, measure, step, number).map_err(|e| BoardError::ScriptStep {
                    step: number,
                    source: Box::new(e),
                })
            })
            .collect()
    }
}

fn run_step(
    session: &mut BoardSession,
    measure: &impl Measure,
    step: &Step,
    number: usize,
) -> Result<StepRecord> {
    tracing::debug!(step = number, "{}", step.describe());
    let mut record = StepRecord {
        step: number,
        description: step.describe(),
        placeholders: Vec::new(),
        outcome: None,
    };

    match step {
        Step::AddList { title } => session.add_list(title.clone()),
        Step::RemoveList { list } => session.remove_list(*list)?,
        Step::RenameList { list, title } => session.rename_list(*list, title.clone())?,
        Step::AddCard { list, content } => session.add_card(*list, content.clone())?,
        Step::RemoveCard { list, card } => session.remove_card(*list, *card)?,
        Step::EditCard {
            list,
            card,
            content,
        } => session.edit_card(*list, *card, content.clone())?,
        Step::Drag {
            kind,
            source,
            hover,
            destination,
            abort,
        } => {
            let dragged = dragged_at(session, *kind, *source)?;
            session.on_drag_start(dragged, *source, measure);
            record.placeholders.push(session.placeholder());

            for over in hover {
                session.on_drag_update(dragged, *source, *over, measure);
                record.placeholders.push(session.placeholder());
            }

            let outcome = if *abort {
                session.cancel();
                DragOutcome::Cancelled
            } else {
                session.on_drag_end(*source, *destination, *kind)?
            };
            record.outcome = Some(describe_outcome(&outcome));
        }
    }

    Ok(record)
}

/// Identity of the element a drag picks up
fn dragged_at(session: &BoardSession, kind: DragKind, source: DragLocation) -> Result<DraggableId> {
    let board = session.board();
    match kind {
        DragKind::List => board
            .checked_list(source.container_index)
            .map(|l| DraggableId::List(l.id())),
        DragKind::Card => {
            let list = board.checked_list(source.container_index)?;
            list.cards()
                .get(source.item_index)
                .map(|c| DraggableId::Card(c.id()))
                .ok_or_else(|| BoardError::CardIndexOutOfRange {
                    list: source.container_index,
                    index: source.item_index,
                    len: list.len(),
                })
        }
    }
}

fn describe_outcome(outcome: &DragOutcome) -> String {
    match outcome {
        DragOutcome::ListReorder {
            source,
            destination,
        } => format!(
            "list reorder {} -> {}",
            source.container_index, destination.container_index
        ),
        DragOutcome::CardReorder {
            source,
            destination,
        } => format!(
            "card reorder in list {}: {} -> {}",
            source.container_index, source.item_index, destination.item_index
        ),
        DragOutcome::CardMove {
            source,
            destination,
        } => format!(
            "card move {} -> {}",
            format_location(DragKind::Card, *source),
            format_location(DragKind::Card, *destination)
        ),
        DragOutcome::Cancelled => "cancelled".to_string(),
    }
}
