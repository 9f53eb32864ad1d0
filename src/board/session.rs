//! Board session: the single owner of board state during interaction
//!
//! Holds the current `Board`, the transient placeholder, and the gesture in
//! flight. Drag events and direct edits both go through here.
//!
//! Positions reported by the drag source are trusted only as far as the board
//! agrees with them. On drop, the dragged item is looked up by id and its
//! current position is used as the source, so a stale index can never move the
//! wrong card.

use super::engine::{DragLocation, DragOutcome, apply_outcome};
use super::model::Board;
use super::mutation;
use super::placeholder::{Measure, PlaceholderRect, predict_on_start, predict_on_update};
use crate::error::{BoardError, Result};
use crate::types::{DragKind, DraggableId};

/// The gesture currently in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub dragged: DraggableId,
    pub origin: DragLocation,
}

#[derive(Debug, Clone, Default)]
pub struct BoardSession {
    board: Board,
    placeholder: Option<PlaceholderRect>,
    gesture: Option<Gesture>,
}

impl BoardSession {
    pub fn new(board: Board) -> Self {
        BoardSession {
            board,
            placeholder: None,
            gesture: None,
        }
    }

    /// Current board snapshot
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current placeholder hint, if any
    pub fn placeholder(&self) -> Option<PlaceholderRect> {
        self.placeholder
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    // ------------------------------------------------------------------
    // Drag events
    // ------------------------------------------------------------------

    pub fn on_drag_start(
        &mut self,
        dragged: DraggableId,
        source: DragLocation,
        measure: &impl Measure,
    ) {
        if let Some(previous) = self.gesture.replace(Gesture {
            dragged,
            origin: source,
        }) {
            tracing::warn!(dragged = %previous.dragged, "drag started before previous drag ended");
        }
        self.placeholder = predict_on_start(&self.board, measure, dragged, source);
        tracing::debug!(%dragged, ?source, placeholder = ?self.placeholder, "drag start");
    }

    pub fn on_drag_update(
        &mut self,
        dragged: DraggableId,
        source: DragLocation,
        destination: Option<DragLocation>,
        measure: &impl Measure,
    ) {
        self.placeholder = predict_on_update(&self.board, measure, dragged, source, destination);
    }

    /// Finish the gesture and commit its outcome
    ///
    /// The placeholder is cleared whether or not the drop succeeds. On error
    /// the board is unchanged.
    pub fn on_drag_end(
        &mut self,
        source: DragLocation,
        destination: Option<DragLocation>,
        kind: DragKind,
    ) -> Result<DragOutcome> {
        self.placeholder = None;
        let gesture = self.gesture.take();

        let Some(destination) = destination else {
            tracing::debug!("drop outside any list, gesture cancelled");
            return Ok(DragOutcome::Cancelled);
        };

        let (source, kind) = match gesture {
            Some(gesture) => {
                if gesture.dragged.kind() != kind {
                    tracing::warn!(
                        dragged = %gesture.dragged,
                        %kind,
                        "drag end kind disagrees with dragged item, using the item's kind"
                    );
                }
                (self.resolve_source(&gesture, source)?, gesture.dragged.kind())
            }
            None => {
                tracing::warn!(?source, "drag end without drag start, using reported source");
                (source, kind)
            }
        };

        let outcome = DragOutcome::from_drag_end(kind, source, Some(destination));
        self.board = apply_outcome(&self.board, &outcome)?;
        Ok(outcome)
    }

    /// Drag event variant taking the kind as the drag source reports it
    pub fn on_drag_end_raw(
        &mut self,
        source: DragLocation,
        destination: Option<DragLocation>,
        kind: &str,
    ) -> Result<DragOutcome> {
        match kind.parse::<DragKind>() {
            Ok(kind) => self.on_drag_end(source, destination, kind),
            Err(e) => {
                self.cancel();
                Err(e)
            }
        }
    }

    /// External abort of the gesture in flight; the board is not touched
    pub fn cancel(&mut self) {
        self.placeholder = None;
        if let Some(gesture) = self.gesture.take() {
            tracing::debug!(dragged = %gesture.dragged, "gesture aborted");
        }
    }

    /// Where the dragged item actually is on the current board
    fn resolve_source(&self, gesture: &Gesture, reported: DragLocation) -> Result<DragLocation> {
        let resolved = match gesture.dragged {
            DraggableId::Card(id) => self.board.locate_card(id),
            DraggableId::List(id) => self.board.list_position(id).map(DragLocation::list),
        }
        .ok_or_else(|| BoardError::DraggedItemMissing(gesture.dragged.to_string()))?;

        let agrees = match gesture.dragged {
            DraggableId::Card(_) => resolved == reported,
            DraggableId::List(_) => resolved.container_index == reported.container_index,
        };
        if !agrees {
            tracing::warn!(
                dragged = %gesture.dragged,
                ?reported,
                ?resolved,
                "reported drag source is stale, using resolved position"
            );
        }

        Ok(resolved)
    }

    // ------------------------------------------------------------------
    // Direct edits
    // ------------------------------------------------------------------

    fn commit(&mut self, next: Result<Board>, action: &str) -> Result<()> {
        match next {
            Ok(board) => {
                tracing::debug!(action, "board updated");
                self.board = board;
                Ok(())
            }
            Err(e) => {
                tracing::error!(action, "rejected board edit: {e}");
                Err(e)
            }
        }
    }

    pub fn add_list(&mut self, title: impl Into<String>) {
        self.board = mutation::add_list(&self.board, title);
        tracing::debug!(action = "add_list", "board updated");
    }

    pub fn remove_list(&mut self, list_index: usize) -> Result<()> {
        let next = mutation::remove_list(&self.board, list_index);
        self.commit(next, "remove_list")
    }

    pub fn rename_list(&mut self, list_index: usize, title: impl Into<String>) -> Result<()> {
        let next = mutation::rename_list(&self.board, list_index, title);
        self.commit(next, "rename_list")
    }

    pub fn add_card(&mut self, list_index: usize, content: impl Into<String>) -> Result<()> {
        let next = mutation::add_card(&self.board, list_index, content);
        self.commit(next, "add_card")
    }

    pub fn remove_card(&mut self, list_index: usize, card_index: usize) -> Result<()> {
        let next = mutation::remove_card(&self.board, list_index, card_index);
        self.commit(next, "remove_card")
    }

    pub fn edit_card(
        &mut self,
        list_index: usize,
        card_index: usize,
        content: impl Into<String>,
    ) -> Result<()> {
        let next = mutation::edit_card(&self.board, list_index, card_index, content);
        self.commit(next, "edit_card")
    }
}
