//! Reorder and move engine
//!
//! Pure functions that compute the next `Board` from the outcome of a drag.
//! Every function validates its indices against the board it is given and
//! returns an error instead of a partially updated board. Indices are never
//! clamped: an out-of-range index is a caller bug and is reported as such.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::model::{Board, check_card_index, check_insert_index};
use crate::error::{BoardError, Result};
use crate::types::DragKind;

/// A list position and, for card drags, a card position within that list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragLocation {
    pub container_index: usize,
    #[serde(default)]
    pub item_index: usize,
}

impl DragLocation {
    pub fn new(container_index: usize, item_index: usize) -> Self {
        DragLocation {
            container_index,
            item_index,
        }
    }

    /// Location of a list in the top-level sequence
    pub fn list(index: usize) -> Self {
        DragLocation::new(index, 0)
    }
}

/// How a gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// A list was dropped at a new column position
    ListReorder {
        source: DragLocation,
        destination: DragLocation,
    },
    /// A card was dropped within the list it came from
    CardReorder {
        source: DragLocation,
        destination: DragLocation,
    },
    /// A card was dropped into a different list
    CardMove {
        source: DragLocation,
        destination: DragLocation,
    },
    /// The drop landed nowhere, or the gesture was aborted
    Cancelled,
}

impl DragOutcome {
    /// Classify a raw drag-end event
    pub fn from_drag_end(
        kind: DragKind,
        source: DragLocation,
        destination: Option<DragLocation>,
    ) -> Self {
        let Some(destination) = destination else {
            return DragOutcome::Cancelled;
        };

        match kind {
            DragKind::List => DragOutcome::ListReorder {
                source,
                destination,
            },
            DragKind::Card if source.container_index == destination.container_index => {
                DragOutcome::CardReorder {
                    source,
                    destination,
                }
            }
            DragKind::Card => DragOutcome::CardMove {
                source,
                destination,
            },
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, DragOutcome::Cancelled)
    }
}

/// Remove the element at `from` and reinsert it at `to` in the shortened
/// sequence. Callers validate both indices first.
fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut result = items.to_vec();
    let removed = result.remove(from);
    result.insert(to, removed);
    result
}

/// Move a list to a new position in the top-level sequence
pub fn apply_list_reorder(
    board: &Board,
    source: DragLocation,
    destination: DragLocation,
) -> Result<Board> {
    let from = source.container_index;
    let to = destination.container_index;
    board.checked_list(from)?;
    // After removal the sequence is one shorter, so the last valid slot is len - 1
    board.checked_list(to)?;

    if from == to {
        return Ok(board.clone());
    }

    Ok(Board::from_shared(reorder(board.lists(), from, to)))
}

/// Move a card to a new position within the list it already belongs to
pub fn apply_card_reorder(
    board: &Board,
    container_index: usize,
    source: usize,
    destination: usize,
) -> Result<Board> {
    let list = board.checked_list(container_index)?;
    check_card_index(list, container_index, source)?;
    check_card_index(list, container_index, destination)?;

    if source == destination {
        return Ok(board.clone());
    }

    let mut lists = board.lists_for_update();
    let updated = Arc::make_mut(&mut lists[container_index]);
    let reordered = reorder(updated.cards(), source, destination);
    *updated.cards_mut() = reordered;

    Ok(Board::from_shared(lists))
}

/// Move a card out of one list and into another
///
/// The card is transferred, not copied: the destination holds the same
/// allocation the source held, with its id and content untouched.
pub fn apply_card_move(
    board: &Board,
    source_container: usize,
    destination_container: usize,
    source_index: usize,
    destination_index: usize,
) -> Result<Board> {
    if source_container == destination_container {
        return Err(BoardError::SameContainerMove(source_container));
    }

    let source_list = board.checked_list(source_container)?;
    let destination_list = board.checked_list(destination_container)?;
    check_card_index(source_list, source_container, source_index)?;
    check_insert_index(destination_list, destination_container, destination_index)?;

    let mut lists = board.lists_for_update();
    let card = Arc::make_mut(&mut lists[source_container])
        .cards_mut()
        .remove(source_index);
    Arc::make_mut(&mut lists[destination_container])
        .cards_mut()
        .insert(destination_index, card);

    Ok(Board::from_shared(lists))
}

/// A cancelled gesture leaves the board exactly as it was
pub fn apply_cancelled(board: &Board) -> Board {
    board.clone()
}

/// Route a drag outcome to the matching engine operation
pub fn apply_outcome(board: &Board, outcome: &DragOutcome) -> Result<Board> {
    let result = match *outcome {
        DragOutcome::ListReorder {
            source,
            destination,
        } => apply_list_reorder(board, source, destination),
        DragOutcome::CardReorder {
            source,
            destination,
        } => {
            if source.container_index != destination.container_index {
                Err(BoardError::ContainerMismatch {
                    source_list: source.container_index,
                    destination_list: destination.container_index,
                })
            } else {
                apply_card_reorder(
                    board,
                    source.container_index,
                    source.item_index,
                    destination.item_index,
                )
            }
        }
        DragOutcome::CardMove {
            source,
            destination,
        } => apply_card_move(
            board,
            source.container_index,
            destination.container_index,
            source.item_index,
            destination.item_index,
        ),
        DragOutcome::Cancelled => Ok(apply_cancelled(board)),
    };

    match &result {
        Ok(_) => tracing::debug!(?outcome, "applied drag outcome"),
        Err(e) => tracing::error!(?outcome, "rejected drag outcome: {e}"),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::model::List;

    fn contents(board: &Board, list: usize) -> Vec<String> {
        board
            .list(list)
            .unwrap()
            .cards()
            .iter()
            .map(|c| c.content().to_string())
            .collect()
    }

    fn titles(board: &Board) -> Vec<String> {
        board.lists().iter().map(|l| l.title().to_string()).collect()
    }

    fn two_lists() -> Board {
        Board::from_lists([
            List::new("to do").with_cards(["A", "B", "C"]),
            List::new("doing").with_cards(["D", "E"]),
        ])
    }

    #[test]
    fn test_reorder_helper_remove_then_insert() {
        assert_eq!(reorder(&[0, 1, 2, 3], 0, 2), vec![1, 2, 0, 3]);
        assert_eq!(reorder(&[0, 1, 2, 3], 3, 0), vec![3, 0, 1, 2]);
        assert_eq!(reorder(&[0, 1, 2, 3], 1, 1), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_list_reorder_first_to_last() {
        let board = Board::from_lists([List::new("X"), List::new("Y"), List::new("Z")]);
        let next =
            apply_list_reorder(&board, DragLocation::list(0), DragLocation::list(2)).unwrap();
        assert_eq!(titles(&next), vec!["Y", "Z", "X"]);
        // Previous snapshot is untouched
        assert_eq!(titles(&board), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_list_reorder_same_index_is_noop() {
        let board = two_lists();
        let next =
            apply_list_reorder(&board, DragLocation::list(1), DragLocation::list(1)).unwrap();
        assert_eq!(next, board);
    }

    #[test]
    fn test_list_reorder_destination_past_end_is_rejected() {
        let board = two_lists();
        let err =
            apply_list_reorder(&board, DragLocation::list(0), DragLocation::list(2)).unwrap_err();
        assert!(matches!(
            err,
            BoardError::ListIndexOutOfRange { index: 2, len: 2 }
        ));
    }

    #[test]
    fn test_card_reorder_within_list() {
        let board = two_lists();
        let next = apply_card_reorder(&board, 0, 0, 2).unwrap();
        assert_eq!(contents(&next, 0), vec!["B", "C", "A"]);
        assert_eq!(contents(&next, 1), vec!["D", "E"]);
        // The untouched list is shared, not copied
        assert!(Arc::ptr_eq(&board.lists()[1], &next.lists()[1]));
    }

    #[test]
    fn test_card_reorder_same_index_is_noop() {
        let board = two_lists();
        assert_eq!(apply_card_reorder(&board, 1, 1, 1).unwrap(), board);
    }

    #[test]
    fn test_card_reorder_rejects_bad_index() {
        let board = two_lists();
        assert!(matches!(
            apply_card_reorder(&board, 1, 0, 2),
            Err(BoardError::CardIndexOutOfRange {
                list: 1,
                index: 2,
                len: 2
            })
        ));
        assert!(matches!(
            apply_card_reorder(&board, 5, 0, 0),
            Err(BoardError::ListIndexOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn test_card_move_between_lists() {
        let board = two_lists();
        let moved = board.list(0).unwrap().cards()[1].clone();

        let next = apply_card_move(&board, 0, 1, 1, 0).unwrap();

        assert_eq!(contents(&next, 0), vec!["A", "C"]);
        assert_eq!(contents(&next, 1), vec!["B", "D", "E"]);
        let landed = &next.list(1).unwrap().cards()[0];
        assert!(Arc::ptr_eq(&moved, landed));
        assert_eq!(landed.id(), moved.id());
    }

    #[test]
    fn test_card_move_append_at_end() {
        let board = two_lists();
        let next = apply_card_move(&board, 1, 0, 0, 3).unwrap();
        assert_eq!(contents(&next, 0), vec!["A", "B", "C", "D"]);
        assert_eq!(contents(&next, 1), vec!["E"]);
    }

    #[test]
    fn test_card_move_last_card_leaves_empty_list() {
        let board = Board::from_lists([List::new("a").with_cards(["only"]), List::new("b")]);
        let next = apply_card_move(&board, 0, 1, 0, 0).unwrap();
        assert!(next.list(0).unwrap().is_empty());
        assert_eq!(contents(&next, 1), vec!["only"]);

        // The emptied list still accepts cards
        let back = apply_card_move(&next, 1, 0, 0, 0).unwrap();
        assert_eq!(contents(&back, 0), vec!["only"]);
    }

    #[test]
    fn test_card_move_same_container_is_rejected() {
        let board = two_lists();
        assert!(matches!(
            apply_card_move(&board, 0, 0, 0, 1),
            Err(BoardError::SameContainerMove(0))
        ));
    }

    #[test]
    fn test_card_move_rejects_insert_past_end() {
        let board = two_lists();
        assert!(matches!(
            apply_card_move(&board, 0, 1, 0, 3),
            Err(BoardError::CardIndexOutOfRange {
                list: 1,
                index: 3,
                len: 2
            })
        ));
    }

    #[test]
    fn test_cancelled_is_identity() {
        let board = two_lists();
        assert_eq!(apply_cancelled(&board), board);
        assert_eq!(apply_outcome(&board, &DragOutcome::Cancelled).unwrap(), board);
    }

    #[test]
    fn test_classify_drag_end() {
        let a = DragLocation::new(0, 1);
        let b = DragLocation::new(0, 2);
        let c = DragLocation::new(1, 0);

        assert_eq!(
            DragOutcome::from_drag_end(DragKind::Card, a, None),
            DragOutcome::Cancelled
        );
        assert_eq!(
            DragOutcome::from_drag_end(DragKind::Card, a, Some(b)),
            DragOutcome::CardReorder {
                source: a,
                destination: b
            }
        );
        assert_eq!(
            DragOutcome::from_drag_end(DragKind::Card, a, Some(c)),
            DragOutcome::CardMove {
                source: a,
                destination: c
            }
        );
        assert_eq!(
            DragOutcome::from_drag_end(DragKind::List, a, Some(c)),
            DragOutcome::ListReorder {
                source: a,
                destination: c
            }
        );
    }

    #[test]
    fn test_dispatch_rejects_mismatched_reorder() {
        let board = two_lists();
        let outcome = DragOutcome::CardReorder {
            source: DragLocation::new(0, 0),
            destination: DragLocation::new(1, 0),
        };
        assert!(matches!(
            apply_outcome(&board, &outcome),
            Err(BoardError::ContainerMismatch {
                source_list: 0,
                destination_list: 1
            })
        ));
    }

    #[test]
    fn test_dispatch_routes_card_move() {
        let board = two_lists();
        let outcome = DragOutcome::CardMove {
            source: DragLocation::new(1, 1),
            destination: DragLocation::new(0, 1),
        };
        let next = apply_outcome(&board, &outcome).unwrap();
        assert_eq!(contents(&next, 0), vec!["A", "E", "B", "C"]);
        assert_eq!(next.card_count(), board.card_count());
    }
}
