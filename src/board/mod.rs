//! Kanban board engine
//!
//! - `model`: the board snapshot types
//! - `engine`: drag outcomes and the reorder/move operations
//! - `placeholder`: drop-gap prediction from measured geometry
//! - `mutation`: direct edits (add, remove, rename)
//! - `session`: the stateful holder that ties drag events to the above

pub mod engine;
pub mod model;
pub mod mutation;
pub mod placeholder;
pub mod session;

pub use engine::{
    DragLocation, DragOutcome, apply_cancelled, apply_card_move, apply_card_reorder,
    apply_list_reorder, apply_outcome,
};
pub use model::{Board, Card, List};
pub use mutation::{add_card, add_list, edit_card, remove_card, remove_list, rename_list};
pub use placeholder::{
    Extent, LayoutMeasure, Measure, Padding, PlaceholderRect, predict_on_start, predict_on_update,
    predict_rect,
};
pub use session::{BoardSession, Gesture};
