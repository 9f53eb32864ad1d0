#[macro_use]
mod macros;

pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod script;
pub mod types;

pub use board::{
    Board, BoardSession, Card, DragLocation, DragOutcome, Extent, LayoutMeasure, List, Measure,
    Padding, PlaceholderRect,
};
pub use config::Config;
pub use error::{BoardError, Result};
pub use script::{Script, Step, StepRecord};
pub use types::{CardId, DragKind, DraggableId, ListId};
