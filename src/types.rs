use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::BoardError;

/// Stable identity of a list, assigned when the list is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(Uuid);

/// Stable identity of a card, assigned when the card is created and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

uuid_newtype!(ListId);
uuid_newtype!(CardId);

/// Identity of the element being dragged, as reported by the drag source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraggableId {
    List(ListId),
    Card(CardId),
}

impl DraggableId {
    /// The kind of drag this element takes part in
    pub fn kind(&self) -> DragKind {
        match self {
            DraggableId::List(_) => DragKind::List,
            DraggableId::Card(_) => DragKind::Card,
        }
    }
}

impl fmt::Display for DraggableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraggableId::List(id) => write!(f, "list:{id}"),
            DraggableId::Card(id) => write!(f, "card:{id}"),
        }
    }
}

impl FromStr for DraggableId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("list", rest)) => Ok(DraggableId::List(rest.parse()?)),
            Some(("card", rest)) => Ok(DraggableId::Card(rest.parse()?)),
            _ => Err(BoardError::InvalidId(s.to_string())),
        }
    }
}

/// What a gesture drags: a whole list, or a single card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    List,
    Card,
}

enum_display_fromstr!(
    DragKind,
    BoardError::InvalidDragKind,
    {
        List => "list",
        Card => "card",
    }
);
