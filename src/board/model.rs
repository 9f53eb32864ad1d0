//! Board, list and card types
//!
//! A `Board` is an immutable snapshot. Lists and cards sit behind `Arc`, so an
//! operation that changes one list copies only that list's card vector and
//! shares everything else with the previous snapshot. A card that moves
//! between lists keeps its allocation.

use std::sync::Arc;

use serde::Serialize;

use super::engine::DragLocation;
use crate::error::{BoardError, Result};
use crate::types::{CardId, ListId};

/// A single draggable card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    id: CardId,
    content: String,
}

impl Card {
    /// Create a card with a freshly generated identifier
    pub fn new(content: impl Into<String>) -> Self {
        Card {
            id: CardId::generate(),
            content: content.into(),
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Same card, new text
    pub(crate) fn with_content(&self, content: impl Into<String>) -> Self {
        Card {
            id: self.id,
            content: content.into(),
        }
    }
}

/// A column of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    id: ListId,
    title: String,
    cards: Vec<Arc<Card>>,
}

impl List {
    /// Create an empty list with a freshly generated identifier
    pub fn new(title: impl Into<String>) -> Self {
        List {
            id: ListId::generate(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Builder-style helper used when seeding a board
    pub fn with_cards<I, S>(mut self, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cards
            .extend(contents.into_iter().map(|c| Arc::new(Card::new(c))));
        self
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Position of a card within this list
    pub fn position_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card)
    }

    pub(crate) fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub(crate) fn cards_mut(&mut self) -> &mut Vec<Arc<Card>> {
        &mut self.cards
    }
}

/// Ordered sequence of lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    lists: Vec<Arc<List>>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lists(lists: impl IntoIterator<Item = List>) -> Self {
        Board {
            lists: lists.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn lists(&self) -> &[Arc<List>] {
        &self.lists
    }

    pub fn list(&self, index: usize) -> Option<&List> {
        self.lists.get(index).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Total number of cards across every list
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.len()).sum()
    }

    /// Current position of a list, by identity
    pub fn list_position(&self, id: ListId) -> Option<usize> {
        self.lists.iter().position(|l| l.id == id)
    }

    /// Current location of a card, by identity
    pub fn locate_card(&self, id: CardId) -> Option<DragLocation> {
        self.lists.iter().enumerate().find_map(|(list_idx, list)| {
            list.position_of(id)
                .map(|card_idx| DragLocation::new(list_idx, card_idx))
        })
    }

    /// The card at a location, if there is one
    pub fn card_at(&self, location: DragLocation) -> Option<&Arc<Card>> {
        self.lists
            .get(location.container_index)
            .and_then(|l| l.cards.get(location.item_index))
    }

    /// Validate a list index, returning the list
    pub(crate) fn checked_list(&self, index: usize) -> Result<&List> {
        self.list(index)
            .ok_or_else(|| BoardError::ListIndexOutOfRange {
                index,
                len: self.lists.len(),
            })
    }

    /// Copy-on-write vector of lists for building the next snapshot
    pub(crate) fn lists_for_update(&self) -> Vec<Arc<List>> {
        self.lists.clone()
    }

    pub(crate) fn from_shared(lists: Vec<Arc<List>>) -> Self {
        Board { lists }
    }
}

/// Validate a card index within a list, for removal or lookup
pub(crate) fn check_card_index(list: &List, list_index: usize, index: usize) -> Result<()> {
    if index < list.len() {
        Ok(())
    } else {
        Err(BoardError::CardIndexOutOfRange {
            list: list_index,
            index,
            len: list.len(),
        })
    }
}

/// Validate a card insertion point; `len` itself means append
pub(crate) fn check_insert_index(list: &List, list_index: usize, index: usize) -> Result<()> {
    if index <= list.len() {
        Ok(())
    } else {
        Err(BoardError::CardIndexOutOfRange {
            list: list_index,
            index,
            len: list.len(),
        })
    }
}
