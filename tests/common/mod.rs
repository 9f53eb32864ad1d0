//! Shared fixtures for integration tests.
//!
//! Boards are built from plain titles and card contents; measurements come
//! from a map so individual extents can be removed to simulate unmounted
//! elements.

#![allow(dead_code)]

use std::collections::HashMap;

use corkboard::{Board, DraggableId, Extent, List, ListId, Measure, Padding};

/// Build a board from `(title, cards)` pairs
pub fn board_of(lists: &[(&str, &[&str])]) -> Board {
    Board::from_lists(
        lists
            .iter()
            .map(|(title, cards)| List::new(*title).with_cards(cards.iter().copied())),
    )
}

/// Card contents of one list, in order
pub fn contents(board: &Board, list: usize) -> Vec<String> {
    board
        .list(list)
        .expect("list index should exist")
        .cards()
        .iter()
        .map(|c| c.content().to_string())
        .collect()
}

/// List titles, in order
pub fn titles(board: &Board) -> Vec<String> {
    board.lists().iter().map(|l| l.title().to_string()).collect()
}

/// Every card content on the board, sorted, for multiset comparisons
pub fn all_contents_sorted(board: &Board) -> Vec<String> {
    let mut all: Vec<String> = board
        .lists()
        .iter()
        .flat_map(|l| l.cards().iter().map(|c| c.content().to_string()))
        .collect();
    all.sort();
    all
}

pub fn card(board: &Board, list: usize, index: usize) -> DraggableId {
    DraggableId::Card(board.list(list).unwrap().cards()[index].id())
}

/// Measurement fixture backed by a map of extents
pub struct FixtureMeasure {
    pub extents: HashMap<DraggableId, Extent>,
    pub padding: Padding,
}

impl FixtureMeasure {
    /// Measure every card on the board with the same extent
    pub fn uniform(board: &Board, extent: Extent, padding: Padding) -> Self {
        let extents = board
            .lists()
            .iter()
            .flat_map(|l| l.cards().iter())
            .map(|c| (DraggableId::Card(c.id()), extent))
            .collect();
        FixtureMeasure { extents, padding }
    }

    pub fn unmount(&mut self, element: DraggableId) {
        self.extents.remove(&element);
    }
}

impl Measure for FixtureMeasure {
    fn measure_extent(&self, element: DraggableId) -> Option<Extent> {
        self.extents.get(&element).copied()
    }

    fn measure_container_padding(&self, _container: ListId) -> Padding {
        self.padding
    }
}
