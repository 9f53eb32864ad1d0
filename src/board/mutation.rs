//! Direct edits to the board (not driven by drag gestures)
//!
//! Like the engine, each function leaves its input untouched and returns the
//! next snapshot.

use std::sync::Arc;

use super::model::{Board, Card, List, check_card_index};
use crate::error::Result;

/// Append an empty list. Titles are not validated.
pub fn add_list(board: &Board, title: impl Into<String>) -> Board {
    let mut lists = board.lists_for_update();
    lists.push(Arc::new(List::new(title)));
    Board::from_shared(lists)
}

/// Remove a list together with every card it holds
pub fn remove_list(board: &Board, list_index: usize) -> Result<Board> {
    board.checked_list(list_index)?;
    let mut lists = board.lists_for_update();
    lists.remove(list_index);
    Ok(Board::from_shared(lists))
}

/// Replace a list's title
pub fn rename_list(board: &Board, list_index: usize, title: impl Into<String>) -> Result<Board> {
    board.checked_list(list_index)?;
    let mut lists = board.lists_for_update();
    Arc::make_mut(&mut lists[list_index]).set_title(title);
    Ok(Board::from_shared(lists))
}

/// Append a new card with a fresh identifier to the end of a list
pub fn add_card(board: &Board, list_index: usize, content: impl Into<String>) -> Result<Board> {
    board.checked_list(list_index)?;
    let mut lists = board.lists_for_update();
    Arc::make_mut(&mut lists[list_index])
        .cards_mut()
        .push(Arc::new(Card::new(content)));
    Ok(Board::from_shared(lists))
}

/// Remove one card
///
/// Removing from an empty list, or past the end of one, is an error and the
/// board is left as it was.
pub fn remove_card(board: &Board, list_index: usize, card_index: usize) -> Result<Board> {
    let list = board.checked_list(list_index)?;
    check_card_index(list, list_index, card_index)?;
    let mut lists = board.lists_for_update();
    Arc::make_mut(&mut lists[list_index])
        .cards_mut()
        .remove(card_index);
    Ok(Board::from_shared(lists))
}

/// Replace a card's text, keeping its identity
pub fn edit_card(
    board: &Board,
    list_index: usize,
    card_index: usize,
    content: impl Into<String>,
) -> Result<Board> {
    let list = board.checked_list(list_index)?;
    check_card_index(list, list_index, card_index)?;
    let mut lists = board.lists_for_update();
    let cards = Arc::make_mut(&mut lists[list_index]).cards_mut();
    let edited = cards[card_index].with_content(content);
    cards[card_index] = Arc::new(edited);
    Ok(Board::from_shared(lists))
}
