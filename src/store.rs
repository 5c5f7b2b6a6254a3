//! In-memory board/list/card tree.
//!
//! Boards live in a map keyed by ID; lists and cards live in ordered vectors
//! inside their parent. Nested mutations go through `&mut` borrows into the
//! map, so there is never a "write the parent back" step.
//!
//! Each entity type has its own counter. A counter is consumed before the
//! parent lookup, which means a failed create still burns an ID.

use crate::{
    domain::{Board, Card, List},
    error::{Result, TaskboardError},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const FIRST_ID: i64 = 1;

/// Owner of the whole tree plus the three ID counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchicalStore {
    boards: HashMap<i64, Board>,
    next_board_id: i64,
    next_list_id: i64,
    next_card_id: i64,
}

impl HierarchicalStore {
    /// Creates an empty store with all counters at their first ID
    pub fn new() -> Self {
        Self {
            boards: HashMap::new(),
            next_board_id: FIRST_ID,
            next_list_id: FIRST_ID,
            next_card_id: FIRST_ID,
        }
    }

    /// Creates a board with no lists. Always succeeds.
    pub fn create_board(&mut self, title: String) -> Board {
        let board = Board::new(self.next_board_id, title);
        self.next_board_id += 1;
        self.boards.insert(board.id, board.clone());
        board
    }

    /// Returns every board. Order follows the map and is not stable.
    pub fn get_boards(&self) -> Vec<Board> {
        self.boards.values().cloned().collect()
    }

    /// Filter fetch over lists
    ///
    /// Without a filter, returns every list of every board (board by board).
    /// With a filter, returns the first list carrying that ID as a
    /// single-element vector, or an empty vector when nothing matches.
    pub fn get_lists(&self, filter: Option<i64>) -> Vec<List> {
        match filter {
            None => self
                .boards
                .values()
                .flat_map(|board| board.lists.iter().cloned())
                .collect(),
            Some(list_id) => self
                .boards
                .values()
                .flat_map(|board| board.lists.iter())
                .find(|list| list.id == list_id)
                .cloned()
                .into_iter()
                .collect(),
        }
    }

    /// Appends a list to a board
    ///
    /// The list ID is taken from the counter before the board is looked up.
    /// A missing board yields `List::default()` rather than an error.
    pub fn create_list(&mut self, title: String, board_id: i64) -> List {
        let list = List::new(self.next_list_id, title, board_id);
        self.next_list_id += 1;

        match self.boards.get_mut(&board_id) {
            Some(board) => {
                board.add_list(list.clone());
                list
            }
            None => List::default(),
        }
    }

    /// Filter fetch over cards, same contract as [`get_lists`](Self::get_lists)
    pub fn get_cards(&self, filter: Option<i64>) -> Vec<Card> {
        let mut cards = self
            .boards
            .values()
            .flat_map(|board| board.lists.iter())
            .flat_map(|list| list.cards.iter());

        match filter {
            None => cards.cloned().collect(),
            Some(card_id) => cards
                .find(|card| card.id == card_id)
                .cloned()
                .into_iter()
                .collect(),
        }
    }

    /// Appends a card to a list
    ///
    /// The card ID is consumed unconditionally. If either the board or the
    /// list within it is missing, `Card::default()` is returned.
    pub fn create_card(&mut self, title: String, board_id: i64, list_id: i64) -> Card {
        let card = Card::new(self.next_card_id, title, board_id, list_id);
        self.next_card_id += 1;

        match self.find_list_mut(board_id, list_id) {
            Ok(list) => {
                list.add_card(card.clone());
                card
            }
            Err(_) => Card::default(),
        }
    }

    /// Removes a card and returns it
    ///
    /// # Errors
    ///
    /// `BoardNotFound`, `ListNotFound` or `CardNotFound`, naming the first
    /// level of the chain that does not exist.
    pub fn delete_card(&mut self, board_id: i64, list_id: i64, card_id: i64) -> Result<Card> {
        self.find_list_mut(board_id, list_id)?
            .remove_card(card_id)
            .ok_or(TaskboardError::CardNotFound { card_id, list_id })
    }

    /// Overwrites title and description of a stored card
    ///
    /// The card is located by `updated.board_id`, `updated.list_id` and
    /// `updated.id`; those fields themselves are never changed.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`delete_card`](Self::delete_card).
    pub fn update_card(&mut self, updated: &Card) -> Result<Card> {
        let card = self
            .find_list_mut(updated.board_id, updated.list_id)?
            .get_card_mut(updated.id)
            .ok_or(TaskboardError::CardNotFound {
                card_id: updated.id,
                list_id: updated.list_id,
            })?;

        card.apply_update(updated);
        Ok(card.clone())
    }

    fn find_list_mut(&mut self, board_id: i64, list_id: i64) -> Result<&mut List> {
        let board = self
            .boards
            .values_mut()
            .find(|board| board.id == board_id)
            .ok_or(TaskboardError::BoardNotFound { board_id })?;

        board
            .get_list_mut(list_id)
            .ok_or(TaskboardError::ListNotFound { list_id, board_id })
    }
}

impl Default for HierarchicalStore {
    fn default() -> Self {
        Self::new()
    }
}
