use crate::domain::list::List;
use serde::{Deserialize, Serialize};

/// Top-level container of the tree
///
/// A board owns its lists in insertion order. The zero value (`Board::default()`)
/// is never stored; it only appears as a sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Board {
    /// Creates an empty board
    pub fn new(id: i64, title: String) -> Self {
        Self {
            id,
            title,
            lists: Vec::new(),
        }
    }

    /// Checks whether this is the all-default sentinel value
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Appends a list, keeping insertion order
    pub fn add_list(&mut self, list: List) {
        self.lists.push(list);
    }

    /// Finds a list owned by this board for in-place mutation
    pub fn get_list_mut(&mut self, list_id: i64) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| list.id == list_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::new(1, "Sprint 1".to_string());
        assert_eq!(board.id, 1);
        assert_eq!(board.title, "Sprint 1");
        assert!(board.lists.is_empty());
        assert!(!board.is_zero());
    }

    #[test]
    fn test_zero_board() {
        assert!(Board::default().is_zero());
    }

    #[test]
    fn test_list_lookup() {
        let mut board = Board::new(1, "Sprint 1".to_string());
        board.add_list(List::new(4, "To Do".to_string(), 1));
        board.add_list(List::new(5, "Done".to_string(), 1));

        assert_eq!(board.get_list_mut(5).map(|l| l.title.as_str()), Some("Done"));
        assert!(board.get_list_mut(6).is_none());

        if let Some(list) = board.get_list_mut(4) {
            list.title = "Backlog".to_string();
        }
        assert_eq!(board.lists[0].title, "Backlog");
    }
}
