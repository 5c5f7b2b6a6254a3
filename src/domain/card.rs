use serde::{Deserialize, Serialize};

/// Leaf entity of the tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub board_id: i64,
    pub list_id: i64,
}

impl Card {
    /// Creates a card with an empty description
    pub fn new(id: i64, title: String, board_id: i64, list_id: i64) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            board_id,
            list_id,
        }
    }

    /// Checks whether this is the all-default sentinel value
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Copies the editable fields from `other`. Identity fields are left alone.
    pub fn apply_update(&mut self, other: &Card) {
        self.title = other.title.clone();
        self.description = other.description.clone();
    }
}
