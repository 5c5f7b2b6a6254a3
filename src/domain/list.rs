use crate::domain::card::Card;
use serde::{Deserialize, Serialize};

/// Mid-level container, owned by exactly one board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: i64,
    pub title: String,
    /// Back-reference to the owning board (lookup only)
    pub board_id: i64,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    pub fn new(id: i64, title: String, board_id: i64) -> Self {
        Self {
            id,
            title,
            board_id,
            cards: Vec::new(),
        }
    }

    /// Checks whether this is the all-default sentinel value
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn get_card_mut(&mut self, card_id: i64) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == card_id)
    }

    /// Removes a card, preserving the order of the cards that remain
    pub fn remove_card(&mut self, card_id: i64) -> Option<Card> {
        let position = self.cards.iter().position(|card| card.id == card_id)?;
        Some(self.cards.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with_cards() -> List {
        let mut list = List::new(1, "To Do".to_string(), 1);
        for id in 1..=4 {
            list.add_card(Card::new(id, format!("Card {}", id), 1, 1));
        }
        list
    }

    #[test]
    fn test_remove_card_preserves_order() {
        let mut list = list_with_cards();

        let removed = list.remove_card(2).unwrap();
        assert_eq!(removed.id, 2);

        let ids: Vec<i64> = list.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_missing_card() {
        let mut list = list_with_cards();
        assert!(list.remove_card(42).is_none());
        assert_eq!(list.cards.len(), 4);
    }

    #[test]
    fn test_zero_list() {
        assert!(List::default().is_zero());
        assert!(!List::new(1, String::new(), 0).is_zero());
    }
}
