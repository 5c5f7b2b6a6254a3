use crate::{domain::Card, error::Result, storage::Storage};
use std::sync::Arc;

#[derive(Clone)]
pub struct CardService {
    storage: Arc<dyn Storage>,
}

impl CardService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_cards(&self, card_id: Option<i64>) -> Result<Vec<Card>> {
        self.storage.get_cards(card_id).await
    }

    /// Returns `Card::default()` when the board or list does not exist
    #[tracing::instrument(skip(self))]
    pub async fn create_card(&self, title: String, board_id: i64, list_id: i64) -> Result<Card> {
        self.storage.create_card(title, board_id, list_id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_card(&self, board_id: i64, list_id: i64, card_id: i64) -> Result<Card> {
        self.storage.delete_card(board_id, list_id, card_id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_card(&self, updated: Card) -> Result<Card> {
        self.storage.update_card(updated).await
    }
}
