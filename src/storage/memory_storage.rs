use crate::{
    domain::{Board, Card, List},
    error::Result,
    storage::Storage,
    store::HierarchicalStore,
};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Process-local storage; everything is lost on shutdown
///
/// One mutex guards the whole store, so operations are applied one at a time.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    store: Mutex<HierarchicalStore>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing store, e.g. one restored from a snapshot
    pub fn from_store(store: HierarchicalStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        true
    }

    async fn create_board(&self, title: String) -> Result<Board> {
        Ok(self.store.lock().await.create_board(title))
    }

    async fn get_boards(&self) -> Result<Vec<Board>> {
        Ok(self.store.lock().await.get_boards())
    }

    async fn get_lists(&self, filter: Option<i64>) -> Result<Vec<List>> {
        Ok(self.store.lock().await.get_lists(filter))
    }

    async fn create_list(&self, title: String, board_id: i64) -> Result<List> {
        let list = self.store.lock().await.create_list(title, board_id);
        if list.is_zero() {
            tracing::debug!(board_id, "list not created: board missing");
        }
        Ok(list)
    }

    async fn get_cards(&self, filter: Option<i64>) -> Result<Vec<Card>> {
        Ok(self.store.lock().await.get_cards(filter))
    }

    async fn create_card(&self, title: String, board_id: i64, list_id: i64) -> Result<Card> {
        let card = self
            .store
            .lock()
            .await
            .create_card(title, board_id, list_id);
        if card.is_zero() {
            tracing::debug!(board_id, list_id, "card not created: parent missing");
        }
        Ok(card)
    }

    async fn delete_card(&self, board_id: i64, list_id: i64, card_id: i64) -> Result<Card> {
        self.store
            .lock()
            .await
            .delete_card(board_id, list_id, card_id)
    }

    async fn update_card(&self, updated: Card) -> Result<Card> {
        self.store.lock().await.update_card(&updated)
    }
}
