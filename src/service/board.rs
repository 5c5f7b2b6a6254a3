use crate::{domain::Board, error::Result, storage::Storage};
use std::sync::Arc;

#[derive(Clone)]
pub struct BoardService {
    storage: Arc<dyn Storage>,
}

impl BoardService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_boards(&self) -> Result<Vec<Board>> {
        self.storage.get_boards().await
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_board(&self, title: String) -> Result<Board> {
        self.storage.create_board(title).await
    }
}
