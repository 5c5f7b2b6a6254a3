use crate::{domain::List, error::Result, storage::Storage};
use std::sync::Arc;

#[derive(Clone)]
pub struct ListService {
    storage: Arc<dyn Storage>,
}

impl ListService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_lists(&self, list_id: Option<i64>) -> Result<Vec<List>> {
        self.storage.get_lists(list_id).await
    }

    /// Returns `List::default()` when the board does not exist
    #[tracing::instrument(skip(self))]
    pub async fn create_list(&self, title: String, board_id: i64) -> Result<List> {
        self.storage.create_list(title, board_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn test_create_and_get_list() {
        let storage = Arc::new(MemoryStorage::new());
        let board = storage.create_board("Board".to_string()).await.unwrap();
        let service = ListService::new(storage);

        let list = service
            .create_list("Test List".to_string(), board.id)
            .await
            .unwrap();
        assert_eq!(list.board_id, board.id);

        assert_eq!(service.get_lists(Some(list.id)).await.unwrap(), vec![list]);
        assert!(service.get_lists(Some(666)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_list_unknown_board() {
        let service = ListService::new(Arc::new(MemoryStorage::new()));

        let list = service.create_list("Lost".to_string(), 666).await.unwrap();
        assert!(list.is_zero());
    }
}
