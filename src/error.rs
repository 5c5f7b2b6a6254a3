use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskboardError>;

#[derive(Debug, Error)]
pub enum TaskboardError {
    #[error("board {board_id} not found")]
    BoardNotFound { board_id: i64 },

    #[error("list {list_id} not found in board {board_id}")]
    ListNotFound { list_id: i64, board_id: i64 },

    #[error("card {card_id} not found in list {list_id}")]
    CardNotFound { card_id: i64, list_id: i64 },

    #[error("Store not initialized")]
    StoreNotInitialized,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "sqlite-storage")]
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl TaskboardError {
    /// True for the three traversal failures of card update/delete
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoardNotFound { .. } | Self::ListNotFound { .. } | Self::CardNotFound { .. }
        )
    }
}
