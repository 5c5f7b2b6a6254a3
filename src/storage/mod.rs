use crate::{
    domain::{Board, Card, List},
    error::Result,
};
use async_trait::async_trait;

pub mod memory_storage;

#[cfg(feature = "file-storage")]
pub mod file_storage;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

pub use memory_storage::MemoryStorage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;

#[cfg(feature = "sqlite-storage")]
pub use sqlite_storage::SqliteStorage;

/// Storage contract shared by every backend
///
/// Backends must agree on the observable behaviour of the in-memory store:
/// create operations consume an ID even when the parent is missing and then
/// return a zero-value entity, filter fetches return zero or one element,
/// and card update/delete report the first missing level of the
/// board → list → card chain.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Checks if the backend is ready for use
    async fn is_initialized(&self) -> bool;

    /// Creates a board with no lists
    async fn create_board(&self, title: String) -> Result<Board>;

    /// Lists all boards, in no particular order
    async fn get_boards(&self) -> Result<Vec<Board>>;

    /// All lists, or the single list with the given ID
    async fn get_lists(&self, filter: Option<i64>) -> Result<Vec<List>>;

    /// Creates a list; a missing board yields `List::default()`
    async fn create_list(&self, title: String, board_id: i64) -> Result<List>;

    /// All cards, or the single card with the given ID
    async fn get_cards(&self, filter: Option<i64>) -> Result<Vec<Card>>;

    /// Creates a card; a missing board or list yields `Card::default()`
    async fn create_card(&self, title: String, board_id: i64, list_id: i64) -> Result<Card>;

    /// Removes a card and returns it
    async fn delete_card(&self, board_id: i64, list_id: i64, card_id: i64) -> Result<Card>;

    /// Overwrites title and description of the card addressed by `updated`
    async fn update_card(&self, updated: Card) -> Result<Card>;
}
