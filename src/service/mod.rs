//! Pass-through services sitting between the HTTP handlers and a
//! [`Storage`](crate::storage::Storage) backend. They add tracing spans and
//! nothing else.

pub mod board;
pub mod card;
pub mod list;

pub use board::BoardService;
pub use card::CardService;
pub use list::ListService;
