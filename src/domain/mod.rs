pub mod board;
pub mod card;
pub mod list;
pub mod sorting;

pub use board::Board;
pub use card::Card;
pub use list::List;
pub use sorting::{sort_entities, Entity, SortField, SortOrder};
