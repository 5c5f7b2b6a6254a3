use crate::domain::{Board, Card, List};
use std::cmp::Ordering;
use std::str::FromStr;

/// Anything addressable by integer ID and carrying a title
pub trait Entity {
    fn id(&self) -> i64;
    fn title(&self) -> &str;
}

impl Entity for Board {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Entity for List {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Entity for Card {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Fields available for sorting boards, lists and cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            _ => Err(format!(
                "Invalid sort field '{}'. Valid fields: id, title",
                s
            )),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Invalid sort order '{}'. Valid orders: asc, desc",
                s
            )),
        }
    }
}

/// Sorts entities in place by the given field and order
///
/// Board iteration order out of the store is unspecified, so callers that
/// need a stable presentation sort here. Title comparison is
/// case-insensitive and ties fall back to the ID.
///
/// # Examples
/// ```
/// use taskboard::domain::sorting::{sort_entities, SortField, SortOrder};
/// use taskboard::domain::Board;
///
/// let mut boards = vec![
///     Board::new(3, "C".to_string()),
///     Board::new(1, "A".to_string()),
///     Board::new(2, "B".to_string()),
/// ];
///
/// sort_entities(&mut boards, SortField::Id, SortOrder::Ascending);
/// assert_eq!(boards[0].id, 1);
/// ```
pub fn sort_entities<T: Entity>(items: &mut [T], field: SortField, order: SortOrder) {
    items.sort_by(|a, b| {
        let cmp = match field {
            SortField::Id => a.id().cmp(&b.id()),
            SortField::Title => compare_titles(a, b),
        };

        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
}

fn compare_titles<T: Entity>(a: &T, b: &T) -> Ordering {
    a.title()
        .to_lowercase()
        .cmp(&b.title().to_lowercase())
        .then_with(|| a.id().cmp(&b.id()))
}
