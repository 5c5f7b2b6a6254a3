use crate::{
    domain::{Board, Card, List},
    error::{Result, TaskboardError},
    storage::Storage,
};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS boards (
    id    INTEGER PRIMARY KEY,
    title TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS lists (
    id       INTEGER PRIMARY KEY,
    board_id INTEGER NOT NULL REFERENCES boards(id),
    title    TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS cards (
    id          INTEGER PRIMARY KEY,
    board_id    INTEGER NOT NULL REFERENCES boards(id),
    list_id     INTEGER NOT NULL REFERENCES lists(id),
    title       TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT ''
);
CREATE TABLE IF NOT EXISTS counters (
    name  TEXT PRIMARY KEY,
    value INTEGER NOT NULL
);
INSERT OR IGNORE INTO counters (name, value) VALUES ('board', 1), ('list', 1), ('card', 1);
";

/// SQLite-based storage backend
///
/// IDs come from the `counters` table rather than `AUTOINCREMENT` so that a
/// create against a missing parent still consumes one, exactly like the
/// in-memory store. Within a parent, rows are read back `ORDER BY id`, which
/// matches insertion order because IDs only grow.
pub struct SqliteStorage {
    connection: Mutex<Connection>,
}

impl SqliteStorage {
    /// Opens (or creates) a database file
    pub fn new(database_path: &str) -> Result<Self> {
        Ok(Self::from_connection(Connection::open(database_path)?))
    }

    /// Opens a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_connection(Connection::open_in_memory()?))
    }

    fn from_connection(connection: Connection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|e| TaskboardError::StorageError(format!("connection lock poisoned: {}", e)))
    }
}

fn next_id(conn: &Connection, counter: &str) -> Result<i64> {
    let id: i64 = conn.query_row(
        "SELECT value FROM counters WHERE name = ?1",
        params![counter],
        |row| row.get(0),
    )?;
    conn.execute(
        "UPDATE counters SET value = value + 1 WHERE name = ?1",
        params![counter],
    )?;
    Ok(id)
}

fn board_exists(conn: &Connection, board_id: i64) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM boards WHERE id = ?1",
            params![board_id],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

fn list_exists(conn: &Connection, board_id: i64, list_id: i64) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM lists WHERE id = ?1 AND board_id = ?2",
            params![list_id, board_id],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Resolves board then list, reporting the first level that is missing
fn require_list(conn: &Connection, board_id: i64, list_id: i64) -> Result<()> {
    if !board_exists(conn, board_id)? {
        return Err(TaskboardError::BoardNotFound { board_id });
    }
    if !list_exists(conn, board_id, list_id)? {
        return Err(TaskboardError::ListNotFound { list_id, board_id });
    }
    Ok(())
}

fn card_from_row(row: &Row<'_>) -> rusqlite::Result<Card> {
    Ok(Card {
        id: row.get(0)?,
        board_id: row.get(1)?,
        list_id: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
    })
}

fn find_card(conn: &Connection, list_id: i64, card_id: i64) -> Result<Option<Card>> {
    let card = conn
        .query_row(
            "SELECT id, board_id, list_id, title, description FROM cards
             WHERE id = ?1 AND list_id = ?2",
            params![card_id, list_id],
            card_from_row,
        )
        .optional()?;
    Ok(card)
}

/// Cards grouped board by board, then list by list
fn load_cards(conn: &Connection) -> Result<Vec<Card>> {
    let mut stmt = conn.prepare(
        "SELECT c.id, c.board_id, c.list_id, c.title, c.description
         FROM cards c
         JOIN lists l ON l.id = c.list_id
         ORDER BY l.board_id, l.id, c.id",
    )?;
    let cards = stmt
        .query_map([], card_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(cards)
}

/// Lists with their cards attached, in board-then-list order
fn load_lists(conn: &Connection) -> Result<Vec<List>> {
    let mut cards_by_list: HashMap<i64, Vec<Card>> = HashMap::new();
    for card in load_cards(conn)? {
        cards_by_list.entry(card.list_id).or_default().push(card);
    }

    let mut stmt = conn.prepare("SELECT id, board_id, title FROM lists ORDER BY board_id, id")?;
    let lists = stmt
        .query_map([], |row| {
            Ok(List::new(row.get(0)?, row.get(2)?, row.get(1)?))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(lists
        .into_iter()
        .map(|mut list| {
            list.cards = cards_by_list.remove(&list.id).unwrap_or_default();
            list
        })
        .collect())
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn initialize(&self) -> Result<()> {
        self.conn()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        let Ok(conn) = self.conn() else {
            return false;
        };
        conn.query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'counters'",
            [],
            |_| Ok(()),
        )
        .is_ok()
    }

    async fn create_board(&self, title: String) -> Result<Board> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let id = next_id(&tx, "board")?;
        tx.execute(
            "INSERT INTO boards (id, title) VALUES (?1, ?2)",
            params![id, title],
        )?;
        tx.commit()?;
        Ok(Board::new(id, title))
    }

    async fn get_boards(&self) -> Result<Vec<Board>> {
        let conn = self.conn()?;

        let mut lists_by_board: HashMap<i64, Vec<List>> = HashMap::new();
        for list in load_lists(&conn)? {
            lists_by_board.entry(list.board_id).or_default().push(list);
        }

        let mut stmt = conn.prepare("SELECT id, title FROM boards ORDER BY id")?;
        let boards = stmt
            .query_map([], |row| Ok(Board::new(row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(boards
            .into_iter()
            .map(|mut board| {
                board.lists = lists_by_board.remove(&board.id).unwrap_or_default();
                board
            })
            .collect())
    }

    async fn get_lists(&self, filter: Option<i64>) -> Result<Vec<List>> {
        let lists = load_lists(&*self.conn()?)?;
        Ok(match filter {
            None => lists,
            Some(list_id) => lists.into_iter().filter(|l| l.id == list_id).take(1).collect(),
        })
    }

    async fn create_list(&self, title: String, board_id: i64) -> Result<List> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let id = next_id(&tx, "list")?;

        let list = if board_exists(&tx, board_id)? {
            tx.execute(
                "INSERT INTO lists (id, board_id, title) VALUES (?1, ?2, ?3)",
                params![id, board_id, title],
            )?;
            List::new(id, title, board_id)
        } else {
            tracing::debug!(board_id, burned_id = id, "list not created: board missing");
            List::default()
        };

        tx.commit()?;
        Ok(list)
    }

    async fn get_cards(&self, filter: Option<i64>) -> Result<Vec<Card>> {
        let cards = load_cards(&*self.conn()?)?;
        Ok(match filter {
            None => cards,
            Some(card_id) => cards.into_iter().filter(|c| c.id == card_id).take(1).collect(),
        })
    }

    async fn create_card(&self, title: String, board_id: i64, list_id: i64) -> Result<Card> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let id = next_id(&tx, "card")?;

        let card = match require_list(&tx, board_id, list_id) {
            Ok(()) => {
                tx.execute(
                    "INSERT INTO cards (id, board_id, list_id, title, description)
                     VALUES (?1, ?2, ?3, ?4, '')",
                    params![id, board_id, list_id, title],
                )?;
                Card::new(id, title, board_id, list_id)
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(board_id, list_id, burned_id = id, "card not created: {}", e);
                Card::default()
            }
            Err(e) => return Err(e),
        };

        tx.commit()?;
        Ok(card)
    }

    async fn delete_card(&self, board_id: i64, list_id: i64, card_id: i64) -> Result<Card> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        require_list(&tx, board_id, list_id)?;
        let card = find_card(&tx, list_id, card_id)?
            .ok_or(TaskboardError::CardNotFound { card_id, list_id })?;

        tx.execute("DELETE FROM cards WHERE id = ?1", params![card_id])?;
        tx.commit()?;
        Ok(card)
    }

    async fn update_card(&self, updated: Card) -> Result<Card> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        require_list(&tx, updated.board_id, updated.list_id)?;
        let mut card = find_card(&tx, updated.list_id, updated.id)?.ok_or(
            TaskboardError::CardNotFound {
                card_id: updated.id,
                list_id: updated.list_id,
            },
        )?;

        tx.execute(
            "UPDATE cards SET title = ?1, description = ?2 WHERE id = ?3",
            params![updated.title, updated.description, card.id],
        )?;
        tx.commit()?;

        card.apply_update(&updated);
        Ok(card)
    }
}
