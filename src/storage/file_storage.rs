use crate::{
    domain::{Board, Card, List},
    error::{Result, TaskboardError},
    storage::Storage,
    store::HierarchicalStore,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::{fs, sync::Mutex};

/// On-disk form of the store
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    saved_at: DateTime<Utc>,
    store: HierarchicalStore,
}

/// File-based storage implementation
///
/// The whole tree is kept in a single JSON snapshot. Every operation reads
/// the snapshot, applies the in-memory store operation and, for mutations,
/// writes it back. Failed creates are written back too since they consume an
/// ID.
pub struct FileStorage {
    root_path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    const TASKBOARD_DIR: &'static str = ".taskboard";
    const STORE_FILE: &'static str = "store.json";

    /// Creates a new FileStorage instance for the given data directory
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            root_path: data_dir.as_ref().join(Self::TASKBOARD_DIR),
            lock: Mutex::new(()),
        }
    }

    fn store_file(&self) -> PathBuf {
        self.root_path.join(Self::STORE_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }

    async fn load(&self) -> Result<HierarchicalStore> {
        let store_file = self.store_file();

        if !store_file.exists() {
            return Err(TaskboardError::StoreNotInitialized);
        }

        let contents = fs::read_to_string(&store_file).await?;
        let snapshot: Snapshot = serde_json::from_str(&contents)?;

        Ok(snapshot.store)
    }

    async fn save(&self, store: HierarchicalStore) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let snapshot = Snapshot {
            saved_at: Utc::now(),
            store,
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(self.store_file(), json).await?;

        tracing::debug!(path = %self.store_file().display(), "snapshot written");
        Ok(())
    }

    async fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&HierarchicalStore) -> T + Send,
    {
        let _guard = self.lock.lock().await;
        let store = self.load().await?;
        Ok(f(&store))
    }

    async fn mutate<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut HierarchicalStore) -> T + Send,
        T: Send,
    {
        let _guard = self.lock.lock().await;
        let mut store = self.load().await?;
        let output = f(&mut store);
        self.save(store).await?;
        Ok(output)
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.ensure_directory_exists(&self.root_path).await?;

        if !self.store_file().exists() {
            self.save(HierarchicalStore::new()).await?;
        }

        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists() && self.store_file().exists()
    }

    async fn create_board(&self, title: String) -> Result<Board> {
        self.mutate(|store| store.create_board(title)).await
    }

    async fn get_boards(&self) -> Result<Vec<Board>> {
        self.read(|store| store.get_boards()).await
    }

    async fn get_lists(&self, filter: Option<i64>) -> Result<Vec<List>> {
        self.read(|store| store.get_lists(filter)).await
    }

    async fn create_list(&self, title: String, board_id: i64) -> Result<List> {
        self.mutate(|store| store.create_list(title, board_id)).await
    }

    async fn get_cards(&self, filter: Option<i64>) -> Result<Vec<Card>> {
        self.read(|store| store.get_cards(filter)).await
    }

    async fn create_card(&self, title: String, board_id: i64, list_id: i64) -> Result<Card> {
        self.mutate(|store| store.create_card(title, board_id, list_id))
            .await
    }

    async fn delete_card(&self, board_id: i64, list_id: i64, card_id: i64) -> Result<Card> {
        self.mutate(|store| store.delete_card(board_id, list_id, card_id))
            .await?
    }

    async fn update_card(&self, updated: Card) -> Result<Card> {
        self.mutate(|store| store.update_card(&updated)).await?
    }
}
