//! Runtime configuration parsed from environment variables.

use crate::{
    error::{Result, TaskboardError},
    storage::{MemoryStorage, Storage},
};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const SQLITE_FILE: &str = "taskboard.db";

/// Which [`Storage`] implementation backs the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = TaskboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(TaskboardError::ConfigError(format!(
                "Invalid storage backend '{}'. Valid backends: memory, file, sqlite",
                s
            ))),
        }
    }
}

impl StorageBackend {
    /// Builds and initializes the configured backend
    pub async fn open(&self, data_dir: &Path) -> Result<Arc<dyn Storage>> {
        let storage: Arc<dyn Storage> = match self {
            Self::Memory => Arc::new(MemoryStorage::new()),
            Self::File => open_file_storage(data_dir)?,
            Self::Sqlite => open_sqlite_storage(data_dir)?,
        };

        storage.initialize().await?;
        Ok(storage)
    }
}

#[cfg(feature = "file-storage")]
fn open_file_storage(data_dir: &Path) -> Result<Arc<dyn Storage>> {
    Ok(Arc::new(crate::storage::FileStorage::new(data_dir)))
}

#[cfg(not(feature = "file-storage"))]
fn open_file_storage(_data_dir: &Path) -> Result<Arc<dyn Storage>> {
    Err(TaskboardError::ConfigError(
        "file storage requires the `file-storage` feature".to_string(),
    ))
}

#[cfg(feature = "sqlite-storage")]
fn open_sqlite_storage(data_dir: &Path) -> Result<Arc<dyn Storage>> {
    std::fs::create_dir_all(data_dir)?;
    let path = data_dir.join(SQLITE_FILE);
    let path = path.to_str().ok_or_else(|| {
        TaskboardError::ConfigError(format!("non UTF-8 data dir: {}", data_dir.display()))
    })?;
    Ok(Arc::new(crate::storage::SqliteStorage::new(path)?))
}

#[cfg(not(feature = "sqlite-storage"))]
fn open_sqlite_storage(_data_dir: &Path) -> Result<Arc<dyn Storage>> {
    Err(TaskboardError::ConfigError(
        "sqlite storage requires the `sqlite-storage` feature".to_string(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `TASKBOARD_BIND`: listen address, default `0.0.0.0:8080`
    /// - `TASKBOARD_STORAGE`: `memory` (default), `file` or `sqlite`
    /// - `TASKBOARD_DATA_DIR`: where file and sqlite backends keep data, default `.`
    /// - `TASKBOARD_LOG`: tracing filter directive, default `info`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("TASKBOARD_BIND").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|_| {
            TaskboardError::ConfigError(format!("Invalid TASKBOARD_BIND '{}'", bind_raw))
        })?;

        let backend = match lookup("TASKBOARD_STORAGE") {
            Some(raw) => raw.parse::<StorageBackend>()?,
            None => StorageBackend::default(),
        };

        let data_dir = lookup("TASKBOARD_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let log_filter =
            lookup("TASKBOARD_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            bind_addr,
            backend,
            data_dir,
            log_filter,
        })
    }
}
