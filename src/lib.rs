//! # Taskboard
//!
//! A hierarchical task-board store: boards contain lists, lists contain
//! cards. The tree itself lives in [`HierarchicalStore`]; the [`Storage`]
//! trait puts it (or a persistent equivalent) behind an async interface that
//! the services and the HTTP handlers consume.

pub mod config;
pub mod domain;
pub mod error;
pub mod handler;
pub mod service;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::{Config, StorageBackend};
pub use domain::{Board, Card, List};
pub use error::{Result, TaskboardError};
pub use storage::Storage;
pub use store::HierarchicalStore;
