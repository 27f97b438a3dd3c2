//! # Storage Module
//!
//! Persistence for the two MotoFlow tables: expenses and daily performance
//! records.
//!
//! Every backend implements [`RecordStore`], so the domain services never
//! know whether they are talking to CSV files, a SQLite database or plain
//! process memory. The backend is chosen once at start-up from
//! [`StorageSettings`] and shared as an `Arc<dyn RecordStore>`.
//!
//! ## Backends
//!
//! - **csv**: one file per table in the data directory, rewritten atomically
//! - **sqlite**: `expenses` and `daily_records` tables, created on connect
//! - **memory**: session-scoped, lost when the process exits

pub mod csv;
pub mod error;
pub mod memory;
pub mod sqlite;
pub mod traits;

pub use error::PersistenceError;
pub use memory::MemoryRecordStore;
pub use traits::{RecordKind, RecordStore};

use log::info;
use std::sync::Arc;

use crate::config::{StorageBackend, StorageSettings};

/// Open the record store selected in the settings
pub async fn open_record_store(settings: &StorageSettings) -> Result<Arc<dyn RecordStore>, PersistenceError> {
    let store: Arc<dyn RecordStore> = match settings.backend {
        StorageBackend::Csv => {
            info!("Opening CSV storage in {}", settings.data_directory.display());
            let connection = csv::CsvConnection::new(&settings.data_directory)?;
            Arc::new(csv::CsvRecordStore::new(connection))
        }
        StorageBackend::Sqlite => {
            let url = settings.resolved_database_url();
            if settings.database_url.is_none() {
                std::fs::create_dir_all(&settings.data_directory).map_err(|source| PersistenceError::Unavailable {
                    location: settings.data_directory.display().to_string(),
                    source,
                })?;
            }
            info!("Opening SQLite storage at {}", url);
            let db = sqlite::DbConnection::new(&url).await?;
            Arc::new(sqlite::SqliteRecordStore::new(db))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; records will not survive a restart");
            Arc::new(MemoryRecordStore::new())
        }
    };

    Ok(store)
}
