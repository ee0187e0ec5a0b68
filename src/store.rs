use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access collection file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Collection file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The fixed set of persisted collections, one JSON file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Orders = 0,
    Items = 1,
    Notifications = 2,
}

impl Collection {
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Orders => "orders.json",
            Collection::Items => "items.json",
            Collection::Notifications => "notifications.json",
        }
    }
}

/// Whole-file JSON persistence rooted at a data directory. Every `load`
/// re-reads and every `save` rewrites the entire collection file.
///
/// Each collection carries an in-process mutex; handlers hold the guard of
/// every collection they mutate across the full read-modify-write cycle so
/// that one writer's rewrite cannot discard another's. Lock order is always
/// orders before notifications. Writes are not atomic: a crash mid-write can
/// leave a truncated file.
pub struct JsonStore {
    data_dir: PathBuf,
    locks: [Mutex<()>; 3],
}

impl JsonStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            locks: [Mutex::new(()), Mutex::new(()), Mutex::new(())],
        }
    }

    pub async fn lock(&self, collection: Collection) -> MutexGuard<'_, ()> {
        self.locks[collection as usize].lock().await
    }

    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StoreError> {
        let bytes = fs::read(self.data_dir.join(collection.file_name()))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn save<T: Serialize>(&self, collection: Collection, rows: &[T]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(rows)?;
        fs::write(self.data_dir.join(collection.file_name()), bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Notification, NotificationStatus};
    use chrono::Utc;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_round_trips_a_collection() {
        let dir = tempdir().expect("tempdir");
        let store = JsonStore::new(dir.path().to_path_buf());

        let rows = vec![Notification {
            id: "123456".to_string(),
            message: "Order #1 has been created.".to_string(),
            status: NotificationStatus::Unread,
            created_at: Utc::now(),
        }];
        store
            .save(Collection::Notifications, &rows)
            .expect("save notifications");

        let loaded: Vec<Notification> = store
            .load(Collection::Notifications)
            .expect("load notifications");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "123456");
        assert_eq!(loaded[0].status, NotificationStatus::Unread);
    }

    #[test]
    fn load_of_missing_file_is_an_io_error() {
        let dir = tempdir().expect("tempdir");
        let store = JsonStore::new(dir.path().to_path_buf());

        let result: Result<Vec<Notification>, _> = store.load(Collection::Orders);
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn load_of_malformed_file_is_a_parse_error() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join("orders.json"), b"{not json").expect("write file");
        let store = JsonStore::new(dir.path().to_path_buf());

        let result: Result<Vec<Notification>, _> = store.load(Collection::Orders);
        assert!(matches!(result, Err(StoreError::Parse(_))));
    }
}
