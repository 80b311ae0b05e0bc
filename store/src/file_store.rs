//! # Filesystem-backed key-value store
//!
//! [`FileStore`] persists each blob as one file per key under a base
//! directory. It is the desktop counterpart of the browser's localStorage:
//! the same two keys, retained across app restarts.
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/rideshare/` |
//! | Linux | `~/.local/share/rideshare/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\rideshare\` |

use std::path::PathBuf;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(_) => Err(StoreError::Read {
                key: key.to_string(),
            }),
        }
    }

    async fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base).map_err(|_| StoreError::Write {
            key: key.to_string(),
        })?;
        std::fs::write(self.key_path(key), value).map_err(|_| StoreError::Write {
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{OfferField, OfferForm};
    use crate::Marketplace;

    #[tokio::test]
    async fn rides_survive_reopening_the_store() {
        let dir = std::env::temp_dir().join(format!("rideshare_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let market = Marketplace::new(FileStore::new(dir.clone()));
        let draft = OfferForm::default()
            .apply(OfferField::StartLocation, "Austin, TX")
            .apply(OfferField::Destination, "Dallas, TX")
            .apply(OfferField::Date, "2024-03-01")
            .apply(OfferField::Time, "08:00")
            .apply(OfferField::Seats, "2")
            .apply(OfferField::Price, "18")
            .validate()
            .unwrap();
        market.offer_ride(draft).await.unwrap();

        // Re-open from the same directory.
        let market2 = Marketplace::new(FileStore::new(dir.clone()));
        let rides = market2.rides().await.unwrap();
        assert_eq!(rides.len(), 1);
        assert_eq!(rides[0].start_location, "Austin, TX");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn missing_file_reads_as_absent() {
        let dir = std::env::temp_dir().join(format!("rideshare_empty_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir);
        assert!(store.get("rideshare_rides").await.unwrap().is_none());
    }
}
