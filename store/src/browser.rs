//! # localStorage-backed key-value store
//!
//! [`BrowserStore`] is the [`KeyValueStore`] implementation used on the web
//! platform. The persisted state is two flat JSON strings under fixed keys,
//! which is exactly what `window.localStorage` holds, so the web backend is a
//! thin shim over `web-sys`.
//!
//! Unlike reads — where missing data legitimately means "nothing stored yet" —
//! an unavailable storage object (e.g. disabled by browser policy) and a
//! rejected write (quota) are surfaced as [`StoreError`]s so the UI can report
//! them instead of claiming success.

use web_sys::Storage;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// localStorage-backed KeyValueStore for the web platform.
///
/// Zero-size and `Clone`-friendly; the storage object is looked up per
/// operation since `web_sys::Storage` is not `Send`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for BrowserStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StoreError::Read {
                key: key.to_string(),
            })
    }

    async fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, &value)
            .map_err(|_| StoreError::Write {
                key: key.to_string(),
            })
    }
}
