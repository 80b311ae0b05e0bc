//! The key-value port every storage backend implements.
//!
//! Persistence is two JSON text blobs under fixed keys — the session record
//! and the ride collection. Backends implement [`KeyValueStore`] and
//! [`crate::Marketplace`] supplies the domain operations on top, so the same
//! logic runs against memory (tests), the filesystem (desktop) and browser
//! localStorage (web).

use crate::error::StoreError;

/// Well-known key for the serialized ride collection.
pub const RIDES_KEY: &str = "rideshare_rides";
/// Well-known key for the serialized session record.
pub const SESSION_KEY: &str = "rideshare_user";

/// Async trait for reading and writing string blobs by key.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;
    fn put(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
