//! Error taxonomy for the storage layer.
//!
//! A decode failure degrades to "no data" and is logged; write failures
//! propagate to the caller so the UI can report something other than success.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be opened at all (e.g. localStorage
    /// disabled by the browser).
    #[error("storage backend is unavailable")]
    Unavailable,

    /// Reading the value under `key` failed.
    #[error("failed to read stored value `{key}`")]
    Read { key: String },

    /// Writing the value under `key` failed (e.g. quota exceeded).
    #[error("failed to write stored value `{key}`")]
    Write { key: String },

    /// A value could not be serialized before writing.
    #[error("failed to encode stored value: {0}")]
    Serialize(#[from] serde_json::Error),
}
