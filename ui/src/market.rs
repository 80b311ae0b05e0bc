//! Shared marketplace constructor for all platforms.
//!
//! Returns a [`store::Marketplace`] backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser localStorage via [`store::BrowserStore`]
//! - **Desktop** (native): filesystem via [`store::FileStore`]

/// Create a platform-appropriate marketplace.
///
/// On native platforms the store lives under `<data_dir>/rideshare/`, so
/// offered rides and the session record survive app restarts, matching the
/// browser's localStorage lifetime.
pub fn make_market() -> store::Marketplace<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Marketplace::new(store::BrowserStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("rideshare");
        store::Marketplace::new(store::FileStore::new(base))
    }
}
