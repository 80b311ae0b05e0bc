pub mod error;
pub mod forms;
pub mod kv;
pub mod latency;
pub mod models;

mod market;
pub use market::{current_timestamp_millis, Marketplace};

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStore;

pub use error::StoreError;
pub use forms::{AuthField, AuthForm, AuthMode, Credentials, FormError, OfferField, OfferForm, RideDraft};
pub use kv::{KeyValueStore, RIDES_KEY, SESSION_KEY};
pub use latency::{Latency, NoLatency, SearchService, SimulatedLatency};
pub use models::{fallback_rides, Driver, Ride, RideFilter, Session};
