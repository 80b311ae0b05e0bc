//! # Marketplace — domain operations over an abstract key-value store
//!
//! [`Marketplace`] is the storage hub of the workspace. It owns the two
//! well-known blobs (ride collection, session record) and exposes the
//! operations the pages need, with every read and write going through the
//! [`KeyValueStore`] trait so the same logic runs against an in-memory store
//! (tests), the filesystem (desktop) or browser localStorage (web).
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`rides`](Marketplace::rides) | Decode the stored collection; missing or corrupt data reads as empty (logged, never fatal). |
//! | [`offer_ride`](Marketplace::offer_ride) | Stamp a validated draft with a time-based id, the placeholder driver summary and a creation timestamp, append it, and write the whole collection back. |
//! | [`search`](Marketplace::search) | Apply a [`RideFilter`]; when the *stored collection itself* is empty, substitute the fixed fallback samples. A non-empty store that merely filters to nothing returns an empty result. |
//! | [`current_user`](Marketplace::current_user) | Decode the stored session record, if any. |
//! | [`sign_in`](Marketplace::sign_in) | Write a fresh session record, wholesale overwriting any prior one. The password is discarded. |
//!
//! ## Timestamps
//!
//! [`current_timestamp_millis`] is platform-aware: `js_sys::Date::now()` on
//! WASM and `std::time::SystemTime` on native. It supplies both the ride id
//! token and `created_at`.

use tracing::warn;

use crate::error::StoreError;
use crate::forms::{Credentials, RideDraft};
use crate::kv::{KeyValueStore, RIDES_KEY, SESSION_KEY};
use crate::models::{fallback_rides, Driver, Ride, RideFilter, Session};

/// Driver summary stamped onto every offered ride. A stand-in until rides
/// carry a real account identity.
fn placeholder_driver() -> Driver {
    Driver {
        name: "Current User".to_string(),
        rating: 4.8,
        rides_count: 15,
    }
}

/// The ride marketplace backed by a KeyValueStore.
#[derive(Clone, Debug)]
pub struct Marketplace<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Marketplace<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored ride collection, in insertion order.
    ///
    /// A missing blob is an empty collection. An unparseable blob is also
    /// treated as empty, but logged — the store is demo state, not a source
    /// of truth worth failing the page over.
    pub async fn rides(&self) -> Result<Vec<Ride>, StoreError> {
        let Some(raw) = self.store.get(RIDES_KEY).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(rides) => Ok(rides),
            Err(err) => {
                warn!("discarding unparseable ride collection: {err}");
                Ok(Vec::new())
            }
        }
    }

    /// Append a new ride built from a validated draft and persist the whole
    /// collection. Returns the stored ride.
    pub async fn offer_ride(&self, draft: RideDraft) -> Result<Ride, StoreError> {
        let now = current_timestamp_millis();
        let ride = Ride {
            id: now.to_string(),
            start_location: draft.start_location,
            destination: draft.destination,
            date: draft.date,
            time: draft.time,
            seats: draft.seats,
            price: draft.price,
            car: draft.car,
            description: draft.description,
            preferences: draft.preferences,
            driver: placeholder_driver(),
            created_at: now,
        };

        let mut rides = self.rides().await?;
        rides.push(ride.clone());
        let blob = serde_json::to_string(&rides)?;
        self.store.put(RIDES_KEY, blob).await?;

        Ok(ride)
    }

    /// Search the stored collection with the given filter.
    ///
    /// First-use seeding: if nothing has ever been stored, the two fixed
    /// sample rides are returned so the page is not blank on a fresh profile.
    /// This applies only when the stored collection is empty — a genuine
    /// search miss over existing rides returns an empty result.
    pub async fn search(&self, filter: &RideFilter) -> Result<Vec<Ride>, StoreError> {
        let stored = self.rides().await?;
        let matched: Vec<Ride> = stored
            .iter()
            .filter(|ride| filter.matches(ride))
            .cloned()
            .collect();

        if matched.is_empty() && stored.is_empty() {
            return Ok(fallback_rides());
        }
        Ok(matched)
    }

    /// The stored session record, if a user has signed in on this profile.
    pub async fn current_user(&self) -> Result<Option<Session>, StoreError> {
        let Some(raw) = self.store.get(SESSION_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                warn!("discarding unparseable session record: {err}");
                Ok(None)
            }
        }
    }

    /// Record a session for the given credentials, overwriting any prior one.
    ///
    /// Mock flow: there is no server to verify against, so every validated
    /// submission succeeds. The password is accepted and dropped here; only
    /// email and display name are persisted.
    pub async fn sign_in(&self, credentials: Credentials) -> Result<Session, StoreError> {
        let session = Session {
            email: credentials.email,
            name: credentials.name.unwrap_or_else(|| "User".to_string()),
            is_authenticated: true,
        };
        let blob = serde_json::to_string(&session)?;
        self.store.put(SESSION_KEY, blob).await?;
        Ok(session)
    }
}

/// Current time in epoch milliseconds, on both WASM and native.
pub fn current_timestamp_millis() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{AuthForm, AuthMode, OfferField, OfferForm};

    /// Reads as empty, rejects every write. Stands in for a full or
    /// unavailable backing store.
    #[derive(Clone, Debug)]
    struct RejectingStore;

    impl KeyValueStore for RejectingStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        async fn put(&self, key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: key.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn offer_ride_surfaces_a_failed_write() {
        let market = Marketplace::new(RejectingStore);
        let draft = OfferForm::default()
            .apply(OfferField::StartLocation, "Austin, TX")
            .apply(OfferField::Destination, "Dallas, TX")
            .apply(OfferField::Date, "2024-03-01")
            .apply(OfferField::Time, "08:00")
            .apply(OfferField::Seats, "2")
            .apply(OfferField::Price, "18")
            .validate()
            .unwrap();

        let err = market.offer_ride(draft).await.unwrap_err();
        assert!(matches!(err, StoreError::Write { ref key } if key == RIDES_KEY));
    }

    #[tokio::test]
    async fn sign_in_surfaces_a_failed_write() {
        let market = Marketplace::new(RejectingStore);
        let credentials = AuthForm::default()
            .with_email("ana@example.com")
            .with_password("pw")
            .validate(AuthMode::SignIn)
            .unwrap();

        let err = market.sign_in(credentials).await.unwrap_err();
        assert!(matches!(err, StoreError::Write { ref key } if key == SESSION_KEY));
    }
}
