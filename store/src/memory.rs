use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and as a non-persistent fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{AuthForm, AuthMode, OfferField, OfferForm};
    use crate::kv::RIDES_KEY;
    use crate::models::{fallback_rides, RideFilter};
    use crate::Marketplace;

    fn offer(from: &str, to: &str, date: &str) -> OfferForm {
        OfferForm::default()
            .apply(OfferField::StartLocation, from)
            .apply(OfferField::Destination, to)
            .apply(OfferField::Date, date)
            .apply(OfferField::Time, "08:00")
            .apply(OfferField::Seats, "3")
            .apply(OfferField::Price, "25")
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let market = Marketplace::new(MemoryStore::new());
        assert!(market.rides().await.unwrap().is_empty());

        for (i, city) in ["Austin, TX", "Dallas, TX", "Houston, TX"].iter().enumerate() {
            let draft = offer(city, "El Paso, TX", "2024-03-01").validate().unwrap();
            let ride = market.offer_ride(draft).await.unwrap();
            assert_eq!(ride.start_location, *city);
            assert_eq!(market.rides().await.unwrap().len(), i + 1);
        }

        let rides = market.rides().await.unwrap();
        let starts: Vec<&str> = rides.iter().map(|r| r.start_location.as_str()).collect();
        assert_eq!(starts, ["Austin, TX", "Dallas, TX", "Houston, TX"]);
    }

    #[tokio::test]
    async fn offered_ride_gets_placeholder_driver_and_timestamp() {
        let market = Marketplace::new(MemoryStore::new());
        let draft = offer("Austin, TX", "Dallas, TX", "2024-03-01").validate().unwrap();
        let ride = market.offer_ride(draft).await.unwrap();

        assert!(!ride.id.is_empty());
        assert_eq!(ride.driver.name, "Current User");
        assert_eq!(ride.driver.rating, 4.8);
        assert_eq!(ride.driver.rides_count, 15);
        assert!(ride.created_at > 0);
    }

    #[tokio::test]
    async fn empty_store_search_yields_fallback_samples() {
        let market = Marketplace::new(MemoryStore::new());
        let results = market.search(&RideFilter::default()).await.unwrap();
        assert_eq!(results, fallback_rides());
    }

    #[tokio::test]
    async fn filter_miss_on_nonempty_store_is_empty_not_fallback() {
        let market = Marketplace::new(MemoryStore::new());
        let draft = offer("Austin, TX", "Dallas, TX", "2024-01-15").validate().unwrap();
        market.offer_ride(draft).await.unwrap();

        let filter = RideFilter {
            date: "2024-01-16".to_string(),
            ..Default::default()
        };
        let results = market.search(&filter).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn search_matches_case_insensitive_substring() {
        let market = Marketplace::new(MemoryStore::new());
        let draft = offer("Austin, TX", "Dallas, TX", "2024-01-15").validate().unwrap();
        market.offer_ride(draft).await.unwrap();

        let filter = RideFilter {
            from: "austin".to_string(),
            ..Default::default()
        };
        let results = market.search(&filter).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].start_location, "Austin, TX");
    }

    #[tokio::test]
    async fn corrupt_rides_blob_reads_as_empty() {
        let store = MemoryStore::new();
        store.put(RIDES_KEY, "{not json".to_string()).await.unwrap();

        let market = Marketplace::new(store);
        assert!(market.rides().await.unwrap().is_empty());

        // A corrupt store is also "empty" for the fallback policy.
        let results = market.search(&RideFilter::default()).await.unwrap();
        assert_eq!(results, fallback_rides());
    }

    #[tokio::test]
    async fn sign_in_overwrites_previous_session() {
        let market = Marketplace::new(MemoryStore::new());
        assert!(market.current_user().await.unwrap().is_none());

        let first = AuthForm::default()
            .with_email("ana@example.com")
            .with_password("secret")
            .with_name("Ana")
            .with_phone("555-0100")
            .validate(AuthMode::SignUp)
            .unwrap();
        market.sign_in(first).await.unwrap();

        let second = AuthForm::default()
            .with_email("bo@example.com")
            .with_password("hunter2")
            .validate(AuthMode::SignIn)
            .unwrap();
        market.sign_in(second).await.unwrap();

        let session = market.current_user().await.unwrap().unwrap();
        assert_eq!(session.email, "bo@example.com");
        // Sign-in has no name field, so the display name falls back.
        assert_eq!(session.name, "User");
        assert!(session.is_authenticated);
    }

    #[tokio::test]
    async fn session_never_stores_the_password() {
        let store = MemoryStore::new();
        let market = Marketplace::new(store.clone());

        let details = AuthForm::default()
            .with_email("ana@example.com")
            .with_password("topsecret")
            .validate(AuthMode::SignIn)
            .unwrap();
        market.sign_in(details).await.unwrap();

        let blob = store.get(crate::kv::SESSION_KEY).await.unwrap().unwrap();
        assert!(!blob.contains("topsecret"));
    }
}
