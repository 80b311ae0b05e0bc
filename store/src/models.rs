//! # Domain models for the ride marketplace
//!
//! Defines the data structures persisted by [`crate::Marketplace`] and shared
//! with the UI. All of them are `Serialize + Deserialize` with camelCase field
//! names, so the stored JSON blobs keep the shape the original client wrote
//! (`seats` and `price` stay string-typed for the same reason).
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Ride`] | A single offered trip: route, timing, capacity, price, vehicle, free-text notes and an embedded [`Driver`] summary. |
//! | [`Driver`] | The driver summary shown on a ride card: display name, 0–5 rating, completed-ride count. |
//! | [`Session`] | The locally persisted "signed-in" user record. Overwritten wholesale on every credential submission. |
//! | [`RideFilter`] | Search criteria; every field is optional (empty string = no constraint). |

use serde::{Deserialize, Serialize};

/// Driver summary embedded in a ride.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub name: String,
    /// 0–5 star rating.
    pub rating: f32,
    /// Completed-ride count.
    pub rides_count: u32,
}

/// A single offered trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    /// Time-based token assigned at creation.
    pub id: String,
    pub start_location: String,
    pub destination: String,
    /// Calendar date as text: "2024-01-15".
    pub date: String,
    /// Clock time as text: "08:00".
    pub time: String,
    /// Seat count, kept as text per the stored shape.
    pub seats: String,
    /// Price per seat in dollars, kept as text per the stored shape.
    pub price: String,
    /// Vehicle description, e.g. "Toyota Prius 2022, Silver".
    #[serde(default)]
    pub car: String,
    /// Free-text trip description.
    #[serde(default)]
    pub description: String,
    /// Passenger preferences, e.g. "No smoking, Pet-friendly".
    #[serde(default)]
    pub preferences: String,
    pub driver: Driver,
    /// Creation timestamp, epoch milliseconds.
    #[serde(default)]
    pub created_at: i64,
}

/// Locally persisted record of the "signed-in" user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub name: String,
    pub is_authenticated: bool,
}

/// Search criteria for [`crate::Marketplace::search`].
///
/// An empty field places no constraint on the corresponding ride attribute.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RideFilter {
    /// Case-insensitive substring of the start location.
    pub from: String,
    /// Case-insensitive substring of the destination.
    pub to: String,
    /// Exact-match calendar date.
    pub date: String,
}

impl RideFilter {
    /// Whether a ride satisfies every present criterion.
    pub fn matches(&self, ride: &Ride) -> bool {
        let matches_from = self.from.is_empty()
            || ride
                .start_location
                .to_lowercase()
                .contains(&self.from.to_lowercase());
        let matches_to = self.to.is_empty()
            || ride
                .destination
                .to_lowercase()
                .contains(&self.to.to_lowercase());
        let matches_date = self.date.is_empty() || ride.date == self.date;
        matches_from && matches_to && matches_date
    }

    /// Whether no criterion is set at all.
    pub fn is_empty(&self) -> bool {
        self.from.is_empty() && self.to.is_empty() && self.date.is_empty()
    }
}

/// The two sample rides shown on first use, before anyone has offered a ride.
pub fn fallback_rides() -> Vec<Ride> {
    vec![
        Ride {
            id: "1".to_string(),
            start_location: "San Francisco, CA".to_string(),
            destination: "Los Angeles, CA".to_string(),
            date: "2024-01-15".to_string(),
            time: "08:00".to_string(),
            seats: "3".to_string(),
            price: "45".to_string(),
            car: "Toyota Prius 2022, Silver".to_string(),
            description: "Comfortable ride with AC, music allowed. One stop for coffee halfway."
                .to_string(),
            preferences: String::new(),
            driver: Driver {
                name: "Sarah M.".to_string(),
                rating: 4.9,
                rides_count: 28,
            },
            created_at: 0,
        },
        Ride {
            id: "2".to_string(),
            start_location: "New York, NY".to_string(),
            destination: "Boston, MA".to_string(),
            date: "2024-01-15".to_string(),
            time: "14:30".to_string(),
            seats: "2".to_string(),
            price: "32".to_string(),
            car: "Honda Civic 2021, Blue".to_string(),
            description: "Direct route, no smoking, pet-friendly.".to_string(),
            preferences: String::new(),
            driver: Driver {
                name: "Michael R.".to_string(),
                rating: 4.7,
                rides_count: 15,
            },
            created_at: 0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride(from: &str, to: &str, date: &str) -> Ride {
        Ride {
            id: "t".to_string(),
            start_location: from.to_string(),
            destination: to.to_string(),
            date: date.to_string(),
            time: "09:00".to_string(),
            seats: "2".to_string(),
            price: "20".to_string(),
            car: String::new(),
            description: String::new(),
            preferences: String::new(),
            driver: Driver {
                name: "D".to_string(),
                rating: 5.0,
                rides_count: 1,
            },
            created_at: 0,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let f = RideFilter::default();
        assert!(f.is_empty());
        assert!(f.matches(&ride("Austin, TX", "Dallas, TX", "2024-01-15")));
    }

    #[test]
    fn from_substring_is_case_insensitive() {
        let f = RideFilter {
            from: "AUSTIN".to_string(),
            ..Default::default()
        };
        assert!(f.matches(&ride("Austin, TX", "Dallas, TX", "2024-01-15")));
        assert!(!f.matches(&ride("Houston, TX", "Dallas, TX", "2024-01-15")));
    }

    #[test]
    fn date_must_match_exactly() {
        let f = RideFilter {
            date: "2024-01-16".to_string(),
            ..Default::default()
        };
        assert!(!f.matches(&ride("Austin, TX", "Dallas, TX", "2024-01-15")));
        assert!(f.matches(&ride("Austin, TX", "Dallas, TX", "2024-01-16")));
    }

    #[test]
    fn criteria_are_conjunctive() {
        let f = RideFilter {
            from: "austin".to_string(),
            to: "dallas".to_string(),
            date: "2024-01-15".to_string(),
        };
        assert!(f.matches(&ride("Austin, TX", "Dallas, TX", "2024-01-15")));
        // One mismatching criterion is enough to reject.
        assert!(!f.matches(&ride("Austin, TX", "Waco, TX", "2024-01-15")));
        assert!(!f.matches(&ride("Austin, TX", "Dallas, TX", "2024-02-01")));
    }

    #[test]
    fn ride_json_shape_is_camel_case() {
        let r = ride("Austin, TX", "Dallas, TX", "2024-01-15");
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"startLocation\""));
        assert!(json.contains("\"ridesCount\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn fallback_rides_are_fixed() {
        let rides = fallback_rides();
        assert_eq!(rides.len(), 2);
        assert_eq!(rides[0].start_location, "San Francisco, CA");
        assert_eq!(rides[0].price, "45");
        assert_eq!(rides[1].destination, "Boston, MA");
        assert_eq!(rides[1].price, "32");
    }
}
