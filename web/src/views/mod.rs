mod home;
pub use home::Home;

mod find_ride;
pub use find_ride::FindRide;

mod offer_ride;
pub use offer_ride::OfferRide;
