mod home;
pub use home::HomeView;

mod find_ride;
pub use find_ride::FindRideView;

mod offer_ride;
pub use offer_ride::OfferRideView;
