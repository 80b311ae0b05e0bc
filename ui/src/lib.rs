//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const RIDESHARE_CSS: Asset = asset!("/assets/rideshare.css");

mod market;
pub use market::make_market;

mod notices;
pub use notices::{push_notice, use_notices, Notice, NoticeLevel, NoticeProvider, Notices};

mod auth;
pub use auth::{use_auth, AuthModal, AuthProvider, AuthState};

mod header;
pub use header::Header;

mod ride_card;
pub use ride_card::RideCard;

pub mod views;
pub use views::{FindRideView, HomeView, OfferRideView};
