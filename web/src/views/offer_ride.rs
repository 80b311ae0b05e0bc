use dioxus::prelude::*;
use ui::{Header, OfferRideView};

use crate::Route;

#[component]
pub fn OfferRide() -> Element {
    rsx! {
        Header {
            Link { to: Route::FindRide {}, "Find Ride" }
            Link { to: Route::OfferRide {}, "Offer Ride" }
            a { href: "/#how-it-works", "How it Works" }
        }
        OfferRideView {}
    }
}
