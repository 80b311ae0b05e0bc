use dioxus::prelude::*;
use ui::{FindRideView, Header};

use crate::Route;

#[component]
pub fn FindRide() -> Element {
    let nav = use_navigator();

    rsx! {
        Header {
            Link { to: Route::FindRide {}, "Find Ride" }
            Link { to: Route::OfferRide {}, "Offer Ride" }
            a { href: "/#how-it-works", "How it Works" }
        }
        FindRideView {
            on_offer_instead: move |_| { nav.push(Route::OfferRide {}); },
        }
    }
}
