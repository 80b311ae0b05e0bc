use dioxus::prelude::*;
use ui::{Header, HomeView};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        Header {
            Link { to: Route::FindRide {}, "Find Ride" }
            Link { to: Route::OfferRide {}, "Offer Ride" }
            a { href: "/#how-it-works", "How it Works" }
        }
        HomeView {
            on_find_ride: move |_| { nav.push(Route::FindRide {}); },
            on_offer_ride: move |_| { nav.push(Route::OfferRide {}); },
        }
    }
}
