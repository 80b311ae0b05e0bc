use dioxus::prelude::*;

use views::{FindRide, Home, OfferRide};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/find-ride")]
    FindRide {},
    #[route("/offer-ride")]
    OfferRide {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::RIDESHARE_CSS }

        ui::AuthProvider {
            ui::NoticeProvider {
                Router::<Route> {}
            }
        }
    }
}
