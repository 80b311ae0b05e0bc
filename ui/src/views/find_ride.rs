//! Find-a-ride page: search form, searching state, results.

use dioxus::prelude::*;
use store::{Ride, RideFilter, SearchService, SimulatedLatency};

use crate::market::make_market;
use crate::notices::{push_notice, use_notices, NoticeLevel};
use crate::ride_card::RideCard;

fn results_heading(count: usize) -> String {
    if count == 1 {
        "1 ride found".to_string()
    } else {
        format!("{count} rides found")
    }
}

/// Search form plus results. The search runs behind the simulated-latency
/// port: the button is disabled and relabelled while the round trip is
/// "in flight", then results replace whatever was shown before.
#[component]
pub fn FindRideView(on_offer_instead: EventHandler<()>) -> Element {
    let mut notices = use_notices();
    let mut filter = use_signal(RideFilter::default);
    let mut rides = use_signal(Vec::<Ride>::new);
    let mut searching = use_signal(|| false);
    let mut searched = use_signal(|| false);

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        if searching() {
            return;
        }
        searching.set(true);

        spawn(async move {
            let service = SearchService::new(make_market(), SimulatedLatency::default());
            match service.search(&filter()).await {
                Ok(results) => {
                    rides.set(results);
                    searched.set(true);
                }
                Err(err) => {
                    tracing::error!("ride search failed: {err}");
                    push_notice(
                        &mut notices,
                        NoticeLevel::Error,
                        "Search failed",
                        "Stored rides could not be read. Please try again.",
                    );
                }
            }
            searching.set(false);
        });
    };

    let handle_book = move |_ride_id: String| {
        push_notice(
            &mut notices,
            NoticeLevel::Success,
            "Ride booking request sent!",
            "The driver will be notified and will respond soon.",
        );
    };

    rsx! {
        main {
            class: "page",
            div {
                class: "page-heading",
                h1 { "Find a Ride" }
                p { "Search for available rides and connect with drivers going your way." }
            }

            div {
                class: "card search-card",
                h2 { class: "card-title", "Search for Rides" }
                form {
                    class: "search-form",
                    onsubmit: handle_search,

                    div {
                        class: "form-field",
                        label { r#for: "search-from", "From" }
                        input {
                            id: "search-from",
                            r#type: "text",
                            placeholder: "Starting location",
                            value: "{filter().from}",
                            oninput: move |evt| filter.write().from = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "search-to", "To" }
                        input {
                            id: "search-to",
                            r#type: "text",
                            placeholder: "Destination",
                            value: "{filter().to}",
                            oninput: move |evt| filter.write().to = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "search-date", "Date" }
                        input {
                            id: "search-date",
                            r#type: "date",
                            value: "{filter().date}",
                            oninput: move |evt| filter.write().date = evt.value(),
                        }
                    }
                    div {
                        class: "form-field form-field-submit",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-block",
                            disabled: searching(),
                            if searching() { "Searching..." } else { "Search Rides" }
                        }
                    }
                }
            }

            if searched() && !rides().is_empty() {
                div {
                    class: "results",
                    h2 { "{results_heading(rides().len())}" }
                    for ride in rides() {
                        RideCard {
                            key: "{ride.id}",
                            ride: ride.clone(),
                            on_book: handle_book,
                        }
                    }
                }
            } else if searched() && !searching() {
                div {
                    class: "empty-results",
                    h3 { "No rides found" }
                    p { "Try adjusting your search criteria or check back later." }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_offer_instead.call(()),
                        "Offer a Ride Instead"
                    }
                }
            }
        }
    }
}
