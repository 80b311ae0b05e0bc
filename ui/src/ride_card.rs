//! Search result card for a single ride.

use dioxus::prelude::*;
use store::Ride;

/// One ride in the search results: route, timing, capacity, driver summary,
/// price and a Book button. Booking raises a notification only — no booking
/// state exists, and seat counts never change.
#[component]
pub fn RideCard(ride: Ride, on_book: EventHandler<String>) -> Element {
    let initials: String = ride
        .driver
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    let ride_id = ride.id.clone();

    rsx! {
        div {
            class: "ride-card",
            div {
                class: "ride-route-col",
                div {
                    class: "ride-route",
                    span { class: "ride-city", "{ride.start_location}" }
                    span { class: "ride-arrow", "→" }
                    span { class: "ride-city", "{ride.destination}" }
                }
                div {
                    class: "ride-schedule",
                    span { "{ride.date}" }
                    span { "{ride.time}" }
                }
                div {
                    class: "ride-badges",
                    span { class: "badge badge-secondary", "{ride.seats} seats available" }
                    if !ride.car.is_empty() {
                        span { class: "badge badge-outline", "{ride.car}" }
                    }
                }
                if !ride.description.is_empty() {
                    p { class: "ride-description", "{ride.description}" }
                }
            }

            div {
                class: "ride-driver-col",
                div { class: "driver-avatar", "{initials}" }
                div {
                    div { class: "driver-name", "{ride.driver.name}" }
                    div {
                        class: "driver-meta",
                        span { "★ {ride.driver.rating}" }
                        span { "• {ride.driver.rides_count} rides" }
                    }
                }
            }

            div {
                class: "ride-price-col",
                div { class: "ride-price", "${ride.price}" }
                div { class: "ride-price-unit", "per person" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_book.call(ride_id.clone()),
                    "Book Ride"
                }
            }
        }
    }
}
