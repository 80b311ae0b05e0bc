//! Landing page: hero, feature grid, how-it-works steps.

use dioxus::prelude::*;

const FEATURES: [(&str, &str); 4] = [
    ("Save Money", "Split fuel costs and reduce your travel expenses by up to 75%"),
    ("Go Green", "Reduce carbon emissions by sharing rides and helping the environment"),
    ("Meet People", "Connect with like-minded travelers and make new friends"),
    ("Stay Safe", "Verified profiles and ratings ensure safe, reliable journeys"),
];

const STEPS: [(&str, &str, &str); 3] = [
    ("1", "Search or Offer", "Find a ride that matches your route or offer seats in your car"),
    ("2", "Connect & Book", "Chat with your travel companion and confirm the details"),
    ("3", "Travel Together", "Meet up and enjoy a comfortable, affordable journey"),
];

#[component]
pub fn HomeView(on_find_ride: EventHandler<()>, on_offer_ride: EventHandler<()>) -> Element {
    rsx! {
        section {
            class: "hero",
            div {
                class: "hero-inner",
                h1 {
                    class: "hero-title",
                    "Share the journey, "
                    span { class: "hero-accent", "split the cost" }
                }
                p {
                    class: "hero-subtitle",
                    "Connect with fellow travelers and make your commute more affordable, "
                    "sustainable, and social."
                }
                div {
                    class: "hero-actions",
                    button {
                        class: "btn btn-primary btn-lg",
                        onclick: move |_| on_find_ride.call(()),
                        "Find a Ride"
                    }
                    button {
                        class: "btn btn-outline btn-lg",
                        onclick: move |_| on_offer_ride.call(()),
                        "Offer a Ride"
                    }
                }
            }
        }

        section {
            class: "features",
            h2 { "Why Choose RideShare?" }
            p {
                class: "section-subtitle",
                "Join thousands of happy travelers who've discovered a better way to commute"
            }
            div {
                class: "feature-grid",
                for (title, description) in FEATURES {
                    div {
                        key: "{title}",
                        class: "feature-card",
                        h3 { "{title}" }
                        p { "{description}" }
                    }
                }
            }
        }

        section {
            id: "how-it-works",
            class: "how-it-works",
            h2 { "How It Works" }
            p {
                class: "section-subtitle",
                "Getting started is easy. Follow these simple steps."
            }
            div {
                class: "step-grid",
                for (number, title, description) in STEPS {
                    div {
                        key: "{number}",
                        class: "step-card",
                        div { class: "step-number", "{number}" }
                        h3 { "{title}" }
                        p { "{description}" }
                    }
                }
            }
        }
    }
}
