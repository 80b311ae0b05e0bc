//! Offer-a-ride page: the trip form.

use dioxus::prelude::*;
use store::{OfferField, OfferForm};

use crate::market::make_market;
use crate::notices::{push_notice, use_notices, NoticeLevel};

/// The trip form. A validated submission appends a ride to the stored
/// collection and resets every field; a validation failure is shown inline
/// and nothing is written.
#[component]
pub fn OfferRideView() -> Element {
    let mut notices = use_notices();
    let mut form = use_signal(OfferForm::default);
    let mut error = use_signal(|| Option::<String>::None);

    let mut set_field = move |field: OfferField, value: String| {
        form.set(form().apply(field, &value));
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let draft = match form().validate() {
            Ok(draft) => draft,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        spawn(async move {
            let market = make_market();
            match market.offer_ride(draft).await {
                Ok(_) => {
                    push_notice(
                        &mut notices,
                        NoticeLevel::Success,
                        "Ride offered successfully!",
                        "Your ride is now available for passengers to book.",
                    );
                    form.set(OfferForm::default());
                }
                Err(err) => {
                    tracing::error!("failed to store offered ride: {err}");
                    push_notice(
                        &mut notices,
                        NoticeLevel::Error,
                        "Could not save your ride",
                        "The ride was not stored. Please try again.",
                    );
                }
            }
        });
    };

    rsx! {
        main {
            class: "page page-narrow",
            div {
                class: "page-heading",
                h1 { "Offer a Ride" }
                p {
                    "Share your journey and help others while earning some extra money "
                    "for gas and tolls."
                }
            }

            div {
                class: "card",
                h2 { class: "card-title", "Ride Details" }
                p { class: "card-subtitle", "Fill out the information about your upcoming trip" }

                form {
                    class: "offer-form",
                    onsubmit: handle_submit,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            label { r#for: "offer-from", "Starting Location *" }
                            input {
                                id: "offer-from",
                                r#type: "text",
                                placeholder: "Enter pickup location",
                                value: "{form().start_location}",
                                oninput: move |evt| set_field(OfferField::StartLocation, evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "offer-to", "Destination *" }
                            input {
                                id: "offer-to",
                                r#type: "text",
                                placeholder: "Enter destination",
                                value: "{form().destination}",
                                oninput: move |evt| set_field(OfferField::Destination, evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            label { r#for: "offer-date", "Date *" }
                            input {
                                id: "offer-date",
                                r#type: "date",
                                value: "{form().date}",
                                oninput: move |evt| set_field(OfferField::Date, evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "offer-time", "Departure Time *" }
                            input {
                                id: "offer-time",
                                r#type: "time",
                                value: "{form().time}",
                                oninput: move |evt| set_field(OfferField::Time, evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            label { r#for: "offer-seats", "Available Seats *" }
                            select {
                                id: "offer-seats",
                                value: "{form().seats}",
                                onchange: move |evt| set_field(OfferField::Seats, evt.value()),
                                option { value: "", "Select number of seats" }
                                option { value: "1", "1 seat" }
                                option { value: "2", "2 seats" }
                                option { value: "3", "3 seats" }
                                option { value: "4", "4 seats" }
                            }
                        }
                        div {
                            class: "form-field",
                            label { r#for: "offer-price", "Price per Seat *" }
                            input {
                                id: "offer-price",
                                r#type: "number",
                                min: "0",
                                step: "0.01",
                                placeholder: "25",
                                value: "{form().price}",
                                oninput: move |evt| set_field(OfferField::Price, evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "offer-car", "Vehicle Information" }
                        input {
                            id: "offer-car",
                            r#type: "text",
                            placeholder: "e.g., Toyota Camry 2020, Blue",
                            value: "{form().car}",
                            oninput: move |evt| set_field(OfferField::Car, evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "offer-description", "Additional Information" }
                        textarea {
                            id: "offer-description",
                            rows: "3",
                            placeholder: "Any additional details about the trip, stops, or preferences...",
                            value: "{form().description}",
                            oninput: move |evt| set_field(OfferField::Description, evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "offer-preferences", "Passenger Preferences" }
                        input {
                            id: "offer-preferences",
                            r#type: "text",
                            placeholder: "e.g., No smoking, Pet-friendly, Music preferences",
                            value: "{form().preferences}",
                            oninput: move |evt| set_field(OfferField::Preferences, evt.value()),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        "Offer This Ride"
                    }
                }
            }
        }
    }
}
