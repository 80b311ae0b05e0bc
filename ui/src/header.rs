//! Sticky page header: brand, navigation links, auth entry points.
//!
//! Navigation links are passed in as children because the `Route` enum lives
//! in each platform crate; the header itself only owns the sign-in and
//! sign-up dialogs.

use dioxus::prelude::*;
use store::AuthMode;

use crate::auth::{use_auth, AuthModal};

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn Header(children: Element) -> Element {
    let auth = use_auth();
    let mut auth_dialog = use_signal(|| Option::<AuthMode>::None);

    rsx! {
        header {
            class: "site-header",
            nav {
                class: "site-nav",
                a { class: "brand", href: "/",
                    span { class: "brand-mark", "⬢" }
                    span { class: "brand-name", "RideShare" }
                }

                div { class: "nav-links", {children} }

                div {
                    class: "nav-auth",
                    if let Some(user) = auth().user {
                        span { class: "nav-user", "Hi, {user.name}" }
                    } else {
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| auth_dialog.set(Some(AuthMode::SignIn)),
                            "Sign In"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| auth_dialog.set(Some(AuthMode::SignUp)),
                            "Get Started"
                        }
                    }
                }
            }
        }

        if let Some(mode) = auth_dialog() {
            ModalOverlay {
                on_close: move |_| auth_dialog.set(None),
                AuthModal {
                    mode,
                    on_close: move |_| auth_dialog.set(None),
                }
            }
        }
    }
}
