//! Authentication context and the sign-in / sign-up modal.
//!
//! Auth is a mock flow: no server, no verification. A validated submission
//! always succeeds and writes the session record to local persistence; the
//! failure paths are validation and a rejected session write.

use dioxus::prelude::*;
use store::{AuthField, AuthForm, AuthMode, Session};

use crate::market::make_market;
use crate::notices::{push_notice, use_notices, NoticeLevel};

/// Authentication state for the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Session>,
    pub loading: bool,
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that loads the stored session on mount.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_context_provider(|| {
        Signal::new(AuthState {
            user: None,
            loading: true,
        })
    });

    let _ = use_resource(move || async move {
        let market = make_market();
        match market.current_user().await {
            Ok(user) => auth_state.set(AuthState {
                user,
                loading: false,
            }),
            Err(err) => {
                tracing::warn!("failed to load stored session: {err}");
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Sign-in / sign-up form, shown inside a modal overlay.
///
/// Sign-up additionally collects name and phone. The password field has a
/// show/hide toggle; the password itself is never persisted.
#[component]
pub fn AuthModal(mode: AuthMode, on_close: EventHandler<()>) -> Element {
    let mut auth_state = use_auth();
    let mut notices = use_notices();
    let mut form = use_signal(AuthForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_password = use_signal(|| false);

    let title = match mode {
        AuthMode::SignIn => "Welcome back",
        AuthMode::SignUp => "Create your account",
    };
    let submit_label = match mode {
        AuthMode::SignIn => "Sign In",
        AuthMode::SignUp => "Create Account",
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let credentials = match form().validate(mode) {
            Ok(credentials) => credentials,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        spawn(async move {
            let market = make_market();
            match market.sign_in(credentials).await {
                Ok(session) => {
                    auth_state.set(AuthState {
                        user: Some(session),
                        loading: false,
                    });
                    let (title, message) = match mode {
                        AuthMode::SignIn => ("Welcome back!", "You have successfully signed in."),
                        AuthMode::SignUp => {
                            ("Account created!", "Your account has been created successfully.")
                        }
                    };
                    push_notice(&mut notices, NoticeLevel::Success, title, message);
                    on_close.call(());
                }
                Err(err) => {
                    tracing::error!("failed to store session: {err}");
                    push_notice(
                        &mut notices,
                        NoticeLevel::Error,
                        "Sign in failed",
                        "Your session could not be saved. Please try again.",
                    );
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-modal",
            h2 { class: "auth-title", "{title}" }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                if mode == AuthMode::SignUp {
                    div {
                        class: "form-field",
                        label { r#for: "auth-name", "Full Name" }
                        input {
                            id: "auth-name",
                            r#type: "text",
                            placeholder: "Enter your full name",
                            value: "{form().name}",
                            oninput: move |evt| form.set(form().apply(AuthField::Name, &evt.value())),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "auth-phone", "Phone Number" }
                        input {
                            id: "auth-phone",
                            r#type: "tel",
                            placeholder: "Enter your phone number",
                            value: "{form().phone}",
                            oninput: move |evt| form.set(form().apply(AuthField::Phone, &evt.value())),
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "auth-email", "Email" }
                    input {
                        id: "auth-email",
                        r#type: "email",
                        placeholder: "Enter your email",
                        value: "{form().email}",
                        oninput: move |evt| form.set(form().apply(AuthField::Email, &evt.value())),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "auth-password", "Password" }
                    div {
                        class: "password-field",
                        input {
                            id: "auth-password",
                            r#type: if show_password() { "text" } else { "password" },
                            placeholder: "Enter your password",
                            value: "{form().password}",
                            oninput: move |evt| form.set(form().apply(AuthField::Password, &evt.value())),
                        }
                        button {
                            r#type: "button",
                            class: "password-toggle",
                            onclick: move |_| show_password.set(!show_password()),
                            if show_password() { "Hide" } else { "Show" }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    "{submit_label}"
                }
            }
        }
    }
}
