//! Toast-style notifications shared by every page.
//!
//! Every user-facing action reports its outcome through a notice: offering a
//! ride, signing in, booking, and storage failures.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notices {
    pub entries: Vec<Notice>,
    next_id: u64,
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

/// Push a notice and schedule its dismissal after a few seconds.
pub fn push_notice(notices: &mut Signal<Notices>, level: NoticeLevel, title: &str, message: &str) {
    let id = {
        let mut state = notices.write();
        state.next_id += 1;
        let id = state.next_id;
        state.entries.push(Notice {
            id,
            level,
            title: title.to_string(),
            message: message.to_string(),
        });
        id
    };

    let mut notices = *notices;
    spawn(async move {
        sleep_secs(4).await;
        notices.write().entries.retain(|n| n.id != id);
    });
}

async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}

/// Provider component that owns the notice stack and renders it above the app.
#[component]
pub fn NoticeProvider(children: Element) -> Element {
    let mut notices = use_context_provider(|| Signal::new(Notices::default()));

    rsx! {
        {children}

        div {
            class: "notice-stack",
            for notice in notices().entries.clone() {
                NoticeToast {
                    key: "{notice.id}",
                    notice: notice.clone(),
                    on_dismiss: move |id: u64| {
                        notices.write().entries.retain(|n| n.id != id);
                    },
                }
            }
        }
    }
}

#[component]
fn NoticeToast(notice: Notice, on_dismiss: EventHandler<u64>) -> Element {
    let class = match notice.level {
        NoticeLevel::Info => "notice notice-info",
        NoticeLevel::Success => "notice notice-success",
        NoticeLevel::Error => "notice notice-error",
    };
    let id = notice.id;

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| on_dismiss.call(id),
            div { class: "notice-title", "{notice.title}" }
            if !notice.message.is_empty() {
                div { class: "notice-message", "{notice.message}" }
            }
        }
    }
}
