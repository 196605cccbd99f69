//! Short-lived notices for garden list actions.

use std::time::Duration;

use dioxus::prelude::*;

use crate::util::format::format_currency;

const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(4);
const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast-info",
            Self::Success => "toast toast-success",
            Self::Warning => "toast toast-warning",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Info => "🧺",
            Self::Success => "🌱",
            Self::Warning => "⚠️",
        }
    }
}

/// Something that happened to the garden list and is worth telling the user.
#[derive(Clone, Debug, PartialEq)]
pub enum GardenNotice {
    Added { label: String, profit: f64 },
    AddRefused,
    Cleared { count: usize },
}

impl GardenNotice {
    pub fn kind(&self) -> ToastKind {
        match self {
            Self::Added { .. } => ToastKind::Success,
            Self::AddRefused => ToastKind::Warning,
            Self::Cleared { .. } => ToastKind::Info,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Self::Added { label, profit } => {
                format!("Added {label} ({}) to your garden.", format_currency(*profit))
            }
            Self::AddRefused => "Nothing to add: pick a valid crop and pet first.".to_string(),
            Self::Cleared { count: 1 } => "Removed 1 entry from your garden.".to_string(),
            Self::Cleared { count } => format!("Removed {count} entries from your garden."),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// The visible notices, oldest first. Pushing past the limit drops the oldest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, notice: &GardenNotice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        if self.entries.len() >= MAX_VISIBLE {
            self.entries.remove(0);
        }
        self.entries.push(ToastEntry {
            id,
            kind: notice.kind(),
            text: notice.text(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }
}

/// Shows `notice` and schedules its removal. Call from an event handler.
pub fn notify(mut queue: Signal<ToastQueue>, notice: GardenNotice) {
    let id = queue.with_mut(|q| q.push(&notice));
    spawn(async move {
        tokio::time::sleep(AUTO_DISMISS_AFTER).await;
        queue.with_mut(|q| q.dismiss(id));
    });
}

#[component]
pub fn Toast() -> Element {
    let mut queue = use_context::<Signal<ToastQueue>>();
    let entries = queue.with(|q| q.entries().to_vec());

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "toast-stack",
            ul {
                for entry in entries {
                    li {
                        key: "{entry.id}",
                        class: entry.kind.class(),
                        span { "{entry.kind.icon()}" }
                        p { "{entry.text}" }
                        button {
                            onclick: move |_| queue.with_mut(|q| q.dismiss(entry.id)),
                            "Dismiss"
                        }
                    }
                }
            }
        }
    }
}
