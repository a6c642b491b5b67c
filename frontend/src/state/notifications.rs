use leptos::*;
use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn default_duration_ms(self) -> u32 {
        match self {
            NotificationKind::Success => 5_000,
            NotificationKind::Warning => 6_000,
            NotificationKind::Error => 9_000,
        }
    }

    pub fn as_class(self) -> &'static str {
        match self {
            NotificationKind::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            NotificationKind::Warning => {
                "bg-status-warning-bg border-status-warning-border text-status-warning-text"
            }
            NotificationKind::Error => {
                "bg-status-error-bg border-status-error-border text-status-error-text"
            }
        }
    }
}

/// A transient message shown in the toast region until `duration_ms` passes
/// or the user closes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub duration_ms: u32,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            kind,
            title: title.into(),
            description: description.into(),
            duration_ms: kind.default_duration_ms(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, description)
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

thread_local! {
    static NEXT_ID: Cell<u64> = const { Cell::new(1) };
}

fn next_id() -> u64 {
    NEXT_ID.with(|id| {
        let current = id.get();
        id.set(current + 1);
        current
    })
}

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    items: RwSignal<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
        }
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }

    pub fn push(&self, mut notification: Notification) -> u64 {
        notification.id = next_id();
        match notification.kind {
            NotificationKind::Success => {
                log::info!("{}: {}", notification.title, notification.description)
            }
            NotificationKind::Warning => {
                log::warn!("{}: {}", notification.title, notification.description)
            }
            NotificationKind::Error => {
                log::error!("{}: {}", notification.title, notification.description)
            }
        }
        let id = notification.id;
        let duration = notification.duration_ms;
        self.items.update(|items| items.push(notification));
        self.schedule_dismiss(id, duration);
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64, duration_ms: u32) {
        let center = *self;
        gloo_timers::callback::Timeout::new(duration_ms, move || center.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64, _duration_ms: u32) {}
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}

pub fn provide_notifications() -> NotificationCenter {
    let center = NotificationCenter::new();
    provide_context(center);
    center
}

pub fn use_notifications() -> NotificationCenter {
    match use_context::<NotificationCenter>() {
        Some(center) => center,
        None => provide_notifications(),
    }
}
