use std::sync::Mutex;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

/// Where the controller reports terminal outcomes. Fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Collects toasts for the current request so the page (or JSON reply) can
/// show them.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Mutex<Vec<Notification>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything queued so far.
    pub fn drain(&self) -> Vec<Notification> {
        let mut toasts = self.toasts.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *toasts)
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, notification: Notification) {
        self.toasts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}
