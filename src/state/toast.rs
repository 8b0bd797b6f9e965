//! Transient user notifications.
//!
//! The queue itself is plain state; [`ToastBus`] wraps the single instance
//! in a signal and is handed to producers and the one consuming container
//! through context.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Default time a toast stays visible, in milliseconds.
pub const DEFAULT_TOAST_MS: u64 = 4000;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

/// Opaque handle identifying a published toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// One transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub text: String,
    pub level: ToastLevel,
    pub duration_ms: u64,
}

/// The toast queue: entries in publish order plus the id allocator.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    entries: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast. Publishing with no consumer attached is legal; the
    /// entry simply expires unseen.
    pub fn publish(
        &mut self,
        text: impl Into<String>,
        level: ToastLevel,
        duration_ms: u64,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            text: text.into(),
            level,
            duration_ms,
        });
        id
    }

    /// Remove a toast. Unknown ids are a no-op, since expiry can race a
    /// manual dismissal.
    pub fn dismiss(&mut self, id: ToastId) {
        self.entries.retain(|t| t.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

/// Process-wide toast channel.
///
/// Created once at startup, lives as long as the app, needs no teardown.
#[derive(Clone, Copy)]
pub struct ToastBus {
    state: RwSignal<ToastState>,
}

impl ToastBus {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ToastState::default()),
        }
    }

    pub fn publish(&self, text: impl Into<String>, level: ToastLevel, duration_ms: u64) {
        let text = text.into();
        self.state.update(|s| {
            s.publish(text, level, duration_ms);
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.publish(text, ToastLevel::Success, DEFAULT_TOAST_MS);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.publish(text, ToastLevel::Error, DEFAULT_TOAST_MS);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.publish(text, ToastLevel::Info, DEFAULT_TOAST_MS);
    }

    pub fn dismiss(&self, id: ToastId) {
        self.state.update(|s| s.dismiss(id));
    }

    /// Reactive snapshot of the queue, in publish order.
    pub fn entries(&self) -> Vec<Toast> {
        self.state.with(|s| s.entries.clone())
    }
}

impl Default for ToastBus {
    fn default() -> Self {
        Self::new()
    }
}
