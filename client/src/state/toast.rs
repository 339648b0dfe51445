//! Notification queue backing the toaster.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Toasts kept on screen at once; the oldest are dropped first.
pub const TOAST_LIMIT: usize = 3;

/// Auto-dismiss delay in the browser.
pub const TOAST_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Assigned by [`ToastState::push`].
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: 0, title: title.into(), description: description.into(), variant: ToastVariant::Default }
    }

    #[must_use]
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: 0, title: title.into(), description: description.into(), variant: ToastVariant::Destructive }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, mut toast: Toast) -> u64 {
        self.next_id += 1;
        toast.id = self.next_id;
        self.items.push(toast);
        if self.items.len() > TOAST_LIMIT {
            let overflow = self.items.len() - TOAST_LIMIT;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
