//! Toast notifications.
//!
//! [`Toasts`] owns the list of visible toasts and the id counter. The UI side
//! lives in [`crate::components::toast`], which schedules removal once a toast's
//! duration has elapsed.

use crate::palette::TextColor;

/// Default time in milliseconds before a toast auto-dismisses.
pub const DEFAULT_DURATION_MS: u32 = 2000;
pub const DEFAULT_BACKGROUND: &str = "#2c3e50";

/// Unique, never reused identifier of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
#[display("toast-{_0}")]
pub struct ToastId(u32);

#[derive(Clone, Debug, PartialEq)]
pub struct ToastOptions {
    pub duration_ms: u32,
    /// Any CSS color.
    pub background_color: String,
    pub text_color: TextColor,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            background_color: DEFAULT_BACKGROUND.to_string(),
            text_color: TextColor::White,
        }
    }
}

impl ToastOptions {
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_colors(mut self, background_color: impl Into<String>, text_color: TextColor) -> Self {
        self.background_color = background_color.into();
        self.text_color = text_color;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub options: ToastOptions,
}

#[derive(Debug, Default)]
pub struct Toasts {
    active: Vec<Toast>,
    last_id: u32,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.last_id = self.last_id.wrapping_add(1);
        let id = ToastId(self.last_id);
        self.active.push(Toast {
            id,
            message: message.into(),
            options,
        });
        id
    }

    /// Returns false if the toast was already gone.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.active.len();
        self.active.retain(|toast| toast.id != id);
        self.active.len() != before
    }

    pub fn clear_all(&mut self) {
        self.active.clear();
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.active.iter().find(|toast| toast.id == id)
    }

    /// Visible toasts, oldest first.
    pub fn active(&self) -> &[Toast] {
        &self.active
    }
}
