//! Transient notifications.

use serde::{Deserialize, Serialize};

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A short message shown in the corner of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub variant: ToastVariant,
}

impl Toast {
    /// A neutral toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: ToastVariant::Default,
        }
    }

    /// A toast reporting a failure.
    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: ToastVariant::Destructive,
        }
    }

    /// Add a second line.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Handle used to dismiss a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    next_id: u64,
    items: Vec<(ToastId, Toast)>,
}

impl Toasts {
    /// Show a toast.
    pub fn push(&mut self, toast: Toast) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.items.push((id, toast));
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ToastId, Toast)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
