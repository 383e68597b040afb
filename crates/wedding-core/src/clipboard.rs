//! Copying gift details to the clipboard.
//!
//! The browser implementation lives in the UI crate; this module owns the
//! notification rules so they can be exercised without a browser.

use crate::{config::Messages, error::Result, notice::Toast};

/// Something text can be written to.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Result of a copy attempt and the toast to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(Toast),
    Failed(Toast),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }

    pub fn toast(&self) -> &Toast {
        match self {
            CopyOutcome::Copied(toast) | CopyOutcome::Failed(toast) => toast,
        }
    }

    pub fn into_toast(self) -> Toast {
        match self {
            CopyOutcome::Copied(toast) | CopyOutcome::Failed(toast) => toast,
        }
    }
}

/// Write `text` and describe the outcome with a toast naming `label`.
pub async fn copy_with_notice<C: Clipboard>(
    clipboard: &C,
    text: &str,
    label: &str,
    messages: &Messages,
) -> CopyOutcome {
    match clipboard.write_text(text).await {
        Ok(()) => CopyOutcome::Copied(
            Toast::success(messages.copy_success_title.clone())
                .with_description(messages.copied(label)),
        ),
        Err(err) => {
            log::warn!("clipboard write failed for {label}: {err}");
            CopyOutcome::Failed(Toast::destructive(messages.copy_failed_title.clone()))
        }
    }
}
