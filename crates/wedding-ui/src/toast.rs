//! Toast notifications shared by the RSVP and gift sections.

use std::time::Duration;

use leptos::prelude::*;
use wedding_core::{Toast, ToastId, Toasts};

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Reactive handle to the page's toasts, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct ToastHub {
    toasts: RwSignal<Toasts>,
}

impl ToastHub {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Toasts::default()),
        }
    }

    /// Show `toast` and schedule its removal.
    pub fn notify(&self, toast: Toast) {
        log::debug!("toast: {}", toast.title);
        if let Some(id) = self.toasts.try_update(|toasts| toasts.push(toast)) {
            let hub = *self;
            set_timeout(move || hub.dismiss(id), TOAST_LIFETIME);
        }
    }

    pub fn dismiss(&self, id: ToastId) {
        self.toasts.update(|toasts| toasts.dismiss(id));
    }

    fn snapshot(&self) -> Vec<(ToastId, Toast)> {
        self.toasts.with(|toasts| toasts.iter().cloned().collect())
    }
}

impl Default for ToastHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a hub and make it available to descendants.
pub fn provide_toasts() -> ToastHub {
    let hub = ToastHub::new();
    provide_context(hub);
    hub
}

/// The hub provided by an ancestor.
pub fn use_toasts() -> ToastHub {
    expect_context::<ToastHub>()
}

/// Fixed stack of toasts in the bottom corner.
#[component]
pub fn ToastViewport() -> impl IntoView {
    let hub = use_toasts();

    view! {
      <div class="toast-viewport" role="status" aria-live="polite">
        <For
          each=move || hub.snapshot()
          key=|(id, _)| *id
          children=move |(id, toast)| {
            let class = if toast.is_destructive() { "toast toast-destructive" } else { "toast" };
            view! {
              <div class=class on:click=move |_| hub.dismiss(id)>
                <p class="toast-title">{toast.title.clone()}</p>
                {toast.description.clone().map(|d| view! { <p class="toast-description">{d}</p> })}
              </div>
            }
          }
        />
      </div>
    }
}
