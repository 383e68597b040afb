//! Scroll-triggered fade-in.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, prelude::*};

/// Fades its children in the first time they scroll into view.
///
/// Falls back to showing the content immediately when the browser has no
/// `IntersectionObserver`.
#[component]
pub fn Reveal(
    /// Extra classes for the wrapper.
    #[prop(into, optional)]
    class: String,
    /// Fraction of the element that must be visible.
    #[prop(default = 0.1)]
    threshold: f64,
    /// Transition delay in milliseconds, used to stagger lists.
    #[prop(default = 0)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let visible = RwSignal::new(false);

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        visible.set(true);
                        // Trigger once
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer.observe(&element),
            Err(err) => {
                log::warn!("IntersectionObserver unavailable: {err:?}");
                visible.set(true);
            }
        }

        // Leak the closure to keep it alive
        callback.forget();
    });

    view! {
      <div
        node_ref=node_ref
        class=format!("reveal {class}")
        class:revealed=move || visible.get()
        style=format!("transition-delay: {delay_ms}ms")
      >
        {children()}
      </div>
    }
}

/// Stagger delay for the `index`-th item of a list.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0, 100), 0);
        assert_eq!(stagger(3, 150), 450);
        assert_eq!(stagger(usize::MAX, 100), u32::MAX);
    }
}
