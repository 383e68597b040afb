//! Browser tests for the UI components.
//!
//! Run with `wasm-pack test --headless --firefox crates/wedding-ui`.

#![cfg(target_arch = "wasm32")]

use chrono::{Duration, Utc};
use leptos::{mount::mount_to, prelude::*};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use wedding_core::{Clipboard, Config, Messages, Wish, copy_with_notice};
use wedding_ui::{BrowserClipboard, CoverSection, WishesSection};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document")
}

fn mount_point() -> web_sys::HtmlElement {
    let container = document().create_element("div").expect("div");
    document()
        .body()
        .expect("body")
        .append_child(&container)
        .expect("append");
    container.unchecked_into()
}

#[wasm_bindgen_test]
fn wishes_render_in_given_order() {
    let config = Config::embedded().expect("embedded config");
    let mut wishes = vec![Wish::new("Dewi", "Bahagia selalu")];
    wishes.extend(config.wishes.clone());
    let expected = wishes.len();

    let container = mount_point();

    let _handle = mount_to(container.clone(), move || {
        view! { <WishesSection wishes=Signal::derive(move || wishes.clone()) /> }
    });

    let names = container
        .query_selector_all(".wish-name")
        .expect("query");
    assert_eq!(names.length() as usize, expected);
    let first = names
        .item(0)
        .and_then(|n| n.text_content())
        .unwrap_or_default();
    assert!(first.contains("Dewi"));
}

#[wasm_bindgen_test]
fn wishes_empty_state() {
    let container = mount_point();

    let _handle = mount_to(container.clone(), || {
        view! { <WishesSection wishes=Signal::derive(Vec::new) /> }
    });

    assert!(container.query_selector(".wishes-empty").expect("query").is_some());
}

/// Resolve after `ms` milliseconds of browser time.
async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("timeout");
    });
    JsFuture::from(promise).await.expect("sleep");
}

fn countdown_text(container: &web_sys::HtmlElement) -> String {
    let values = container
        .query_selector_all(".countdown-value")
        .expect("query");
    (0..values.length())
        .filter_map(|i| values.item(i).and_then(|n| n.text_content()))
        .collect::<Vec<_>>()
        .join(":")
}

#[wasm_bindgen_test]
async fn countdown_ticks_while_mounted_and_stops_after_unmount() {
    let mut config = Config::embedded().expect("embedded config");
    config.wedding.countdown_target = (Utc::now() + Duration::days(1)).fixed_offset();

    let container = mount_point();
    let handle = mount_to(container.clone(), move || {
        view! {
          <CoverSection
            publication=config.site.publication.clone()
            couple=config.couple.clone()
            wedding=config.wedding.clone()
            on_open=Callback::new(|_: ()| {})
          />
        }
    });

    let first = countdown_text(&container);
    assert!(!first.is_empty());
    sleep(1500).await;
    let second = countdown_text(&container);
    assert_ne!(first, second);

    let seconds = container
        .query_selector_all(".countdown-value")
        .expect("query")
        .item(3)
        .expect("seconds node");
    drop(handle);
    let frozen = seconds.text_content();

    sleep(1500).await;
    assert!(container.query_selector(".countdown-value").expect("query").is_none());
    assert_eq!(seconds.text_content(), frozen);
}

/// Replace `navigator.clipboard` for the duration of a test.
fn install_clipboard(clipboard: &JsValue) {
    let navigator = web_sys::window().expect("window").navigator();
    let descriptor = js_sys::Object::new();
    js_sys::Reflect::set(&descriptor, &JsValue::from_str("value"), clipboard).expect("value");
    js_sys::Reflect::set(&descriptor, &JsValue::from_str("configurable"), &JsValue::TRUE)
        .expect("configurable");
    js_sys::Reflect::define_property(&navigator, &JsValue::from_str("clipboard"), &descriptor)
        .expect("define clipboard");
}

fn restore_clipboard() {
    let navigator = web_sys::window().expect("window").navigator();
    js_sys::Reflect::delete_property(&navigator, &JsValue::from_str("clipboard"))
        .expect("restore clipboard");
}

fn fake_clipboard(body: &str) -> js_sys::Object {
    let clipboard = js_sys::Object::new();
    let write_text = js_sys::Function::new_with_args("text", body);
    js_sys::Reflect::set(&clipboard, &JsValue::from_str("writeText"), &write_text)
        .expect("writeText");
    clipboard
}

#[wasm_bindgen_test]
async fn clipboard_copy_success_toasts() {
    let clipboard = fake_clipboard("this.last = text; return Promise.resolve();");
    install_clipboard(&clipboard);

    let messages = Messages::default();
    let outcome = copy_with_notice(&BrowserClipboard, "1234-5678-9012", "Nomor rekening", &messages).await;
    let written = js_sys::Reflect::get(&clipboard, &JsValue::from_str("last"))
        .expect("last")
        .as_string();
    restore_clipboard();

    assert!(outcome.is_copied());
    assert!(!outcome.toast().is_destructive());
    assert_eq!(written.as_deref(), Some("1234-5678-9012"));
}

#[wasm_bindgen_test]
async fn clipboard_rejection_toasts_failure() {
    install_clipboard(&fake_clipboard("return Promise.reject(new Error('denied'));"));
    let result = BrowserClipboard.write_text("1234").await;
    let outcome = copy_with_notice(&BrowserClipboard, "1234", "Alamat", &Messages::default()).await;
    restore_clipboard();

    let err = result.expect_err("rejected write");
    assert_eq!(err.to_string(), "Clipboard error: denied");
    assert!(!outcome.is_copied());
    assert!(outcome.toast().is_destructive());
}

#[wasm_bindgen_test]
async fn missing_clipboard_is_a_failure() {
    install_clipboard(&JsValue::UNDEFINED);
    let result = BrowserClipboard.write_text("1234").await;
    restore_clipboard();

    assert!(result.is_err());
}
