//! Browser clipboard access.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wedding_core::{Clipboard, Result, WeddingError};

/// `navigator.clipboard`, looked up at call time.
///
/// Browsers only expose it in secure contexts, so its absence is reported as
/// an ordinary copy failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| WeddingError::clipboard("no window"))?;
        let navigator = window.navigator();

        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(js_error)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(WeddingError::clipboard("clipboard API unavailable"));
        }

        let write_text: js_sys::Function =
            js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
                .map_err(js_error)?
                .dyn_into()
                .map_err(js_error)?;

        let promise: js_sys::Promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        JsFuture::from(promise).await.map_err(js_error)?;
        Ok(())
    }
}

fn js_error(value: JsValue) -> WeddingError {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"));
    WeddingError::clipboard(message)
}
