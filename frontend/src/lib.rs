use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install the logger and panic hook, then mount the app.
#[wasm_bindgen(start)]
pub fn main() {
    // initializes logging using the `log` crate
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    mount_to_body(App);
}
