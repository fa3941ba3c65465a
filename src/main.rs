//! Chocotejas Storefront Entry Point

mod app;
mod context;
mod store;
mod sections;
mod components;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("[MAIN] Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
