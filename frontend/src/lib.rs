pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod utils;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Frontend starting");

    leptos::mount_to_body(app::App);
}
