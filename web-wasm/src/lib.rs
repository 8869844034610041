//! Moving Sale Web App (Leptos + WASM)

mod app;
mod components;
mod dom;
mod loader;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
    // ページ骨格のマウント後に一覧を読み込む
    wasm_bindgen_futures::spawn_local(loader::load_items());
}
