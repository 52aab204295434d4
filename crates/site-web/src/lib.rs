#![cfg(target_arch = "wasm32")]
//! Browser entry point: wires every page controller once at load.
//!
//! Each controller owns its private state and subscribes to its own event
//! source (scroll, wheel, hover, intersection, animation frame); nothing is
//! shared across controllers beyond read-only viewport queries. Every
//! feature no-ops when its markup hooks are missing so the page stays
//! usable as plain HTML.

mod carousel;
mod constants;
mod dom;
mod menu;
mod parallax;
mod progress;
mod reveal;
mod spy;

use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduced_motion = dom::prefers_reduced_motion(&window);
    if reduced_motion {
        log::info!("reduced motion requested; scroll animations disabled");
    }

    menu::wire_menu_toggle(&document);
    menu::wire_hash_deep_link(&window, &document);
    progress::wire_progress(&window, &document);
    parallax::wire_parallax(&window, &document, reduced_motion);
    reveal::wire_reveals(&window, &document, reduced_motion);
    spy::wire_scrollspy(&document);
    carousel::wire_carousels(&document);
    Ok(())
}
