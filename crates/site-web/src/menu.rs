use crate::constants::{MENU_ICON_SELECTOR, MENU_PANEL_SELECTOR, OPEN_CLASS};
use site_core::HASH_SCROLL_DELAY_MS;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Flip the `open` class on the menu panel and the hamburger icon together.
pub fn toggle_menu(document: &web::Document) {
    for selector in [MENU_PANEL_SELECTOR, MENU_ICON_SELECTOR] {
        if let Ok(Some(el)) = document.query_selector(selector) {
            let _ = el.class_list().toggle(OPEN_CLASS);
        }
    }
}

pub fn wire_menu_toggle(document: &web::Document) {
    let doc = document.clone();
    crate::dom::add_click_listener(document, MENU_ICON_SELECTOR, move || toggle_menu(&doc));
}

/// Smooth-scroll to the element named by the URL fragment, after a short
/// delay so layout has settled.
pub fn wire_hash_deep_link(window: &web::Window, document: &web::Document) {
    let Ok(hash) = window.location().hash() else {
        return;
    };
    let id = hash.trim_start_matches('#');
    if id.is_empty() {
        return;
    }
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };

    let closure = Closure::once_into_js(move || {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        HASH_SCROLL_DELAY_MS,
    );
}
