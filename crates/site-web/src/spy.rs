use crate::constants::{ACTIVE_CLASS, NAV_LINK_SELECTOR, SECTION_SELECTOR};
use site_core::SCROLLSPY_ROOT_MARGIN;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mirror the currently visible section onto matching nav links.
///
/// One observer over the middle 40% of the viewport; when several sections
/// report at once the last observed callback wins, which is acceptable for
/// a highlight affordance.
pub fn wire_scrollspy(document: &web::Document) {
    let sections = crate::dom::query_all(document, SECTION_SELECTOR);
    if sections.is_empty() {
        return;
    }

    let doc = document.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let Some(id) = entry.target().get_attribute("id") else {
                    continue;
                };
                highlight(&doc, &id);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(SCROLLSPY_ROOT_MARGIN);
    let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
    else {
        return;
    };
    callback.forget();
    for section in &sections {
        observer.observe(section);
    }
}

/// Mark every nav link targeting `id` active and clear the rest. Duplicate
/// links (desktop and mobile nav) all get marked.
fn highlight(document: &web::Document, id: &str) {
    let anchor = format!("#{id}");
    for link in crate::dom::query_all(document, NAV_LINK_SELECTOR) {
        if link.get_attribute("href").as_deref() == Some(anchor.as_str()) {
            let _ = link.class_list().add_1(ACTIVE_CLASS);
        } else {
            let _ = link.class_list().remove_1(ACTIVE_CLASS);
        }
    }
}
