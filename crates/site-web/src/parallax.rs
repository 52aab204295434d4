use crate::constants::{PARALLAX_SELECTOR, SPEED_ATTR};
use site_core::{parallax_offset, parse_speed};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Translate every `[data-speed]` element proportionally to its distance
/// from the viewport center. Skipped entirely under reduced motion.
pub fn wire_parallax(window: &web::Window, document: &web::Document, reduced_motion: bool) {
    if reduced_motion {
        return;
    }
    let Some(root) = document.document_element() else {
        return;
    };
    let elements: Rc<Vec<(web::HtmlElement, f64)>> = Rc::new(
        crate::dom::query_all(document, PARALLAX_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let speed = parse_speed(el.get_attribute(SPEED_ATTR).as_deref());
                el.dyn_into::<web::HtmlElement>().ok().map(|el| (el, speed))
            })
            .collect(),
    );
    if elements.is_empty() {
        return;
    }

    update(&root, &elements);

    // Scroll events arrive much faster than frames; the in-flight flag
    // folds each burst into at most one update per frame.
    let ticking = Rc::new(Cell::new(false));
    {
        let root = root.clone();
        let elements = elements.clone();
        crate::dom::add_window_listener(window, "scroll", true, move || {
            if ticking.get() {
                return;
            }
            ticking.set(true);
            let root = root.clone();
            let elements = elements.clone();
            let ticking = ticking.clone();
            let frame = Closure::once_into_js(move || {
                update(&root, &elements);
                ticking.set(false);
            });
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(frame.unchecked_ref());
            }
        });
    }
    crate::dom::add_window_listener(window, "resize", true, move || update(&root, &elements));
}

fn update(root: &web::Element, elements: &[(web::HtmlElement, f64)]) {
    let viewport_h = root.client_height() as f64;
    for (el, speed) in elements {
        let rect = el.get_bounding_client_rect();
        let center = rect.top() + rect.height() / 2.0;
        let offset = parallax_offset(center, viewport_h, *speed);
        let _ = el
            .style()
            .set_property("transform", &format!("translateY({offset:.2}px)"));
    }
}
