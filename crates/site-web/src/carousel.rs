//! Infinite-looking project carousel: auto-scroll, wheel remap, hover pause.
//!
//! The strip's markup holds two concatenated copies of the item sequence;
//! the core state folds the scroll position back by one half-width so the
//! loop never shows an edge. No defense against missing duplication or a
//! zero-width strip: the carousel is a visual enhancement, not load-bearing.

use crate::constants::CAROUSEL_SELECTOR;
use site_core::CarouselState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_carousels(document: &web::Document) {
    for strip in crate::dom::query_all(document, CAROUSEL_SELECTOR) {
        wire_strip(strip);
    }
}

fn wire_strip(strip: web::Element) {
    let state = Rc::new(RefCell::new(CarouselState::new()));

    // Hover pauses the auto-advance.
    for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move || {
            state.borrow_mut().set_hovered(hovered);
        }) as Box<dyn FnMut()>);
        let _ = strip.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Vertical wheel travel becomes horizontal strip travel. Needs a
    // non-passive listener to suppress the page scroll.
    {
        let state = state.clone();
        let strip_wheel = strip.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ev.prevent_default();
            let half = strip_wheel.scroll_width() as f64 / 2.0;
            let mut st = state.borrow_mut();
            st.apply_wheel(ev.delta_y(), half);
            strip_wheel.set_scroll_left(st.offset as i32);
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        let _ = strip.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }

    // Frame loop for the lifetime of the page. `half` is re-read every tick
    // so late image loads and resizes are picked up.
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let half = strip.scroll_width() as f64 / 2.0;
        {
            let mut st = state.borrow_mut();
            st.advance(half);
            strip.set_scroll_left(st.offset as i32);
        }
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
