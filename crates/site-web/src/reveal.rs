//! Directional entrance/exit animations for `[data-reveal]` elements.
//!
//! Each element gets its own IntersectionObserver over the active band
//! (15%..85% of the viewport) so the callback can capture that element's
//! state directly. Travel direction comes from a tracker shared by all
//! observers, which resolves `scrollY` deltas once and hands the same
//! direction to every trigger of a batch. Animations run through the Web
//! Animations API; the previous handle is cancelled whenever a new trigger
//! fires, so the last trigger always wins.

use crate::constants::{REVEAL_ATTR, REVEAL_DELAY_ATTR, REVEAL_SELECTOR};
use site_core::{
    entry_from, exit_to, parse_delay_ms, DirectionTracker, RevealKind, RevealState,
    RevealTransform, ScrollDirection, ENTER_DURATION_MS, ENTER_EASING, EXIT_DURATION_MS,
    EXIT_EASING, REVEAL_ROOT_MARGIN,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_reveals(window: &web::Window, document: &web::Document, reduced_motion: bool) {
    let elements = crate::dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }
    if reduced_motion || !supports_waapi(&elements[0]) {
        force_static(&elements);
        return;
    }

    // Shared across all observers so every trigger of one scroll step
    // resolves to the same travel direction.
    let tracker = Rc::new(RefCell::new(DirectionTracker::new(
        window.scroll_y().unwrap_or(0.0),
    )));

    for el in elements {
        observe_element(el, tracker.clone());
    }
}

/// Degrade to a static, fully rendered page: every annotated element ends
/// fully opaque with no transform and no engine calls are attempted.
fn force_static(elements: &[web::Element]) {
    for el in elements {
        if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
            let _ = el.style().set_property("opacity", "1");
            let _ = el.style().remove_property("transform");
        }
    }
}

fn supports_waapi(el: &web::Element) -> bool {
    js_sys::Reflect::has(el.as_ref(), &JsValue::from_str("animate")).unwrap_or(false)
}

fn observe_element(el: web::Element, tracker: Rc<RefCell<DirectionTracker>>) {
    let state = Rc::new(RefCell::new(RevealState::new(
        RevealKind::classify(el.get_attribute(REVEAL_ATTR).as_deref()),
        parse_delay_ms(el.get_attribute(REVEAL_DELAY_ATTR).as_deref()),
    )));
    // Start hidden. The observer reports the initial intersection state, so
    // elements already inside the band play their entrance right away.
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property("opacity", "0");
    }

    let current_animation: Rc<RefCell<Option<web::Animation>>> = Rc::new(RefCell::new(None));

    let target = el.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            let direction = sample_direction(&tracker);
            let len = entries.length();
            if len == 0 {
                return;
            }
            // One target per observer, so only the newest report matters.
            let Ok(entry) = entries
                .get(len - 1)
                .dyn_into::<web::IntersectionObserverEntry>()
            else {
                return;
            };
            let mut st = state.borrow_mut();
            if entry.is_intersecting() == st.visible {
                // No phase change; also swallows the initial report for
                // elements that start outside the band.
                return;
            }
            st.visible = entry.is_intersecting();

            if let Some(previous) = current_animation.borrow_mut().take() {
                previous.cancel();
            }
            let animation = if st.visible {
                play_entrance(&target, st.kind, st.delay_ms, direction)
            } else {
                play_exit(&target, st.kind, direction)
            };
            *current_animation.borrow_mut() = Some(animation);
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
    else {
        return;
    };
    callback.forget();
    observer.observe(&el);
}

fn sample_direction(tracker: &RefCell<DirectionTracker>) -> ScrollDirection {
    let y = web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    tracker.borrow_mut().sample(y)
}

fn play_entrance(
    el: &web::Element,
    kind: RevealKind,
    delay_ms: u32,
    direction: ScrollDirection,
) -> web::Animation {
    let from = entry_from(kind, direction);
    let frames = keyframes(&from, 0.0, &RevealTransform::IDENTITY, 1.0);
    let opts = animation_options(ENTER_DURATION_MS, ENTER_EASING, delay_ms as f64);
    el.animate_with_keyframe_animation_options(Some(&frames), &opts)
}

fn play_exit(el: &web::Element, kind: RevealKind, direction: ScrollDirection) -> web::Animation {
    let to = exit_to(kind, direction);
    let frames = keyframes(&RevealTransform::IDENTITY, 1.0, &to, 0.0);
    let opts = animation_options(EXIT_DURATION_MS, EXIT_EASING, 0.0);
    el.animate_with_keyframe_animation_options(Some(&frames), &opts)
}

fn animation_options(
    duration_ms: f64,
    easing: &str,
    delay_ms: f64,
) -> web::KeyframeAnimationOptions {
    let opts = web::KeyframeAnimationOptions::new();
    opts.set_duration(&JsValue::from_f64(duration_ms));
    opts.set_easing(easing);
    opts.set_delay(delay_ms);
    // Hold the endpoint state outside the animation's active interval.
    opts.set_fill(web::FillMode::Both);
    opts
}

fn keyframes(
    from: &RevealTransform,
    from_opacity: f64,
    to: &RevealTransform,
    to_opacity: f64,
) -> js_sys::Object {
    let frames = js_sys::Array::new();
    frames.push(&keyframe(from, from_opacity));
    frames.push(&keyframe(to, to_opacity));
    frames.unchecked_into()
}

fn keyframe(t: &RevealTransform, opacity: f64) -> JsValue {
    let frame = js_sys::Object::new();
    let transform = format!("translate({:.1}px, {:.1}px) scale({:.3})", t.dx, t.dy, t.scale);
    let _ = js_sys::Reflect::set(&frame, &"transform".into(), &transform.into());
    let _ = js_sys::Reflect::set(&frame, &"opacity".into(), &opacity.into());
    frame.into()
}
