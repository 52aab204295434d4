use crate::constants::PROGRESS_BAR_ID;
use site_core::scroll_percent;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the `#scroll-progress` bar width in sync with the scrolled
/// fraction of the page. Runs once at setup, then on scroll and resize.
pub fn wire_progress(window: &web::Window, document: &web::Document) {
    let Some(bar) = document
        .get_element_by_id(PROGRESS_BAR_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };

    update(&root, &bar);
    {
        let root = root.clone();
        let bar = bar.clone();
        crate::dom::add_window_listener(window, "scroll", true, move || update(&root, &bar));
    }
    crate::dom::add_window_listener(window, "resize", true, move || update(&root, &bar));
}

fn update(root: &web::Element, bar: &web::HtmlElement) {
    let percent = scroll_percent(
        root.scroll_top() as f64,
        root.scroll_height() as f64,
        root.client_height() as f64,
    );
    let _ = bar.style().set_property("width", &format!("{percent}%"));
}
