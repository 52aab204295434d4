use crate::constants::DEFAULT_PARALLAX_SPEED;

/// Scrolled fraction of the document as a percentage in `[0, 100]`.
/// A document no taller than the viewport reports 0.
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let track = scroll_height - client_height;
    if track <= 0.0 {
        return 0.0;
    }
    (scroll_top / track * 100.0).clamp(0.0, 100.0)
}

/// Vertical parallax translation: proportional to the element's distance
/// from the viewport center, against the direction of travel.
pub fn parallax_offset(element_center_y: f64, viewport_height: f64, speed: f64) -> f64 {
    -(element_center_y - viewport_height / 2.0) * speed
}

/// `data-speed` factor; falls back to the stock speed on anything
/// unparsable or non-finite.
pub fn parse_speed(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}
