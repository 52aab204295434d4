use crate::constants::AUTO_SCROLL_STEP;

/// Offset state for one infinitely-looping carousel strip.
///
/// The container holds two concatenated copies of the same item sequence
/// (a markup precondition), so folding the scroll position back by one
/// half-content-width is invisible and makes the strip appear endless.
#[derive(Clone, Copy, Debug, Default)]
pub struct CarouselState {
    /// Mirrors the container's horizontal scroll position.
    pub offset: f64,
    /// While true the auto-advance is paused.
    pub hovered: bool,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Per-frame step. Hover pauses the advance but the wraparound still
    /// runs so wheel-driven movement made while hovering is corrected.
    pub fn advance(&mut self, half: f64) {
        if !self.hovered {
            self.offset += AUTO_SCROLL_STEP;
        }
        self.wrap(half);
    }

    /// Vertical wheel travel remapped to horizontal travel, corrected
    /// before the next paint.
    pub fn apply_wheel(&mut self, delta: f64, half: f64) {
        self.offset += delta;
        self.wrap(half);
    }

    /// Fold `offset` back by one half-content-width, keeping it inside
    /// `[0, half)`. A single correction suffices: per-step deltas are
    /// small relative to the content width.
    pub fn wrap(&mut self, half: f64) {
        if self.offset >= half {
            self.offset -= half;
        } else if self.offset < 0.0 {
            self.offset += half;
        }
    }
}
