//! Profile classification and keyframe endpoints for scroll-triggered
//! entrance/exit animations.
//!
//! The markup declares a profile as free text (`data-reveal="slide-left"`),
//! classified here against a closed keyword set so ambiguous strings resolve
//! deterministically instead of depending on substring order.

use crate::constants::{HORIZONTAL_OFFSET_PX, VERTICAL_OFFSET_PX, ZOOM_START_SCALE};

/// Entrance/exit animation profile for an annotated element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealKind {
    /// Vertical slide plus fade; the default for unknown declarations.
    #[default]
    SlideUp,
    /// Slides leftward into place, i.e. enters from a rightward offset.
    SlideLeft,
    /// Slides rightward into place, i.e. enters from a leftward offset.
    SlideRight,
    /// Scales up from slightly below full size.
    Zoom,
}

impl RevealKind {
    /// Keyword precedence is fixed (left, right, zoom) so declarations that
    /// happen to contain several keywords classify the same way every load.
    pub fn classify(attr: Option<&str>) -> Self {
        let Some(attr) = attr else {
            return Self::SlideUp;
        };
        let attr = attr.to_ascii_lowercase();
        if attr.contains("left") {
            Self::SlideLeft
        } else if attr.contains("right") {
            Self::SlideRight
        } else if attr.contains("zoom") {
            Self::Zoom
        } else {
            Self::SlideUp
        }
    }
}

/// Direction of travel at the moment a trigger fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

/// Resolves travel direction from successive scroll-position samples.
///
/// One scroll step can fire several triggers at once, and they all read
/// the same position; a repeated sample therefore reuses the previously
/// resolved direction instead of defaulting, so every trigger in the
/// batch sees the same direction.
#[derive(Clone, Copy, Debug)]
pub struct DirectionTracker {
    last_y: f64,
    direction: ScrollDirection,
}

impl DirectionTracker {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y,
            direction: ScrollDirection::Down,
        }
    }

    pub fn sample(&mut self, y: f64) -> ScrollDirection {
        if y < self.last_y {
            self.direction = ScrollDirection::Up;
        } else if y > self.last_y {
            self.direction = ScrollDirection::Down;
        }
        self.last_y = y;
        self.direction
    }
}

/// Off-screen endpoint of a reveal animation: translation in px plus scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTransform {
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
}

impl RevealTransform {
    pub const IDENTITY: Self = Self {
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
    };
}

/// Offset an element animates in from when it crosses into the active band.
///
/// The vertical profile mirrors with travel direction (scrolling down the
/// element rises into place, scrolling up it drops into place); horizontal
/// and zoom profiles keep a fixed origin.
pub fn entry_from(kind: RevealKind, direction: ScrollDirection) -> RevealTransform {
    match kind {
        RevealKind::SlideUp => {
            let dy = match direction {
                ScrollDirection::Down => VERTICAL_OFFSET_PX,
                ScrollDirection::Up => -VERTICAL_OFFSET_PX,
            };
            RevealTransform {
                dx: 0.0,
                dy,
                scale: 1.0,
            }
        }
        RevealKind::SlideLeft => RevealTransform {
            dx: HORIZONTAL_OFFSET_PX,
            dy: 0.0,
            scale: 1.0,
        },
        RevealKind::SlideRight => RevealTransform {
            dx: -HORIZONTAL_OFFSET_PX,
            dy: 0.0,
            scale: 1.0,
        },
        RevealKind::Zoom => RevealTransform {
            dx: 0.0,
            dy: 0.0,
            scale: ZOOM_START_SCALE,
        },
    }
}

/// Offset an element animates out to when it leaves the active band.
/// Vertically it leaves toward the edge it exits through; the other
/// profiles retreat to their entry endpoint.
pub fn exit_to(kind: RevealKind, direction: ScrollDirection) -> RevealTransform {
    match kind {
        RevealKind::SlideUp => {
            let dy = match direction {
                ScrollDirection::Down => -VERTICAL_OFFSET_PX,
                ScrollDirection::Up => VERTICAL_OFFSET_PX,
            };
            RevealTransform {
                dx: 0.0,
                dy,
                scale: 1.0,
            }
        }
        other => entry_from(other, direction),
    }
}

/// Declared start delay in milliseconds; missing or invalid input means no
/// delay. Negative values fail the unsigned parse and also fall back to 0.
pub fn parse_delay_ms(attr: Option<&str>) -> u32 {
    attr.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}

/// Per-element animation record. `visible` tracks the last trigger phase and
/// oscillates for as long as the user scrolls the element in and out.
#[derive(Clone, Copy, Debug)]
pub struct RevealState {
    pub kind: RevealKind,
    pub delay_ms: u32,
    pub visible: bool,
}

impl RevealState {
    /// Elements start hidden; the first qualifying intersection reveals them.
    pub fn new(kind: RevealKind, delay_ms: u32) -> Self {
        Self {
            kind,
            delay_ms,
            visible: false,
        }
    }
}
