// Shared tuning constants used by the web frontend.

// Carousel
pub const AUTO_SCROLL_STEP: f64 = 1.0; // px advanced per animation frame

// Reveal animations
pub const ENTER_DURATION_MS: f64 = 700.0;
pub const EXIT_DURATION_MS: f64 = 500.0;
pub const ENTER_EASING: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)"; // decelerates into rest
pub const EXIT_EASING: &str = "cubic-bezier(0.55, 0.055, 0.675, 0.19)"; // accelerates out of rest

// Off-state offsets for the reveal profiles
pub const VERTICAL_OFFSET_PX: f64 = 40.0;
pub const HORIZONTAL_OFFSET_PX: f64 = 60.0;
pub const ZOOM_START_SCALE: f64 = 0.9;

// Elements trigger while inside the 15%..85% band of the viewport
pub const REVEAL_ROOT_MARGIN: &str = "-15% 0px -15% 0px";
// Scrollspy watches the middle 40% of the viewport
pub const SCROLLSPY_ROOT_MARGIN: &str = "-30% 0px -30% 0px";

// Parallax
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.06;

// Deep link: wait for layout to settle before scrolling to the fragment
pub const HASH_SCROLL_DELAY_MS: i32 = 100;
