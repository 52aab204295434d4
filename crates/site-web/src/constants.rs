// DOM hooks the page markup provides.

pub const PROGRESS_BAR_ID: &str = "scroll-progress";

pub const MENU_PANEL_SELECTOR: &str = ".menu-links";
pub const MENU_ICON_SELECTOR: &str = ".hamburger-icon";
pub const OPEN_CLASS: &str = "open";

pub const PARALLAX_SELECTOR: &str = "[data-speed]";
pub const SPEED_ATTR: &str = "data-speed";

pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_ATTR: &str = "data-reveal";
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";

pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = "nav a[href^='#']";
pub const ACTIVE_CLASS: &str = "active";

pub const CAROUSEL_SELECTOR: &str = ".carousel";
