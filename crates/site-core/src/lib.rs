pub mod carousel;
pub mod constants;
pub mod reveal;
pub mod scroll;

pub use carousel::*;
pub use constants::*;
pub use reveal::*;
pub use scroll::*;
