pub mod app;
pub mod color_api;
pub mod components;
pub mod palette;
pub mod toast;
pub mod util;

/// Endpoint of the color-naming service.
pub const COLOR_API_URL: &str = "https://www.thecolorapi.com/id";

/// Degrees between two sampled hues. 10° gives 36 lookups per palette.
pub const HUE_STEP: u16 = 10;

pub const DEFAULT_SATURATION: u8 = 75;
pub const DEFAULT_LIGHTNESS: u8 = 60;

/// Quiet period after the last slider movement before a palette is fetched.
pub const DEBOUNCE_MS: u32 = 500;
