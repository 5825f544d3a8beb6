//! Palette domain: swatches, classification, analytics and the fetch pipeline.

pub mod analytics;
pub mod cache;
pub mod classify;
pub mod fetch;

pub use analytics::{FamilyDistribution, PaletteInsights, css_variables, palette_json};
pub use cache::{CacheKey, PaletteCache};
pub use classify::{ColorFamily, TextColor, categorize_family, is_light_background, is_warm};
pub use fetch::{PaletteEvent, PaletteState, fetch_palette};

use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// CSS functional notation, also used for clipboard and JSON export.
impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A single named color returned by the naming service.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSwatch {
    pub name: String,
    pub rgb: Rgb,
    /// Hue in degrees as reported by the service.
    pub hue: f64,
}

impl ColorSwatch {
    pub fn new(name: impl Into<String>, rgb: Rgb, hue: f64) -> Self {
        Self {
            name: name.into(),
            rgb,
            hue,
        }
    }

    pub fn family(&self) -> ColorFamily {
        categorize_family(self.hue)
    }

    pub fn is_warm(&self) -> bool {
        is_warm(self.hue)
    }

    pub fn text_color(&self) -> TextColor {
        TextColor::for_background(self.rgb)
    }
}
