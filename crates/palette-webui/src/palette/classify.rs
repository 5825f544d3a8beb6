//! Pure hue and brightness classification.

use super::Rgb;

/// Coarse hue bucket. Declaration order is the enumeration order used for
/// tie-breaking in analytics.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ColorFamily {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Magenta,
}

impl ColorFamily {
    /// Capitalized form shown to the user.
    pub fn display_name(&self) -> &'static str {
        match self {
            ColorFamily::Red => "Red",
            ColorFamily::Orange => "Orange",
            ColorFamily::Yellow => "Yellow",
            ColorFamily::Green => "Green",
            ColorFamily::Cyan => "Cyan",
            ColorFamily::Blue => "Blue",
            ColorFamily::Purple => "Purple",
            ColorFamily::Magenta => "Magenta",
        }
    }
}

/// Maps any real number into `[0, 360)`.
fn normalize_hue(hue: f64) -> f64 {
    ((hue % 360.0) + 360.0) % 360.0
}

pub fn categorize_family(hue: f64) -> ColorFamily {
    let hue = normalize_hue(hue);
    if (0.0..30.0).contains(&hue) {
        ColorFamily::Red
    } else if (30.0..60.0).contains(&hue) {
        ColorFamily::Orange
    } else if (60.0..90.0).contains(&hue) {
        ColorFamily::Yellow
    } else if (90.0..150.0).contains(&hue) {
        ColorFamily::Green
    } else if (150.0..210.0).contains(&hue) {
        ColorFamily::Cyan
    } else if (210.0..270.0).contains(&hue) {
        ColorFamily::Blue
    } else if (270.0..330.0).contains(&hue) {
        ColorFamily::Purple
    } else {
        ColorFamily::Magenta
    }
}

/// Reds, oranges and yellows: `[330, 360)` or `[0, 90)`.
pub fn is_warm(hue: f64) -> bool {
    let hue = normalize_hue(hue);
    (330.0..360.0).contains(&hue) || (0.0..90.0).contains(&hue)
}

/// Perceived brightness scaled by 1000, `r*299 + g*587 + b*114`.
fn brightness_millis(rgb: Rgb) -> u32 {
    u32::from(rgb.r) * 299 + u32::from(rgb.g) * 587 + u32::from(rgb.b) * 114
}

/// True when brightness is strictly above 128, i.e. dark text reads better.
pub fn is_light_background(rgb: Rgb) -> bool {
    brightness_millis(rgb) > 128_000
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TextColor {
    #[default]
    White,
    Black,
}

impl TextColor {
    pub fn for_background(rgb: Rgb) -> Self {
        if is_light_background(rgb) {
            TextColor::Black
        } else {
            TextColor::White
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator as _;

    #[rstest]
    #[case(0.0, ColorFamily::Red)]
    #[case(29.999, ColorFamily::Red)]
    #[case(30.0, ColorFamily::Orange)]
    #[case(59.999, ColorFamily::Orange)]
    #[case(60.0, ColorFamily::Yellow)]
    #[case(90.0, ColorFamily::Green)]
    #[case(150.0, ColorFamily::Cyan)]
    #[case(210.0, ColorFamily::Blue)]
    #[case(270.0, ColorFamily::Purple)]
    #[case(330.0, ColorFamily::Magenta)]
    #[case(359.999, ColorFamily::Magenta)]
    #[case(360.0, ColorFamily::Red)]
    #[case(-10.0, ColorFamily::Magenta)]
    #[case(725.0, ColorFamily::Red)]
    fn family_boundaries(#[case] hue: f64, #[case] expected: ColorFamily) {
        assert_eq!(expected, categorize_family(hue));
    }

    #[test]
    fn nan_hue_falls_through_to_magenta() {
        assert_eq!(ColorFamily::Magenta, categorize_family(f64::NAN));
        assert!(!is_warm(f64::NAN));
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(45.0, true)]
    #[case(89.999, true)]
    #[case(90.0, false)]
    #[case(240.0, false)]
    #[case(329.999, false)]
    #[case(330.0, true)]
    #[case(-20.0, true)]
    fn warm_boundaries(#[case] hue: f64, #[case] expected: bool) {
        assert_eq!(expected, is_warm(hue));
    }

    #[test]
    fn family_names() {
        let names: Vec<String> = ColorFamily::iter().map(|f| f.to_string()).collect();
        assert_eq!(
            vec![
                "red", "orange", "yellow", "green", "cyan", "blue", "purple", "magenta"
            ],
            names
        );
        assert_eq!("Magenta", ColorFamily::Magenta.display_name());
        let as_str: &'static str = ColorFamily::Cyan.into();
        assert_eq!("cyan", as_str);
    }

    #[rstest]
    #[case(Rgb::new(255, 255, 0), true)]
    #[case(Rgb::new(0, 0, 128), false)]
    #[case(Rgb::new(128, 128, 128), false)]
    #[case(Rgb::new(129, 128, 128), true)]
    #[case(Rgb::new(0, 0, 0), false)]
    #[case(Rgb::new(255, 255, 255), true)]
    fn light_background(#[case] rgb: Rgb, #[case] expected: bool) {
        assert_eq!(expected, is_light_background(rgb));
    }

    #[test]
    fn text_color_contrasts_with_background() {
        assert_eq!(TextColor::Black, TextColor::for_background(Rgb::new(255, 255, 0)));
        assert_eq!(TextColor::White, TextColor::for_background(Rgb::new(0, 0, 128)));
        assert_eq!("white", TextColor::White.to_string());
    }
}
