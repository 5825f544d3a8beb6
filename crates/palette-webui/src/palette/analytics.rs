//! Derived palette statistics and export formats.

use super::{ColorFamily, ColorSwatch, classify::categorize_family};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use strum::IntoEnumIterator as _;

/// Number of swatches per family, in enumeration order.
#[derive(Clone, Debug, PartialEq)]
pub struct FamilyDistribution(IndexMap<ColorFamily, usize>);

impl FamilyDistribution {
    pub fn from_swatches(swatches: &[ColorSwatch]) -> Self {
        let mut counts: IndexMap<ColorFamily, usize> =
            ColorFamily::iter().map(|family| (family, 0)).collect();
        for swatch in swatches {
            *counts
                .get_mut(&categorize_family(swatch.hue))
                .expect("every family is pre-populated") += 1;
        }
        Self(counts)
    }

    pub fn count(&self, family: ColorFamily) -> usize {
        self.0.get(&family).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorFamily, usize)> + '_ {
        self.0.iter().map(|(family, count)| (*family, *count))
    }

    /// Family with the highest non-zero count. Ties go to the family that comes
    /// first in enumeration order.
    pub fn dominant(&self) -> Option<ColorFamily> {
        let mut best: Option<(ColorFamily, usize)> = None;
        for (family, count) in self.iter() {
            if count > 0 && best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((family, count));
            }
        }
        best.map(|(family, _)| family)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteInsights {
    pub total_colors: usize,
    pub warm_percentage: u32,
    pub cool_percentage: u32,
    /// Capitalized family name, or `"None"` for an empty palette.
    pub dominant_family: String,
}

impl PaletteInsights {
    pub fn from_swatches(swatches: &[ColorSwatch]) -> Self {
        let total = swatches.len();
        if total == 0 {
            return Self {
                total_colors: 0,
                warm_percentage: 0,
                cool_percentage: 0,
                dominant_family: "None".to_string(),
            };
        }
        let warm = swatches.iter().filter(|swatch| swatch.is_warm()).count();
        let cool = total - warm;
        let dominant_family = FamilyDistribution::from_swatches(swatches)
            .dominant()
            .map_or("None", |family| family.display_name())
            .to_string();
        Self {
            total_colors: total,
            warm_percentage: percentage(warm, total),
            cool_percentage: percentage(cool, total),
            dominant_family,
        }
    }
}

fn percentage(part: usize, total: usize) -> u32 {
    // Both shares are rounded independently, so they may sum to 99 or 101.
    ((part as f64 / total as f64) * 100.0).round() as u32
}

/// Lowercases and replaces every run of whitespace with a single hyphen.
fn kebab_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// CSS custom properties wrapped in a `:root` block.
pub fn css_variables(swatches: &[ColorSwatch]) -> String {
    let mut lines = vec![":root {".to_string()];
    lines.extend(
        swatches
            .iter()
            .map(|swatch| format!("  --color-{}: {};", kebab_name(&swatch.name), swatch.rgb)),
    );
    lines.push("}".to_string());
    lines.join("\n")
}

#[derive(Serialize)]
struct PaletteExport<'a> {
    palette: ExportedColors<'a>,
}

#[derive(Serialize)]
struct ExportedColors<'a> {
    colors: Vec<ExportedColor<'a>>,
}

#[derive(Serialize)]
struct ExportedColor<'a> {
    name: &'a str,
    rgb: String,
    #[serde(serialize_with = "serialize_hue")]
    hue: f64,
}

/// Whole-degree hues are written as integers (`0`, not `0.0`).
fn serialize_hue<S: Serializer>(hue: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if hue.fract() == 0.0 && hue.abs() < 9.0e15 {
        serializer.serialize_i64(*hue as i64)
    } else {
        serializer.serialize_f64(*hue)
    }
}

/// Pretty-printed JSON document with two-space indentation.
pub fn palette_json(swatches: &[ColorSwatch]) -> String {
    let export = PaletteExport {
        palette: ExportedColors {
            colors: swatches
                .iter()
                .map(|swatch| ExportedColor {
                    name: &swatch.name,
                    rgb: swatch.rgb.to_string(),
                    hue: swatch.hue,
                })
                .collect(),
        },
    };
    serde_json::to_string_pretty(&export).expect("palette export is always serializable")
}
