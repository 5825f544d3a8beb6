use crate::HUE_STEP;

pub fn hsl(hue: u16, saturation: u8, lightness: u8) -> String {
    format!("hsl({}, {}%, {}%)", hue, saturation, lightness)
}

/// Left-to-right gradient through the whole hue circle at a fixed
/// saturation and lightness, sampled at every hue step.
pub fn hue_gradient(saturation: u8, lightness: u8) -> String {
    let stops = (0..=360)
        .step_by(usize::from(HUE_STEP))
        .map(|hue| hsl(hue, saturation, lightness))
        .collect::<Vec<_>>()
        .join(", ");
    format!("linear-gradient(to right, {stops})")
}
