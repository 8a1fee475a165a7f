//! Pick a readable text color for a background.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    models::{Model, Rgb},
    parse::parse,
};

/// Backgrounds at or above this YIQ luma get dark text.
const LUMA_THRESHOLD: Component = 128.0;

/// One of the two text colors used on top of a swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextColor {
    /// Slate `#0f172a`, for light backgrounds.
    Dark,
    /// White `#FFFFFF`, for dark backgrounds.
    Light,
}

impl TextColor {
    /// The color as it is written into styles.
    pub fn as_str(self) -> &'static str {
        match self {
            TextColor::Dark => "#0f172a",
            TextColor::Light => "#FFFFFF",
        }
    }

    /// The color as 8-bit channels.
    pub fn to_rgb(self) -> Rgb {
        match self {
            TextColor::Dark => Rgb::new(0x0F, 0x17, 0x2A),
            TextColor::Light => Rgb::new(0xFF, 0xFF, 0xFF),
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// YIQ luma of a color, in `[0, 255]`.
pub fn luma(rgb: &Rgb) -> Component {
    (rgb.red as Component * 299.0
        + rgb.green as Component * 587.0
        + rgb.blue as Component * 114.0)
        / 1000.0
}

/// The readable text color for a background given as color text.
pub fn ideal_text_color(background: &str) -> TextColor {
    text_color_for(&parse(background))
}

/// The readable text color for a background model.
pub fn text_color_for(background: &impl Model) -> TextColor {
    if luma(&background.to_srgb()) >= LUMA_THRESHOLD {
        TextColor::Dark
    } else {
        TextColor::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, models::Hsl};

    #[test]
    fn black_and_white() {
        assert_eq!(ideal_text_color("#FFFFFF"), TextColor::Dark);
        assert_eq!(ideal_text_color("#FFFFFF").as_str(), "#0f172a");
        assert_eq!(ideal_text_color("#000000"), TextColor::Light);
        assert_eq!(ideal_text_color("#000000").as_str(), "#FFFFFF");
    }

    #[test]
    fn luma_weights() {
        assert_component_eq!(luma(&Rgb::new(255, 255, 255)), 255.0);
        assert_component_eq!(luma(&Rgb::new(26, 164, 255)), 133.112);
        assert_component_eq!(luma(&Rgb::new(0, 0, 255)), 29.07);
    }

    #[test]
    fn threshold_is_inclusive() {
        // 128 * (299 + 587 + 114) / 1000 == 128
        assert_eq!(text_color_for(&Rgb::new(128, 128, 128)), TextColor::Dark);
        assert_eq!(text_color_for(&Rgb::new(127, 127, 127)), TextColor::Light);
    }

    #[test]
    fn accepts_any_model() {
        assert_eq!(text_color_for(&Hsl::new(60.0, 1.0, 0.5)), TextColor::Dark);
        assert_eq!(ideal_text_color("hsl(240, 100%, 50%)"), TextColor::Light);
        assert_eq!(TextColor::Dark.to_rgb().to_hex(), "#0F172A");
    }
}
