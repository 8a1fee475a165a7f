//! Deltas applied to a base [`Hsl`](super::Hsl) color to derive new colors.

use crate::color::Component;

harmonia_macros::gen_model! {
    /// Offsets added to each component of an HSL color.
    pub struct Adjustment {
        /// Degrees added to the hue.
        hue: Component,
        /// Added to the saturation before clamping.
        saturation: Component,
        /// Added to the lightness before clamping.
        lightness: Component,
    }
}

impl Adjustment {
    /// Rotate the hue only.
    pub const fn hue_shift(degrees: Component) -> Self {
        Self::new(degrees, 0.0, 0.0)
    }

    /// Shift the lightness, compensating saturation in the opposite direction
    /// so darker tints stay vivid and lighter ones soften.
    pub fn tint(lightness: Component, saturation_shift: Component) -> Self {
        let saturation = if lightness > 0.0 {
            -saturation_shift
        } else {
            saturation_shift
        };
        Self::new(0.0, saturation, lightness)
    }
}
