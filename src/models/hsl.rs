//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;
use crate::math::{clamp_unit, modulo};
use crate::models::Adjustment;

harmonia_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color, in `[0, 1]`.
        saturation: Component,
        /// The lightness component of the color, in `[0, 1]`.
        lightness: Component,
    }
}

impl Hsl {
    /// Return the color with its hue wrapped into `[0, 360)` and saturation
    /// and lightness clamped to `[0, 1]`.
    pub fn normalized(&self) -> Self {
        Self::new(
            modulo(self.hue, 360.0),
            clamp_unit(self.saturation),
            clamp_unit(self.lightness),
        )
    }

    /// Apply the given deltas and normalize the result.
    pub fn adjust(&self, adjustment: &Adjustment) -> Self {
        Self::new(
            self.hue + adjustment.hue,
            self.saturation + adjustment.saturation,
            self.lightness + adjustment.lightness,
        )
        .normalized()
    }
}
