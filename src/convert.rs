//! Conversions between the [`Rgb`] and [`Hsl`] models, and hex formatting.
//!
//! ```rust
//! use harmonia::{Hsl, Rgb};
//! let rgb = Rgb::new(26, 164, 255);
//! assert_eq!(rgb.to_hex(), "#1AA4FF");
//! assert_eq!(rgb.to_hsl().to_srgb(), rgb);
//! assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_hex(), "#FF0000");
//! ```

use crate::{
    color::Components,
    math::to_channel,
    models::{Hsl, Model, Rgb},
};

impl Rgb {
    /// Convert this color to the HSL notation. The hue is not wrapped.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }

    /// Format the color as an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl Hsl {
    /// Convert this color to 8-bit sRGB channels.
    pub fn to_srgb(&self) -> Rgb {
        let Components(red, green, blue) =
            util::hsl_to_rgb(&self.to_components()).map(|c| c * 255.0);
        Rgb::new(to_channel(red), to_channel(green), to_channel(blue))
    }

    /// Format the color as an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        self.to_srgb().to_hex()
    }
}

impl Model for Rgb {
    fn to_srgb(&self) -> Rgb {
        *self
    }
}

impl Model for Hsl {
    fn to_srgb(&self) -> Rgb {
        Hsl::to_srgb(self)
    }
}

/// Convert 8-bit sRGB channels to HSL.
pub fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
    rgb.to_hsl()
}

/// Convert an HSL color to 8-bit sRGB channels.
pub fn hsl_to_rgb(hsl: &Hsl) -> Rgb {
    hsl.to_srgb()
}

/// Format 8-bit sRGB channels as an uppercase `#RRGGBB` string.
pub fn rgb_to_hex(rgb: &Rgb) -> String {
    rgb.to_hex()
}

/// Format an HSL color as an uppercase `#RRGGBB` string.
pub fn hsl_to_hex(hsl: &Hsl) -> String {
    hsl.to_hex()
}

mod util {
    use crate::color::{Component, Components};
    use crate::math::modulo;

    /// Takes components in `[0, 1]` and returns hue in degrees with
    /// saturation and lightness in `[0, 1]`.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Components(0.0, 0.0, lightness);
        }

        let d = max - min;
        let saturation = if lightness > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let hue = if max == red {
            (green - blue) / d + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / d + 2.0
        } else {
            (red - green) / d + 4.0
        };

        Components(hue * 60.0, saturation, lightness)
    }

    /// Takes hue in degrees (any value) with saturation and lightness in
    /// `[0, 1]`, and returns components in `[0, 1]`.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;
        let hue = modulo(hue, 360.0) / 360.0;

        if saturation == 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Components(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }

    fn hue_to_channel(p: Component, q: Component, mut t: Component) -> Component {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }
}
