//! Each color notation is modeled with its own type. Conversions between the
//! models live in [`crate::convert`].

use crate::convert;

pub mod adjustment;
pub mod hsl;
pub mod rgb;

pub use adjustment::Adjustment;
pub use hsl::Hsl;
pub use rgb::Rgb;

/// A trait implemented for color models that can be displayed in the sRGB
/// color space.
pub trait Model {
    /// Convert the model to 8-bit sRGB channels.
    fn to_srgb(&self) -> Rgb;

    /// Format the model as an uppercase `#RRGGBB` string.
    fn to_hex(&self) -> String {
        convert::rgb_to_hex(&self.to_srgb())
    }
}
