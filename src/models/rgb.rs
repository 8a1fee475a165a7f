//! Model a color in the sRGB color space with 8-bit channels.

use serde::{Deserialize, Serialize};

use crate::color::{Component, Components};

/// A color specified in the sRGB color space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// The red component of the color.
    pub red: u8,
    /// The green component of the color.
    pub green: u8,
    /// The blue component of the color.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color with RGB (red, green, blue) components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Unpack a 24-bit `0xRRGGBB` value.
    pub const fn from_u24(value: u32) -> Self {
        Self::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Pack the channels into a 24-bit `0xRRGGBB` value.
    pub const fn to_u24(&self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// The channels as components in `[0, 1]`.
    pub fn to_components(&self) -> Components {
        Components(
            self.red as Component,
            self.green as Component,
            self.blue as Component,
        )
        .map(|c| c / 255.0)
    }
}
