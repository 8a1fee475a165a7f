//! harmonia derives harmonious color palettes from a single base color: it
//! parses CSS-like color text, converts between sRGB and HSL and generates the
//! complementary, split, analogous, triadic, quadratic and monochrome schemes.
//!
//! ```rust
//! use harmonia::{generate, select, Filter};
//! let schemes = generate("#1AA4FF");
//! let swatches = select(&schemes, Filter::Triadic);
//! assert_eq!(swatches.len(), 3);
//! ```

#![deny(missing_docs)]

mod color;
mod contrast;
mod convert;
mod harmony;
mod math;
mod models;
mod palette;
mod parse;
mod session;

pub use color::{Category, Component, Components, UnknownCategory};
pub use contrast::{ideal_text_color, luma, text_color_for, TextColor};
pub use convert::{hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use harmony::{
    generate, generate_from_hsl, generate_from_rgb, BaseColor, HarmonyColor, SchemeSet,
};
pub use models::{Adjustment, Hsl, Model, Rgb};
pub use palette::{css_variables, flatten_unique, hex_list, select, Filter, Swatch, PALETTE_LIMIT};
pub use parse::{parse, try_parse, Notation, ParseColorError, FALLBACK};
pub use session::{random_hex, Demo, DemoConfig, Interaction, Present, RenderSession, SessionConfig};
