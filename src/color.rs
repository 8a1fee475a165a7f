//! Component primitives shared by every model, and the closed set of palette
//! categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The category a generated color belongs to. Every harmony scheme is a
/// category, plus the base color itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The color everything else is derived from.
    Base,
    /// The hue on the opposite side of the color wheel.
    Complementary,
    /// The two hues adjacent to the complement.
    Split,
    /// Neighbouring hues on either side of the base.
    Analogous,
    /// Hues a third of the wheel away from the base.
    Triadic,
    /// Hues a quarter of the wheel apart.
    Quadratic,
    /// The base hue with shifted lightness.
    Monochrome,
}

impl Category {
    /// Every category that holds generated colors, in the order palettes are
    /// flattened.
    pub const SCHEMES: [Category; 6] = [
        Category::Complementary,
        Category::Split,
        Category::Analogous,
        Category::Triadic,
        Category::Quadratic,
        Category::Monochrome,
    ];

    /// The lowercase name used in variable names and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Category::Base => "base",
            Category::Complementary => "complementary",
            Category::Split => "split",
            Category::Analogous => "analogous",
            Category::Triadic => "triadic",
            Category::Quadratic => "quadratic",
            Category::Monochrome => "monochrome",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a category or filter name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [Category::Base]
            .into_iter()
            .chain(Category::SCHEMES)
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
