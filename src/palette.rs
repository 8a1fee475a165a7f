//! Turn a [`SchemeSet`] into the bounded list of swatches handed to the
//! presentation layer, and export that list as text.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    color::{Category, UnknownCategory},
    harmony::{HarmonyColor, SchemeSet},
};

/// The most swatches shown or exported at once, base included.
pub const PALETTE_LIMIT: usize = 12;

/// Which colors of a [`SchemeSet`] to show next to the base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every scheme, de-duplicated.
    All,
    /// [`Category::Complementary`].
    Complementary,
    /// [`Category::Split`].
    #[default]
    Split,
    /// [`Category::Analogous`].
    Analogous,
    /// [`Category::Triadic`].
    Triadic,
    /// [`Category::Quadratic`].
    Quadratic,
    /// [`Category::Monochrome`].
    Monochrome,
}

impl Filter {
    /// Filters in the order they are offered as tabs.
    pub const TABS: [Filter; 7] = [
        Filter::Split,
        Filter::Complementary,
        Filter::Analogous,
        Filter::Triadic,
        Filter::Quadratic,
        Filter::Monochrome,
        Filter::All,
    ];

    /// The scheme this filter selects, or `None` for [`Filter::All`].
    pub fn category(self) -> Option<Category> {
        match self {
            Filter::All => None,
            Filter::Complementary => Some(Category::Complementary),
            Filter::Split => Some(Category::Split),
            Filter::Analogous => Some(Category::Analogous),
            Filter::Triadic => Some(Category::Triadic),
            Filter::Quadratic => Some(Category::Quadratic),
            Filter::Monochrome => Some(Category::Monochrome),
        }
    }

    /// The lowercase name of the filter.
    pub fn name(self) -> &'static str {
        self.category().map_or("all", Category::name)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Filter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::TABS
            .into_iter()
            .find(|filter| filter.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A color as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    /// Where the color came from.
    pub category: Category,
    /// `--color-base` or `--color-NN`.
    pub var_name: String,
}

/// Collect the colors of every scheme, skipping repeated hex values, up to
/// `limit` colors. The base color is not included.
pub fn flatten_unique(schemes: &SchemeSet, limit: usize) -> Vec<HarmonyColor> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for color in Category::SCHEMES
        .into_iter()
        .flat_map(|category| schemes.scheme(category))
    {
        if unique.len() >= limit {
            break;
        }
        if seen.insert(color.hex.to_uppercase()) {
            unique.push(color.clone());
        }
    }

    unique
}

/// The swatches to show for a filter: the base first, then the filtered
/// colors, at most [`PALETTE_LIMIT`] in total.
pub fn select(schemes: &SchemeSet, filter: Filter) -> Vec<Swatch> {
    let colors = match filter.category() {
        Some(category) => schemes.scheme(category).to_vec(),
        None => flatten_unique(schemes, PALETTE_LIMIT),
    };

    let base = Swatch {
        hex: schemes.base.hex.clone(),
        category: Category::Base,
        var_name: "--color-base".to_string(),
    };

    std::iter::once(base)
        .chain(colors.into_iter().enumerate().map(|(i, color)| Swatch {
            hex: color.hex,
            category: color.category,
            var_name: format!("--color-{:02}", i + 1),
        }))
        .take(PALETTE_LIMIT)
        .collect()
}

/// Render swatches as a block of CSS custom properties.
pub fn css_variables(swatches: &[Swatch]) -> String {
    let mut lines = vec![":root {".to_string()];
    lines.extend(
        swatches
            .iter()
            .take(PALETTE_LIMIT)
            .map(|swatch| format!("  {}: {};", swatch.var_name, swatch.hex)),
    );
    lines.push("}".to_string());
    lines.join("\n")
}

/// Render swatches as a comma separated list of hex values.
pub fn hex_list(swatches: &[Swatch]) -> String {
    swatches
        .iter()
        .take(PALETTE_LIMIT)
        .map(|swatch| swatch.hex.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
