//! Derive the named harmony schemes from a base color.

use serde::{Deserialize, Serialize};

use crate::{
    color::{Category, Component},
    models::{Adjustment, Hsl, Rgb},
    parse::parse,
};

const COMPLEMENTARY: [Component; 1] = [180.0];
const SPLIT: [Component; 2] = [180.0 - 30.0, 180.0 + 30.0];
const ANALOGOUS: [Component; 4] = [-60.0, -30.0, 30.0, 60.0];
const TRIADIC: [Component; 2] = [-120.0, 120.0];
const QUADRATIC: [Component; 3] = [90.0, 180.0, 270.0];

/// Lightness steps of the monochrome scheme.
const MONOCHROME: [Component; 4] = [-0.22, -0.12, 0.12, 0.22];
/// Saturation is nudged against the lightness step by this much.
const MONOCHROME_SATURATION_SHIFT: Component = 0.05;

/// A single generated color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarmonyColor {
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    /// The normalized HSL the hex was derived from.
    pub hsl: Hsl,
    /// The scheme this color belongs to.
    pub category: Category,
    /// CSS custom property name, e.g. `--color-triadic-2`.
    pub var_name: String,
}

impl HarmonyColor {
    fn new(hsl: Hsl, category: Category, index: usize) -> Self {
        Self {
            hex: hsl.to_hex(),
            hsl,
            category,
            var_name: format!("--color-{}-{}", category, index + 1),
        }
    }
}

/// The base color after its own HSL round trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseColor {
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    /// The HSL every scheme is derived from. The hue is not wrapped.
    pub hsl: Hsl,
}

/// Every scheme derived from one base color. A new set is generated whenever
/// the base changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchemeSet {
    /// The base color, not part of any scheme.
    pub base: BaseColor,
    /// One color opposite the base.
    pub complementary: Vec<HarmonyColor>,
    /// The two neighbours of the complement.
    pub split: Vec<HarmonyColor>,
    /// Four lightness variations of the base.
    pub monochrome: Vec<HarmonyColor>,
    /// Four neighbouring hues.
    pub analogous: Vec<HarmonyColor>,
    /// Two hues a third of the wheel away.
    pub triadic: Vec<HarmonyColor>,
    /// Three hues a quarter of the wheel apart.
    pub quadratic: Vec<HarmonyColor>,
}

impl SchemeSet {
    /// The colors of a category. [`Category::Base`] has none, use
    /// [`SchemeSet::base`] instead.
    pub fn scheme(&self, category: Category) -> &[HarmonyColor] {
        match category {
            Category::Base => &[],
            Category::Complementary => &self.complementary,
            Category::Split => &self.split,
            Category::Analogous => &self.analogous,
            Category::Triadic => &self.triadic,
            Category::Quadratic => &self.quadratic,
            Category::Monochrome => &self.monochrome,
        }
    }
}

/// Parse the base color text and derive every scheme from it.
pub fn generate(base: &str) -> SchemeSet {
    generate_from_rgb(parse(base))
}

/// Derive every scheme from an sRGB base color.
pub fn generate_from_rgb(base: Rgb) -> SchemeSet {
    generate_from_hsl(base.to_hsl())
}

/// Derive every scheme from an HSL base color.
pub fn generate_from_hsl(base: Hsl) -> SchemeSet {
    tracing::trace!(?base, "generating schemes");

    let rotations = |degrees: &[Component]| {
        degrees
            .iter()
            .map(|&d| Adjustment::hue_shift(d))
            .collect::<Vec<_>>()
    };
    let tints = MONOCHROME
        .iter()
        .map(|&l| Adjustment::tint(l, MONOCHROME_SATURATION_SHIFT))
        .collect::<Vec<_>>();

    SchemeSet {
        base: BaseColor {
            hex: base.to_hex(),
            hsl: base,
        },
        complementary: pack(&base, Category::Complementary, &rotations(&COMPLEMENTARY)),
        split: pack(&base, Category::Split, &rotations(&SPLIT)),
        monochrome: pack(&base, Category::Monochrome, &tints),
        analogous: pack(&base, Category::Analogous, &rotations(&ANALOGOUS)),
        triadic: pack(&base, Category::Triadic, &rotations(&TRIADIC)),
        quadratic: pack(&base, Category::Quadratic, &rotations(&QUADRATIC)),
    }
}

fn pack(base: &Hsl, category: Category, adjustments: &[Adjustment]) -> Vec<HarmonyColor> {
    adjustments
        .iter()
        .enumerate()
        .map(|(i, adjustment)| HarmonyColor::new(base.adjust(adjustment), category, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, math::modulo};
    use pretty_assertions::assert_eq;

    #[test]
    fn scheme_sizes() {
        let schemes = generate("#5EB0E5");
        assert_eq!(schemes.complementary.len(), 1);
        assert_eq!(schemes.split.len(), 2);
        assert_eq!(schemes.analogous.len(), 4);
        assert_eq!(schemes.triadic.len(), 2);
        assert_eq!(schemes.quadratic.len(), 3);
        assert_eq!(schemes.monochrome.len(), 4);
        assert!(schemes.scheme(Category::Base).is_empty());
    }

    #[test]
    fn complementary_is_opposite() {
        let schemes = generate("#5EB0E5");
        assert_eq!(
            schemes.complementary[0].hsl.hue,
            modulo(schemes.base.hsl.hue + 180.0, 360.0)
        );
    }

    #[test]
    fn hue_rotations_wrap() {
        let schemes = generate_from_hsl(Hsl::new(300.0, 0.6, 0.4));
        let hues = |category| {
            schemes
                .scheme(category)
                .iter()
                .map(|c| c.hsl.hue)
                .collect::<Vec<_>>()
        };
        assert_eq!(hues(Category::Split), vec![90.0, 150.0]);
        assert_eq!(hues(Category::Analogous), vec![240.0, 270.0, 330.0, 0.0]);
        assert_eq!(hues(Category::Triadic), vec![180.0, 60.0]);
        assert_eq!(hues(Category::Quadratic), vec![30.0, 120.0, 210.0]);
    }

    #[test]
    fn monochrome_shifts_lightness_against_saturation() {
        let schemes = generate_from_hsl(Hsl::new(200.0, 0.5, 0.5));
        let expected = [(0.55, 0.28), (0.55, 0.38), (0.45, 0.62), (0.45, 0.72)];
        for (color, (saturation, lightness)) in schemes.monochrome.iter().zip(expected) {
            assert_component_eq!(color.hsl.hue, 200.0);
            assert_component_eq!(color.hsl.saturation, saturation);
            assert_component_eq!(color.hsl.lightness, lightness);
        }
    }

    #[test]
    fn monochrome_clamps_saturation() {
        let schemes = generate("#FF0000");
        let saturations = schemes
            .monochrome
            .iter()
            .map(|c| c.hsl.saturation)
            .collect::<Vec<_>>();
        assert_component_eq!(saturations[0], 1.0);
        assert_component_eq!(saturations[1], 1.0);
        assert_component_eq!(saturations[2], 0.95);
        assert_component_eq!(saturations[3], 0.95);
    }

    #[test]
    fn colors_are_named_per_category() {
        let schemes = generate("#1AA4FF");
        let names = schemes
            .quadratic
            .iter()
            .map(|c| c.var_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "--color-quadratic-1",
                "--color-quadratic-2",
                "--color-quadratic-3"
            ]
        );
        assert!(schemes
            .quadratic
            .iter()
            .all(|c| c.category == Category::Quadratic));
    }

    #[test]
    fn primary_colors() {
        let schemes = generate("red");
        // "red" is not a supported notation, the fallback is used instead.
        assert_eq!(schemes.base.hex, "#1AA4FF");

        let schemes = generate("#FF0000");
        assert_eq!(schemes.base.hex, "#FF0000");
        assert_eq!(schemes.complementary[0].hex, "#00FFFF");
        assert_eq!(schemes.triadic[0].hex, "#0000FF");
        assert_eq!(schemes.triadic[1].hex, "#00FF00");
    }

    #[test]
    fn base_is_round_tripped() {
        let schemes = generate("rgb(26 164 255)");
        assert_eq!(schemes.base.hex, "#1AA4FF");
    }
}
