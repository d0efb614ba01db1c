//! Color-harmony candidate generation.
//!
//! Each scheme takes the base color's HSL and emits candidate colors around
//! related hues. Candidates are raw: not deduplicated, not evaluated for
//! contrast. That happens in [`crate::palette`].
//!
//! | Scheme | Hue offsets | Variants per hue |
//! |---|---|---|
//! | complementary | 180 | 3x3 S/L grid minus center, then the exact hue |
//! | analogous | -30, -15, +15, +30 | same |
//! | triadic | 120, 240 | same |
//! | split-complementary | 150, 210 | same |
//! | tetradic, square | 90, 180, 270 | exact hue, then 2x2 S/L corners |
//! | monochromatic | 0 | fixed 5x5 S/L lattice, minus the base itself |
//! | mixed | 45..315 step 45 | L {25,50,75} away from base x S {50,75,90} |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wp_color::{Color, Hsl};

/// Which harmony to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyKind {
    /// Opposite hue.
    Complementary,
    /// Neighbouring hues, 15 and 30 degrees either side.
    Analogous,
    /// Three hues 120 degrees apart.
    Triadic,
    /// The two hues flanking the complement.
    SplitComplementary,
    /// Base hue only, across a saturation/lightness lattice.
    Monochromatic,
    /// Rectangle on the wheel, coarse variants.
    Tetradic,
    /// Square on the wheel. Same generator as tetradic.
    Square,
    /// Seven evenly spaced hues at fixed high-contrast tones.
    Mixed,
    /// Every scheme above, in declaration order.
    #[default]
    All,
}

/// Returned by [`HarmonyKind::from_str`] for an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown harmony {0:?} (expected one of: {names})", names = HarmonyKind::name_list())]
pub struct UnknownHarmony(pub String);

impl HarmonyKind {
    /// Generate candidate colors around `base`.
    #[must_use]
    pub fn generate(self, base: Hsl) -> Vec<Color> {
        generate(self, base)
    }

    /// Kebab-case identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
            Self::Monochromatic => "monochromatic",
            Self::Tetradic => "tetradic",
            Self::Square => "square",
            Self::Mixed => "mixed",
            Self::All => "all",
        }
    }

    /// Short label for pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::SplitComplementary => "Split Comp",
            Self::Monochromatic => "Monochromatic",
            Self::Tetradic => "Tetradic",
            Self::Square => "Square",
            Self::Mixed => "Mixed",
            Self::All => "All Harmonies",
        }
    }

    /// Parse from a name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::selectable().iter().find(|k| k.name() == lower).copied()
    }

    /// The concrete schemes, in the order `All` concatenates them.
    #[must_use]
    pub const fn schemes() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Analogous,
            Self::Triadic,
            Self::SplitComplementary,
            Self::Monochromatic,
            Self::Tetradic,
            Self::Square,
            Self::Mixed,
        ]
    }

    /// Everything a user can pick, `All` first.
    #[must_use]
    pub const fn selectable() -> &'static [Self] {
        &[
            Self::All,
            Self::Complementary,
            Self::Analogous,
            Self::Triadic,
            Self::SplitComplementary,
            Self::Monochromatic,
            Self::Tetradic,
            Self::Square,
            Self::Mixed,
        ]
    }

    fn name_list() -> String {
        Self::selectable().iter().map(|k| k.name()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyKind {
    type Err = UnknownHarmony;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownHarmony(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Saturation/lightness deltas applied around each offset hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VariantGrid {
    /// {-10, 0, +10} squared, center skipped, exact hue appended last.
    Fine,
    /// {-10, +10} squared, exact hue emitted first.
    Coarse,
}

impl VariantGrid {
    const fn deltas(self) -> &'static [i8] {
        match self {
            Self::Fine => &[-10, 0, 10],
            Self::Coarse => &[-10, 10],
        }
    }
}

/// Clamp range for variant lightness. Keeps variants away from near-black
/// and near-white, where hue stops being visible.
const VARIANT_LIGHTNESS: (f64, f64) = (20.0, 80.0);

const MONO_SATURATIONS: [f64; 5] = [20.0, 40.0, 60.0, 80.0, 100.0];
const MONO_LIGHTNESSES: [f64; 5] = [20.0, 35.0, 50.0, 65.0, 80.0];

const MIXED_OFFSETS: [f64; 7] = [45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];
const MIXED_LIGHTNESSES: [f64; 3] = [25.0, 50.0, 75.0];
const MIXED_SATURATIONS: [f64; 3] = [50.0, 75.0, 90.0];

/// Mixed skips lightness levels closer than this to the base.
const MIXED_MIN_LIGHTNESS_GAP: f64 = 10.0;

/// Tolerance for "is this lattice point the base color itself".
const TONE_EPSILON: f64 = 1e-9;

fn generate(kind: HarmonyKind, base: Hsl) -> Vec<Color> {
    match kind {
        HarmonyKind::Complementary => hue_variants(base, &[180.0], VariantGrid::Fine),
        HarmonyKind::Analogous => hue_variants(base, &[-30.0, -15.0, 15.0, 30.0], VariantGrid::Fine),
        HarmonyKind::Triadic => hue_variants(base, &[120.0, 240.0], VariantGrid::Fine),
        HarmonyKind::SplitComplementary => hue_variants(base, &[150.0, 210.0], VariantGrid::Fine),
        HarmonyKind::Tetradic | HarmonyKind::Square => {
            hue_variants(base, &[90.0, 180.0, 270.0], VariantGrid::Coarse)
        }
        HarmonyKind::Monochromatic => monochromatic(base),
        HarmonyKind::Mixed => mixed(base),
        HarmonyKind::All => HarmonyKind::schemes()
            .iter()
            .flat_map(|scheme| generate(*scheme, base))
            .collect(),
    }
}

/// Normalize a hue to [0, 360).
#[inline]
fn norm(h: f64) -> f64 {
    h.rem_euclid(360.0)
}

fn hue_variants(base: Hsl, offsets: &[f64], grid: VariantGrid) -> Vec<Color> {
    let deltas = grid.deltas();
    let mut colors = Vec::with_capacity(offsets.len() * (deltas.len() * deltas.len() + 1));

    for &offset in offsets {
        let h = norm(base.h + offset);
        let exact = Color::from_hsl(Hsl::new(h, base.s, base.l));

        if grid == VariantGrid::Coarse {
            colors.push(exact);
        }

        for &ds in deltas {
            for &dl in deltas {
                if ds == 0 && dl == 0 {
                    continue;
                }
                let s = (base.s + f64::from(ds)).clamp(0.0, 100.0);
                let l = (base.l + f64::from(dl)).clamp(VARIANT_LIGHTNESS.0, VARIANT_LIGHTNESS.1);
                colors.push(Color::from_hsl(Hsl::new(h, s, l)));
            }
        }

        if grid == VariantGrid::Fine {
            colors.push(exact);
        }
    }

    colors
}

fn monochromatic(base: Hsl) -> Vec<Color> {
    let mut colors = Vec::with_capacity(MONO_SATURATIONS.len() * MONO_LIGHTNESSES.len());
    for s in MONO_SATURATIONS {
        for l in MONO_LIGHTNESSES {
            if (s - base.s).abs() < TONE_EPSILON && (l - base.l).abs() < TONE_EPSILON {
                continue;
            }
            colors.push(Color::from_hsl(Hsl::new(base.h, s, l)));
        }
    }
    colors
}

fn mixed(base: Hsl) -> Vec<Color> {
    let mut colors = Vec::with_capacity(MIXED_OFFSETS.len() * 9);
    for offset in MIXED_OFFSETS {
        let h = norm(base.h + offset);
        for l in MIXED_LIGHTNESSES {
            if (l - base.l).abs() < MIXED_MIN_LIGHTNESS_GAP {
                continue;
            }
            for s in MIXED_SATURATIONS {
                colors.push(Color::from_hsl(Hsl::new(h, s, l)));
            }
        }
    }
    colors
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
