//! How a palette entry relates to the base color.
//!
//! These labels describe the *relationship*, not the color itself (that is
//! [`crate::naming`]). Generated entries use [`classify_hue`] or, for
//! monochromatic palettes, [`classify_tone`]. Shuffled entries use the
//! narrower [`classify_shuffled`].
//!
//! Hue comparisons work on the plain absolute difference of the two angles,
//! not the shortest arc. That is why the analogous band also accepts
//! differences above 330. The shuffle-time triadic test is the exception.

use std::fmt;

use serde::Serialize;
use wp_color::Hsl;

/// Tone difference (percentage points) above which a monochromatic entry is
/// called lighter/darker or more/less saturated.
const TONE_STEP: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relationship {
    Analogous,
    Complementary,
    SplitComplementary,
    Triadic,
    SquareTetradic,
    Accent,
    Lighter,
    Darker,
    MoreSaturated,
    LessSaturated,
    Monochromatic,
    Random,
}

impl Relationship {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Analogous => "Analogous",
            Self::Complementary => "Complementary",
            Self::SplitComplementary => "Split Complementary",
            Self::Triadic => "Triadic",
            Self::SquareTetradic => "Square/Tetradic",
            Self::Accent => "Accent",
            Self::Lighter => "Lighter",
            Self::Darker => "Darker",
            Self::MoreSaturated => "More Saturated",
            Self::LessSaturated => "Less Saturated",
            Self::Monochromatic => "Monochromatic",
            Self::Random => "Random",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[inline]
fn hue_diff(base_hue: f64, hue: f64) -> f64 {
    (hue - base_hue).abs()
}

/// Generation-time classifier for every scheme except monochromatic.
///
/// Bands are tested in order and are exclusive at their edges. Because the
/// split-complementary band (90..150, 210..270) is tested first, it absorbs
/// every difference the triadic test would match.
#[must_use]
pub fn classify_hue(base_hue: f64, hue: f64) -> Relationship {
    let diff = hue_diff(base_hue, hue);
    if diff < 30.0 || diff > 330.0 {
        Relationship::Analogous
    } else if diff > 150.0 && diff < 210.0 {
        Relationship::Complementary
    } else if (diff > 90.0 && diff < 150.0) || (diff > 210.0 && diff < 270.0) {
        Relationship::SplitComplementary
    } else if (diff - 120.0).abs() < 30.0 || (diff - 240.0).abs() < 30.0 {
        Relationship::Triadic
    } else if (diff - 90.0).abs() < 30.0 || (diff - 270.0).abs() < 30.0 {
        Relationship::SquareTetradic
    } else {
        Relationship::Accent
    }
}

/// Generation-time classifier for monochromatic palettes: lightness first,
/// then saturation.
#[must_use]
pub fn classify_tone(base: Hsl, candidate: Hsl) -> Relationship {
    if candidate.l > base.l + TONE_STEP {
        Relationship::Lighter
    } else if candidate.l < base.l - TONE_STEP {
        Relationship::Darker
    } else if candidate.s > base.s + TONE_STEP {
        Relationship::MoreSaturated
    } else if candidate.s < base.s - TONE_STEP {
        Relationship::LessSaturated
    } else {
        Relationship::Monochromatic
    }
}

/// Shuffle-time classifier: analogous, complementary or triadic, else random.
///
/// The triadic test uses the signed offset `hue - base_hue`, so only hues
/// 90..150 or 210..270 degrees *above* the base count as triadic.
#[must_use]
pub fn classify_shuffled(base_hue: f64, hue: f64) -> Relationship {
    let diff = hue_diff(base_hue, hue);
    let offset = hue - base_hue;
    if diff < 30.0 || diff > 330.0 {
        Relationship::Analogous
    } else if diff > 150.0 && diff < 210.0 {
        Relationship::Complementary
    } else if (offset - 120.0).abs() < 30.0 || (offset - 240.0).abs() < 30.0 {
        Relationship::Triadic
    } else {
        Relationship::Random
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
