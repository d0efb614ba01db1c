//! Palette composition: base analysis, harmony expansion, dedup, evaluation.
//!
//! A [`Palette`] is an ordered list of [`ColorCombination`]s. Entry 0 is
//! always the caller's base color, flagged as base and locked. Every other
//! entry is a harmony candidate paired with whichever of black or white
//! reads best on it.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;
use wp_color::{Color, ColorParseError};

use crate::contrast::{WcagLevel, best_text_color, classify};
use crate::harmony::HarmonyKind;
use crate::naming::color_name;
use crate::relation::{classify_hue, classify_tone};

// ---------------------------------------------------------------------------
// ColorCombination
// ---------------------------------------------------------------------------

/// One palette entry: a background, its text color and their WCAG rating.
///
/// The only way to build one is through contrast evaluation, so `ratio` and
/// `wcag_level` always agree with `background` and `text`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCombination {
    background: Color,
    text: Color,
    name: String,
    ratio: f64,
    wcag_level: WcagLevel,
    is_base_color: bool,
    is_locked: bool,
}

impl ColorCombination {
    pub(crate) fn evaluate(
        background: Color,
        name: impl Into<String>,
        is_base_color: bool,
        is_locked: bool,
    ) -> Self {
        let (text, ratio) = best_text_color(background);
        Self {
            background,
            text,
            name: name.into(),
            ratio,
            wcag_level: classify(ratio, false, false),
            is_base_color,
            is_locked,
        }
    }

    #[must_use]
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Always [`Color::BLACK`] or [`Color::WHITE`].
    #[must_use]
    pub const fn text(&self) -> Color {
        self.text
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    #[must_use]
    pub const fn wcag_level(&self) -> WcagLevel {
        self.wcag_level
    }

    #[must_use]
    pub const fn is_base_color(&self) -> bool {
        self.is_base_color
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.is_locked
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    harmony: HarmonyKind,
    entries: Vec<ColorCombination>,
}

impl Palette {
    /// Parse `base` and compose a palette for `harmony`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if `base` is not a `#RRGGBB` hex string.
    pub fn compose(base: &str, harmony: HarmonyKind) -> Result<Self, ColorParseError> {
        compose(base, harmony)
    }

    /// Assemble from already-evaluated entries. Entry 0 must be the base.
    pub(crate) fn from_parts(harmony: HarmonyKind, entries: Vec<ColorCombination>) -> Self {
        debug_assert!(entries.first().is_some_and(ColorCombination::is_base_color));
        Self { harmony, entries }
    }

    /// The base entry (index 0).
    #[must_use]
    pub fn base(&self) -> &ColorCombination {
        &self.entries[0]
    }

    #[must_use]
    pub fn entries(&self) -> &[ColorCombination] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a composed palette; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ColorCombination> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorCombination> {
        self.entries.iter()
    }

    /// The harmony selector this palette was composed with.
    #[must_use]
    pub const fn harmony(&self) -> HarmonyKind {
        self.harmony
    }

    /// Flip the lock on entry `index`. The base entry stays locked.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn toggle_lock(mut self, index: usize) -> Self {
        let len = self.entries.len();
        assert!(index < len, "toggle_lock: index {index} out of range for palette of {len}");
        if index == 0 {
            return self;
        }
        let entry = &mut self.entries[index];
        entry.is_locked = !entry.is_locked;
        self
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [ColorCombination] {
        &mut self.entries
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorCombination;
    type IntoIter = std::slice::Iter<'a, ColorCombination>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Parse `base` and compose a palette for `harmony`.
///
/// # Errors
///
/// Returns [`ColorParseError`] if `base` is not a `#RRGGBB` hex string.
pub fn compose(base: &str, harmony: HarmonyKind) -> Result<Palette, ColorParseError> {
    let base = Color::parse_hex(base)?;
    Ok(compose_color(base, harmony))
}

/// Compose a palette around an already-parsed base color.
#[must_use]
pub fn compose_color(base: Color, harmony: HarmonyKind) -> Palette {
    let base_hsl = base.hsl();
    let candidates = harmony.generate(base_hsl);
    let generated = candidates.len();

    let mut seen = HashSet::with_capacity(generated + 1);
    seen.insert(base);

    let mut entries = Vec::with_capacity(generated + 1);
    entries.push(ColorCombination::evaluate(base, color_name(base), true, true));

    for candidate in candidates {
        if !seen.insert(candidate) {
            continue;
        }
        let relationship = if harmony == HarmonyKind::Monochromatic {
            classify_tone(base_hsl, candidate.hsl())
        } else {
            classify_hue(base_hsl.h, candidate.hsl().h)
        };
        entries.push(ColorCombination::evaluate(candidate, relationship.label(), false, false));
    }

    debug!(
        base = %base,
        harmony = harmony.name(),
        generated,
        kept = entries.len() - 1,
        "composed palette"
    );

    Palette::from_parts(harmony, entries)
}

/// Free-function form of [`Palette::toggle_lock`].
///
/// # Panics
///
/// Panics if `index` is out of range.
#[must_use]
pub fn toggle_lock(palette: Palette, index: usize) -> Palette {
    palette.toggle_lock(index)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
