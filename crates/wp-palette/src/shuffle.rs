//! Lock-aware regeneration.
//!
//! [`shuffle`] redraws every unlocked slot past the base with a fresh bright,
//! mid-light color and leaves locked slots alone. Randomness comes in through
//! [`RandomSource`], so a seeded generator makes a shuffle reproducible.

use std::ops::RangeInclusive;

use tracing::{debug, trace};
use wp_color::{Color, Hsl};

use crate::palette::{ColorCombination, Palette};
use crate::relation::classify_shuffled;

/// Hue draw range, degrees.
pub const SHUFFLE_HUE: RangeInclusive<u16> = 0..=359;
/// Saturation draw range, percent.
pub const SHUFFLE_SATURATION: RangeInclusive<u16> = 70..=100;
/// Lightness draw range, percent.
pub const SHUFFLE_LIGHTNESS: RangeInclusive<u16> = 40..=80;

/// Source of uniformly distributed integers.
///
/// Every [`rand::Rng`] is a `RandomSource`; tests can also script one by hand.
pub trait RandomSource {
    /// A value in `range`, inclusive at both ends.
    fn pick(&mut self, range: RangeInclusive<u16>) -> u16;
}

impl<R: rand::Rng> RandomSource for R {
    fn pick(&mut self, range: RangeInclusive<u16>) -> u16 {
        self.random_range(range)
    }
}

/// Redraw every unlocked entry except the base.
///
/// Per slot the draws are hue, then saturation, then lightness; slots are
/// visited in index order. The new entry is unlocked and labeled with the
/// shuffle classifier.
#[must_use]
pub fn shuffle<R: RandomSource + ?Sized>(palette: &Palette, rng: &mut R) -> Palette {
    let mut next = palette.clone();
    let base_hue = palette.base().background().hsl().h;
    let mut redrawn = 0usize;

    for (index, entry) in next.entries_mut().iter_mut().enumerate().skip(1) {
        if entry.is_locked() {
            continue;
        }

        let h = rng.pick(SHUFFLE_HUE);
        let s = rng.pick(SHUFFLE_SATURATION);
        let l = rng.pick(SHUFFLE_LIGHTNESS);
        let hsl = Hsl::new(f64::from(h), f64::from(s), f64::from(l));
        let color = Color::from_hsl(hsl);
        let relationship = classify_shuffled(base_hue, hsl.h);

        trace!(index, %color, relationship = relationship.label(), "redrew slot");
        *entry = ColorCombination::evaluate(color, relationship.label(), false, false);
        redrawn += 1;
    }

    debug!(
        entries = next.len(),
        redrawn,
        locked = next.len() - 1 - redrawn,
        "shuffled palette"
    );
    next
}

/// A uniformly random opaque color.
pub fn random_color<R: RandomSource + ?Sized>(rng: &mut R) -> Color {
    let mut channel = || u8::try_from(rng.pick(0..=255)).unwrap_or(u8::MAX);
    let r = channel();
    let g = channel();
    let b = channel();
    Color::from_rgb(r, g, b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony::HarmonyKind;
    use crate::palette::compose;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Replays a fixed script, clamped into each requested range.
    struct Scripted {
        values: Vec<u16>,
        cursor: usize,
    }

    impl Scripted {
        fn new(values: &[u16]) -> Self {
            Self { values: values.to_vec(), cursor: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn pick(&mut self, range: RangeInclusive<u16>) -> u16 {
            let v = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            v.clamp(*range.start(), *range.end())
        }
    }

    fn navy() -> Palette {
        compose("#1A365D", HarmonyKind::Complementary).unwrap()
    }

    // ── slots ───────────────────────────────────────────────────────

    #[test]
    fn base_is_never_redrawn() {
        let before = navy();
        let after = shuffle(&before, &mut StdRng::seed_from_u64(7));
        assert_eq!(after.base(), before.base());
        assert_eq!(after.len(), before.len());
        assert_eq!(after.harmony(), before.harmony());
    }

    #[test]
    fn locked_entries_survive() {
        let before = navy().toggle_lock(2).toggle_lock(5);
        let after = shuffle(&before, &mut StdRng::seed_from_u64(42));
        assert_eq!(after.get(2), before.get(2));
        assert_eq!(after.get(5), before.get(5));
        assert!(after.get(2).unwrap().is_locked());
    }

    #[test]
    fn unlocked_entries_are_fresh_and_unlocked() {
        let before = navy();
        let after = shuffle(&before, &mut Scripted::new(&[120, 85, 60]));
        let expected = Color::from_hsl(Hsl::new(120.0, 85.0, 60.0));
        for entry in after.iter().skip(1) {
            assert_eq!(entry.background(), expected);
            assert!(!entry.is_locked());
            assert!(!entry.is_base_color());
        }
    }

    #[test]
    fn draws_hue_then_saturation_then_lightness() {
        let before = navy();
        // Out-of-range script values are clamped, so each draw lands on its
        // range edge: hue 359, saturation 70, lightness 40.
        let after = shuffle(&before, &mut Scripted::new(&[400, 0, 0]));
        let got = after.get(1).unwrap().background();
        assert_eq!(got, Color::from_hsl(Hsl::new(359.0, 70.0, 40.0)));
    }

    #[test]
    fn shuffled_names_use_three_buckets() {
        // Navy sits near hue 215: 335 is a third above it, 95 a third below.
        let script = [200, 80, 50, 30, 80, 50, 335, 80, 50, 95, 80, 50];
        let after = shuffle(&navy(), &mut Scripted::new(&script));
        let names: Vec<&str> = after.iter().skip(1).take(4).map(ColorCombination::name).collect();
        assert_eq!(names, ["Analogous", "Complementary", "Triadic", "Random"]);
    }

    #[test]
    fn same_seed_same_shuffle() {
        let before = compose("#0FAE96", HarmonyKind::All).unwrap();
        let a = shuffle(&before, &mut StdRng::seed_from_u64(99));
        let b = shuffle(&before, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn fully_locked_palette_is_unchanged() {
        let mut palette = navy();
        for i in 1..palette.len() {
            palette = palette.toggle_lock(i);
        }
        let after = shuffle(&palette, &mut StdRng::seed_from_u64(3));
        assert_eq!(after, palette);
    }

    // ── random color ────────────────────────────────────────────────

    #[test]
    fn random_color_takes_rgb_in_order() {
        let color = random_color(&mut Scripted::new(&[0x12, 0xAB, 0xFF]));
        assert_eq!(color.to_hex(), "#12ABFF");
    }

    #[test]
    fn random_color_is_seedable() {
        let a = random_color(&mut StdRng::seed_from_u64(5));
        let b = random_color(&mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
