//! Named presets: a base color plus a harmony, ready to compose.

use wp_color::Color;

use crate::harmony::HarmonyKind;
use crate::palette::{Palette, compose_color};

/// A named starting point for a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub base: Color,
    pub harmony: HarmonyKind,
    pub description: &'static str,
}

impl Preset {
    /// Compose this preset's palette.
    #[must_use]
    pub fn compose(&self) -> Palette {
        compose_color(self.base, self.harmony)
    }
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "default",
        base: Color::from_rgb(0x1A, 0x36, 0x5D),
        harmony: HarmonyKind::All,
        description: "Blue slate across every harmony",
    },
    Preset {
        name: "teal",
        base: Color::from_rgb(0x0F, 0xAE, 0x96),
        harmony: HarmonyKind::All,
        description: "Teal across every harmony",
    },
    Preset {
        name: "navy-complementary",
        base: Color::from_rgb(0x1A, 0x36, 0x5D),
        harmony: HarmonyKind::Complementary,
        description: "Blue slate against warm ochres",
    },
    Preset {
        name: "emerald-triadic",
        base: Color::from_rgb(0x34, 0xD3, 0x99),
        harmony: HarmonyKind::Triadic,
        description: "Emerald with violet and amber thirds",
    },
    Preset {
        name: "violet-analogous",
        base: Color::from_rgb(0xA7, 0x8B, 0xFA),
        harmony: HarmonyKind::Analogous,
        description: "Violet with its blue and magenta neighbours",
    },
    Preset {
        name: "coral-mono",
        base: Color::from_rgb(0xF8, 0x71, 0x71),
        harmony: HarmonyKind::Monochromatic,
        description: "Tints and shades of a light red",
    },
];

/// Look up a preset by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn preset(name: &str) -> Option<Preset> {
    PRESETS.iter().find(|p| p.name == name).copied()
}

/// Every preset, in listing order.
#[must_use]
pub const fn presets() -> &'static [Preset] {
    PRESETS
}

/// List all available preset names.
#[must_use]
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
