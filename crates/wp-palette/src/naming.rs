//! Human-readable color labels.
//!
//! A presentation heuristic: an exact-match table of well-known colors first,
//! then an HSL description built from a hue family plus lightness and
//! saturation modifiers ("Muted Dark Red", "Vibrant Light Blue"). Very
//! desaturated colors are described on the gray scale instead.

use wp_color::{Color, Hsl};

/// Curated exact matches, keyed by canonical uppercase hex.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("#FF0000", "Red"),
    ("#00FF00", "Green"),
    ("#0000FF", "Blue"),
    ("#FFFF00", "Yellow"),
    ("#FF00FF", "Magenta"),
    ("#00FFFF", "Cyan"),
    ("#000000", "Black"),
    ("#FFFFFF", "White"),
    ("#808080", "Gray"),
    ("#800000", "Maroon"),
    ("#808000", "Olive"),
    ("#008000", "Dark Green"),
    ("#800080", "Purple"),
    ("#008080", "Teal"),
    ("#000080", "Navy"),
    ("#FFA500", "Orange"),
    ("#A52A2A", "Brown"),
    ("#1A365D", "Blue Slate"),
    ("#F87171", "Light Red"),
    ("#34D399", "Emerald"),
    ("#60A5FA", "Blue"),
    ("#A78BFA", "Violet"),
    ("#F472B6", "Pink"),
];

/// One of the six 60-degree hue families, centered on the primaries and
/// secondaries (red spans 330..30).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueFamily {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl HueFamily {
    /// Bucket a hue in degrees.
    #[must_use]
    pub fn of(hue: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        if !(30.0..330.0).contains(&hue) {
            Self::Red
        } else if hue < 90.0 {
            Self::Yellow
        } else if hue < 150.0 {
            Self::Green
        } else if hue < 210.0 {
            Self::Cyan
        } else if hue < 270.0 {
            Self::Blue
        } else {
            Self::Magenta
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Cyan => "Cyan",
            Self::Blue => "Blue",
            Self::Magenta => "Magenta",
        }
    }
}

/// Describe a color in words.
#[must_use]
pub fn color_name(color: Color) -> String {
    let hex = color.to_hex();
    if let Some((_, name)) = NAMED_COLORS.iter().find(|(key, _)| *key == hex) {
        return (*name).to_owned();
    }
    describe(color.hsl())
}

/// The heuristic half of [`color_name`], without the exact-match table.
#[must_use]
pub fn describe(hsl: Hsl) -> String {
    if hsl.s < 20.0 {
        return gray_name(hsl.l).to_owned();
    }

    let lightness = if hsl.l < 20.0 {
        "Dark "
    } else if hsl.l > 80.0 {
        "Light "
    } else {
        ""
    };

    let saturation = if hsl.s < 40.0 {
        "Muted "
    } else if hsl.s > 80.0 {
        "Vibrant "
    } else {
        ""
    };

    format!("{saturation}{lightness}{}", HueFamily::of(hsl.h).name())
}

const fn gray_name(lightness: f64) -> &'static str {
    if lightness < 20.0 {
        "Black"
    } else if lightness > 90.0 {
        "White"
    } else if lightness > 80.0 {
        "Light Gray"
    } else if lightness < 40.0 {
        "Dark Gray"
    } else {
        "Gray"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
