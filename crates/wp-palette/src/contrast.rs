//! WCAG 2.1/2.2 contrast evaluation.
//!
//! Three layers, each built on the one before:
//!
//! - [`relative_luminance`]: sRGB channels → perceptual brightness in [0, 1]
//! - [`contrast_ratio`]: two luminances → ratio in [1, 21]
//! - [`classify`]: ratio + text context → [`WcagLevel`]
//!
//! Palette entries always pair a background with pure black or pure white
//! text, whichever reads better ([`best_text_color`]).

use std::fmt;

use serde::{Deserialize, Serialize};
use wp_color::Color;

/// Normal text: AAA threshold.
pub const AAA_NORMAL_TEXT: f64 = 7.0;
/// Normal text: AA threshold.
pub const AA_NORMAL_TEXT: f64 = 4.5;
/// Large text (18pt, or 14pt bold): AAA threshold.
pub const AAA_LARGE_TEXT: f64 = 4.5;
/// Large text: AA threshold.
pub const AA_LARGE_TEXT: f64 = 3.0;
/// Non-text UI components and graphical objects.
pub const AA_UI_COMPONENT: f64 = 3.0;

// ---------------------------------------------------------------------------
// Luminance and ratio
// ---------------------------------------------------------------------------

/// Relative luminance of an 8-bit sRGB triple per WCAG 2.x.
///
/// Each channel is linearized (`v <= 0.03928 ? v / 12.92 : ((v + 0.055) / 1.055)^2.4`)
/// and combined as `0.2126 R + 0.7152 G + 0.0722 B`.
#[must_use]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    let r_lin = linearize(r);
    let g_lin = linearize(g);
    let b_lin = linearize(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// The WCAG 2.x transfer function. Note the 0.03928 knee from the WCAG text,
/// not the 0.04045 of the sRGB standard.
#[inline]
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a [`Color`].
#[must_use]
pub fn luminance(color: Color) -> f64 {
    let rgb = color.rgb();
    relative_luminance(rgb.r, rgb.g, rgb.b)
}

/// Contrast ratio between two relative luminances.
///
/// `(lighter + 0.05) / (darker + 0.05)`: symmetric, and always >= 1.0.
#[must_use]
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two colors.
#[must_use]
pub fn color_contrast(a: Color, b: Color) -> f64 {
    contrast_ratio(luminance(a), luminance(b))
}

/// Pick pure black or pure white text for `background`, whichever gives the
/// higher contrast. Black wins an exact tie.
#[must_use]
pub fn best_text_color(background: Color) -> (Color, f64) {
    let bg = luminance(background);
    let on_black = contrast_ratio(bg, luminance(Color::BLACK));
    let on_white = contrast_ratio(bg, luminance(Color::WHITE));
    if on_black >= on_white {
        (Color::BLACK, on_black)
    } else {
        (Color::WHITE, on_white)
    }
}

// ---------------------------------------------------------------------------
// WcagLevel
// ---------------------------------------------------------------------------

/// Conformance level reached by a contrast ratio.
///
/// Ordered `Fail < Aa < Aaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "Fail")]
    Fail,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// AA or better.
    #[must_use]
    pub const fn passes(self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a contrast ratio.
///
/// - UI components: >= 3 is AA; there is no AAA tier.
/// - Large text: >= 4.5 AAA, >= 3 AA.
/// - Normal text: >= 7 AAA, >= 4.5 AA.
///
/// Every threshold is inclusive. `is_ui` takes precedence over `is_large_text`.
#[must_use]
pub fn classify(ratio: f64, is_large_text: bool, is_ui: bool) -> WcagLevel {
    let (aaa, aa) = if is_ui {
        (f64::INFINITY, AA_UI_COMPONENT)
    } else if is_large_text {
        (AAA_LARGE_TEXT, AA_LARGE_TEXT)
    } else {
        (AAA_NORMAL_TEXT, AA_NORMAL_TEXT)
    };

    if ratio >= aaa {
        WcagLevel::Aaa
    } else if ratio >= aa {
        WcagLevel::Aa
    } else {
        WcagLevel::Fail
    }
}

// ---------------------------------------------------------------------------
// ContrastReport
// ---------------------------------------------------------------------------

/// Contrast of an arbitrary foreground/background pair under every text
/// context at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    pub foreground: Color,
    pub background: Color,
    pub ratio: f64,
    pub normal_text: WcagLevel,
    pub large_text: WcagLevel,
    pub ui_component: WcagLevel,
}

/// Evaluate `foreground` on `background`.
#[must_use]
pub fn evaluate(foreground: Color, background: Color) -> ContrastReport {
    let ratio = color_contrast(foreground, background);
    ContrastReport {
        foreground,
        background,
        ratio,
        normal_text: classify(ratio, false, false),
        large_text: classify(ratio, true, false),
        ui_component: classify(ratio, false, true),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
