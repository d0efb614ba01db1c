//! # wp-palette — WCAG palette generation engine
//!
//! Builds accessible color palettes from a single base color. Every entry is
//! paired with black or white text, whichever contrasts more, and rated
//! against WCAG 2.x thresholds.
//!
//! # Architecture
//!
//! ```text
//! base hex + HarmonyKind
//!     │
//!     ▼
//! harmony.rs:  candidate colors around related hues (pure math)
//!     │
//!     ▼
//! palette.rs:  dedup, evaluate contrast, label relationship to base
//!     │            │
//!     │            ├── contrast.rs: luminance, ratio, AAA/AA/Fail
//!     │            ├── relation.rs: hue / tone relationship labels
//!     │            └── naming.rs:   human name for the base color
//!     ▼
//! Palette ──► shuffle.rs: redraw unlocked slots from a RandomSource
//! ```
//!
//! # Determinism
//!
//! [`compose`] is a pure function of its inputs. [`shuffle`] is a pure
//! function of the palette and the random source passed in; nothing here
//! reaches for a global generator.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod builtin;
pub mod contrast;
pub mod harmony;
pub mod naming;
pub mod palette;
pub mod relation;
pub mod shuffle;

pub use contrast::{ContrastReport, WcagLevel, classify, evaluate};
pub use harmony::{HarmonyKind, UnknownHarmony};
pub use palette::{ColorCombination, Palette, compose, compose_color, toggle_lock};
pub use relation::Relationship;
pub use shuffle::{RandomSource, random_color, shuffle};
pub use wp_color::{Color, ColorParseError, Hsl, Rgb};
