// SPDX-License-Identifier: MIT
//
// wp-color — color primitives for wcag-palette.
//
// A deliberately small crate: validated hex parsing, 8-bit RGB, and HSL in
// the units palette rules are written in (degrees and percentages). Everything
// perceptual (luminance, contrast, naming, harmonies) lives in wp-palette and
// builds on the conversions here.

pub mod color;

pub use color::{Color, ColorParseError, Hsl, Rgb};
