// SPDX-License-Identifier: MIT
//
// User configuration, read from TOML.
//
// The file is optional. Every section and every key falls back to its
// default, so a config that only sets `[output] format = "json"` is valid.
//
//   [palette]
//   base_color = "#1A365D"
//   harmony = "all"
//
//   [output]
//   format = "text"
//   show_names = true

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use wp_palette::{Color, HarmonyKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Base color used when no color is given on the command line.
    pub base_color: Color,
    /// Harmony used when `--harmony` is not given.
    pub harmony: HarmonyKind,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            base_color: Color::from_rgb(0x1A, 0x36, 0x5D),
            harmony: HarmonyKind::All,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print the relationship label at the end of each text line.
    pub show_names: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_names: true,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "wcag-palette", "wcag-palette")
        .context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

/// Load the config at `override_path`, or at the default location.
///
/// A missing file yields the defaults. A file that exists but does not
/// parse is an error.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
