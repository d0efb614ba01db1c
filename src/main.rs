// SPDX-License-Identifier: MIT
//
// wcag-palette — accessible color palettes from one base color.
//
// This binary wires the engine crates to a command line:
//
//   wp-color   → hex / RGB / HSL values
//   wp-palette → harmonies, WCAG contrast, composition, shuffle, presets
//
// Every subcommand resolves its inputs the same way: explicit flag first,
// then the config file, then the built-in default. Results go to stdout as
// text or JSON; logs go to stderr so JSON output stays clean.
//
//   args ──► config::load ──► resolve base/harmony ──► wp_palette ──► output

mod config;
mod output;

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use wp_palette::{Color, HarmonyKind, Palette, builtin, compose_color, evaluate, random_color, shuffle};

use crate::config::{Config, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "wcag-palette", version, about = "WCAG-compliant color palette generator")]
struct Cli {
    /// Override config file path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compose a palette from a base color (default).
    Generate {
        /// Base color as #RRGGBB. Defaults to the configured base color.
        base: Option<Color>,
        #[arg(long)]
        harmony: Option<HarmonyKind>,
        #[arg(long)]
        json: bool,
    },
    /// Compose a palette, lock some entries, then redraw the rest.
    Shuffle {
        base: Option<Color>,
        #[arg(long)]
        harmony: Option<HarmonyKind>,
        /// Entry index to keep; repeatable. Entry 0 is always kept.
        #[arg(long = "lock", value_name = "INDEX")]
        locks: Vec<usize>,
        /// Seed for a reproducible shuffle.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Contrast report for a foreground/background pair.
    Check {
        foreground: Color,
        background: Color,
        #[arg(long)]
        json: bool,
    },
    /// Compose a palette around a random base color.
    Random {
        #[arg(long)]
        harmony: Option<HarmonyKind>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// List presets, or compose one by name.
    Preset {
        name: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List harmony names.
    Harmonies,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Generate { base: None, harmony: None, json: false }) {
        Command::Generate { base, harmony, json } => {
            let palette = compose_color(
                base.unwrap_or(cfg.palette.base_color),
                harmony.unwrap_or(cfg.palette.harmony),
            );
            print_palette(&mut out, &cfg, &palette, json)?;
        }
        Command::Shuffle { base, harmony, locks, seed, json } => {
            let mut palette = compose_color(
                base.unwrap_or(cfg.palette.base_color),
                harmony.unwrap_or(cfg.palette.harmony),
            );
            for index in locks.into_iter().collect::<BTreeSet<_>>() {
                if index >= palette.len() {
                    bail!("lock index {index} out of range (palette has {} entries)", palette.len());
                }
                if index > 0 && !palette.entries()[index].is_locked() {
                    palette = palette.toggle_lock(index);
                }
            }
            let palette = shuffle(&palette, &mut make_rng(seed));
            print_palette(&mut out, &cfg, &palette, json)?;
        }
        Command::Check { foreground, background, json } => {
            let report = evaluate(foreground, background);
            if wants_json(&cfg, json) {
                output::write_json(&mut out, &report)?;
            } else {
                output::write_report(&mut out, &report).context("write report")?;
            }
        }
        Command::Random { harmony, seed, json } => {
            let base = random_color(&mut make_rng(seed));
            tracing::debug!(base = %base, "random base color");
            let palette = compose_color(base, harmony.unwrap_or(cfg.palette.harmony));
            print_palette(&mut out, &cfg, &palette, json)?;
        }
        Command::Preset { name: None, json } => {
            let presets = builtin::presets();
            if wants_json(&cfg, json) {
                let names: Vec<&str> = presets.iter().map(|p| p.name).collect();
                output::write_json(&mut out, &names)?;
            } else {
                output::write_presets(&mut out, presets).context("write presets")?;
            }
        }
        Command::Preset { name: Some(name), json } => {
            let Some(preset) = builtin::preset(&name) else {
                bail!(
                    "unknown preset {name:?} (expected one of: {})",
                    builtin::preset_names().join(", ")
                );
            };
            print_palette(&mut out, &cfg, &preset.compose(), json)?;
        }
        Command::Harmonies => {
            output::write_harmonies(&mut out).context("write harmonies")?;
        }
    }

    out.flush().context("flush stdout")?;
    Ok(())
}

fn wants_json(cfg: &Config, flag: bool) -> bool {
    flag || cfg.output.format == OutputFormat::Json
}

fn print_palette<W: Write>(out: &mut W, cfg: &Config, palette: &Palette, json: bool) -> anyhow::Result<()> {
    if wants_json(cfg, json) {
        output::write_json(out, palette)
    } else {
        output::write_palette(out, palette, cfg.output.show_names).context("write palette")
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
