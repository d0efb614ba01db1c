// SPDX-License-Identifier: MIT
//
// Text and JSON rendering for palettes and contrast reports.
//
// Text layout, one line per entry:
//
//     0  #1A365D  #FFFFFF  12.15:1  AAA   *  Blue Slate
//     │  │        │        │        │     │  └ name (optional)
//     │  │        │        │        │     └ lock marker
//     │  │        │        │        └ WCAG level, normal text
//     │  │        │        └ contrast ratio
//     │  │        └ text color
//     │  └ background
//     └ index

use std::io::{self, Write};

use serde::Serialize;
use wp_palette::builtin::Preset;
use wp_palette::{ContrastReport, HarmonyKind, Palette};

/// Write any serializable value as pretty JSON plus a trailing newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_palette<W: Write>(out: &mut W, palette: &Palette, show_names: bool) -> io::Result<()> {
    for (index, entry) in palette.iter().enumerate() {
        let lock = if entry.is_locked() { '*' } else { ' ' };
        write!(
            out,
            "{index:>3}  {}  {}  {:>6.2}:1  {:<4}  {lock}",
            entry.background(),
            entry.text(),
            entry.ratio(),
            entry.wcag_level().as_str(),
        )?;
        if show_names {
            write!(out, "  {}", entry.name())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, report: &ContrastReport) -> io::Result<()> {
    writeln!(out, "foreground    {}", report.foreground)?;
    writeln!(out, "background    {}", report.background)?;
    writeln!(out, "ratio         {:.2}:1", report.ratio)?;
    writeln!(out, "normal text   {}", report.normal_text)?;
    writeln!(out, "large text    {}", report.large_text)?;
    writeln!(out, "ui component  {}", report.ui_component)?;
    Ok(())
}

pub fn write_harmonies<W: Write>(out: &mut W) -> io::Result<()> {
    for kind in HarmonyKind::selectable() {
        writeln!(out, "{:<20}  {}", kind.name(), kind.label())?;
    }
    Ok(())
}

pub fn write_presets<W: Write>(out: &mut W, presets: &[Preset]) -> io::Result<()> {
    for p in presets {
        writeln!(out, "{:<18}  {}  {:<19}  {}", p.name, p.base, p.harmony.name(), p.description)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wp_palette::{Color, compose, evaluate};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn palette_lines() {
        let palette = compose("#1A365D", HarmonyKind::Complementary).unwrap();
        let text = render(|out| write_palette(out, &palette, true));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), palette.len());
        assert!(lines[0].starts_with("  0  #1A365D  #FFFFFF  "), "{}", lines[0]);
        assert!(lines[0].contains(":1  AAA"), "{}", lines[0]);
        assert!(lines[0].ends_with("*  Blue Slate"), "{}", lines[0]);
        assert!(lines[1].ends_with("Complementary"), "{}", lines[1]);
    }

    #[test]
    fn names_can_be_hidden() {
        let palette = compose("#1A365D", HarmonyKind::Complementary).unwrap();
        let text = render(|out| write_palette(out, &palette, false));
        assert!(!text.contains("Blue Slate"));
        assert!(text.lines().next().unwrap().ends_with('*'));
    }

    #[test]
    fn report_lines() {
        let report = evaluate(Color::BLACK, Color::WHITE);
        let text = render(|out| write_report(out, &report));
        assert_eq!(
            text,
            "foreground    #000000\n\
             background    #FFFFFF\n\
             ratio         21.00:1\n\
             normal text   AAA\n\
             large text    AAA\n\
             ui component  AA\n"
        );
    }

    #[test]
    fn harmonies_list_all_first() {
        let text = render(write_harmonies);
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("all "), "{first}");
        assert!(first.ends_with("All Harmonies"), "{first}");
        assert_eq!(text.lines().count(), HarmonyKind::selectable().len());
    }

    #[test]
    fn json_has_trailing_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &evaluate(Color::BLACK, Color::WHITE)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"normalText\": \"AAA\""), "{text}");
    }
}
