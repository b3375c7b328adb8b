//! Console printing with optional colors

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::icons::Icon;

use super::line::{PERMISSION_DENIED, TreeLine};
use super::render::Report;

/// Print a report to stdout. Colors only touch directory labels and sentinels,
/// so the uncolored output is byte-identical to the report text.
///
/// `use_color` is final: terminal detection happens in the caller.
pub fn print_report(report: &Report, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_report(&mut stdout, report)
}

/// Write a report to any color-capable writer.
pub fn write_report<W: WriteColor>(out: &mut W, report: &Report) -> io::Result<()> {
    for line in &report.header {
        writeln!(out, "{}", line)?;
    }
    for line in &report.body {
        write_tree_line(out, line)?;
    }
    Ok(())
}

fn write_tree_line<W: WriteColor>(out: &mut W, line: &TreeLine) -> io::Result<()> {
    match line {
        TreeLine::Entry(entry) => {
            write!(
                out,
                "{}{} {} ",
                entry.prefix,
                entry.connector.glyph(),
                entry.icon
            )?;
            if entry.trailing_slash {
                let color = if entry.icon == Icon::KeyDirectory {
                    Color::Green
                } else {
                    Color::Blue
                };
                out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
                write!(out, "{}/", entry.label)?;
                out.reset()?;
            } else {
                write!(out, "{}", entry.label)?;
            }
            writeln!(out)?;
        }
        TreeLine::PermissionDenied { prefix } => {
            write!(out, "{}", prefix)?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(out, "{}", PERMISSION_DENIED)?;
            out.reset()?;
            writeln!(out)?;
        }
    }
    Ok(())
}
