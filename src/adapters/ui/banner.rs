//! Startup marquee: figlet title shaded from ticket pink to marquee gold.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write};

const TITLE: &str = "BOOKING";

type Rgb = (u8, u8, u8);

const TICKET_PINK: Rgb = (0xff, 0x2e, 0x88);
const MARQUEE_GOLD: Rgb = (0xff, 0xc5, 0x3d);

/// Colour for row `row` of `rows`, walking from pink (top) to gold (bottom).
fn shade(row: usize, rows: usize) -> Rgb {
    let t = if rows <= 1 {
        1.0
    } else {
        row as f64 / (rows - 1) as f64
    };
    let mix = |from: u8, to: u8| (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8;
    (
        mix(TICKET_PINK.0, MARQUEE_GOLD.0),
        mix(TICKET_PINK.1, MARQUEE_GOLD.1),
        mix(TICKET_PINK.2, MARQUEE_GOLD.2),
    )
}

/// Title rows paired with their colour. Plain text title if figlet has no font.
fn marquee_rows() -> Vec<(String, Rgb)> {
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| TITLE.to_string());
    let rows: Vec<&str> = art.lines().filter(|l| !l.trim().is_empty()).collect();
    let count = rows.len();
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| (row.to_string(), shade(i, count)))
        .collect()
}

fn fg((r, g, b): Rgb) -> SetForegroundColor {
    SetForegroundColor(Color::Rgb { r, g, b })
}

fn write_marquee(out: &mut impl Write) -> io::Result<()> {
    for (row, colour) in marquee_rows() {
        queue!(out, fg(colour), Print(row), ResetColor, Print("\r\n"))?;
    }
    queue!(
        out,
        fg(MARQUEE_GOLD),
        Print(format!("storefront assistant v{}\r\n", env!("CARGO_PKG_VERSION"))),
        ResetColor
    )?;
    out.flush()
}

/// Print the marquee to stdout. Terminal errors only cost the decoration.
pub fn print_marquee() {
    if let Err(e) = write_marquee(&mut io::stdout()) {
        tracing::debug!(error = %e, "banner not printed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_runs_pink_to_gold() {
        assert_eq!(shade(0, 6), TICKET_PINK);
        assert_eq!(shade(5, 6), MARQUEE_GOLD);
        assert_eq!(shade(0, 1), MARQUEE_GOLD);
    }

    #[test]
    fn test_marquee_has_coloured_rows() {
        let rows = marquee_rows();
        assert!(!rows.is_empty());
        assert_eq!(rows[0].1, TICKET_PINK);
    }

    #[test]
    fn test_write_marquee_ends_with_version() {
        let mut buf = Vec::new();
        write_marquee(&mut buf).unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains(&format!("v{}", env!("CARGO_PKG_VERSION"))));
    }
}
