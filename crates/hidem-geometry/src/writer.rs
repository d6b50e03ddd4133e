//! Text output in the geometry-file format HiDEM reads.

use std::io::Write;

use crate::error::GeometryError;
use crate::grid::GeometryGrid;

/// Write a geometry grid as a HiDEM geometry file.
///
/// First line is the node count; each following line is one node with
/// columns `x y surface base bed friction`, plus the integer mask column
/// when `include_mask` is set. Values use 18-digit scientific notation so
/// no precision is lost on the way into the simulator.
pub fn write_geometry<W: Write>(
    writer: &mut W,
    grid: &GeometryGrid,
    include_mask: bool,
) -> Result<(), GeometryError> {
    writeln!(writer, "{}", grid.len())?;
    for p in &grid.points {
        write!(
            writer,
            "{} {} {} {} {} {}",
            fmt_scientific(p.x),
            fmt_scientific(p.y),
            fmt_scientific(p.surface),
            fmt_scientific(p.base),
            fmt_scientific(p.bed),
            fmt_scientific(p.friction),
        )?;
        if include_mask {
            write!(writer, " {}", p.mask)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Format a value like printf `% .18e`: 18 fractional digits, a signed
/// two-digit exponent, and a leading space on non-negative values so
/// columns stay aligned.
fn fmt_scientific(value: f64) -> String {
    let formatted = format!("{value:.18e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(rest) => ('-', rest),
        None => ('+', exponent),
    };
    let lead = if value.is_sign_negative() { "" } else { " " };
    format!("{lead}{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GeometryParams, build_grid};

    fn small_grid() -> GeometryGrid {
        build_grid(&GeometryParams {
            x_start: 0.0,
            x_end: 50.0,
            y_start: 0.0,
            y_end: 50.0,
            dx: 25.0,
            ..GeometryParams::default()
        })
        .unwrap()
    }

    #[test]
    fn scientific_format_matches_printf() {
        assert_eq!(fmt_scientific(1.0), " 1.000000000000000000e+00");
        assert_eq!(fmt_scientific(-3.25), "-3.250000000000000000e+00");
        assert_eq!(fmt_scientific(1600.0), " 1.600000000000000000e+03");
        assert_eq!(fmt_scientific(0.0), " 0.000000000000000000e+00");
        assert_eq!(fmt_scientific(0.001), " 1.000000000000000000e-03");
    }

    #[test]
    fn count_line_then_one_row_per_node() {
        let grid = small_grid();
        let mut out = Vec::new();
        write_geometry(&mut out, &grid, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "9");
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1].split_whitespace().count(), 6);
    }

    #[test]
    fn mask_column_is_integer_when_requested() {
        let grid = small_grid();
        let mut out = Vec::new();
        write_geometry(&mut out, &grid, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        let first = text.lines().nth(1).unwrap();
        let columns: Vec<&str> = first.split_whitespace().collect();
        assert_eq!(columns.len(), 7);
        assert_eq!(*columns.last().unwrap(), "1");
    }

    #[test]
    fn rows_carry_the_node_values() {
        let grid = small_grid();
        let mut out = Vec::new();
        write_geometry(&mut out, &grid, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        // Second interior row: x=25, y=0, surface at the inland height.
        let row = text.lines().nth(2).unwrap();
        assert!(row.starts_with(" 2.500000000000000000e+01  0.000000000000000000e+00"));
        assert!(row.contains("3.000000000000000000e+02"));
    }
}
