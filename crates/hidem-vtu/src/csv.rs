//! CSV emission for decoded coordinates.

use std::io::Write;

use glam::DVec3;

/// Write coordinate triples as comma-separated rows.
///
/// One `x,y,z` row per point, fixed-point with six fractional digits, no
/// header row, no trailing metadata. Rows appear in iteration order, which
/// for decoded payloads is stream order.
pub fn write_csv<W, I>(writer: &mut W, points: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = DVec3>,
{
    for point in points {
        writeln!(writer, "{:.6},{:.6},{:.6}", point.x, point.y, point.z)?;
    }
    Ok(())
}
