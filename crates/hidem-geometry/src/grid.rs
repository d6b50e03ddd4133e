//! Grid construction for the calving-front geometry.

use crate::error::GeometryError;

/// Basal friction coefficient under grounded ice.
const ICE_FRICTION: f64 = 1000.0;

/// Mask value for grid nodes covered by ice.
pub const MASK_ICE: u8 = 1;
/// Mask value for open-ocean grid nodes.
pub const MASK_OCEAN: u8 = 2;

/// Parameters for the synthetic calving-front geometry.
///
/// The domain is a rectangle sampled at spacing `dx` in both directions.
/// Ice occupies `y < ice_length` with a surface sloping linearly from
/// `height_inland` at y = 0 to `height_ocean` at the ice front; the rest of
/// the domain is open ocean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryParams {
    /// Start of the domain in x (m).
    pub x_start: f64,
    /// End of the domain in x (m).
    pub x_end: f64,
    /// Start of the domain in y (m).
    pub y_start: f64,
    /// End of the domain in y (m).
    pub y_end: f64,
    /// Grid spacing (m).
    pub dx: f64,
    /// Length of the ice slab along y (m).
    pub ice_length: f64,
    /// Inland ice surface height (m).
    pub height_inland: f64,
    /// Ocean-facing ice surface height (m).
    pub height_ocean: f64,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            x_start: -100.0,
            x_end: 1600.0,
            y_start: 0.0,
            y_end: 4000.0,
            dx: 25.0,
            ice_length: 1000.0,
            height_inland: 300.0,
            height_ocean: 200.0,
        }
    }
}

/// One grid node of the geometry file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
    /// Ice surface elevation (m).
    pub surface: f64,
    /// Ice base elevation (m).
    pub base: f64,
    /// Bedrock elevation (m).
    pub bed: f64,
    /// Basal friction coefficient.
    pub friction: f64,
    /// Node classification: ice or ocean.
    pub mask: u8,
}

/// A fully built geometry grid in y-major node order.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryGrid {
    /// Number of nodes along x.
    pub nx: usize,
    /// Number of nodes along y.
    pub ny: usize,
    /// All `nx * ny` nodes, x varying fastest.
    pub points: Vec<GridPoint>,
}

impl GeometryGrid {
    /// Total node count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the grid holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build the geometry grid for the given parameters.
///
/// Node counts derive from the spacing: `nx = round((x_end - x_start) / dx)
/// + 1`, endpoints included. The outermost x columns get a zero surface so
/// the slab does not touch the lateral walls.
pub fn build_grid(params: &GeometryParams) -> Result<GeometryGrid, GeometryError> {
    if !(params.dx > 0.0) {
        return Err(GeometryError::InvalidDomain(format!(
            "grid spacing must be positive, got {}",
            params.dx
        )));
    }
    if params.x_end <= params.x_start || params.y_end <= params.y_start {
        return Err(GeometryError::InvalidDomain(format!(
            "domain extents must be positive, got x {}..{} and y {}..{}",
            params.x_start, params.x_end, params.y_start, params.y_end
        )));
    }

    let nx = node_count(params.x_start, params.x_end, params.dx);
    let ny = node_count(params.y_start, params.y_end, params.dx);

    let xs = linspace(params.x_start, params.x_end, nx);
    let ys = linspace(params.y_start, params.y_end, ny);

    let mut points = Vec::with_capacity(nx * ny);
    for &y in &ys {
        let on_ice = y < params.ice_length;
        for &x in &xs {
            let mut surface = if on_ice { ice_surface(params, y) } else { 0.0 };
            // Keep the slab off the lateral domain walls.
            if x < params.x_start + params.dx || x > params.x_end - params.dx {
                surface = 0.0;
            }
            points.push(GridPoint {
                x,
                y,
                surface,
                base: 0.0,
                bed: 0.0,
                friction: if on_ice { ICE_FRICTION } else { 0.0 },
                mask: if on_ice { MASK_ICE } else { MASK_OCEAN },
            });
        }
    }

    tracing::debug!(nx, ny, total = points.len(), "built geometry grid");

    Ok(GeometryGrid { nx, ny, points })
}

/// Ice surface height at distance `y` from the inland boundary.
///
/// Linear between the inland and ocean-facing heights, clamped at the
/// inland value for y < 0.
fn ice_surface(params: &GeometryParams, y: f64) -> f64 {
    let t = (y / params.ice_length).clamp(0.0, 1.0);
    params.height_inland + t * (params.height_ocean - params.height_inland)
}

fn node_count(start: f64, end: f64, dx: f64) -> usize {
    ((end - start) / dx).round() as usize + 1
}

/// Evenly spaced samples over `[start, end]`, endpoints included.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn default_grid_dimensions() {
        let grid = build_grid(&GeometryParams::default()).unwrap();

        assert_eq!(grid.nx, 69);
        assert_eq!(grid.ny, 161);
        assert_eq!(grid.len(), 69 * 161);
    }

    #[test]
    fn nodes_are_y_major_with_x_fastest() {
        let params = GeometryParams {
            x_start: 0.0,
            x_end: 50.0,
            y_start: 0.0,
            y_end: 50.0,
            dx: 25.0,
            ..GeometryParams::default()
        };
        let grid = build_grid(&params).unwrap();

        assert_eq!(grid.nx, 3);
        assert_eq!(grid.ny, 3);
        assert!((grid.points[0].x - 0.0).abs() < TOL);
        assert!((grid.points[1].x - 25.0).abs() < TOL);
        assert!((grid.points[3].x - 0.0).abs() < TOL);
        assert!((grid.points[3].y - 25.0).abs() < TOL);
    }

    #[test]
    fn surface_slopes_linearly_toward_the_front() {
        let params = GeometryParams::default();
        let grid = build_grid(&params).unwrap();
        let interior = |y: f64| {
            grid.points
                .iter()
                .find(|p| (p.y - y).abs() < TOL && (p.x - 500.0).abs() < TOL)
                .copied()
                .unwrap()
        };

        assert!((interior(0.0).surface - 300.0).abs() < TOL);
        assert!((interior(500.0).surface - 250.0).abs() < TOL);
        // At and beyond the ice front the surface is open ocean.
        assert!(interior(1000.0).surface.abs() < TOL);
        assert!(interior(4000.0).surface.abs() < TOL);
    }

    #[test]
    fn edge_columns_have_zero_surface() {
        let grid = build_grid(&GeometryParams::default()).unwrap();

        for p in grid.points.iter().filter(|p| p.y < 1000.0) {
            let at_edge = p.x < -100.0 + 25.0 || p.x > 1600.0 - 25.0;
            if at_edge {
                assert!(p.surface.abs() < TOL, "edge node at x={} has surface", p.x);
            }
        }
    }

    #[test]
    fn friction_and_mask_follow_the_ice_front() {
        let grid = build_grid(&GeometryParams::default()).unwrap();

        for p in &grid.points {
            if p.y < 1000.0 {
                assert!((p.friction - 1000.0).abs() < TOL);
                assert_eq!(p.mask, MASK_ICE);
            } else {
                assert!(p.friction.abs() < TOL);
                assert_eq!(p.mask, MASK_OCEAN);
            }
        }
    }

    #[test]
    fn base_and_bed_are_flat() {
        let grid = build_grid(&GeometryParams::default()).unwrap();
        assert!(
            grid.points
                .iter()
                .all(|p| p.base.abs() < TOL && p.bed.abs() < TOL)
        );
    }

    #[test]
    fn non_positive_spacing_is_rejected() {
        let params = GeometryParams {
            dx: 0.0,
            ..GeometryParams::default()
        };
        assert!(matches!(
            build_grid(&params),
            Err(GeometryError::InvalidDomain(_))
        ));
    }

    #[test]
    fn inverted_domain_is_rejected() {
        let params = GeometryParams {
            x_start: 100.0,
            x_end: 0.0,
            ..GeometryParams::default()
        };
        assert!(matches!(
            build_grid(&params),
            Err(GeometryError::InvalidDomain(_))
        ));
    }
}
