//! Generate synthetic geometry input grids for HiDEM runs.
//!
//! A HiDEM geometry file is a rectangular grid of surface samples, one line
//! per grid node with columns `x y surface base bed friction [mask]`,
//! preceded by a single line holding the node count. This crate builds the
//! grid for a simple calving-front setup (an ice slab with a linear surface
//! gradient ending in open ocean) and writes it in the fixed-width
//! scientific format the simulator reads.

mod error;
mod grid;
mod writer;

pub use error::GeometryError;
pub use grid::{GeometryGrid, GeometryParams, GridPoint, build_grid};
pub use writer::write_geometry;
