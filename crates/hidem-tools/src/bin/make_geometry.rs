//! Generate a HiDEM geometry input file.
//!
//! Builds a rectangular grid describing an ice slab with a linear surface
//! gradient ending in open ocean, and writes it in the column format the
//! simulator reads (`x y surface base bed friction [mask]`).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hidem_geometry::{GeometryParams, build_grid, write_geometry};

/// Generate a HiDEM geometry file.
#[derive(Parser)]
#[command(name = "make_geometry")]
#[command(version)]
#[command(about = "Generate a HiDEM geometry file (x, y, surface, base, bed, friction[, mask])")]
struct Args {
    /// Output filename
    #[arg(short, long, default_value = "geometry.dat")]
    output: PathBuf,

    /// Start of domain in x-direction (m)
    #[arg(long, default_value_t = -100.0)]
    xstart: f64,

    /// End of domain in x-direction (m)
    #[arg(long, default_value_t = 1600.0)]
    xend: f64,

    /// Start of domain in y-direction (m)
    #[arg(long, default_value_t = 0.0)]
    ystart: f64,

    /// End of domain in y-direction (m)
    #[arg(long, default_value_t = 4000.0)]
    yend: f64,

    /// Grid spacing in metres
    #[arg(long, default_value_t = 25.0)]
    dx: f64,

    /// Length of ice sheet along y (m)
    #[arg(long, default_value_t = 1000.0)]
    ice_length: f64,

    /// Inland ice surface height (m)
    #[arg(long, default_value_t = 300.0)]
    height_inland: f64,

    /// Ocean-facing ice surface height (m)
    #[arg(long, default_value_t = 200.0)]
    height_ocean: f64,

    /// Include the geometry mask column (ice=1, ocean=2)
    #[arg(long)]
    include_mask: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    hidem_tools::init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let params = GeometryParams {
        x_start: args.xstart,
        x_end: args.xend,
        y_start: args.ystart,
        y_end: args.yend,
        dx: args.dx,
        ice_length: args.ice_length,
        height_inland: args.height_inland,
        height_ocean: args.height_ocean,
    };

    let x_span = format!("{}..{}", params.x_start, params.x_end);
    let y_span = format!("{}..{}", params.y_start, params.y_end);
    tracing::info!(
        x = %x_span,
        y = %y_span,
        dx = params.dx,
        ice_length = params.ice_length,
        "building geometry grid"
    );

    let grid = build_grid(&params).map_err(|err| err.to_string())?;

    let file = File::create(&args.output)
        .map_err(|err| format!("cannot create {}: {err}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    write_geometry(&mut writer, &grid, args.include_mask).map_err(|err| err.to_string())?;
    writer.flush().map_err(|err| err.to_string())?;

    println!("Geometry file written to {}", args.output.display());
    println!(
        "  domain: {:.0} m x {:.0} m, spacing {:.1} m -> {} x {} points ({} total)",
        params.x_end - params.x_start,
        params.y_end - params.y_start,
        params.dx,
        grid.nx,
        grid.ny,
        grid.len()
    );
    if args.include_mask {
        println!("  included mask column (ice=1, ocean=2)");
    }
    Ok(())
}
