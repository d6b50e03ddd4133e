//! Convert HiDEM VTU output with raw appended point data to CSV.
//!
//! Reads the container's text header to learn the element width and byte
//! order, decodes the appended `Position` payload, and writes one
//! comma-separated coordinate triple per line. The output file is only
//! created once the whole payload has decoded, so a failed run never leaves
//! a finalized CSV behind.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hidem_vtu::{decode_positions, write_csv};

/// Convert a VTU file with appended binary point data to CSV.
#[derive(Parser)]
#[command(name = "vtu2csv")]
#[command(version)]
#[command(about = "Convert HiDEM VTU binary appended data to CSV")]
struct Args {
    /// Input VTU file
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV file (defaults to the input path with a .csv extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

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
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("csv"));

    let input = File::open(&args.input)
        .map_err(|err| format!("cannot open {}: {err}", args.input.display()))?;
    let mut reader = BufReader::new(input);

    tracing::info!("reading {}", args.input.display());
    let points = decode_positions(&mut reader).map_err(|err| err.to_string())?;
    drop(reader);

    let file = File::create(&output)
        .map_err(|err| format!("cannot create {}: {err}", output.display()))?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, points).map_err(|err| err.to_string())?;
    writer.flush().map_err(|err| err.to_string())?;

    tracing::info!("saved CSV data to {}", output.display());
    Ok(())
}
