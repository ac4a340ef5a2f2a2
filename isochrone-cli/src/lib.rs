//! Command-line interface for the isochrone engine.
//!
//! Every command writes a single JSON document to stdout.
#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod decode;
mod error;
mod estimate;
mod overlap;

pub use error::CliError;

use decode::{DecodeArgs, run_decode};
use estimate::{EstimateArgs, HttpProviderFactory, run_estimate_with};
use overlap::{OverlapArgs, run_overlap};

pub(crate) const ARG_RINGS: &str = "rings";
pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LNG: &str = "lng";
pub(crate) const ARG_MINUTES: &str = "minutes";
pub(crate) const ARG_MODE: &str = "mode";
pub(crate) const ARG_OSRM_BASE_URL: &str = "osrm-base-url";
pub(crate) const ARG_SAMPLE_DIRECTIONS: &str = "sample-directions";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ENV_LAT: &str = "ISOCHRONE_CMDS_ESTIMATE_LAT";
pub(crate) const ENV_LNG: &str = "ISOCHRONE_CMDS_ESTIMATE_LNG";
pub(crate) const ENV_MINUTES: &str = "ISOCHRONE_CMDS_ESTIMATE_MINUTES";

/// Run the isochrone CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_with(std::env::args_os(), &HttpProviderFactory, &mut stdout)
}

fn run_with<I, T>(
    argv: I,
    factory: &dyn estimate::ProviderFactory,
    writer: &mut dyn Write,
) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(argv).map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Decode(args) => run_decode(&args, writer),
        Command::Overlap(args) => run_overlap(&args, writer),
        Command::Estimate(args) => run_estimate_with(args, factory, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "isochrone",
    about = "Decode isolines, intersect travel-time polygons and estimate reach rings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a flexible polyline into coordinates.
    Decode(DecodeArgs),
    /// Find the region reachable from every location in a rings file.
    Overlap(OverlapArgs),
    /// Estimate a travel-time ring around a point.
    Estimate(EstimateArgs),
}

/// Serialize `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
