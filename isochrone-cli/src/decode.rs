//! `decode` command: flexible polyline to JSON.

use std::io::Write;

use clap::Parser;
use isochrone_core::polyline::decode;

use crate::{CliError, write_json};

/// CLI arguments for the `decode` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(about = "Decode a flexible polyline into coordinates")]
pub(crate) struct DecodeArgs {
    /// Encoded polyline, header included.
    #[arg(value_name = "polyline")]
    pub(crate) polyline: String,
}

pub(crate) fn run_decode(args: &DecodeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let decoded = decode(args.polyline.trim())?;
    write_json(writer, &decoded)
}
