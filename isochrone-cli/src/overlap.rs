//! `overlap` command: intersect per-location rings read from a JSON file.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use isochrone_core::{OverlapResolver, OverlapResult, Point, Ring};
use serde::{Deserialize, Serialize};

use crate::{ARG_RINGS, CliError, write_json};

/// CLI arguments for the `overlap` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    long_about = "Intersect the travel-time rings of several locations. The \
                 file holds a JSON array of {\"id\", \"points\"} objects, \
                 each point being {\"lat\", \"lng\"}.",
    about = "Find the region reachable from every location"
)]
pub(crate) struct OverlapArgs {
    /// Path to a JSON file of location rings.
    #[arg(value_name = ARG_RINGS)]
    pub(crate) rings_path: Utf8PathBuf,
}

/// One entry of the rings file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct LocationRing {
    pub(crate) id: String,
    pub(crate) points: Vec<Point>,
}

/// JSON written by the `overlap` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OverlapOutput {
    pub(crate) has_overlap: bool,
    pub(crate) rings: Vec<Vec<Point>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) area_sq_mi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) centroid: Option<Point>,
}

impl From<OverlapResult> for OverlapOutput {
    fn from(result: OverlapResult) -> Self {
        Self {
            has_overlap: result.has_overlap,
            rings: result.closed_rings(),
            area_sq_mi: result.area_sq_mi,
            centroid: result.centroid,
        }
    }
}

pub(crate) fn run_overlap(args: &OverlapArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let locations = load_rings(&args.rings_path)?;
    let output = resolve_locations(locations)?;
    write_json(writer, &output)
}

pub(crate) fn resolve_locations(locations: Vec<LocationRing>) -> Result<OverlapOutput, CliError> {
    let mut ids = Vec::with_capacity(locations.len());
    let mut rings = Vec::with_capacity(locations.len());
    for location in locations {
        let ring = Ring::new(location.points).map_err(|source| CliError::InvalidRing {
            id: location.id.clone(),
            source,
        })?;
        ids.push(location.id);
        rings.push(ring);
    }
    let result = OverlapResolver::default().resolve(&rings, Some(&ids));
    Ok(OverlapOutput::from(result))
}

/// Loads the JSON rings file from disk.
pub(crate) fn load_rings(path: &Utf8Path) -> Result<Vec<LocationRing>, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenRings {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseRings {
        path: path.to_path_buf(),
        source,
    })
}
