//! Error types emitted by the isochrone CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use isochrone_core::{PolylineError, RingError, UnknownTravelMode};
use isochrone_data::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the isochrone CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The travel mode is not one of `drive`, `walk` or `bike`.
    #[error(transparent)]
    InvalidMode(#[from] UnknownTravelMode),
    /// A numeric option is outside its accepted range.
    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
    /// The polyline could not be decoded.
    #[error("failed to decode polyline: {0}")]
    Decode(#[from] PolylineError),
    /// Opening the rings file failed.
    #[error("failed to open rings file at {path:?}: {source}")]
    OpenRings {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Rings JSON could not be decoded.
    #[error("failed to parse rings JSON at {path:?}: {source}")]
    ParseRings {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A location's ring failed validation.
    #[error("ring for location {id:?} is invalid: {source}")]
    InvalidRing {
        id: String,
        #[source]
        source: RingError,
    },
    /// Constructing the directions provider failed.
    #[error("failed to build directions provider for {base_url:?}: {source}")]
    BuildDirectionsProvider {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// Starting the async runtime failed.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
