//! `estimate` command: approximate travel-time ring around a point.

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use isochrone_core::isochrone::DEFAULT_SAMPLE_DIRECTIONS;
use isochrone_core::{DirectionsProvider, IsochroneRing, Point, TravelMode};
use isochrone_data::routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig};
use isochrone_data::{EstimatorConfig, IsochroneRingEstimator};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_LAT, ARG_LNG, ARG_MINUTES, ARG_MODE, ARG_OSRM_BASE_URL, ARG_SAMPLE_DIRECTIONS,
    ARG_TIMEOUT_SECS, CliError, ENV_LAT, ENV_LNG, ENV_MINUTES, write_json,
};

/// CLI arguments for the `estimate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Estimate the boundary reachable from a point within a time \
                 budget. Driving rings are refined with OSRM route queries; \
                 walking and cycling rings use average speeds. Options can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Estimate a travel-time ring around a point"
)]
#[ortho_config(prefix = "ISOCHRONE")]
pub(crate) struct EstimateArgs {
    /// Latitude of the centre in degrees.
    #[arg(long = ARG_LAT, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the centre in degrees.
    #[arg(long = ARG_LNG, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Travel-time budget in minutes.
    #[arg(long = ARG_MINUTES, value_name = "min")]
    #[serde(default)]
    pub(crate) minutes: Option<u32>,
    /// Travel mode: drive, walk or bike (default drive).
    #[arg(long = ARG_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<String>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
    /// Number of evenly spaced bearings in the ring.
    #[arg(long = ARG_SAMPLE_DIRECTIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) sample_directions: Option<usize>,
    /// Budget for each route query in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl EstimateArgs {
    pub(crate) fn into_config(self) -> Result<EstimateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EstimateConfig::try_from(merged)
    }
}

/// Resolved `estimate` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EstimateConfig {
    pub(crate) center: Point,
    pub(crate) minutes: u32,
    pub(crate) mode: TravelMode,
    pub(crate) osrm_base_url: String,
    pub(crate) sample_directions: usize,
    pub(crate) query_timeout: Duration,
}

impl EstimateConfig {
    pub(crate) fn estimator_config(&self) -> EstimatorConfig {
        EstimatorConfig::default()
            .with_sample_directions(self.sample_directions)
            .with_query_timeout(self.query_timeout)
    }
}

fn require_in_range(
    value: f64,
    bound: f64,
    field: &'static str,
    expected: &'static str,
) -> Result<f64, CliError> {
    if value.is_finite() && value.abs() <= bound {
        Ok(value)
    } else {
        Err(CliError::OutOfRange {
            field,
            expected,
            value: value.to_string(),
        })
    }
}

impl TryFrom<EstimateArgs> for EstimateConfig {
    type Error = CliError;

    fn try_from(args: EstimateArgs) -> Result<Self, Self::Error> {
        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_LAT,
        })?;
        let lng = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_LNG,
            env: ENV_LNG,
        })?;
        let minutes = args.minutes.ok_or(CliError::MissingArgument {
            field: ARG_MINUTES,
            env: ENV_MINUTES,
        })?;
        let lat = require_in_range(lat, 90.0, ARG_LAT, "between -90 and 90")?;
        let lng = require_in_range(lng, 180.0, ARG_LNG, "between -180 and 180")?;
        if minutes == 0 {
            return Err(CliError::OutOfRange {
                field: ARG_MINUTES,
                expected: "at least 1",
                value: minutes.to_string(),
            });
        }

        let mode = match args.mode {
            Some(raw) => raw.parse::<TravelMode>()?,
            None => TravelMode::Drive,
        };
        let query_timeout = match args.timeout_secs {
            Some(0) => {
                return Err(CliError::OutOfRange {
                    field: ARG_TIMEOUT_SECS,
                    expected: "at least 1",
                    value: "0".to_owned(),
                });
            }
            Some(secs) => Duration::from_secs(secs),
            None => EstimatorConfig::default().query_timeout,
        };
        let osrm_base_url = args
            .osrm_base_url
            .unwrap_or_else(|| HttpDirectionsProviderConfig::default().base_url);

        Ok(Self {
            center: Point::new(lat, lng),
            minutes,
            mode,
            osrm_base_url,
            sample_directions: args.sample_directions.unwrap_or(DEFAULT_SAMPLE_DIRECTIONS),
            query_timeout,
        })
    }
}

/// Builds the directions provider for the current estimate invocation.
pub(crate) trait ProviderFactory {
    fn build(&self, config: &EstimateConfig) -> Result<Box<dyn DirectionsProvider>, CliError>;
}

pub(crate) struct HttpProviderFactory;

impl ProviderFactory for HttpProviderFactory {
    fn build(&self, config: &EstimateConfig) -> Result<Box<dyn DirectionsProvider>, CliError> {
        let provider_config = HttpDirectionsProviderConfig::new(config.osrm_base_url.clone())
            .with_timeout(config.query_timeout);
        let provider = HttpDirectionsProvider::with_config(provider_config).map_err(|source| {
            CliError::BuildDirectionsProvider {
                base_url: config.osrm_base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(provider))
    }
}

pub(crate) fn run_estimate_with(
    args: EstimateArgs,
    factory: &dyn ProviderFactory,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let ring = execute_estimate(&config, factory)?;
    write_json(writer, &ring)
}

pub(crate) fn execute_estimate(
    config: &EstimateConfig,
    factory: &dyn ProviderFactory,
) -> Result<IsochroneRing, CliError> {
    let provider = factory.build(config)?;
    let estimator = IsochroneRingEstimator::with_config(provider, config.estimator_config());
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    Ok(runtime.block_on(estimator.estimate(config.center, config.minutes, config.mode)))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<EstimateConfig, CliError> {
    let merged = EstimateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    EstimateConfig::try_from(merged)
}
