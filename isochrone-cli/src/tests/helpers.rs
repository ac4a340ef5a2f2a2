//! Test helpers for CLI file fixtures and provider injection.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use crate::estimate::{EstimateConfig, ProviderFactory};
use isochrone_core::DirectionsProvider;
use isochrone_core::test_support::ConstantSpeedDirectionsProvider;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// JSON for an axis-aligned square ring keyed by `id`.
pub(super) fn square_json(id: &str, lat: f64, lng: f64, side: f64) -> String {
    format!(
        r#"{{"id": "{id}", "points": [
            {{"lat": {lat}, "lng": {lng}}},
            {{"lat": {north}, "lng": {lng}}},
            {{"lat": {north}, "lng": {east}}},
            {{"lat": {lat}, "lng": {east}}}
        ]}}"#,
        north = lat + side,
        east = lng + side,
    )
}

/// Provider factory answering from a straight-line constant-speed model.
#[derive(Debug, Clone, Copy)]
pub(super) struct ConstantSpeedFactory {
    pub(super) speed_mph: f64,
}

impl ProviderFactory for ConstantSpeedFactory {
    fn build(&self, _config: &EstimateConfig) -> Result<Box<dyn DirectionsProvider>, CliError> {
        Ok(Box::new(ConstantSpeedDirectionsProvider::new(self.speed_mph)))
    }
}
