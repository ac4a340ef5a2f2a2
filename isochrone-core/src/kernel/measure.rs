//! Surface area and centroids.

use geo::{Centroid, ChamberlainDuquetteArea};

use crate::{Geometry, Point};

use super::PolygonKernel;
use super::normalize::distinct_vertex_count;

/// Square metres in one international square mile.
pub const SQ_METERS_PER_SQ_MILE: f64 = 2_589_988.110_336;

/// Convert an area in square metres to square miles.
#[must_use]
pub fn square_meters_to_square_miles(square_meters: f64) -> f64 {
    square_meters / SQ_METERS_PER_SQ_MILE
}

impl PolygonKernel {
    /// Surface area in square metres on a spherical Earth.
    ///
    /// Parts are summed. A part with fewer than three vertices contributes
    /// nothing, so the result is never negative.
    #[must_use]
    pub fn area(&self, geometry: &Geometry) -> f64 {
        geometry
            .parts()
            .iter()
            .filter(|polygon| distinct_vertex_count(polygon.exterior()) >= 3)
            .map(|polygon| polygon.chamberlain_duquette_unsigned_area())
            .sum()
    }

    /// Area-weighted centroid of the whole geometry.
    ///
    /// For a multi-polygon the parts are weighted together rather than
    /// averaged. Returns `None` when the geometry has no parts.
    #[must_use]
    pub fn centroid(&self, geometry: &Geometry) -> Option<Point> {
        geometry.to_multi_polygon().centroid().map(Point::from)
    }
}
