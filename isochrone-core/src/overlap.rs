//! Region reachable from every location in a group.
//!
//! [`OverlapResolver`] folds per-location travel-time polygons through the
//! [`PolygonKernel`] and reports the shared region with its area and centroid.
//! It never fails: an empty intersection at any step ends the fold with
//! [`OverlapResult::none`].

use log::info;

use crate::kernel::square_meters_to_square_miles;
use crate::{Geometry, Point, PolygonKernel, Ring};

/// Outcome of [`OverlapResolver::resolve`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OverlapResult {
    /// Whether a non-empty shared region exists.
    pub has_overlap: bool,
    /// The shared region.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub polygon: Option<Geometry>,
    /// Area of the shared region in square miles.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub area_sq_mi: Option<f64>,
    /// Area-weighted centroid of the shared region.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub centroid: Option<Point>,
}

impl OverlapResult {
    /// Result signalling that no shared region exists.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            has_overlap: false,
            polygon: None,
            area_sq_mi: None,
            centroid: None,
        }
    }

    /// Outer boundaries of the shared region, explicitly closed.
    #[must_use]
    pub fn closed_rings(&self) -> Vec<Vec<Point>> {
        self.polygon
            .as_ref()
            .map(|polygon| polygon.outer_rings(true))
            .unwrap_or_default()
    }
}

/// Intersects travel-time polygons from several locations.
///
/// # Examples
/// ```
/// use isochrone_core::{OverlapResolver, Point, Ring};
///
/// # fn main() -> Result<(), isochrone_core::RingError> {
/// let square = |lat: f64, lng: f64| {
///     Ring::new(vec![
///         Point::new(lat, lng),
///         Point::new(lat, lng + 2.0),
///         Point::new(lat + 2.0, lng + 2.0),
///         Point::new(lat + 2.0, lng),
///     ])
/// };
/// let resolver = OverlapResolver::default();
/// let result = resolver.resolve(&[square(0.0, 0.0)?, square(1.0, 1.0)?], None);
/// assert!(result.has_overlap);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapResolver {
    kernel: PolygonKernel,
}

impl OverlapResolver {
    /// Build a resolver around an explicit kernel.
    #[must_use]
    pub const fn new(kernel: PolygonKernel) -> Self {
        Self { kernel }
    }

    /// Kernel used for every fold step.
    #[must_use]
    pub const fn kernel(&self) -> &PolygonKernel {
        &self.kernel
    }

    /// Find the region inside every ring.
    ///
    /// Fewer than two rings short-circuit to [`OverlapResult::none`] without
    /// touching the kernel. `location_ids`, when given, name the rings in log
    /// lines only.
    #[must_use]
    pub fn resolve(&self, rings: &[Ring], location_ids: Option<&[String]>) -> OverlapResult {
        if rings.len() < 2 {
            return OverlapResult::none();
        }
        let polygons: Vec<Geometry> = rings.iter().map(Geometry::from).collect();
        self.resolve_polygons(&polygons, location_ids)
    }

    /// Find the region inside every geometry.
    ///
    /// Behaves like [`Self::resolve`] for callers that already hold kernel
    /// geometry.
    #[must_use]
    pub fn resolve_polygons(
        &self,
        polygons: &[Geometry],
        location_ids: Option<&[String]>,
    ) -> OverlapResult {
        let Some((first, rest)) = polygons.split_first() else {
            return OverlapResult::none();
        };
        if rest.is_empty() {
            return OverlapResult::none();
        }

        let mut accumulator = first.clone();
        for (offset, next) in rest.iter().enumerate() {
            let index = offset + 1;
            match self.kernel.intersect(&accumulator, next) {
                Some(overlap) => accumulator = overlap,
                None => {
                    let label = location_ids
                        .and_then(|ids| ids.get(index))
                        .map_or_else(|| format!("#{index}"), |id| format!("'{id}'"));
                    info!("no shared region once location {label} is included");
                    return OverlapResult::none();
                }
            }
        }

        let area = self.kernel.area(&accumulator);
        OverlapResult {
            has_overlap: true,
            area_sq_mi: Some(square_meters_to_square_miles(area)),
            centroid: self.kernel.centroid(&accumulator),
            polygon: Some(accumulator),
        }
    }
}
