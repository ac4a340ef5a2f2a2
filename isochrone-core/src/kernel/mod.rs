//! Boolean operations and measures over [`Geometry`].
//!
//! The kernel normalizes, intersects, unions, measures area, and locates
//! centroids of simple polygons and multi-polygons. It never mutates inputs
//! and never surfaces failures: pairwise intersections on unfit topology are
//! skipped, and a failed merge falls back to the first piece.
//!
//! # Examples
//! ```
//! use isochrone_core::{Geometry, Point, PolygonKernel, Ring};
//!
//! # fn main() -> Result<(), isochrone_core::RingError> {
//! let square = |lat: f64, lng: f64, side: f64| {
//!     Ring::new(vec![
//!         Point::new(lat, lng),
//!         Point::new(lat, lng + side),
//!         Point::new(lat + side, lng + side),
//!         Point::new(lat + side, lng),
//!     ])
//! };
//! let kernel = PolygonKernel::default();
//! let a = Geometry::from(&square(0.0, 0.0, 2.0)?);
//! let b = Geometry::from(&square(1.0, 1.0, 2.0)?);
//! let overlap = kernel.intersect(&a, &b).expect("squares overlap");
//! assert!(kernel.area(&overlap) < kernel.area(&a));
//! # Ok(())
//! # }
//! ```

mod error;
mod measure;
mod normalize;
mod ops;
mod topology;

pub use measure::{SQ_METERS_PER_SQ_MILE, square_meters_to_square_miles};

use crate::Geometry;

/// Default distance, in degrees, under which consecutive vertices merge.
pub const DEFAULT_VERTEX_TOLERANCE_DEG: f64 = 1e-9;

/// Tunables for [`PolygonKernel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Consecutive vertices closer than this on both axes are merged.
    pub vertex_tolerance_deg: f64,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            vertex_tolerance_deg: DEFAULT_VERTEX_TOLERANCE_DEG,
        }
    }
}

impl KernelConfig {
    /// Set the near-duplicate vertex tolerance.
    #[must_use]
    pub const fn with_vertex_tolerance(mut self, tolerance_deg: f64) -> Self {
        self.vertex_tolerance_deg = tolerance_deg;
        self
    }
}

/// Stateless polygon kernel parameterised by a [`KernelConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolygonKernel {
    config: KernelConfig,
}

impl PolygonKernel {
    /// Build a kernel with explicit configuration.
    #[must_use]
    pub const fn with_config(config: KernelConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Remove near-duplicate vertices and fix ring winding.
    ///
    /// Exteriors become counter-clockwise in `x = lng, y = lat` space.
    /// Applying `normalize` twice yields the same geometry as applying it
    /// once.
    #[must_use]
    pub fn normalize(&self, geometry: &Geometry) -> Geometry {
        normalize::normalize_geometry(geometry, self.config.vertex_tolerance_deg)
    }
}
