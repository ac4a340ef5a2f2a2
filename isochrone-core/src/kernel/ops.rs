//! Best-effort intersection and union.

use geo::{Area, BooleanOps, BoundingRect, Intersects, MultiPolygon, Polygon};
use log::{debug, warn};

use crate::Geometry;

use super::PolygonKernel;
use super::error::KernelError;
use super::topology::check_polygon;

impl PolygonKernel {
    /// Intersect two geometries part by part.
    ///
    /// Both inputs are normalized and every `(part of a, part of b)` pair is
    /// intersected. A pair whose topology is unfit is skipped rather than
    /// failing the whole call. Returns `None` when no piece with positive area
    /// remains.
    ///
    /// The set of resulting pieces does not depend on argument order.
    #[must_use]
    pub fn intersect(&self, a: &Geometry, b: &Geometry) -> Option<Geometry> {
        let left = self.normalize(a);
        let right = self.normalize(b);

        let mut pieces = Vec::new();
        for (left_index, left_part) in left.parts().iter().enumerate() {
            for (right_index, right_part) in right.parts().iter().enumerate() {
                match intersect_pair(left_part, right_part) {
                    Ok(found) => pieces.extend(found.into_iter().map(Geometry::Polygon)),
                    Err(err) => {
                        debug!("skipping part pair ({left_index}, {right_index}): {err}");
                    }
                }
            }
        }

        if pieces.is_empty() {
            return None;
        }
        self.union(&pieces)
    }

    /// Merge pieces into a single geometry.
    ///
    /// Returns `None` only when `pieces` is empty. If the merge cannot be
    /// carried out the first piece is returned unmerged.
    #[must_use]
    pub fn union(&self, pieces: &[Geometry]) -> Option<Geometry> {
        let (first, rest) = pieces.split_first()?;
        match self.merge(first, rest) {
            Ok(merged) => Some(merged),
            Err(err) => {
                warn!(
                    "{err}; keeping the first of {} pieces unmerged",
                    pieces.len()
                );
                Some(first.clone())
            }
        }
    }

    fn merge(&self, first: &Geometry, rest: &[Geometry]) -> Result<Geometry, KernelError> {
        for piece in std::iter::once(first).chain(rest) {
            for part in piece.parts() {
                check_polygon(part).map_err(KernelError::Merge)?;
            }
        }
        let merged = rest
            .iter()
            .fold(first.to_multi_polygon(), |acc, piece| {
                acc.union(&piece.to_multi_polygon())
            });
        let parts: Vec<Polygon<f64>> = merged
            .into_iter()
            .filter(|polygon| polygon.unsigned_area() > 0.0)
            .collect();
        Ok(Geometry::from_parts(parts)
            .map_or_else(|| first.clone(), |geometry| self.normalize(&geometry)))
    }
}

/// Intersect two simple polygons, keeping pieces with positive area.
fn intersect_pair(
    left: &Polygon<f64>,
    right: &Polygon<f64>,
) -> Result<Vec<Polygon<f64>>, KernelError> {
    check_polygon(left).map_err(KernelError::Topology)?;
    check_polygon(right).map_err(KernelError::Topology)?;

    let disjoint = match (left.bounding_rect(), right.bounding_rect()) {
        (Some(left_bounds), Some(right_bounds)) => !left_bounds.intersects(&right_bounds),
        _ => true,
    };
    if disjoint {
        return Ok(Vec::new());
    }

    let overlap: MultiPolygon<f64> = left.intersection(right);
    Ok(overlap
        .into_iter()
        .filter(|polygon| polygon.unsigned_area() > 0.0)
        .collect())
}
