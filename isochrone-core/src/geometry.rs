//! Areal geometry accepted and returned by the polygon kernel.

use geo::{MultiPolygon, Polygon};

use crate::{Point, Ring};

/// Either a single polygon or a collection of polygons.
///
/// Kernel operations match on the variant rather than inspecting geometry at
/// runtime. Holes are preserved when present but no input in this engine
/// produces them.
///
/// # Examples
/// ```
/// use isochrone_core::{Geometry, Point, Ring};
///
/// # fn main() -> Result<(), isochrone_core::RingError> {
/// let ring = Ring::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
/// ])?;
/// let geometry = Geometry::from(&ring);
/// assert_eq!(geometry.parts().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    /// A single simple polygon.
    Polygon(Polygon<f64>),
    /// Several polygons with no ordering guarantee.
    MultiPolygon(MultiPolygon<f64>),
}

impl Geometry {
    /// Build a geometry from polygon parts.
    ///
    /// Returns `None` for an empty list and a [`Geometry::Polygon`] for a
    /// single part.
    #[must_use]
    pub fn from_parts(mut parts: Vec<Polygon<f64>>) -> Option<Self> {
        match parts.len() {
            0 => None,
            1 => parts.pop().map(Self::Polygon),
            _ => Some(Self::MultiPolygon(MultiPolygon::new(parts))),
        }
    }

    /// The constituent simple polygons.
    #[must_use]
    pub fn parts(&self) -> &[Polygon<f64>] {
        match self {
            Self::Polygon(polygon) => std::slice::from_ref(polygon),
            Self::MultiPolygon(multi) => &multi.0,
        }
    }

    /// Consume the geometry and return its polygons.
    #[must_use]
    pub fn into_parts(self) -> Vec<Polygon<f64>> {
        match self {
            Self::Polygon(polygon) => vec![polygon],
            Self::MultiPolygon(multi) => multi.0,
        }
    }

    /// Whether the geometry holds no polygons at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts().is_empty()
    }

    /// Copy into a `geo` multi-polygon.
    #[must_use]
    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        MultiPolygon::new(self.parts().to_vec())
    }

    /// Outer boundaries as `{lat, lng}` lists, one per part.
    ///
    /// When `closed` is false the repeated closing vertex is dropped.
    #[must_use]
    pub fn outer_rings(&self, closed: bool) -> Vec<Vec<Point>> {
        self.parts()
            .iter()
            .map(|polygon| {
                let mut points: Vec<Point> = polygon
                    .exterior()
                    .coords()
                    .copied()
                    .map(Point::from)
                    .collect();
                if !closed && points.len() > 1 && points.first() == points.last() {
                    points.pop();
                }
                points
            })
            .collect()
    }
}

impl From<Polygon<f64>> for Geometry {
    fn from(polygon: Polygon<f64>) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<MultiPolygon<f64>> for Geometry {
    fn from(multi: MultiPolygon<f64>) -> Self {
        Self::MultiPolygon(multi)
    }
}

impl From<&Ring> for Geometry {
    fn from(ring: &Ring) -> Self {
        Self::Polygon(ring.to_polygon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;
    use rstest::rstest;

    fn unit_square() -> Polygon<f64> {
        polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)]
    }

    #[rstest]
    fn from_parts_picks_variant_by_count() {
        assert!(Geometry::from_parts(Vec::new()).is_none());
        assert!(matches!(
            Geometry::from_parts(vec![unit_square()]),
            Some(Geometry::Polygon(_))
        ));
        assert!(matches!(
            Geometry::from_parts(vec![unit_square(), unit_square()]),
            Some(Geometry::MultiPolygon(_))
        ));
    }

    #[rstest]
    #[case(true, 5)]
    #[case(false, 4)]
    fn outer_rings_close_on_demand(#[case] closed: bool, #[case] expected: usize) {
        let geometry = Geometry::Polygon(unit_square());
        let rings = geometry.outer_rings(closed);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), expected);
        assert_eq!(rings[0][1], Point::new(0.0, 1.0));
    }

    #[rstest]
    fn empty_multi_polygon_is_empty() {
        let geometry = Geometry::MultiPolygon(MultiPolygon::new(Vec::new()));
        assert!(geometry.is_empty());
        assert!(geometry.outer_rings(true).is_empty());
    }
}
