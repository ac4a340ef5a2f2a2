//! Geographic points and the closed rings built from them.
//!
//! Coordinates are WGS84 degrees. When crossing into `geo` types the
//! convention is `x = longitude` and `y = latitude`.

use geo::{Coord, LineString, Polygon};
use thiserror::Error;

/// A geographic coordinate with an optional third dimension.
///
/// The third dimension (elevation, level, or a custom value) is carried
/// through unmodified and never takes part in planar geometry.
///
/// # Examples
/// ```
/// use isochrone_core::Point;
///
/// let point = Point::new(52.5, 13.4);
/// assert_eq!(point.to_coord().x, 13.4);
/// assert!(point.z.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Optional third-dimension value.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub z: Option<f64>,
}

impl Point {
    /// Construct a two-dimensional point.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng, z: None }
    }

    /// Construct a point carrying a third-dimension value.
    #[must_use]
    pub const fn with_z(lat: f64, lng: f64, z: f64) -> Self {
        Self {
            lat,
            lng,
            z: Some(z),
        }
    }

    /// Whether both points share latitude and longitude, ignoring `z`.
    #[must_use]
    pub fn same_position(&self, other: &Self) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }

    /// Whether latitude and longitude are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Convert into a planar `geo` coordinate (`x = lng`, `y = lat`).
    #[must_use]
    pub const fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

impl From<Coord<f64>> for Point {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Self::from(point.0)
    }
}

/// Errors returned by [`Ring::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// Fewer than three distinct vertices were supplied.
    #[error("ring must contain at least 3 distinct vertices, found {distinct}")]
    TooFewVertices {
        /// Number of distinct vertices found (capped at the minimum).
        distinct: usize,
    },
    /// A vertex had a NaN or infinite coordinate.
    #[error("ring vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending vertex.
        index: usize,
    },
}

/// Minimum number of distinct vertices in a ring.
const MIN_DISTINCT_VERTICES: usize = 3;

/// An ordered boundary of at least three distinct vertices.
///
/// The first and last points may differ; consumers that need an explicitly
/// closed boundary call [`Ring::closed`].
///
/// # Examples
/// ```
/// use isochrone_core::{Point, Ring};
///
/// # fn main() -> Result<(), isochrone_core::RingError> {
/// let ring = Ring::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
/// ])?;
/// assert!(!ring.is_closed());
/// assert_eq!(ring.closed().len(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Validate and construct a ring.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::NonFiniteCoordinate`] when any vertex is NaN or
    /// infinite and [`RingError::TooFewVertices`] when fewer than three
    /// distinct positions are present.
    pub fn new(points: Vec<Point>) -> Result<Self, RingError> {
        if let Some(index) = points.iter().position(|point| !point.is_finite()) {
            return Err(RingError::NonFiniteCoordinate { index });
        }
        let distinct = count_distinct(&points);
        if distinct < MIN_DISTINCT_VERTICES {
            return Err(RingError::TooFewVertices { distinct });
        }
        Ok(Self { points })
    }

    /// Vertices in their original order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the ring and return its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Whether the last vertex repeats the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first.same_position(last),
            _ => false,
        }
    }

    /// Vertices with the first point appended when the ring is open.
    #[must_use]
    pub fn closed(&self) -> Vec<Point> {
        let mut points = self.points.clone();
        if !self.is_closed()
            && let Some(first) = self.points.first()
        {
            points.push(*first);
        }
        points
    }

    /// Convert into a planar `geo` polygon without holes.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon<f64> {
        let exterior: LineString<f64> = self.points.iter().map(|point| point.to_coord()).collect();
        Polygon::new(exterior, Vec::new())
    }
}

impl TryFrom<Vec<Point>> for Ring {
    type Error = RingError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Ring> for Vec<Point> {
    fn from(ring: Ring) -> Self {
        ring.points
    }
}

/// Count distinct positions, stopping once the minimum is reached.
fn count_distinct(points: &[Point]) -> usize {
    let mut seen: Vec<Point> = Vec::with_capacity(MIN_DISTINCT_VERTICES);
    for point in points {
        if !seen.iter().any(|other| other.same_position(point)) {
            seen.push(*point);
            if seen.len() == MIN_DISTINCT_VERTICES {
                break;
            }
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn triangle() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ]
    }

    #[rstest]
    fn ring_accepts_open_triangle() {
        let ring = Ring::new(triangle()).expect("triangle is a valid ring");
        assert_eq!(ring.points().len(), 3);
        assert!(!ring.is_closed());
    }

    #[rstest]
    fn closed_appends_first_point_once() {
        let ring = Ring::new(triangle()).expect("valid ring");
        let closed = ring.closed();
        assert_eq!(closed.len(), 4);
        assert_eq!(closed.first(), closed.last());

        let reclosed = Ring::new(closed.clone()).expect("closed ring is valid");
        assert!(reclosed.is_closed());
        assert_eq!(reclosed.closed(), closed);
    }

    #[rstest]
    #[case::two_points(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)], 2)]
    #[case::repeated(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 0.0)], 2)]
    #[case::empty(Vec::new(), 0)]
    fn ring_rejects_too_few_distinct_vertices(#[case] points: Vec<Point>, #[case] distinct: usize) {
        let err = Ring::new(points).expect_err("degenerate ring should fail");
        assert_eq!(err, RingError::TooFewVertices { distinct });
    }

    #[rstest]
    fn ring_rejects_non_finite_vertex() {
        let mut points = triangle();
        points.push(Point::new(f64::NAN, 0.0));
        let err = Ring::new(points).expect_err("NaN vertex should fail");
        assert_eq!(err, RingError::NonFiniteCoordinate { index: 3 });
    }

    #[rstest]
    fn polygon_uses_lng_as_x() {
        let ring = Ring::new(triangle()).expect("valid ring");
        let polygon = ring.to_polygon();
        let coords: Vec<_> = polygon.exterior().coords().copied().collect();
        assert_eq!(coords.len(), 4, "geo closes the exterior");
        assert_eq!(coords[1], Coord { x: 1.0, y: 0.0 });
    }

    #[rstest]
    fn same_position_ignores_third_dimension() {
        let flat = Point::new(1.0, 2.0);
        let raised = Point::with_z(1.0, 2.0, 30.0);
        assert!(flat.same_position(&raised));
        assert_ne!(flat, raised);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn ring_deserialises_open_lists_and_validates() {
        let ring: Ring = serde_json::from_str(
            r#"[{"lat": 0.0, "lng": 0.0}, {"lat": 0.0, "lng": 1.0}, {"lat": 1.0, "lng": 1.0}]"#,
        )
        .expect("open triangle deserialises");
        assert!(!ring.is_closed());
        assert_eq!(ring.points(), triangle().as_slice());

        let err = serde_json::from_str::<Ring>(r#"[{"lat": 0.0, "lng": 0.0}, {"lat": 1.0, "lng": 1.0}]"#)
            .expect_err("two points are not a ring");
        assert!(err.to_string().contains("distinct vertices"), "error was {err}");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn point_omits_absent_third_dimension() {
        let flat = serde_json::to_value(Point::new(1.0, 2.0)).expect("serialise point");
        assert_eq!(flat, serde_json::json!({"lat": 1.0, "lng": 2.0}));
        let raised = serde_json::to_value(Point::with_z(1.0, 2.0, 3.0)).expect("serialise point");
        assert_eq!(raised["z"], serde_json::json!(3.0));
    }
}
