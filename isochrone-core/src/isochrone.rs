//! Synthetic travel-time rings.
//!
//! A ring is built from four cardinal reach distances. Sample bearings that
//! fall between cardinals receive a linear blend of their neighbours and every
//! (bearing, distance) pair is projected with an equirectangular
//! approximation. The shape is approximate on purpose; it stands in for a true
//! isoline when only a handful of route queries are affordable.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Point;

/// Approximate miles spanned by one degree of latitude.
pub const MILES_PER_DEGREE_LAT: f64 = 69.0;

/// Sample bearings used when the caller does not choose.
pub const DEFAULT_SAMPLE_DIRECTIONS: usize = 16;

/// How the traveller moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// Private car.
    Drive,
    /// On foot.
    Walk,
    /// Bicycle.
    Bike,
}

impl TravelMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 3] = [Self::Drive, Self::Walk, Self::Bike];

    /// Fixed average speed used for naive reach estimates.
    #[must_use]
    pub const fn avg_speed_mph(self) -> f64 {
        match self {
            Self::Drive => 30.0,
            Self::Walk => 3.0,
            Self::Bike => 12.0,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drive => "drive",
            Self::Walk => "walk",
            Self::Bike => "bike",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unrecognised travel mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode '{0}', expected drive, walk or bike")]
pub struct UnknownTravelMode(pub String);

impl FromStr for TravelMode {
    type Err = UnknownTravelMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownTravelMode(value.to_owned()))
    }
}

/// Distance reachable in `minutes` at the mode's average speed.
#[must_use]
pub fn naive_distance_miles(minutes: u32, mode: TravelMode) -> f64 {
    f64::from(minutes) / 60.0 * mode.avg_speed_mph()
}

/// Move `miles` from `center` along a compass bearing.
///
/// Bearings are degrees clockwise from north. Longitude offsets shrink with
/// the cosine of the centre's latitude. Any `z` on `center` is kept.
#[must_use]
pub fn project(center: Point, bearing_deg: f64, miles: f64) -> Point {
    let bearing = bearing_deg.to_radians();
    let lat_offset = miles * bearing.cos() / MILES_PER_DEGREE_LAT;
    let lng_offset =
        miles * bearing.sin() / (MILES_PER_DEGREE_LAT * center.lat.to_radians().cos());
    Point {
        lat: center.lat + lat_offset,
        lng: center.lng + lng_offset,
        z: center.z,
    }
}

/// Planar miles between two points under the projection used by [`project`].
///
/// Longitude differences are scaled by the cosine of `from`'s latitude, so the
/// result inverts [`project`] for points projected from `from`.
#[must_use]
pub fn equirectangular_miles(from: Point, to: Point) -> f64 {
    let north = (to.lat - from.lat) * MILES_PER_DEGREE_LAT;
    let east = (to.lng - from.lng) * MILES_PER_DEGREE_LAT * from.lat.to_radians().cos();
    north.hypot(east)
}

/// One of the four compass directions queried for reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    /// 0°.
    North,
    /// 90°.
    East,
    /// 180°.
    South,
    /// 270°.
    West,
}

impl Cardinal {
    /// Clockwise from north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Compass bearing in degrees.
    #[must_use]
    pub const fn bearing_deg(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::East => 90.0,
            Self::South => 180.0,
            Self::West => 270.0,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

/// Reach, in miles, along each cardinal direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardinalDistances {
    miles: [f64; 4],
}

impl CardinalDistances {
    /// Build from explicit per-direction distances.
    #[must_use]
    pub const fn new(north: f64, east: f64, south: f64, west: f64) -> Self {
        Self {
            miles: [north, east, south, west],
        }
    }

    /// The same distance in every direction.
    #[must_use]
    pub const fn uniform(miles: f64) -> Self {
        Self::new(miles, miles, miles, miles)
    }

    /// Naive reach for `minutes` of travel in every direction.
    #[must_use]
    pub fn naive(minutes: u32, mode: TravelMode) -> Self {
        Self::uniform(naive_distance_miles(minutes, mode))
    }

    /// Distance along `direction`.
    #[must_use]
    pub const fn get(&self, direction: Cardinal) -> f64 {
        self.miles[direction.index()]
    }

    /// Replace the distance along `direction`.
    pub const fn set(&mut self, direction: Cardinal, miles: f64) {
        self.miles[direction.index()] = miles;
    }

    /// Distance along an arbitrary bearing.
    ///
    /// Exact cardinal bearings return the stored value unchanged; other
    /// bearings blend the two neighbouring cardinals by angular fraction.
    #[must_use]
    pub fn interpolate(&self, bearing_deg: f64) -> f64 {
        let bearing = bearing_deg.rem_euclid(360.0);
        let sector = (bearing / 90.0).floor();
        let fraction = bearing / 90.0 - sector;
        // `sector` is in 0..4 after rem_euclid; the modulo guards rounding at 360.
        let lower = (sector as usize) % 4;
        let upper = (lower + 1) % 4;
        if fraction == 0.0 {
            return self.miles[lower];
        }
        self.miles[lower] * (1.0 - fraction) + self.miles[upper] * fraction
    }
}

/// An approximate travel-time boundary.
///
/// Points are in increasing bearing order starting at north and the ring is
/// left open.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsochroneRing {
    /// Travel time the boundary represents.
    pub minutes: u32,
    /// Boundary vertices, not explicitly closed.
    pub points: Vec<Point>,
}

impl IsochroneRing {
    /// Vertices with the first repeated at the end.
    #[must_use]
    pub fn closed_points(&self) -> Vec<Point> {
        let mut points = self.points.clone();
        if let Some(first) = self.points.first() {
            points.push(*first);
        }
        points
    }
}

/// Build a ring from cardinal reach distances.
///
/// `sample_directions` bearings are spaced evenly from north. Zero samples
/// yields a ring with no points.
///
/// # Examples
/// ```
/// use isochrone_core::isochrone::{CardinalDistances, TravelMode, synthesize_ring};
/// use isochrone_core::Point;
///
/// let distances = CardinalDistances::naive(30, TravelMode::Walk);
/// let ring = synthesize_ring(Point::new(40.0, -75.0), &distances, 30, 16);
/// assert_eq!(ring.points.len(), 16);
/// ```
#[must_use]
pub fn synthesize_ring(
    center: Point,
    distances: &CardinalDistances,
    minutes: u32,
    sample_directions: usize,
) -> IsochroneRing {
    let points = (0..sample_directions)
        .map(|step| {
            let bearing = step as f64 * 360.0 / sample_directions as f64;
            project(center, bearing, distances.interpolate(bearing))
        })
        .collect();
    IsochroneRing { minutes, points }
}
