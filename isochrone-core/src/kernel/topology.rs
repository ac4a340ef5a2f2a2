//! Simple-polygon checks run before boolean operations.
//!
//! A ring passes when its coordinates are finite, it has at least three
//! distinct vertices, it encloses non-zero area, no two non-adjacent edges
//! touch, and no edge folds back over its predecessor.

use geo::{Area, Coord, LineString, Polygon};

use super::error::TopologyError;

/// Check the exterior and any interiors of `polygon`.
pub(crate) fn check_polygon(polygon: &Polygon<f64>) -> Result<(), TopologyError> {
    check_ring(polygon.exterior())?;
    for interior in polygon.interiors() {
        check_ring(interior)?;
    }
    if polygon.unsigned_area() == 0.0 {
        return Err(TopologyError::ZeroArea);
    }
    Ok(())
}

fn check_ring(ring: &LineString<f64>) -> Result<(), TopologyError> {
    let vertices = open_vertices(ring);
    if vertices.iter().any(|coord| !(coord.x.is_finite() && coord.y.is_finite())) {
        return Err(TopologyError::NonFiniteCoordinate);
    }
    if vertices.len() < 3 {
        return Err(TopologyError::TooFewVertices {
            distinct: vertices.len(),
        });
    }
    check_spikes(&vertices)?;
    check_crossings(&vertices)
}

/// Vertices without the closing repeat.
fn open_vertices(ring: &LineString<f64>) -> Vec<Coord<f64>> {
    let mut vertices = ring.0.clone();
    while vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }
    vertices
}

fn edge(vertices: &[Coord<f64>], index: usize) -> (Coord<f64>, Coord<f64>) {
    let count = vertices.len();
    (vertices[index % count], vertices[(index + 1) % count])
}

fn check_spikes(vertices: &[Coord<f64>]) -> Result<(), TopologyError> {
    let count = vertices.len();
    for index in 0..count {
        let (start, middle) = edge(vertices, index);
        let (_, end) = edge(vertices, index + 1);
        if start == middle {
            return Err(TopologyError::RepeatedVertex { index });
        }
        // Collinear and reversing: the next edge retraces this one.
        let reverses = (middle.x - start.x) * (end.x - middle.x)
            + (middle.y - start.y) * (end.y - middle.y)
            < 0.0;
        if cross(start, middle, end) == 0.0 && reverses {
            return Err(TopologyError::Spike { edge: (index + 1) % count });
        }
    }
    Ok(())
}

fn check_crossings(vertices: &[Coord<f64>]) -> Result<(), TopologyError> {
    let count = vertices.len();
    for first in 0..count {
        let (a1, a2) = edge(vertices, first);
        for second in (first + 2)..count {
            // The last edge shares a vertex with the first.
            if first == 0 && second == count - 1 {
                continue;
            }
            let (b1, b2) = edge(vertices, second);
            if segments_touch(a1, a2, b1, b2) {
                return Err(TopologyError::SelfIntersection {
                    first_edge: first,
                    second_edge: second,
                });
            }
        }
    }
    Ok(())
}

/// Twice the signed area of the triangle `origin`, `a`, `b`.
fn cross(origin: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - origin.x) * (b.y - origin.y) - (a.y - origin.y) * (b.x - origin.x)
}

/// Whether collinear `point` lies within the bounding box of `start`-`end`.
fn within_span(point: Coord<f64>, start: Coord<f64>, end: Coord<f64>) -> bool {
    point.x >= start.x.min(end.x)
        && point.x <= start.x.max(end.x)
        && point.y >= start.y.min(end.y)
        && point.y <= start.y.max(end.y)
}

fn opposite_sides(first: f64, second: f64) -> bool {
    (first > 0.0 && second < 0.0) || (first < 0.0 && second > 0.0)
}

fn segments_touch(a1: Coord<f64>, a2: Coord<f64>, b1: Coord<f64>, b2: Coord<f64>) -> bool {
    let d1 = cross(b1, b2, a1);
    let d2 = cross(b1, b2, a2);
    let d3 = cross(a1, a2, b1);
    let d4 = cross(a1, a2, b2);
    if opposite_sides(d1, d2) && opposite_sides(d3, d4) {
        return true;
    }
    (d1 == 0.0 && within_span(a1, b1, b2))
        || (d2 == 0.0 && within_span(a2, b1, b2))
        || (d3 == 0.0 && within_span(b1, a1, a2))
        || (d4 == 0.0 && within_span(b2, a1, a2))
}
