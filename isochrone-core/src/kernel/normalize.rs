//! Vertex de-duplication and canonical winding.

use geo::{Coord, LineString, MultiPolygon, Polygon, Winding};

use crate::Geometry;

/// Normalize every part of `geometry`.
///
/// Multi-polygon parts left with fewer than three distinct vertices are
/// dropped; a lone polygon is kept even when degenerate.
pub(crate) fn normalize_geometry(geometry: &Geometry, tolerance: f64) -> Geometry {
    match geometry {
        Geometry::Polygon(polygon) => Geometry::Polygon(normalize_polygon(polygon, tolerance)),
        Geometry::MultiPolygon(multi) => Geometry::MultiPolygon(MultiPolygon::new(
            multi
                .iter()
                .map(|polygon| normalize_polygon(polygon, tolerance))
                .filter(|polygon| distinct_vertex_count(polygon.exterior()) >= 3)
                .collect(),
        )),
    }
}

/// Exterior counter-clockwise, interiors clockwise, no near-duplicate vertices.
pub(crate) fn normalize_polygon(polygon: &Polygon<f64>, tolerance: f64) -> Polygon<f64> {
    let mut exterior = dedup_ring(polygon.exterior(), tolerance);
    exterior.make_ccw_winding();
    let interiors = polygon
        .interiors()
        .iter()
        .map(|interior| {
            let mut ring = dedup_ring(interior, tolerance);
            ring.make_cw_winding();
            ring
        })
        .collect();
    Polygon::new(exterior, interiors)
}

/// Number of vertices in a ring once the closing repeat is ignored.
pub(crate) fn distinct_vertex_count(ring: &LineString<f64>) -> usize {
    let mut count = ring.0.len();
    if count > 1 && ring.0.first() == ring.0.last() {
        count -= 1;
    }
    count
}

fn near(a: Coord<f64>, b: Coord<f64>, tolerance: f64) -> bool {
    (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
}

/// Drop vertices within `tolerance` of the previously kept vertex, including
/// across the closing seam, and re-close the ring.
fn dedup_ring(ring: &LineString<f64>, tolerance: f64) -> LineString<f64> {
    let mut kept: Vec<Coord<f64>> = Vec::with_capacity(ring.0.len());
    for coord in ring.coords() {
        if kept.last().is_some_and(|last| near(*last, *coord, tolerance)) {
            continue;
        }
        kept.push(*coord);
    }
    while kept.len() > 1
        && let (Some(&first), Some(&last)) = (kept.first(), kept.last())
        && near(first, last, tolerance)
    {
        kept.pop();
    }
    let mut deduped = LineString::new(kept);
    deduped.close();
    deduped
}
