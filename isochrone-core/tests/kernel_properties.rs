//! Property-based tests for `PolygonKernel`.
//!
//! # Invariants tested
//!
//! - **Bounded overlap:** an intersection is never larger than either input.
//! - **Commutativity:** argument order does not change the intersected area.
//! - **Self-intersection:** a convex polygon intersected with itself keeps its
//!   area.
//! - **Centroid containment:** the centroid of a convex overlap lies inside it.
//! - **Idempotent normalization.**

use geo::{Intersects, Polygon, polygon};
use isochrone_core::{Geometry, PolygonKernel};
use proptest::prelude::*;
use std::f64::consts::TAU;

/// Relative tolerance for comparing areas computed along different paths.
const AREA_TOLERANCE: f64 = 1e-6;

/// Axis-aligned rectangle in `x = lng`, `y = lat` space.
fn rectangle(lat: f64, lng: f64, height: f64, width: f64) -> Polygon<f64> {
    polygon![
        (x: lng, y: lat),
        (x: lng + width, y: lat),
        (x: lng + width, y: lat + height),
        (x: lng, y: lat + height)
    ]
}

/// Regular polygon centred on (`lat`, `lng`).
fn regular(lat: f64, lng: f64, radius: f64, sides: usize, rotation: f64) -> Polygon<f64> {
    let exterior: Vec<(f64, f64)> = (0..sides)
        .map(|step| {
            let angle = rotation + std::f64::consts::TAU * step as f64 / sides as f64;
            (lng + radius * angle.cos(), lat + radius * angle.sin())
        })
        .collect();
    Polygon::new(exterior.into(), Vec::new())
}

/// Two rectangles where the second is centred on an interior point of the
/// first, so every pair shares a region of positive area.
fn overlapping_rectangles() -> impl Strategy<Value = (Polygon<f64>, Polygon<f64>)> {
    (
        -60.0_f64..60.0,
        -170.0_f64..170.0,
        0.01_f64..5.0,
        0.01_f64..5.0,
        0.1_f64..0.9,
        0.1_f64..0.9,
        0.01_f64..5.0,
        0.01_f64..5.0,
    )
        .prop_map(|(lat, lng, height, width, across, up, other_height, other_width)| {
            let centre_lat = lat + up * height;
            let centre_lng = lng + across * width;
            (
                rectangle(lat, lng, height, width),
                rectangle(
                    centre_lat - other_height / 2.0,
                    centre_lng - other_width / 2.0,
                    other_height,
                    other_width,
                ),
            )
        })
}

/// Two regular polygons with 3 to 12 vertices. The second is centred within
/// half the first's radius of its centre, which lies inside the first's
/// inscribed circle.
fn overlapping_convex() -> impl Strategy<Value = (Polygon<f64>, Polygon<f64>)> {
    (
        (-60.0_f64..60.0, -170.0_f64..170.0, 0.05_f64..3.0, 3_usize..=12, 0.0_f64..TAU),
        (0.0_f64..0.45, 0.0_f64..TAU, 0.05_f64..3.0, 3_usize..=12, 0.0_f64..TAU),
    )
        .prop_map(|(first, second)| {
            let (lat, lng, radius, sides, rotation) = first;
            let (reach, heading, other_radius, other_sides, other_rotation) = second;
            let offset = reach * radius;
            (
                regular(lat, lng, radius, sides, rotation),
                regular(
                    lat + offset * heading.sin(),
                    lng + offset * heading.cos(),
                    other_radius,
                    other_sides,
                    other_rotation,
                ),
            )
        })
}

/// Single regular polygon for the unary properties.
fn convex_strategy() -> impl Strategy<Value = Polygon<f64>> {
    (-60.0_f64..60.0, -170.0_f64..170.0, 0.05_f64..3.0, 3_usize..=12, 0.0_f64..TAU)
        .prop_map(|(lat, lng, radius, sides, rotation)| regular(lat, lng, radius, sides, rotation))
}

fn close_enough(left: f64, right: f64) -> bool {
    (left - right).abs() <= AREA_TOLERANCE * left.abs().max(right.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn intersection_is_no_larger_than_inputs((a, b) in overlapping_rectangles()) {
        let kernel = PolygonKernel::default();
        let (a, b) = (Geometry::Polygon(a), Geometry::Polygon(b));
        let overlap = kernel.intersect(&a, &b);
        prop_assert!(overlap.is_some(), "rectangles sharing an interior point must overlap");
        let area = overlap.map_or(0.0, |g| kernel.area(&g));
        let bound = kernel.area(&a).min(kernel.area(&b));
        prop_assert!(area > 0.0);
        prop_assert!(area <= bound || close_enough(area, bound), "{area} > {bound}");
    }

    #[test]
    fn intersection_area_is_commutative((a, b) in overlapping_convex()) {
        let kernel = PolygonKernel::default();
        let (a, b) = (Geometry::Polygon(a), Geometry::Polygon(b));
        let forward = kernel.intersect(&a, &b);
        let backward = kernel.intersect(&b, &a);
        prop_assert!(
            forward.is_some() && backward.is_some(),
            "polygons with nested centres must overlap"
        );
        let forward = forward.map_or(0.0, |g| kernel.area(&g));
        let backward = backward.map_or(0.0, |g| kernel.area(&g));
        prop_assert!(forward > 0.0);
        prop_assert!(close_enough(forward, backward), "{forward} != {backward}");
    }

    #[test]
    fn convex_polygon_intersected_with_itself_keeps_area(a in convex_strategy()) {
        let kernel = PolygonKernel::default();
        let a = Geometry::Polygon(a);
        let overlap = kernel.intersect(&a, &a);
        prop_assert!(overlap.is_some());
        let area = overlap.map_or(0.0, |g| kernel.area(&g));
        prop_assert!(close_enough(area, kernel.area(&a)));
    }

    #[test]
    fn centroid_of_convex_overlap_lies_inside((a, b) in overlapping_rectangles()) {
        let kernel = PolygonKernel::default();
        let overlap = kernel.intersect(&Geometry::Polygon(a), &Geometry::Polygon(b));
        prop_assert!(overlap.is_some(), "rectangles sharing an interior point must overlap");
        if let Some(overlap) = overlap {
            let centroid = kernel.centroid(&overlap).expect("overlap has a centroid");
            let point = geo::Point::new(centroid.lng, centroid.lat);
            prop_assert!(overlap.parts().iter().any(|part| part.intersects(&point)));
        }
    }

    #[test]
    fn normalization_is_idempotent(a in convex_strategy()) {
        let kernel = PolygonKernel::default();
        let once = kernel.normalize(&Geometry::Polygon(a));
        prop_assert_eq!(kernel.normalize(&once), once);
    }
}
