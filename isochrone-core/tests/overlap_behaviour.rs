//! Behavioural tests for `OverlapResolver`.

use std::cell::RefCell;

use isochrone_core::polyline::decode;
use isochrone_core::{OverlapResolver, OverlapResult, Point, Ring};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn rings() -> RefCell<Vec<Ring>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn result() -> RefCell<Option<OverlapResult>> {
    RefCell::new(None)
}

fn square(lat: f64, lng: f64, side: f64) -> Ring {
    Ring::new(vec![
        Point::new(lat, lng),
        Point::new(lat, lng + side),
        Point::new(lat + side, lng + side),
        Point::new(lat + side, lng),
    ])
    .expect("square is a valid ring")
}

fn decoded_ring(encoded: &str) -> Ring {
    decode(encoded)
        .expect("fixture polyline decodes")
        .into_ring()
        .expect("fixture polyline forms a ring")
}

#[given("a square ring from 0,0 with side 2")]
fn given_origin_square(#[from(rings)] rings: &RefCell<Vec<Ring>>) {
    rings.borrow_mut().push(square(0.0, 0.0, 2.0));
}

#[given("a square ring from 1,1 with side 2")]
fn given_offset_square(#[from(rings)] rings: &RefCell<Vec<Ring>>) {
    rings.borrow_mut().push(square(1.0, 1.0, 2.0));
}

#[given("a square ring far away at 10,10")]
fn given_distant_square(#[from(rings)] rings: &RefCell<Vec<Ring>>) {
    rings.borrow_mut().push(square(10.0, 10.0, 1.0));
}

#[given("the decoded square polyline from 0,0")]
fn given_decoded_origin(#[from(rings)] rings: &RefCell<Vec<Ring>>) {
    rings
        .borrow_mut()
        .push(decoded_ring("BFAAAg0mMg0mMAA_zmM_zmMA"));
}

#[given("the decoded square polyline from 1,1")]
fn given_decoded_offset(#[from(rings)] rings: &RefCell<Vec<Ring>>) {
    rings
        .borrow_mut()
        .push(decoded_ring("BFgqjGgqjGAg0mMg0mMAA_zmM_zmMA"));
}

#[when("I resolve the overlap")]
fn when_resolve(
    #[from(rings)] rings: &RefCell<Vec<Ring>>,
    #[from(result)] result: &RefCell<Option<OverlapResult>>,
) {
    let resolver = OverlapResolver::default();
    *result.borrow_mut() = Some(resolver.resolve(&rings.borrow(), None));
}

fn resolved(result: &RefCell<Option<OverlapResult>>) -> OverlapResult {
    result.borrow().clone().expect("resolve step should have run")
}

#[then("an overlap is reported")]
fn then_overlap(#[from(result)] result: &RefCell<Option<OverlapResult>>) {
    let overlap = resolved(result);
    assert!(overlap.has_overlap);
    assert!(overlap.area_sq_mi.is_some_and(|area| area > 0.0));
    assert!(overlap.polygon.is_some());
}

#[then("no overlap is reported")]
fn then_no_overlap(#[from(result)] result: &RefCell<Option<OverlapResult>>) {
    assert_eq!(resolved(result), OverlapResult::none());
}

#[then("the centroid is near 1.5, 1.5")]
fn then_centroid(#[from(result)] result: &RefCell<Option<OverlapResult>>) {
    let centroid = resolved(result).centroid.expect("overlap has a centroid");
    assert!((centroid.lat - 1.5).abs() < 1e-6, "lat was {}", centroid.lat);
    assert!((centroid.lng - 1.5).abs() < 1e-6, "lng was {}", centroid.lng);
}

#[scenario(path = "tests/features/overlap.feature", index = 0)]
fn overlapping_squares(rings: RefCell<Vec<Ring>>, result: RefCell<Option<OverlapResult>>) {
    let _ = (rings, result);
}

#[scenario(path = "tests/features/overlap.feature", index = 1)]
fn disjoint_squares(rings: RefCell<Vec<Ring>>, result: RefCell<Option<OverlapResult>>) {
    let _ = (rings, result);
}

#[scenario(path = "tests/features/overlap.feature", index = 2)]
fn single_location(rings: RefCell<Vec<Ring>>, result: RefCell<Option<OverlapResult>>) {
    let _ = (rings, result);
}

#[scenario(path = "tests/features/overlap.feature", index = 3)]
fn decoded_isolines(rings: RefCell<Vec<Ring>>, result: RefCell<Option<OverlapResult>>) {
    let _ = (rings, result);
}
