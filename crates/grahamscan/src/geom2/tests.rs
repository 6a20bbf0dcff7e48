use super::*;
use nalgebra::vector;
use ::rand::{rngs::StdRng, Rng, SeedableRng};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn orientation_signs() {
    let o = p(0.0, 0.0);
    let e = p(1.0, 0.0);
    assert!(orientation(o, e, p(1.0, 1.0)) > 0.0);
    assert!(orientation(o, e, p(1.0, -1.0)) < 0.0);
    assert_eq!(orientation(o, e, p(5.0, 0.0)), 0.0);
    // coincident points are collinear
    assert_eq!(orientation(o, o, p(3.0, 7.0)), 0.0);
    assert_eq!(orientation(e, e, e), 0.0);
}

#[test]
fn orientation_is_twice_triangle_area() {
    let a = p(1.0, 1.0);
    let b = p(4.0, 1.0);
    let c = p(1.0, 5.0);
    assert!((orientation(a, b, c) - 12.0).abs() < 1e-12);
    assert!((orientation(a, c, b) + 12.0).abs() < 1e-12);
}

#[test]
fn orientation_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let a = p(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let b = p(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let c = p(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let expected = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
        assert!((orientation(a, b, c) - expected).abs() < 1e-12);
        // cyclic shift keeps the sign, swapping flips it
        assert!((orientation(b, c, a) - orientation(a, b, c)).abs() < 1e-12);
        assert!((orientation(b, a, c) + orientation(a, b, c)).abs() < 1e-12);
    }
}

#[test]
fn distance_basics() {
    assert_eq!(distance(p(0.0, 0.0), p(3.0, 4.0)), 5.0);
    assert_eq!(distance(p(3.0, 4.0), p(0.0, 0.0)), 5.0);
    assert_eq!(distance(p(-1.5, 2.0), p(-1.5, 2.0)), 0.0);
}

#[test]
fn point_predicates() {
    let a = p(1.0, 2.0);
    assert!(a.coordinate_equals(&p(1.0, 2.0)));
    assert!(!a.coordinate_equals(&p(1.0, 2.0 + 1e-15)));
    assert!(a.lexicographic_less(&p(2.0, -10.0)));
    assert!(a.lexicographic_less(&p(1.0, 3.0)));
    assert!(!a.lexicographic_less(&p(1.0, 2.0)));
    assert!(!a.lexicographic_less(&p(0.5, 9.0)));
    assert_eq!(a.lexicographic_cmp(&p(1.0, 1.0)), std::cmp::Ordering::Greater);
    assert_eq!(Point::from(vector![1.0, 2.0]), a);
    assert_eq!(a.to_string(), "(1, 2)");
    assert_eq!(p(0.5, -3.25).to_string(), "(0.5, -3.25)");
}

#[test]
fn polygon_measures_unit_square() {
    let sq = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
    assert!((signed_area(&sq) - 1.0).abs() < 1e-12);
    assert!((perimeter(&sq) - 4.0).abs() < 1e-12);
    let mut cw = sq;
    cw.reverse();
    assert!((signed_area(&cw) + 1.0).abs() < 1e-12);
    assert_eq!(signed_area(&sq[..2]), 0.0);
    assert_eq!(perimeter(&sq[..1]), 0.0);
    assert!((perimeter(&sq[..2]) - 2.0).abs() < 1e-12);
}

#[test]
fn containment_convex_ring() {
    let sq = [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
    assert!(contains_point(&sq, p(2.0, 2.0)));
    assert!(contains_point(&sq, p(4.0, 2.0)));
    assert!(contains_point(&sq, p(0.0, 0.0)));
    assert!(!contains_point(&sq, p(4.0001, 2.0)));
    assert!(!contains_point(&sq, p(-1.0, -1.0)));
}

#[test]
fn containment_degenerate_rings() {
    assert!(!contains_point(&[], p(0.0, 0.0)));
    assert!(contains_point(&[p(1.0, 1.0)], p(1.0, 1.0)));
    assert!(!contains_point(&[p(1.0, 1.0)], p(1.0, 2.0)));
    let seg = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)];
    assert!(contains_point(&seg, p(1.5, 0.0)));
    assert!(!contains_point(&seg, p(4.0, 0.0)));
    assert!(!contains_point(&seg, p(1.0, 0.5)));
}
