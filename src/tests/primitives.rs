use crate::{
    Arithmetic, ArithmeticMode, Coords, FixedPoint, FloatingPoint, TriangleWinding,
    integrate_polygon, point_on_open_segment, point_strictly_inside_triangle, signed_area,
};

fn coords<A: Arithmetic>(arithmetic: &A, points: &[[f64; 2]]) -> Vec<Coords<A::Coordinate>> {
    points.iter().map(|[x, y]| arithmetic.coords(*x, *y).unwrap()).collect()
}

fn check_orientation<A: Arithmetic>(arithmetic: A) {
    let p = coords(&arithmetic, &[[0., 0.], [1., 0.], [0., 1.], [2., 0.]]);
    assert_eq!(TriangleWinding::of(signed_area(&arithmetic, p[0], p[1], p[2])), Some(TriangleWinding::Counterclockwise));
    assert_eq!(TriangleWinding::of(signed_area(&arithmetic, p[0], p[2], p[1])), Some(TriangleWinding::Clockwise));
    assert_eq!(TriangleWinding::of(signed_area(&arithmetic, p[0], p[1], p[3])), None);
    assert_eq!(arithmetic.area_to_real(signed_area(&arithmetic, p[0], p[1], p[2])), 0.5);
}

#[test]
fn orientation() {
    check_orientation(FixedPoint::default());
    check_orientation(FloatingPoint::default());
}

#[test]
fn floating_point_snaps_tiny_areas() {
    let arithmetic = FloatingPoint::default();
    let p = coords(&arithmetic, &[[0., 0.], [1., 0.], [0.5, 1e-9]]);
    assert_eq!(signed_area(&arithmetic, p[0], p[1], p[2]), 0.0);

    let exact = FloatingPoint::new(0.0);
    assert!(signed_area(&exact, p[0], p[1], p[2]) > 0.0);
}

#[test]
fn fixed_point_resolution() {
    let arithmetic = FixedPoint::default();
    // Below the resolution, the point rounds onto the x axis
    let p = coords(&arithmetic, &[[0., 0.], [1., 0.], [0.5, 1e-9], [0.5, 1e-7]]);
    assert_eq!(signed_area(&arithmetic, p[0], p[1], p[2]), 0);
    assert_eq!(signed_area(&arithmetic, p[0], p[1], p[3]), 10_000_000);
}

#[test]
fn fixed_point_conversion() {
    let arithmetic = FixedPoint::default();
    assert_eq!(arithmetic.coordinate(0.1), Some(1_000_000));
    assert_eq!(arithmetic.coordinate(-2.5), Some(-25_000_000));
    assert_eq!(arithmetic.coordinate(1.2345678).map(|c| arithmetic.to_real(c)), Some(1.2345678));
    assert_eq!(arithmetic.coordinate(f64::NAN), None);
    assert_eq!(arithmetic.coordinate(f64::INFINITY), None);
    assert_eq!(arithmetic.coordinate(1e12), None);
    assert!(arithmetic.coordinate(1e8).is_some());

    let coarse = FixedPoint::new(10);
    assert_eq!(coarse.coordinate(0.26), Some(3));
    assert_eq!(coarse.area_to_real(200), 1.0);
}

#[test]
fn floating_point_conversion() {
    let arithmetic = FloatingPoint::default();
    assert_eq!(arithmetic.coordinate(1e300), Some(1e300));
    assert_eq!(arithmetic.coordinate(f64::NAN), None);
    assert_eq!(arithmetic.coordinate(f64::NEG_INFINITY), None);
}

#[test]
#[should_panic]
fn negative_epsilon() {
    FloatingPoint::new(-1.0);
}

#[test]
fn modes() {
    assert_eq!(FixedPoint::default().mode(), ArithmeticMode::Fixed);
    assert_eq!(FloatingPoint::default().mode(), ArithmeticMode::Floating);
    assert_eq!(ArithmeticMode::Fixed.to_string(), "fixed");
    assert_eq!(ArithmeticMode::Floating.to_string(), "floating");
}

fn check_inside<A: Arithmetic>(arithmetic: A) {
    let t = coords(&arithmetic, &[[0., 0.], [4., 0.], [0., 4.]]);
    let inside = |x: f64, y: f64| {
        let v = arithmetic.coords(x, y).unwrap();
        (
            point_strictly_inside_triangle(&arithmetic, v, t[0], t[1], t[2]),
            point_strictly_inside_triangle(&arithmetic, v, t[0], t[2], t[1]),
        )
    };

    assert_eq!(inside(1., 1.), (true, true));
    // Corners and edges are not inside
    assert_eq!(inside(0., 0.), (false, false));
    assert_eq!(inside(4., 0.), (false, false));
    assert_eq!(inside(2., 0.), (false, false));
    assert_eq!(inside(2., 2.), (false, false));
    assert_eq!(inside(0., 1.), (false, false));
    assert_eq!(inside(3., 3.), (false, false));
    assert_eq!(inside(-1., 1.), (false, false));
}

#[test]
fn strictly_inside() {
    check_inside(FixedPoint::default());
    check_inside(FloatingPoint::default());
}

fn check_open_segment<A: Arithmetic>(arithmetic: A) {
    let s = coords(&arithmetic, &[[0., 2.], [2., 0.]]);
    let on = |x: f64, y: f64| point_on_open_segment(&arithmetic, arithmetic.coords(x, y).unwrap(), s[0], s[1]);

    assert!(on(1., 1.));
    assert!(on(0.5, 1.5));
    assert!(!on(0., 2.));
    assert!(!on(2., 0.));
    assert!(!on(3., -1.));
    assert!(!on(1., 1.5));
}

#[test]
fn open_segment() {
    check_open_segment(FixedPoint::default());
    check_open_segment(FloatingPoint::default());
}

#[test]
fn integral() {
    let arithmetic = FloatingPoint::default();
    let square = coords(&arithmetic, &[[0., 0.], [1., 0.], [1., 1.], [0., 1.]]);
    assert_eq!(integrate_polygon(&arithmetic, &square), 2.0);

    let reversed: Vec<_> = square.iter().rev().copied().collect();
    assert_eq!(integrate_polygon(&arithmetic, &reversed), -2.0);

    assert_eq!(integrate_polygon(&arithmetic, &square[..2]), 0.0);

    let arithmetic = FixedPoint::new(1);
    let pentagon = coords(&arithmetic, &[[0., 0.], [2., 0.], [3., 2.], [1., 3.], [-1., 2.]]);
    assert_eq!(integrate_polygon(&arithmetic, &pentagon), 16);
}

#[test]
fn winding() {
    assert_eq!(TriangleWinding::of(3i128), Some(TriangleWinding::Counterclockwise));
    assert_eq!(TriangleWinding::of(-0.5f64), Some(TriangleWinding::Clockwise));
    assert_eq!(TriangleWinding::of(0i128), None);
    assert_eq!(TriangleWinding::of(0.0f64), None);
    assert_eq!(TriangleWinding::of(-0.0f64), None);
}
