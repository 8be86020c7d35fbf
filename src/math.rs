use num_traits::{Signed, Zero};

use crate::{Arithmetic, Coords};

/// Twice the signed area of triangle `(a, b, c)`. Positive for a counter-clockwise
/// turn at `b`. Areas the backend considers negligible are returned as exactly zero.
pub fn signed_area<A: Arithmetic>(arithmetic: &A, a: Coords<A::Coordinate>, b: Coords<A::Coordinate>, c: Coords<A::Coordinate>) -> A::Area {
    arithmetic.snap(arithmetic.cross(a, b, c))
}

/// Whether `v` lies strictly inside triangle `(a, b, c)`.
///
/// A point coincident with a corner or lying on an edge is *not* inside. Holes joined
/// to the outer boundary by a pair of coincident, oppositely directed edges rely on
/// this: the seam vertices would otherwise block every ear next to the seam.
pub fn point_strictly_inside_triangle<A: Arithmetic>(arithmetic: &A, v: Coords<A::Coordinate>, a: Coords<A::Coordinate>, b: Coords<A::Coordinate>, c: Coords<A::Coordinate>) -> bool {
    let vab = signed_area(arithmetic, v, a, b);
    if vab.is_zero() {
        return false;
    }

    let vbc = signed_area(arithmetic, v, b, c);
    if vbc.is_zero() || vab.is_positive() != vbc.is_positive() {
        return false;
    }

    let vca = signed_area(arithmetic, v, c, a);
    !vca.is_zero() && vbc.is_positive() == vca.is_positive()
}

/// Whether `v` lies on segment `(a, c)` without coinciding with either end.
pub fn point_on_open_segment<A: Arithmetic>(arithmetic: &A, v: Coords<A::Coordinate>, a: Coords<A::Coordinate>, c: Coords<A::Coordinate>) -> bool {
    if v == a || v == c || !signed_area(arithmetic, a, v, c).is_zero() {
        return false;
    }
    let within = |v: A::Coordinate, a: A::Coordinate, c: A::Coordinate| {
        if a <= c { a <= v && v <= c } else { c <= v && v <= a }
    };
    within(v.x(), a.x(), c.x()) && within(v.y(), a.y(), c.y())
}

/// Twice the signed area enclosed by the closed ring `points`, positive for
/// counter-clockwise winding. Rings with fewer than 3 points enclose nothing.
pub fn integrate_polygon<A: Arithmetic>(arithmetic: &A, points: &[Coords<A::Coordinate>]) -> A::Area {
    let mut total = A::Area::zero();
    if points.len() >= 3 {
        let shifted = points.iter().skip(1).chain(points.first());
        for (p0, p1) in points.iter().zip(shifted) {
            total += arithmetic.trapezoid(*p0, *p1);
        }
    }
    -total
}
