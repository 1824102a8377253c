//! Exact minimal enclosing circle.
//!
//! Incremental Welzl-style construction: grow the circle point by point,
//! and whenever a point falls outside, rebuild with that point pinned to
//! the boundary (then with two, then three boundary points). Every circle
//! on the way is determined by at most three support points, so the result
//! is the true smallest circle containing the set, not an approximation.
//! Arithmetic is done in f64; inputs and outputs are f32.

use nalgebra::Point2;

/// Circle in frame coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2<f32>,
    pub radius: f32,
}

/// Tolerance for the containment test, relative to the squared radius.
const EPS: f64 = 1e-10;

/// Smallest circle containing all `points`. `None` for an empty set; a
/// single point yields a zero-radius circle.
pub fn min_enclosing_circle(points: &[Point2<f32>]) -> Option<Circle> {
    if points.is_empty() {
        return None;
    }
    let pts: Vec<(f64, f64)> = points.iter().map(|p| (p.x as f64, p.y as f64)).collect();
    if pts.len() == 1 {
        return Some(Circle {
            center: points[0],
            radius: 0.0,
        });
    }

    let mut c = from_two(pts[0], pts[1]);
    for i in 2..pts.len() {
        if contains(&c, pts[i]) {
            continue;
        }
        // pts[i] must lie on the boundary
        c = from_two(pts[0], pts[i]);
        for j in 1..i {
            if contains(&c, pts[j]) {
                continue;
            }
            // pts[j] and pts[i] both on the boundary
            c = from_two(pts[j], pts[i]);
            for k in 0..j {
                if !contains(&c, pts[k]) {
                    c = from_three(pts[k], pts[j], pts[i]);
                }
            }
        }
    }

    Some(Circle {
        center: Point2::new(c.0 as f32, c.1 as f32),
        radius: c.2 as f32,
    })
}

#[inline]
fn contains(c: &(f64, f64, f64), p: (f64, f64)) -> bool {
    let dx = p.0 - c.0;
    let dy = p.1 - c.1;
    dx * dx + dy * dy <= c.2 * c.2 * (1.0 + EPS) + EPS
}

fn from_two(a: (f64, f64), b: (f64, f64)) -> (f64, f64, f64) {
    let cx = (a.0 + b.0) * 0.5;
    let cy = (a.1 + b.1) * 0.5;
    let r = ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt() * 0.5;
    (cx, cy, r)
}

/// Circumcircle of three points; collinear triples fall back to the widest
/// two-point circle.
fn from_three(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> (f64, f64, f64) {
    let d = 2.0 * (a.0 * (b.1 - c.1) + b.0 * (c.1 - a.1) + c.0 * (a.1 - b.1));
    if d.abs() < 1e-12 {
        let candidates = [from_two(a, b), from_two(b, c), from_two(a, c)];
        return candidates
            .into_iter()
            .max_by(|x, y| x.2.total_cmp(&y.2))
            .unwrap_or(candidates[0]);
    }
    let a2 = a.0 * a.0 + a.1 * a.1;
    let b2 = b.0 * b.0 + b.1 * b.1;
    let c2 = c.0 * c.0 + c.1 * c.1;
    let ux = (a2 * (b.1 - c.1) + b2 * (c.1 - a.1) + c2 * (a.1 - b.1)) / d;
    let uy = (a2 * (c.0 - b.0) + b2 * (a.0 - c.0) + c2 * (b.0 - a.0)) / d;
    let r = ((a.0 - ux).powi(2) + (a.1 - uy).powi(2)).sqrt();
    (ux, uy, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f32, f32)]) -> Vec<Point2<f32>> {
        raw.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn empty_set_has_no_circle() {
        assert!(min_enclosing_circle(&[]).is_none());
    }

    #[test]
    fn single_point_is_a_zero_radius_circle() {
        let c = min_enclosing_circle(&pts(&[(3.0, -2.0)])).unwrap();
        assert_eq!(c.center, Point2::new(3.0, -2.0));
        assert_eq!(c.radius, 0.0);
    }

    #[test]
    fn two_points_span_a_diameter() {
        let c = min_enclosing_circle(&pts(&[(0.0, 0.0), (4.0, 0.0)])).unwrap();
        assert!((c.center.x - 2.0).abs() < 1e-5);
        assert!(c.center.y.abs() < 1e-5);
        assert!((c.radius - 2.0).abs() < 1e-5);
    }

    #[test]
    fn unit_square_centers_on_the_centroid() {
        let c = min_enclosing_circle(&pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
        ]))
        .unwrap();
        assert!((c.center.x - 0.5).abs() < 1e-5, "center {:?}", c.center);
        assert!((c.center.y - 0.5).abs() < 1e-5, "center {:?}", c.center);
        let half_diagonal = (2.0f32).sqrt() * 0.5;
        assert!((c.radius - half_diagonal).abs() < 1e-5, "radius {}", c.radius);
    }

    #[test]
    fn collinear_points_use_the_extremes() {
        let c = min_enclosing_circle(&pts(&[(0.0, 0.0), (1.0, 0.0), (5.0, 0.0), (3.0, 0.0)]))
            .unwrap();
        assert!((c.center.x - 2.5).abs() < 1e-5);
        assert!((c.radius - 2.5).abs() < 1e-5);
    }

    #[test]
    fn interior_points_do_not_grow_the_circle() {
        let c = min_enclosing_circle(&pts(&[
            (-3.0, 0.0),
            (3.0, 0.0),
            (0.0, 3.0),
            (0.0, -3.0),
            (0.5, 0.5),
            (1.0, -1.0),
        ]))
        .unwrap();
        assert!(c.center.x.abs() < 1e-5);
        assert!(c.center.y.abs() < 1e-5);
        assert!((c.radius - 3.0).abs() < 1e-5);
    }
}
