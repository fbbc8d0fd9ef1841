//! Primitive geometry and distance algorithms
//!
//! Every segment-class test (walls, polygon edges) is built on
//! [`distance_point_to_segment`]; polygon membership uses the even-odd ray
//! cast in [`point_in_polygon`].

use crate::foundation::math::Vec2;

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec2,
    /// Maximum corner of the bounding box
    pub max: Vec2,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Smallest box holding every point, `None` for an empty input
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |aabb, p| Self {
            min: aabb.min.inf(&p),
            max: aabb.max.sup(&p),
        }))
    }

    /// Box bounding a circle
    pub fn from_circle(center: Vec2, radius: f32) -> Self {
        let extents = Vec2::new(radius.abs(), radius.abs());
        Self::new(center - extents, center + extents)
    }

    /// Grow the box by `margin` on every side
    pub fn inflated(&self, margin: f32) -> Self {
        let margin = Vec2::new(margin.abs(), margin.abs());
        Self::new(self.min - margin, self.max + margin)
    }

    /// Check if this AABB intersects another AABB (touching counts)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y
    }

    /// Check if this AABB contains a point
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y
    }

    /// Whether every coordinate is finite
    pub fn is_finite(&self) -> bool {
        self.min.iter().chain(self.max.iter()).all(|v| v.is_finite())
    }
}

/// Closest point to `p` on the segment `a`-`b`
///
/// A zero-length segment collapses to `a`.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.magnitude_squared();
    // Sentinel below zero clamps onto `a`
    let t = if len_sq == 0.0 { -1.0 } else { (p - a).dot(&ab) / len_sq };
    a + ab * t.clamp(0.0, 1.0)
}

/// Euclidean distance from `p` to the closest point on segment `a`-`b`
pub fn distance_point_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    (p - closest_point_on_segment(p, a, b)).magnitude()
}

/// Even-odd ray cast: is `p` inside the closed polygon `vertices`?
///
/// Winding is irrelevant. The result is exact for simple polygons and
/// unspecified for self-intersecting ones. Fewer than three vertices enclose
/// nothing, so the answer is always `false` there.
pub fn point_in_polygon<V>(p: Vec2, vertices: &[V]) -> bool
where
    V: Copy + Into<Vec2>,
{
    let n = vertices.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi: Vec2 = vertices[i].into();
        let vj: Vec2 = vertices[j].into();
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
        ]
    }

    #[test]
    fn test_distance_to_segment_interior() {
        let d = distance_point_to_segment(
            Vec2::new(50.0, 7.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
        );
        assert_relative_eq!(d, 7.0);
    }

    #[test]
    fn test_distance_to_segment_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_relative_eq!(distance_point_to_segment(Vec2::new(-3.0, 4.0), a, b), 5.0);
        assert_relative_eq!(distance_point_to_segment(Vec2::new(13.0, -4.0), a, b), 5.0);
    }

    #[test]
    fn test_zero_length_segment_is_point_distance() {
        let a = Vec2::new(2.0, 2.0);
        let d = distance_point_to_segment(Vec2::new(5.0, 6.0), a, a);
        assert_relative_eq!(d, 5.0);
        assert_eq!(closest_point_on_segment(Vec2::new(5.0, 6.0), a, a), a);
    }

    #[test]
    fn test_distance_is_endpoint_order_independent() {
        let a = Vec2::new(-4.0, 1.0);
        let b = Vec2::new(9.0, 12.0);
        for p in [Vec2::new(0.0, 0.0), Vec2::new(20.0, -3.0), Vec2::new(3.0, 8.0)] {
            assert_relative_eq!(
                distance_point_to_segment(p, a, b),
                distance_point_to_segment(p, b, a),
                epsilon = 1e-4
            );
        }
    }

    #[test]
    fn test_point_in_polygon_square() {
        let poly = square();
        assert!(point_in_polygon(Vec2::new(50.0, 50.0), &poly));
        assert!(!point_in_polygon(Vec2::new(150.0, 50.0), &poly));
        assert!(!point_in_polygon(Vec2::new(50.0, -1.0), &poly));
    }

    #[test]
    fn test_point_in_polygon_ignores_winding() {
        let mut poly = square();
        poly.reverse();
        assert!(point_in_polygon(Vec2::new(10.0, 90.0), &poly));
        assert!(!point_in_polygon(Vec2::new(-10.0, 90.0), &poly));
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // U shape opening upwards
        let poly = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(30.0, 0.0),
            Vec2::new(30.0, 60.0),
            Vec2::new(70.0, 60.0),
            Vec2::new(70.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
        ];
        assert!(point_in_polygon(Vec2::new(15.0, 30.0), &poly));
        assert!(!point_in_polygon(Vec2::new(50.0, 30.0), &poly));
        assert!(point_in_polygon(Vec2::new(50.0, 80.0), &poly));
    }

    #[test]
    fn test_empty_polygon_contains_nothing() {
        let poly: Vec<Vec2> = Vec::new();
        assert!(!point_in_polygon(Vec2::zeros(), &poly));
    }

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(square()).unwrap();
        assert_eq!(aabb.min, Vec2::new(0.0, 0.0));
        assert_eq!(aabb.max, Vec2::new(100.0, 100.0));
        assert!(Aabb::from_points(Vec::<Vec2>::new()).is_none());
    }

    #[test]
    fn test_aabb_intersection() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let touching = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        let apart = Aabb::from_circle(Vec2::new(30.0, 30.0), 5.0);
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
        assert!(a.inflated(20.0).intersects(&apart));
    }
}
