//! Obstacle shapes and per-shape overlap tests
//!
//! Obstacle payloads keep the plain scalar fields of the level data contract
//! so they serialize exactly as the editor writes them. Geometry is converted
//! to [`Vec2`] on demand during a test, and only the query point is ever
//! transformed; obstacle data is never rewritten.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{clamp_lenient, rotate_about, Vec2};
use super::primitives::{distance_point_to_segment, point_in_polygon, Aabb};

/// Rectangle obstacle, rotated about its own center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Top-left corner x (before rotation)
    pub x: f32,
    /// Top-left corner y (before rotation)
    pub y: f32,
    /// Width in local space
    pub width: f32,
    /// Height in local space
    pub height: f32,
    /// Rotation in degrees, clockwise-positive
    #[serde(default)]
    pub rotation: f32,
}

impl Rectangle {
    /// Creates an unrotated rectangle from its top-left corner and size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height, rotation: 0.0 }
    }

    /// Returns a copy rotated by `degrees` about its center
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Rotation pivot
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// World-space corners, clockwise from the top-left in local space
    pub fn corners(&self) -> [Vec2; 4] {
        let center = self.center();
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
            Vec2::new(self.x, self.y + self.height),
        ]
        .map(|corner| rotate_about(corner, center, self.rotation))
    }

    /// Map a world-space point into the unrotated frame where the rectangle
    /// spans `[0, width] x [0, height]`
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        rotate_about(point, self.center(), -self.rotation) - Vec2::new(self.x, self.y)
    }

    /// Does a circle at `center` with `radius` overlap this rectangle?
    ///
    /// Touching the boundary counts as overlap.
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        let local = self.to_local(center);
        let closest = Vec2::new(
            clamp_lenient(local.x, 0.0, self.width),
            clamp_lenient(local.y, 0.0, self.height),
        );
        (local - closest).magnitude() <= radius
    }

    /// Bounding box of the rotated rectangle
    pub fn aabb(&self) -> Aabb {
        let [a, b, c, d] = self.corners();
        Aabb::new(a.inf(&b).inf(&c).inf(&d), a.sup(&b).sup(&c).sup(&d))
    }
}

/// Thick line segment (wall): a capsule of half-width `thickness / 2`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint x
    pub x1: f32,
    /// First endpoint y
    pub y1: f32,
    /// Second endpoint x
    pub x2: f32,
    /// Second endpoint y
    pub y2: f32,
    /// Full wall thickness
    pub thickness: f32,
}

impl Segment {
    /// Creates a wall between two endpoints
    pub fn new(start: Vec2, end: Vec2, thickness: f32) -> Self {
        Self { x1: start.x, y1: start.y, x2: end.x, y2: end.y, thickness }
    }

    /// First endpoint
    pub fn start(&self) -> Vec2 {
        Vec2::new(self.x1, self.y1)
    }

    /// Second endpoint
    pub fn end(&self) -> Vec2 {
        Vec2::new(self.x2, self.y2)
    }

    /// Returns the same wall with its endpoints swapped
    pub fn reversed(&self) -> Self {
        Self::new(self.end(), self.start(), self.thickness)
    }

    /// Does a circle at `center` with `radius` overlap this wall?
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        distance_point_to_segment(center, self.start(), self.end()) < radius + self.thickness / 2.0
    }

    /// Bounding box of the capsule
    pub fn aabb(&self) -> Aabb {
        let start = self.start();
        let end = self.end();
        Aabb::new(start.inf(&end), start.sup(&end)).inflated(self.thickness / 2.0)
    }
}

/// Polygon vertex as written in level data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Vertex {
    /// Creates a vertex
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vertex> for Vec2 {
    fn from(v: Vertex) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vertex {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Polygon obstacle with solid edges
///
/// A plain polygon is a thin solid border around a passable interior. An
/// inverted polygon additionally makes everything outside it solid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    /// Vertices in order; the last connects back to the first
    #[serde(default)]
    pub points: Vec<Vertex>,
    /// Whether the exterior is solid
    #[serde(default)]
    pub inverted: bool,
}

impl Polygon {
    /// Creates a plain (non-inverted) polygon
    pub fn new<I, V>(points: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Vertex>,
    {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            inverted: false,
        }
    }

    /// Returns a copy with the given inversion flag
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Edges as `(start, end)` pairs, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (Vec2::from(self.points[i]), Vec2::from(self.points[(i + 1) % n])))
    }

    /// Is `point` inside the polygon (even-odd rule)?
    pub fn contains(&self, point: Vec2) -> bool {
        point_in_polygon(point, &self.points)
    }

    /// Does a circle at `center` with `radius` overlap this polygon?
    ///
    /// The exterior rule for inverted polygons looks at the center only,
    /// while the edge rule uses the full radius.
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        if self.inverted && !self.contains(center) {
            return true;
        }
        self.edges()
            .any(|(a, b)| distance_point_to_segment(center, a, b) < radius)
    }

    /// Bounding box of the vertices, `None` when there are none
    pub fn aabb(&self) -> Option<Aabb> {
        Aabb::from_points(self.points.iter().copied().map(Vec2::from))
    }
}

/// How far an obstacle can reach, for broad-phase indexing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Blocks nothing anywhere
    Empty,
    /// Can only block circles whose center lies within `radius` of this box
    Bounded(Aabb),
    /// May block at any position
    Unbounded,
}

/// Discriminant of [`Obstacle`], for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Rotated rectangle
    Rectangle,
    /// Thick segment
    Segment,
    /// Polygon (plain or inverted)
    Polygon,
}

impl std::fmt::Display for ObstacleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Rectangle => "rectangle",
            Self::Segment => "segment",
            Self::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

/// Any solid obstacle the runtime can test against
#[derive(Debug, Clone, PartialEq)]
pub enum Obstacle {
    /// Rotated rectangle
    Rectangle(Rectangle),
    /// Thick segment
    Segment(Segment),
    /// Polygon (plain or inverted)
    Polygon(Polygon),
}

impl Obstacle {
    /// Does a circle at `center` with `radius` overlap this obstacle?
    ///
    /// The boundary rule differs per kind: a rectangle counts a circle that
    /// exactly touches it as overlapping (`<=`), while segments and polygon
    /// edges need strict penetration (`<`).
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        match self {
            Self::Rectangle(rect) => rect.overlaps_circle(center, radius),
            Self::Segment(segment) => segment.overlaps_circle(center, radius),
            Self::Polygon(polygon) => polygon.overlaps_circle(center, radius),
        }
    }

    /// Region this obstacle can affect
    pub fn extent(&self) -> Extent {
        match self {
            Self::Rectangle(rect) => Extent::Bounded(rect.aabb()),
            Self::Segment(segment) => Extent::Bounded(segment.aabb()),
            Self::Polygon(polygon) if polygon.inverted => Extent::Unbounded,
            Self::Polygon(polygon) => polygon.aabb().map_or(Extent::Empty, Extent::Bounded),
        }
    }

    /// Which kind of obstacle this is
    pub fn kind(&self) -> ObstacleKind {
        match self {
            Self::Rectangle(_) => ObstacleKind::Rectangle,
            Self::Segment(_) => ObstacleKind::Segment,
            Self::Polygon(_) => ObstacleKind::Polygon,
        }
    }

    /// Describe geometry that is accepted but probably not what the author meant
    pub fn degenerate_reason(&self) -> Option<&'static str> {
        match self {
            Self::Rectangle(rect) if rect.width <= 0.0 || rect.height <= 0.0 => {
                Some("rectangle has a non-positive width or height")
            }
            Self::Segment(segment) if segment.thickness < 0.0 => {
                Some("segment has a negative thickness")
            }
            Self::Segment(segment) if segment.start() == segment.end() => {
                Some("segment has zero length")
            }
            Self::Polygon(polygon) if !polygon.points.is_empty() && polygon.points.len() < 3 => {
                Some("polygon has fewer than 3 vertices")
            }
            _ => None,
        }
    }
}

impl From<Rectangle> for Obstacle {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<Segment> for Obstacle {
    fn from(segment: Segment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Polygon> for Obstacle {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_square(inverted: bool) -> Polygon {
        Polygon::new([
            Vertex::new(0.0, 0.0),
            Vertex::new(100.0, 0.0),
            Vertex::new(100.0, 100.0),
            Vertex::new(0.0, 100.0),
        ])
        .with_inverted(inverted)
    }

    fn sample_points() -> Vec<Vec2> {
        // Offsets chosen to stay clear of exact boundary distances
        let mut points = Vec::new();
        for i in 0..24 {
            for j in 0..24 {
                points.push(Vec2::new(60.0 + i as f32 * 5.3, 60.0 + j as f32 * 5.3));
            }
        }
        points
    }

    #[test]
    fn test_rectangle_touching_left_edge() {
        let rect = Rectangle::new(100.0, 100.0, 50.0, 50.0);
        assert!(rect.overlaps_circle(Vec2::new(90.0, 125.0), 10.0));
        assert!(!rect.overlaps_circle(Vec2::new(80.0, 125.0), 10.0));
    }

    #[test]
    fn test_unrotated_rectangle_matches_aabb_circle() {
        let rect = Rectangle::new(100.0, 100.0, 50.0, 50.0);
        let radius = 7.5;
        for p in sample_points() {
            let closest = Vec2::new(p.x.clamp(100.0, 150.0), p.y.clamp(100.0, 150.0));
            let expected = (p - closest).magnitude() <= radius;
            assert_eq!(rect.overlaps_circle(p, radius), expected, "point {p:?}");
        }
    }

    #[test]
    fn test_full_turns_match_unrotated() {
        let rect = Rectangle::new(100.0, 100.0, 50.0, 30.0);
        let radius = 6.2;
        for turns in [1.0, 2.0, -1.0] {
            let spun = rect.with_rotation(360.0 * turns);
            for p in sample_points() {
                assert_eq!(
                    spun.overlaps_circle(p, radius),
                    rect.overlaps_circle(p, radius),
                    "turns {turns}, point {p:?}"
                );
            }
        }
    }

    #[test]
    fn test_rotated_rectangle() {
        // 100x10 bar centered at (50, 5), turned upright
        let bar = Rectangle::new(0.0, 0.0, 100.0, 10.0).with_rotation(90.0);
        // Upright, the bar spans x in [45, 55] and y in [-45, 55]
        assert!(bar.overlaps_circle(Vec2::new(50.0, -40.0), 1.0));
        assert!(!bar.overlaps_circle(Vec2::new(90.0, 5.0), 1.0));
        assert!(bar.overlaps_circle(Vec2::new(57.0, 5.0), 3.0));
        assert!(!bar.overlaps_circle(Vec2::new(60.0, 5.0), 3.0));
    }

    #[test]
    fn test_rotated_rectangle_aabb() {
        let bar = Rectangle::new(0.0, 0.0, 100.0, 10.0).with_rotation(90.0);
        let aabb = bar.aabb();
        assert_abs_diff_eq!(aabb.min.x, 45.0, epsilon = 1e-3);
        assert_abs_diff_eq!(aabb.max.x, 55.0, epsilon = 1e-3);
        assert_abs_diff_eq!(aabb.min.y, -45.0, epsilon = 1e-3);
        assert_abs_diff_eq!(aabb.max.y, 55.0, epsilon = 1e-3);
    }

    #[test]
    fn test_wall_thickness() {
        let wall = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), 10.0);
        assert!(wall.overlaps_circle(Vec2::new(50.0, 7.0), 3.0));
        assert!(!wall.overlaps_circle(Vec2::new(50.0, 9.0), 3.0));
        // Rounded caps past the endpoints
        assert!(wall.overlaps_circle(Vec2::new(106.0, 0.0), 3.0));
        assert!(!wall.overlaps_circle(Vec2::new(106.0, 6.0), 3.0));
    }

    #[test]
    fn test_wall_symmetric_under_endpoint_swap() {
        let wall = Segment::new(Vec2::new(12.0, 80.0), Vec2::new(140.0, 95.0), 6.0);
        let swapped = wall.reversed();
        for p in sample_points() {
            assert_eq!(
                wall.overlaps_circle(p, 4.1),
                swapped.overlaps_circle(p, 4.1),
                "point {p:?}"
            );
        }
    }

    #[test]
    fn test_zero_length_wall_is_a_disc() {
        let post = Segment::new(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0), 4.0);
        assert!(post.overlaps_circle(Vec2::new(14.0, 10.0), 3.0));
        assert!(!post.overlaps_circle(Vec2::new(16.0, 10.0), 3.0));
    }

    #[test]
    fn test_inverted_polygon_exterior_is_solid() {
        let room = unit_square(true);
        assert!(!room.overlaps_circle(Vec2::new(50.0, 50.0), 1.0));
        assert!(room.overlaps_circle(Vec2::new(150.0, 50.0), 1.0));
    }

    #[test]
    fn test_polygon_edges_block_both_ways() {
        for inverted in [false, true] {
            let poly = unit_square(inverted);
            // Inside, 3 units from the left edge
            assert!(poly.overlaps_circle(Vec2::new(3.0, 50.0), 5.0));
            assert!(!poly.overlaps_circle(Vec2::new(10.0, 50.0), 5.0));
        }
    }

    #[test]
    fn test_plain_polygon_interior_is_passable() {
        let poly = unit_square(false);
        assert!(!poly.overlaps_circle(Vec2::new(50.0, 50.0), 10.0));
    }

    #[test]
    fn test_polygon_outside_distance_duality() {
        let plain = unit_square(false);
        let inverted = unit_square(true);
        let radius = 5.0;
        for d in [0.5_f32, 2.0, 4.9, 5.1, 8.0, 40.0] {
            let p = Vec2::new(100.0 + d, 50.0);
            assert_eq!(plain.overlaps_circle(p, radius), d < radius, "d = {d}");
            assert!(inverted.overlaps_circle(p, radius), "d = {d}");
        }
    }

    #[test]
    fn test_empty_polygons() {
        let plain = Polygon::default();
        let inverted = Polygon::default().with_inverted(true);
        assert!(!plain.overlaps_circle(Vec2::new(3.0, 4.0), 100.0));
        assert!(inverted.overlaps_circle(Vec2::new(3.0, 4.0), 0.5));
        assert_eq!(Obstacle::from(plain).extent(), Extent::Empty);
        assert_eq!(Obstacle::from(inverted).extent(), Extent::Unbounded);
    }

    #[test]
    fn test_touching_boundary_per_kind() {
        let rect = Obstacle::from(Rectangle::new(100.0, 100.0, 50.0, 50.0));
        assert!(rect.overlaps_circle(Vec2::new(90.0, 125.0), 10.0));

        let wall = Obstacle::from(Segment::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), 10.0));
        assert!(!wall.overlaps_circle(Vec2::new(50.0, 8.0), 3.0));
        assert!(wall.overlaps_circle(Vec2::new(50.0, 7.5), 3.0));

        let polygon = Obstacle::from(unit_square(false));
        assert!(!polygon.overlaps_circle(Vec2::new(105.0, 50.0), 5.0));
        assert!(polygon.overlaps_circle(Vec2::new(104.5, 50.0), 5.0));
    }

    #[test]
    fn test_degenerate_reasons() {
        assert!(Obstacle::from(Rectangle::new(0.0, 0.0, 0.0, 5.0)).degenerate_reason().is_some());
        assert!(Obstacle::from(Segment::new(Vec2::zeros(), Vec2::zeros(), 1.0))
            .degenerate_reason()
            .is_some());
        assert!(Obstacle::from(Polygon::new([Vertex::new(0.0, 0.0), Vertex::new(1.0, 1.0)]))
            .degenerate_reason()
            .is_some());
        assert!(Obstacle::from(unit_square(false)).degenerate_reason().is_none());
    }

    #[test]
    fn test_obstacle_kind_display() {
        assert_eq!(Obstacle::from(unit_square(true)).kind().to_string(), "polygon");
        assert_eq!(ObstacleKind::Segment.to_string(), "segment");
    }
}
