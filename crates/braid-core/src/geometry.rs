//! Geometric primitives for diagram layout and routing.
//!
//! This module provides the geometric types used throughout Braid for
//! calculating node positions, bounding boxes, connector anchors, and
//! segment intersections.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Insets`] - Margin values for four sides
//! - [`Segment`] - A straight line segment between two points
//!
//! # Coordinate System
//!
//! Braid uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Layers flow downward, so a connector from an earlier layer to a later one
//! points towards +Y.

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use braid_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Returns the point on the circle of `radius` around this point at
    /// `degrees`, measured clockwise from the +X axis (SVG orientation).
    ///
    /// # Examples
    ///
    /// ```
    /// # use braid_core::geometry::Point;
    /// let top = Point::new(100.0, 100.0).on_circle(10.0, -90.0);
    /// assert!((top.x() - 100.0).abs() < 1e-4);
    /// assert!((top.y() - 90.0).abs() < 1e-4);
    /// ```
    pub fn on_circle(self, radius: f32, degrees: f32) -> Self {
        let radians = degrees.to_radians();
        Self {
            x: self.x + radius * radians.cos(),
            y: self.y + radius * radians.sin(),
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns a square size with both sides equal to `side`
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the middle of the top edge
    pub fn top_center(self) -> Point {
        Point::new((self.min_x + self.max_x) / 2.0, self.min_y)
    }

    /// Returns the middle of the bottom edge
    pub fn bottom_center(self) -> Point {
        Point::new((self.min_x + self.max_x) / 2.0, self.max_y)
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use braid_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_center(Point::new(50.0, 50.0), Size::new(20.0, 20.0));
    /// let b = Bounds::new_from_center(Point::new(100.0, 80.0), Size::new(40.0, 10.0));
    ///
    /// let combined = a.merge(&b);
    /// assert_eq!(combined.min_x(), 40.0);
    /// assert_eq!(combined.min_y(), 40.0);
    /// assert_eq!(combined.max_x(), 120.0);
    /// assert_eq!(combined.max_y(), 85.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by the specified offset.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Returns `true` if these bounds lie inside the rectangle `[0, width] × [0, height]`.
    pub fn is_within(&self, canvas: Size) -> bool {
        self.min_x >= 0.0
            && self.min_y >= 0.0
            && self.max_x <= canvas.width
            && self.max_y <= canvas.height
    }
}

/// Represents spacing around an element with potentially different values
/// for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates insets with the same horizontal value on left and right
    pub fn symmetric_horizontal(top: f32, horizontal: f32, bottom: f32) -> Self {
        Self::new(top, horizontal, bottom, horizontal)
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }
}

/// A straight line segment between two points.
///
/// Used by the connector router to approximate each curved connector by its
/// chord when counting crossings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn start(self) -> Point {
        self.start
    }

    pub fn end(self) -> Point {
        self.end
    }

    /// Returns `true` if the two segments properly intersect.
    ///
    /// Uses the orientation test: the segments cross when the endpoints of
    /// each lie strictly on opposite sides of the other. Segments sharing an
    /// endpoint, collinear overlaps, and a segment compared with itself are
    /// not reported as crossings.
    ///
    /// # Examples
    ///
    /// ```
    /// # use braid_core::geometry::{Point, Segment};
    /// let a = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    /// let b = Segment::new(Point::new(10.0, 0.0), Point::new(0.0, 10.0));
    /// let c = Segment::new(Point::new(20.0, 0.0), Point::new(20.0, 10.0));
    ///
    /// assert!(a.crosses(&b));
    /// assert!(!a.crosses(&c));
    /// assert!(!a.crosses(&a));
    /// ```
    pub fn crosses(&self, other: &Segment) -> bool {
        let (a1, a2) = (self.start, self.end);
        let (b1, b2) = (other.start, other.end);
        ccw(a1, b1, b2) != ccw(a2, b1, b2) && ccw(a1, a2, b1) != ccw(a1, a2, b2)
    }
}

/// Strict counter-clockwise orientation of the triple `(a, b, c)`.
fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_point_operations() {
        let p1 = Point::new(10.0, 20.0);
        let p2 = Point::new(4.0, 6.0);

        assert_eq!(p1.add_point(p2), Point::new(14.0, 26.0));
        assert_eq!(p1.midpoint(p2), Point::new(7.0, 13.0));
    }

    #[test]
    fn test_point_on_circle() {
        let center = Point::new(0.0, 0.0);

        let right = center.on_circle(6.0, 0.0);
        assert!(approx_eq!(f32, right.x(), 6.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, right.y(), 0.0, epsilon = 1e-5));

        // Positive angles turn towards +Y, i.e. clockwise on screen
        let down = center.on_circle(6.0, 90.0);
        assert!(approx_eq!(f32, down.x(), 0.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, down.y(), 6.0, epsilon = 1e-5));
    }

    #[test]
    fn test_size_square() {
        assert_eq!(Size::square(5.0), Size::new(5.0, 5.0));
    }

    #[test]
    fn test_bounds_from_center() {
        let bounds = Bounds::new_from_center(Point::new(80.0, 100.0), Size::new(70.0, 50.0));

        assert_eq!(bounds.min_x(), 45.0);
        assert_eq!(bounds.min_y(), 75.0);
        assert_eq!(bounds.max_x(), 115.0);
        assert_eq!(bounds.max_y(), 125.0);
        assert_eq!(bounds.center(), Point::new(80.0, 100.0));
    }

    #[test]
    fn test_bounds_anchors() {
        let bounds = Bounds::new_from_center(Point::new(80.0, 100.0), Size::new(70.0, 70.0));

        assert_eq!(bounds.top_center(), Point::new(80.0, 65.0));
        assert_eq!(bounds.bottom_center(), Point::new(80.0, 135.0));
    }

    #[test]
    fn test_bounds_translate() {
        let bounds = Bounds::new_from_center(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
        let moved = bounds.translate(Point::new(5.0, -5.0));

        assert_eq!(moved.min_x(), 5.0);
        assert_eq!(moved.min_y(), -5.0);
        assert_eq!(moved.width(), 20.0);
        assert_eq!(moved.height(), 20.0);
    }

    #[test]
    fn test_bounds_is_within() {
        let canvas = Size::new(100.0, 100.0);
        let inside = Bounds::new_from_center(Point::new(50.0, 50.0), Size::new(20.0, 20.0));
        let touching = Bounds::new_from_center(Point::new(10.0, 90.0), Size::new(20.0, 20.0));
        let outside = Bounds::new_from_center(Point::new(5.0, 50.0), Size::new(20.0, 20.0));

        assert!(inside.is_within(canvas));
        assert!(touching.is_within(canvas));
        assert!(!outside.is_within(canvas));
    }

    #[test]
    fn test_insets_accessors() {
        let insets = Insets::symmetric_horizontal(100.0, 80.0, 120.0);

        assert_eq!(insets.top(), 100.0);
        assert_eq!(insets.right(), 80.0);
        assert_eq!(insets.bottom(), 120.0);
        assert_eq!(insets.left(), 80.0);
    }

    #[test]
    fn test_segment_crossing() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let b = Segment::new(Point::new(100.0, 0.0), Point::new(0.0, 100.0));

        assert!(a.crosses(&b));
        assert!(b.crosses(&a));
    }

    #[test]
    fn test_segment_shared_endpoint_does_not_cross() {
        // Two connectors fanning out of the same anchor
        let a = Segment::new(Point::new(160.0, 135.0), Point::new(80.0, 205.0));
        let b = Segment::new(Point::new(160.0, 135.0), Point::new(240.0, 205.0));

        assert!(!a.crosses(&b));
    }

    #[test]
    fn test_segment_parallel_does_not_cross() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 100.0));
        let b = Segment::new(Point::new(50.0, 0.0), Point::new(50.0, 100.0));

        assert!(!a.crosses(&b));
        assert!(!a.crosses(&a));
    }

    #[test]
    fn test_segment_accessors() {
        let seg = Segment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        assert_eq!(seg.start(), Point::new(1.0, 2.0));
        assert_eq!(seg.end(), Point::new(3.0, 4.0));
    }
}
