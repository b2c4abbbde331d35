//! Geometric primitives for wheel layout and scene bounds.
//!
//! This module provides the fundamental geometric types used throughout
//! chordwheel for calculating slot positions, chord curves, and the bounding
//! boxes of rendered scenes.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in scene space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`QuadCurve`] - A quadratic Bezier curve given by start, control, and end points
//!
//! # Coordinate System
//!
//! Chordwheel uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward (positive to the right)
//! - **Y-axis**: Increases downward (positive downward)
//!
//! This convention matches SVG and most screen coordinate systems. Layouts are
//! computed around an arbitrary center (usually the origin) and shifted into
//! positive coordinates by the renderer.

/// A 2D point representing a position in scene coordinate space.
///
/// Points use `f32` coordinates and provide operations for basic vector math.
/// The coordinate system has origin at top-left with Y increasing downward
/// (see [module documentation](self) for details).
///
/// # Examples
///
/// ```
/// # use chordwheel_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// // Vector addition
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
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

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Calculates the Euclidean distance to another point
    pub fn distance_to(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
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

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns a new Size grown by `margin` on every side
    pub fn grow(self, margin: f32) -> Self {
        Self {
            width: margin.mul_add(2.0, self.width), // width + margin * 2.0
            height: margin.mul_add(2.0, self.height), // height + margin * 2.0
        }
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

    /// Creates the smallest bounds containing every given point.
    ///
    /// Returns [`Bounds::default`] when `points` is empty.
    pub fn enclosing(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };

        points.iter().skip(1).fold(
            Self {
                min_x: first.x,
                min_y: first.y,
                max_x: first.x,
                max_y: first.y,
            },
            |acc, p| Self {
                min_x: acc.min_x.min(p.x),
                min_y: acc.min_y.min(p.y),
                max_x: acc.max_x.max(p.x),
                max_y: acc.max_y.max(p.y),
            },
        )
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

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// The resulting bounds will have the minimum values of both bounds for min_x and min_y,
    /// and the maximum values of both bounds for max_x and max_y.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chordwheel_core::geometry::{Bounds, Point, Size};
    /// let rim = Bounds::new_from_center(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
    /// let label = Bounds::new_from_center(Point::new(80.0, 0.0), Size::new(60.0, 20.0));
    ///
    /// let combined = rim.merge(&label);
    /// assert_eq!(combined.min_x(), -50.0); // From rim
    /// assert_eq!(combined.max_x(), 110.0); // From label
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
    ///
    /// This translates both the minimum and maximum coordinates by the given amount.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Expands the bounds outward by a uniform margin on every side
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}

/// A quadratic Bezier curve defined by start, control, and end points.
///
/// Chord arcs are quadratic curves whose control point sits at the wheel
/// center, bowing every chord through the middle of the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadCurve {
    start: Point,
    control: Point,
    end: Point,
}

impl QuadCurve {
    /// Creates a new quadratic curve from the three defining points
    pub fn new(start: Point, control: Point, end: Point) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Returns the start point of the curve
    pub fn start(self) -> Point {
        self.start
    }

    /// Returns the control point of the curve
    pub fn control(self) -> Point {
        self.control
    }

    /// Returns the end point of the curve
    pub fn end(self) -> Point {
        self.end
    }

    /// Evaluates the curve at parameter `t` in `[0, 1]`.
    ///
    /// Standard quadratic Bezier form: `(1-t)^2·P0 + 2(1-t)t·P1 + t^2·P2`.
    pub fn point_at(self, t: f32) -> Point {
        let u = 1.0 - t;
        self.start
            .scale(u * u)
            .add_point(self.control.scale(2.0 * u * t))
            .add_point(self.end.scale(t * t))
    }

    /// Returns a conservative bounding box for the curve.
    ///
    /// A quadratic Bezier never leaves the triangle spanned by its three
    /// defining points, so the enclosing box of those points always contains
    /// the curve.
    pub fn bounds(self) -> Bounds {
        Bounds::enclosing(&[self.start, self.control, self.end])
    }
}
