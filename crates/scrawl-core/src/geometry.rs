//! Geometric primitives for device-space output.
//!
//! Grid coordinates live in [`crate::cell`]; this module holds the `f32`
//! device-space types that traced shapes are expressed in, plus [`CellSize`],
//! the mapping between the two.
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The origin is the top-left corner of the (bordered) character grid and Y
//! grows downward, matching SVG.

use crate::cell::Cell;

/// A 2D point in device space.
///
/// # Examples
///
/// ```
/// # use scrawl_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
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

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Adds another point's coordinates to this point
    pub fn add_point(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Subtracts another point's coordinates from this point
    pub fn sub_point(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Returns the point halfway between this point and `other`
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns the euclidean distance from this point to `other`
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Moves this point toward `target` by at most `amount` device units.
    ///
    /// If `target` is closer than `amount`, the target itself is returned.
    pub fn toward(self, target: Point, amount: f32) -> Self {
        let distance = self.distance(target);
        if distance <= amount || distance == 0.0 {
            return target;
        }
        let ratio = amount / distance;
        Self::new(
            self.x + (target.x - self.x) * ratio,
            self.y + (target.y - self.y) * ratio,
        )
    }
}

/// An axis-aligned rectangle in device space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from two opposite corners, normalizing their order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Returns the smallest bounds containing every point, or `None` when
    /// the iterator is empty.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::new(first, first);
        for point in points {
            bounds.min_x = bounds.min_x.min(point.x);
            bounds.min_y = bounds.min_y.min(point.y);
            bounds.max_x = bounds.max_x.max(point.x);
            bounds.max_y = bounds.max_y.max(point.y);
        }
        Some(bounds)
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns true if the two rectangles overlap (touching edges count).
    pub fn intersects(self, other: Bounds) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}

/// Device pixels per grid cell.
///
/// Every traced point is placed relative to the cell it came from: corners
/// and line ends sit on the cell center, short lines span the cell edges.
///
/// # Examples
///
/// ```
/// # use scrawl_core::{cell::Cell, geometry::CellSize};
/// let size = CellSize::new(10.0, 14.0);
/// let cell = Cell::new(2, 3);
///
/// assert_eq!(size.mid_x(cell), 25.0);
/// assert_eq!(size.mid_y(cell), 49.0);
/// assert_eq!(size.cell_at(size.center(cell)), cell);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    width: f32,
    height: f32,
}

impl Default for CellSize {
    fn default() -> Self {
        Self::new(10.0, 14.0)
    }
}

impl CellSize {
    /// Creates a new cell size in device pixels
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    pub fn min_x(self, cell: Cell) -> f32 {
        cell.x() as f32 * self.width
    }

    pub fn mid_x(self, cell: Cell) -> f32 {
        self.min_x(cell) + self.width / 2.0
    }

    pub fn max_x(self, cell: Cell) -> f32 {
        self.min_x(cell) + self.width
    }

    pub fn min_y(self, cell: Cell) -> f32 {
        cell.y() as f32 * self.height
    }

    pub fn mid_y(self, cell: Cell) -> f32 {
        self.min_y(cell) + self.height / 2.0
    }

    pub fn max_y(self, cell: Cell) -> f32 {
        self.min_y(cell) + self.height
    }

    /// Returns the center of `cell` in device space
    pub fn center(self, cell: Cell) -> Point {
        Point::new(self.mid_x(cell), self.mid_y(cell))
    }

    /// Returns the device-space rectangle covered by `cell`
    pub fn bounds(self, cell: Cell) -> Bounds {
        Bounds::new(
            Point::new(self.min_x(cell), self.min_y(cell)),
            Point::new(self.max_x(cell), self.max_y(cell)),
        )
    }

    /// Returns the cell whose area contains `point`.
    pub fn cell_at(self, point: Point) -> Cell {
        Cell::new(
            (point.x() / self.width).floor() as i32,
            (point.y() / self.height).floor() as i32,
        )
    }
}
