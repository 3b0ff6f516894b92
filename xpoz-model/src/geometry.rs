//! Plain 2D value types used by the carousel layout math.

use std::ops::{Add, Sub};

/// A point (or a translation vector) in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle described by its two corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Inclusive containment on both axes.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Width/height pair, used both for viewports and intrinsic asset sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height. Zero heights yield infinite or NaN ratios.
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contains_edges() {
        let b = Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0));
        assert!(b.contains(Point::new(0.0, 5.0)));
        assert!(b.contains(Point::new(10.0, 0.0)));
        assert!(!b.contains(Point::new(10.5, 0.0)));
    }

    #[test]
    fn point_arithmetic() {
        let p = Point::new(3.0, 4.0) - Point::new(1.0, 1.0);
        assert_eq!(p + Point::ORIGIN, Point::new(2.0, 3.0));
    }
}
