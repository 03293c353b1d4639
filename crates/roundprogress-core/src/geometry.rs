//! Geometric primitives: Point, Size, Rect, `Padding`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative (not laid out yet).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from edge coordinates. The result may have negative extent.
    #[must_use]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Get the origin (top-left) point.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Left edge.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when the rectangle has no positive area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Point on the ellipse inscribed in this rectangle.
    ///
    /// `degrees` is measured clockwise from the 3 o'clock position, with y
    /// growing downwards.
    #[must_use]
    pub fn point_at_angle(&self, degrees: f32) -> Point {
        let radians = degrees.to_radians();
        let center = self.center();
        Point::new(
            (self.width / 2.0).mul_add(radians.cos(), center.x),
            (self.height / 2.0).mul_add(radians.sin(), center.y),
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Padding between a widget's bounds and its content.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    /// Left padding
    pub left: f32,
    /// Top padding
    pub top: f32,
    /// Right padding
    pub right: f32,
    /// Bottom padding
    pub bottom: f32,
}

impl Padding {
    /// No padding
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create padding with individual values.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create the same padding on every side.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_point_add_sub() {
        let p = Point::new(1.0, 2.0) + Point::new(3.0, 4.0);
        assert_eq!(p, Point::new(4.0, 6.0));
        assert_eq!(p - Point::new(4.0, 6.0), Point::ORIGIN);
    }

    #[test]
    fn test_point_distance() {
        let d = Point::new(0.0, 0.0).distance(&Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(10.0, 0.0).is_empty());
        assert!(Size::new(-1.0, 10.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_rect_from_ltrb() {
        let r = Rect::from_ltrb(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r, Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_rect_from_ltrb_inverted_is_empty() {
        let r = Rect::from_ltrb(50.0, 50.0, 40.0, 60.0);
        assert!(r.is_empty());
    }

    #[test]
    fn test_rect_point_at_angle_cardinals() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let east = r.point_at_angle(0.0);
        let south = r.point_at_angle(90.0);
        let west = r.point_at_angle(180.0);
        let north = r.point_at_angle(270.0);

        assert!((east.x - 100.0).abs() < 1e-4 && (east.y - 50.0).abs() < 1e-4);
        assert!((south.x - 50.0).abs() < 1e-4 && (south.y - 100.0).abs() < 1e-4);
        assert!((west.x - 0.0).abs() < 1e-4 && (west.y - 50.0).abs() < 1e-4);
        assert!((north.x - 50.0).abs() < 1e-4 && (north.y - 0.0).abs() < 1e-4);
    }

    #[test]
    fn test_rect_point_at_angle_ellipse() {
        let r = Rect::new(0.0, 0.0, 200.0, 100.0);
        let east = r.point_at_angle(0.0);
        assert!((east.x - 200.0).abs() < 1e-4);
        assert!((east.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_padding_uniform() {
        assert_eq!(Padding::uniform(4.0), Padding::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(Padding::default(), Padding::ZERO);
    }
}
