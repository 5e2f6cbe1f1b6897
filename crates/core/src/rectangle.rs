use crate::{Point, Size, Vector};

use std::ops::Sub;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// X coordinate of the top-left corner.
    pub x: f32,

    /// Y coordinate of the top-left corner.
    pub y: f32,

    /// Width of the rectangle.
    pub width: f32,

    /// Height of the rectangle.
    pub height: f32,
}

impl Rectangle {
    /// Creates a new [`Rectangle`] with its top-left corner in the given
    /// [`Point`] and with the provided [`Size`].
    pub const fn new(top_left: Point, size: Size) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates a new [`Rectangle`] with its top-left corner at the origin
    /// and with the provided [`Size`].
    pub const fn with_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Returns the [`Point`] at the top-left corner of the [`Rectangle`].
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the [`Size`] of the [`Rectangle`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center [`Point`] of the [`Rectangle`].
    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Returns the X coordinate of the center.
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Returns the Y coordinate of the center.
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Returns true if the given [`Point`] is contained in the [`Rectangle`].
    ///
    /// The left and top edges are inclusive, the right and bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x && point.x < self.right() && self.y <= point.y && point.y < self.bottom()
    }

    /// Returns true if `other` lies entirely within this [`Rectangle`].
    pub fn is_within(&self, other: &Rectangle) -> bool {
        self.x >= other.x
            && self.y >= other.y
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
    }

    /// Computes the intersection with the given [`Rectangle`], if any.
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);

        let lower_right_x = self.right().min(other.right());
        let lower_right_y = self.bottom().min(other.bottom());

        let width = lower_right_x - x;
        let height = lower_right_y - y;

        if width > 0.0 && height > 0.0 {
            Some(Rectangle {
                x,
                y,
                width,
                height,
            })
        } else {
            None
        }
    }

    /// Returns a new [`Rectangle`] shrunk by `amount` on every side.
    ///
    /// The resulting size never goes below zero.
    pub fn shrink(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - amount * 2.0).max(0.0),
            height: (self.height - amount * 2.0).max(0.0),
        }
    }
}

impl Sub<Vector> for Rectangle {
    type Output = Rectangle;

    fn sub(self, translation: Vector) -> Self {
        Rectangle {
            x: self.x - translation.x,
            y: self.y - translation.y,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_excludes_far_edges() {
        let r = Rectangle::new(Point::new(10.0, 10.0), Size::new(20.0, 20.0));

        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(29.9, 29.9)));
        assert!(!r.contains(Point::new(30.0, 15.0)));
        assert!(!r.contains(Point::new(15.0, 30.0)));
    }

    #[test]
    fn test_is_within() {
        let viewport = Rectangle::with_size(Size::new(100.0, 100.0)).shrink(8.0);

        assert!(Rectangle::new(Point::new(8.0, 8.0), Size::new(84.0, 84.0)).is_within(&viewport));
        assert!(!Rectangle::new(Point::new(7.0, 8.0), Size::new(10.0, 10.0)).is_within(&viewport));
        assert!(
            !Rectangle::new(Point::new(50.0, 50.0), Size::new(43.0, 10.0)).is_within(&viewport)
        );
    }

    #[test]
    fn test_intersection() {
        let a = Rectangle::with_size(Size::new(10.0, 10.0));
        let b = Rectangle::new(Point::new(5.0, 5.0), Size::new(10.0, 10.0));
        let c = Rectangle::new(Point::new(10.0, 0.0), Size::new(5.0, 5.0));

        assert_eq!(
            a.intersection(&b),
            Some(Rectangle::new(Point::new(5.0, 5.0), Size::new(5.0, 5.0)))
        );
        assert_eq!(a.intersection(&c), None);
    }
}
