//! Points in scene space.
//!
//! Every scene works in one shared root space (1200 x 675 units, y grows
//! downwards). Containers such as stack groups own a local origin inside that
//! space; converting between the two is a plain translation.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::animation::timing::lerp;

/// Width of the shared scene space
pub const SCENE_WIDTH: f64 = 1200.0;
/// Height of the shared scene space (16:9)
pub const SCENE_HEIGHT: f64 = SCENE_WIDTH * 9.0 / 16.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `to` by factor `t`
    #[inline]
    pub fn lerp(self, to: Point, t: f64) -> Point {
        Point::new(lerp(self.x, to.x, t), lerp(self.y, to.y, t))
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
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

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -4.0);
        assert_eq!(a + b, Point::new(4.0, -2.0));
        assert_eq!(b - a, Point::new(2.0, -6.0));
        assert_eq!(a * 3.0, Point::new(3.0, 6.0));
    }

    #[test]
    fn test_point_lerp_endpoints() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(110.0, -80.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(60.0, -30.0));
    }

    #[test]
    fn test_scene_aspect() {
        assert!((SCENE_HEIGHT - 675.0).abs() < 1e-9);
    }
}
