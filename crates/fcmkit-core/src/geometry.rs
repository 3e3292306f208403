//! Geometry primitives
//!
//! [`Coordinate`] is a real-valued point in document space, as written in
//! path data. [`Point`] is a fixed-point point in cut-file space.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::EncodingError;

/// A point in document space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Coordinate {
    type Output = Coordinate;

    fn mul(self, factor: f64) -> Coordinate {
        Coordinate::new(self.x * factor, self.y * factor)
    }
}

/// A fixed-point point in cut-file space (1/100 of a document unit by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Multiplies both components by `factor`, rounding half away from zero.
    pub fn scale(self, factor: f64) -> Point {
        Point::new(
            (self.x as f64 * factor).round() as i32,
            (self.y as f64 * factor).round() as i32,
        )
    }

    /// Builds a point from wide components, failing if either leaves `i32`.
    pub fn from_wide(x: i64, y: i64) -> Result<Point, EncodingError> {
        Ok(Point::new(narrow(x)?, narrow(y)?))
    }

    /// `self + other`, failing instead of wrapping.
    pub fn try_add(self, other: Point) -> Result<Point, EncodingError> {
        Point::from_wide(
            i64::from(self.x) + i64::from(other.x),
            i64::from(self.y) + i64::from(other.y),
        )
    }

    /// `self - other`, failing instead of wrapping.
    pub fn try_sub(self, other: Point) -> Result<Point, EncodingError> {
        Point::from_wide(
            i64::from(self.x) - i64::from(other.x),
            i64::from(self.y) - i64::from(other.y),
        )
    }

    /// Reflects `self` through `center`, i.e. `2 * center - self`.
    pub fn reflect_through(self, center: Point) -> Result<Point, EncodingError> {
        Point::from_wide(
            2 * i64::from(center.x) - i64::from(self.x),
            2 * i64::from(center.y) - i64::from(self.y),
        )
    }

    /// Component-wise midpoint, rounding toward negative infinity.
    pub fn midpoint_floor(self, other: Point) -> Point {
        let mid = |a: i32, b: i32| (i64::from(a) + i64::from(b)).div_euclid(2);
        // The floored mean of two i32 values is always an i32
        Point::new(mid(self.x, other.x) as i32, mid(self.y, other.y) as i32)
    }
}

fn narrow(value: i64) -> Result<i32, EncodingError> {
    i32::try_from(value).map_err(|_| EncodingError::CoordinateOutOfRange {
        value: value as f64,
    })
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}
