//! Fixed-point unit conversion
//!
//! Cut files store integer coordinates. Document coordinates are multiplied
//! by a scale (100 by default, i.e. 1/100 of a document unit) and rounded
//! half away from zero.

use serde::{Deserialize, Serialize};

use crate::error::EncodingError;
use crate::geometry::{Coordinate, Point};

/// Default number of fixed-point steps per document unit
pub const DEFAULT_SCALE: f64 = 100.0;

/// Maps document coordinates to fixed-point cut-file coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantizer {
    /// Fixed-point steps per document unit
    pub scale: f64,
}

impl Default for Quantizer {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

impl Quantizer {
    pub fn new(scale: f64) -> Self {
        debug_assert!(
            scale.is_finite() && scale > 0.0,
            "scale must be positive and finite, got {scale}"
        );
        Self { scale }
    }

    /// Quantize a single value
    pub fn value(&self, value: f64) -> Result<i32, EncodingError> {
        let scaled = (value * self.scale).round();
        if scaled >= f64::from(i32::MIN) && scaled <= f64::from(i32::MAX) {
            Ok(scaled as i32)
        } else {
            Err(EncodingError::CoordinateOutOfRange { value: scaled })
        }
    }

    /// Quantize a coordinate
    pub fn point(&self, coordinate: Coordinate) -> Result<Point, EncodingError> {
        Ok(Point::new(
            self.value(coordinate.x)?,
            self.value(coordinate.y)?,
        ))
    }

    /// Convert a fixed-point value back to document units
    pub fn to_document(&self, value: i32) -> f64 {
        value as f64 / self.scale
    }
}
