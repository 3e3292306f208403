//! # FCMKit Core
//!
//! Core types shared by the FCMKit crates: document and fixed-point
//! geometry, unit quantization, a base64 serde adapter, and the
//! conversion error hierarchy.

pub mod error;
pub mod geometry;
pub mod serde_base64;
pub mod units;

pub use error::{EncodingError, Error, InputError, ParseError, Result};
pub use geometry::{Coordinate, Point};
pub use units::{Quantizer, DEFAULT_SCALE};
