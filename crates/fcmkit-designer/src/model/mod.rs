//! Cut-file document model
//!
//! Serde types for the cut-file JSON schema. All coordinates are fixed-point
//! [`Point`](fcmkit_core::Point)s; the thumbnail blob is base64 in JSON.

mod file;
mod path;
mod piece;
mod segment;

pub use file::{CutData, CutFile, Thumbnail};
pub use path::{Path, PathFlags};
pub use piece::{Piece, PieceFlags, Transform};
pub use segment::{Outline, OutlineKind, Segment, SegmentBezier, SegmentLine};
