//! # FCMKit Designer
//!
//! Converts vector cut paths into structured cut files for computer-controlled
//! cutting machines.
//!
//! ## Pipeline
//!
//! ```text
//! SVG document ── svg ──> path data strings
//!   └── path_data ──> DrawCommands
//!         ├── contour ──> bounding box ──> piece center
//!         └── encoder (offset = center) ──> Paths / Outlines / Segments
//!               └── ordering ──> Piece ── file ──> CutFile ── serialization ──> JSON
//!                                                            └── fcm ──> binary .fcm
//! ```
//!
//! All coordinates in the output are fixed-point [`Point`](fcmkit_core::Point)s
//! relative to the piece center.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fcmkit_designer::{Converter, PieceLayout};
//! use fcmkit_settings::Config;
//!
//! let converter = Converter::new(&Config::default());
//! let file = converter.convert_svg(&svg_text, "star", PieceLayout::Single)?;
//! file.save_to_file("star.json")?;
//! ```

pub mod contour;
pub mod converter;
pub mod encoder;
pub mod fcm;
pub mod file;
pub mod model;
pub mod ordering;
pub mod path_data;
pub mod piece;
pub mod serialization;
pub mod svg;

pub use contour::{contours_of, BoundingBox, Contour};
pub use converter::{Converter, PieceLayout};
pub use encoder::{elevate_quadratic, CurveEncoder, EncoderOptions};
pub use file::FileAssembler;
pub use model::{
    CutData, CutFile, Outline, OutlineKind, Path, PathFlags, Piece, PieceFlags, Segment,
    SegmentBezier, SegmentLine, Thumbnail, Transform,
};
pub use ordering::{order_paths, TravelMetric, DEFAULT_Y_WEIGHT};
pub use path_data::{CommandKind, DrawCommand, PathData};
pub use piece::{PieceAssembler, PieceFrame};
pub use serialization::{CutFileFormat, FileSummary, PieceSummary};
pub use svg::{DocumentMetrics, PathGroup, SvgDocument};
