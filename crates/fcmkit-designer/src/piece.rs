//! # Piece Assembler
//!
//! Turns the path data of one piece of artwork into a [`Piece`]:
//!
//! 1. contours of every path give the bounding box,
//! 2. the quantized box corners give the size and the center,
//! 3. every path is encoded relative to that center,
//! 4. the encoded paths are ordered into a travel-minimizing tour.
//!
//! The piece transform carries the center back out as a pure translation.

use fcmkit_core::{InputError, Point, Result};
use fcmkit_settings::EncoderSettings;
use tracing::{debug, info};

use crate::contour::{contours_of, BoundingBox, Contour};
use crate::encoder::{CurveEncoder, EncoderOptions};
use crate::model::{Piece, PieceFlags};
use crate::ordering::{order_paths, TravelMetric};
use crate::path_data::PathData;

/// Quantized extent of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceFrame {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl PieceFrame {
    /// Width and height in fixed-point units
    pub fn size(&self) -> (u32, u32) {
        // The span between two i32 values always fits a u32
        let span = |low: i32, high: i32| (i64::from(high) - i64::from(low)).unsigned_abs() as u32;
        (
            span(self.top_left.x, self.bottom_right.x),
            span(self.top_left.y, self.bottom_right.y),
        )
    }

    /// Box center, floored per axis
    pub fn center(&self) -> Point {
        self.top_left.midpoint_floor(self.bottom_right)
    }
}

/// Builds pieces with a fixed encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PieceAssembler {
    options: EncoderOptions,
    metric: TravelMetric,
}

impl PieceAssembler {
    pub fn new(options: EncoderOptions, metric: TravelMetric) -> Self {
        Self { options, metric }
    }

    pub fn from_settings(settings: &EncoderSettings) -> Self {
        Self::new(
            EncoderOptions::from(settings),
            TravelMetric::new(settings.travel_y_weight),
        )
    }

    /// Quantized bounding box of the given paths
    pub fn frame(&self, label: &str, paths: &[PathData]) -> Result<PieceFrame> {
        let contours: Vec<Contour> = paths.iter().flat_map(contours_of).collect();
        let bounds = BoundingBox::of(&contours).ok_or_else(|| InputError::EmptyPiece {
            label: label.to_string(),
        })?;

        let quantizer = self.options.quantizer;
        Ok(PieceFrame {
            top_left: quantizer.point(bounds.min)?,
            bottom_right: quantizer.point(bounds.max)?,
        })
    }

    /// Assemble parsed path data into a piece
    pub fn assemble(&self, label: &str, paths: &[PathData]) -> Result<Piece> {
        let frame = self.frame(label, paths)?;
        let (width, height) = frame.size();
        let center = frame.center();
        debug!(label, width, height, ?center, "Measured piece");

        let encoder = CurveEncoder::new(self.options, center);
        let mut encoded = Vec::new();
        for data in paths {
            encoded.extend(encoder.encode(data)?);
        }
        if encoded.is_empty() {
            return Err(InputError::EmptyPiece {
                label: label.to_string(),
            }
            .into());
        }

        let ordered = order_paths(encoded, self.metric);
        info!(
            label,
            paths = ordered.len(),
            travel = self.metric.tour_length(&ordered),
            "Assembled piece"
        );

        Ok(Piece {
            width,
            height,
            expansion_limit: 0,
            reduction_limit: 0,
            transform: Some((1.0, 0.0, 0.0, 1.0, center.x as f32, center.y as f32)),
            flags: PieceFlags::seam_allowance_locked(),
            label: label.to_string(),
            paths: ordered,
        })
    }

    /// Parse and assemble raw path-data strings
    pub fn assemble_str<S: AsRef<str>>(&self, label: &str, sources: &[S]) -> Result<Piece> {
        let paths = sources
            .iter()
            .map(|source| PathData::parse(source.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.assemble(label, &paths)
    }
}
