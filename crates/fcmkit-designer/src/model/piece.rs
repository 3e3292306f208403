use serde::{Deserialize, Serialize};

use super::path::Path;

/// Affine transform `(a, b, c, d, e, f)`
pub type Transform = (f32, f32, f32, f32, f32, f32);

/// Editing restrictions applied to a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PieceFlags {
    pub licensed: bool,
    pub seam_allowance_enabled: bool,
    pub seam_allowance_locked: bool,
    pub aspect_ratio_locked: bool,
    pub test_pattern: bool,
    pub path_locked: bool,
    pub tool_locked: bool,
}

impl PieceFlags {
    /// Seam allowance locked, every other restriction off
    pub fn seam_allowance_locked() -> Self {
        Self {
            seam_allowance_locked: true,
            ..Self::default()
        }
    }
}

/// A self-contained artwork piece, centred on its own origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub width: u32,
    pub height: u32,
    pub expansion_limit: u32,
    pub reduction_limit: u32,
    pub transform: Option<Transform>,
    pub flags: PieceFlags,
    pub label: String,
    pub paths: Vec<Path>,
}

impl Piece {
    /// Translation part of the transform, if any
    pub fn translation(&self) -> Option<(f32, f32)> {
        self.transform.map(|(_, _, _, _, e, f)| (e, f))
    }

    pub fn outline_count(&self) -> usize {
        self.paths.iter().map(|path| path.outlines.len()).sum()
    }

    pub fn segment_count(&self) -> usize {
        self.paths.iter().map(Path::segment_count).sum()
    }
}
