//! Serialization and deserialization for cut files.
//!
//! Cut files are written as JSON or as binary `.fcm` (see [`crate::fcm`]).
//! In JSON the thumbnail blob is base64 encoded and outlines carry a
//! `"type"` tag.

use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;

use crate::model::CutFile;

/// On-disk encoding of a cut file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutFileFormat {
    #[default]
    Json,
    /// Binary file read by the cutting machine
    Fcm,
}

impl CutFileFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Fcm => "fcm",
        }
    }

    /// `.fcm` paths are binary, anything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("fcm") => Self::Fcm,
            _ => Self::Json,
        }
    }
}

impl CutFile {
    /// Save in the given format
    pub fn save(&self, path: impl AsRef<Path>, format: CutFileFormat) -> Result<()> {
        match format {
            CutFileFormat::Json => self.save_to_file(path),
            CutFileFormat::Fcm => self.save_fcm(path),
        }
    }

    /// Load a JSON or `.fcm` file, chosen by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        match CutFileFormat::from_path(path.as_ref()) {
            CutFileFormat::Json => Self::load_from_file(path),
            CutFileFormat::Fcm => Self::load_fcm(path),
        }
    }

    /// Serialize to a JSON string
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.context("Failed to serialize cut file")
    }

    /// Save cut file to disk
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json_string(true)?;

        std::fs::write(path.as_ref(), json).with_context(|| {
            format!("Failed to write cut file {}", path.as_ref().display())
        })?;

        Ok(())
    }

    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse cut file")
    }

    /// Load cut file from disk
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read cut file {}", path.as_ref().display())
        })?;

        Self::from_json_str(&content)
    }

    pub fn summary(&self) -> FileSummary {
        FileSummary {
            content_id: self.content_id,
            pieces: self
                .pieces
                .iter()
                .map(|piece| PieceSummary {
                    label: piece.label.clone(),
                    width: piece.width,
                    height: piece.height,
                    paths: piece.paths.len(),
                    outlines: piece.outline_count(),
                    segments: piece.segment_count(),
                })
                .collect(),
        }
    }
}

/// Counts for one piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSummary {
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub paths: usize,
    pub outlines: usize,
    pub segments: usize,
}

/// Counts for a whole file, printed by `fcmkit inspect`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub content_id: u32,
    pub pieces: Vec<PieceSummary>,
}

impl fmt::Display for FileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "content id {} ({} piece{})",
            self.content_id,
            self.pieces.len(),
            if self.pieces.len() == 1 { "" } else { "s" }
        )?;
        for piece in &self.pieces {
            writeln!(
                f,
                "  {:<16} {:>7} x {:<7} paths {:>4}  outlines {:>4}  segments {:>5}",
                format!("'{}'", piece.label),
                piece.width,
                piece.height,
                piece.paths,
                piece.outlines,
                piece.segments
            )?;
        }
        Ok(())
    }
}
