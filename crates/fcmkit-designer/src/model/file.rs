use fcmkit_settings::{CutDataSettings, ThumbnailSettings};
use serde::{Deserialize, Serialize};

use super::piece::Piece;

/// Cut-machine parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutData {
    pub mat_id: u32,
    pub cut_width: u32,
    pub cut_height: u32,
    pub seam_allowance_width: u32,
}

impl From<&CutDataSettings> for CutData {
    fn from(settings: &CutDataSettings) -> Self {
        Self {
            mat_id: settings.mat_id,
            cut_width: settings.cut_width,
            cut_height: settings.cut_height,
            seam_allowance_width: settings.seam_allowance_width,
        }
    }
}

/// Preview image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub block_width: u8,
    pub block_height: u8,
    #[serde(with = "fcmkit_core::serde_base64")]
    pub data: Vec<u8>,
}

impl From<&ThumbnailSettings> for Thumbnail {
    fn from(settings: &ThumbnailSettings) -> Self {
        Self {
            block_width: settings.block_width,
            block_height: settings.block_height,
            data: settings.data.clone(),
        }
    }
}

/// Top-level cut-file document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutFile {
    pub content_id: u32,
    pub short_name: String,
    pub long_name: String,
    pub author_name: String,
    pub copyright: String,
    pub cut_data: CutData,
    pub thumbnail: Thumbnail,
    pub pieces: Vec<Piece>,
}
