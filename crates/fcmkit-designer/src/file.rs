//! File assembler
//!
//! Wraps assembled pieces with the header metadata, cut data and thumbnail
//! from [`FileSettings`].

use fcmkit_settings::FileSettings;
use tracing::info;

use crate::model::{CutData, CutFile, Piece, Thumbnail};

#[derive(Debug, Clone, Default)]
pub struct FileAssembler {
    settings: FileSettings,
}

impl FileAssembler {
    pub fn new(settings: FileSettings) -> Self {
        Self { settings }
    }

    pub fn assemble(&self, pieces: Vec<Piece>) -> CutFile {
        info!(
            content_id = self.settings.content_id,
            pieces = pieces.len(),
            "Assembled cut file"
        );
        CutFile {
            content_id: self.settings.content_id,
            short_name: self.settings.short_name.clone(),
            long_name: self.settings.long_name.clone(),
            author_name: self.settings.author_name.clone(),
            copyright: self.settings.copyright.clone(),
            cut_data: CutData::from(&self.settings.cut_data),
            thumbnail: Thumbnail::from(&self.settings.thumbnail),
            pieces,
        }
    }
}
