//! End-to-end conversion from SVG text to a [`CutFile`].

use fcmkit_core::{InputError, Result};
use fcmkit_settings::Config;
use tracing::info;

use crate::file::FileAssembler;
use crate::model::CutFile;
use crate::piece::PieceAssembler;
use crate::svg::SvgDocument;

/// How document paths are grouped into pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceLayout {
    /// Every path in one piece
    #[default]
    Single,
    /// One piece per top-level `<g>`
    SplitGroups,
}

#[derive(Debug, Clone)]
pub struct Converter {
    pieces: PieceAssembler,
    file: FileAssembler,
}

impl Converter {
    pub fn new(config: &Config) -> Self {
        Self {
            pieces: PieceAssembler::from_settings(&config.encoder),
            file: FileAssembler::new(config.file.clone()),
        }
    }

    /// Convert raw path-data strings into a one-piece file
    pub fn convert_path_data<S: AsRef<str>>(&self, label: &str, sources: &[S]) -> Result<CutFile> {
        let piece = self.pieces.assemble_str(label, sources)?;
        Ok(self.file.assemble(vec![piece]))
    }

    /// Convert an SVG document.
    ///
    /// With [`PieceLayout::SplitGroups`] each piece is labelled with its
    /// group id, or `<label>-<n>` when the group has none.
    pub fn convert_svg(&self, text: &str, label: &str, layout: PieceLayout) -> Result<CutFile> {
        let document = SvgDocument::parse(text)?;
        let metrics = document.metrics();
        info!(
            view_box = ?metrics.view_box,
            width = ?metrics.width,
            height = ?metrics.height,
            "Read document"
        );

        let pieces = match layout {
            PieceLayout::Single => {
                let sources = document.path_data();
                if sources.is_empty() {
                    return Err(InputError::NoPaths.into());
                }
                vec![self.pieces.assemble_str(label, &sources)?]
            }
            PieceLayout::SplitGroups => {
                let groups = document.pieces_by_group();
                if groups.is_empty() {
                    return Err(InputError::NoPaths.into());
                }
                groups
                    .iter()
                    .enumerate()
                    .map(|(index, group)| {
                        let name = group
                            .id
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("{}-{}", label, index + 1));
                        self.pieces.assemble_str(&name, &group.path_data)
                    })
                    .collect::<Result<Vec<_>>>()?
            }
        };

        Ok(self.file.assemble(pieces))
    }
}
