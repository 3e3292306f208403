//! Binary FCM cut files.
//!
//! The cutting machine reads the binary `.fcm` format, handled by `fcmlib`.
//! This module maps the cut-file model onto `fcmlib`'s types and back, and
//! adds `.fcm` load/save to [`CutFile`].
//!
//! Paths without a shape (rhinestone-only paths) have no counterpart in the
//! model and are skipped when reading.

use anyhow::{anyhow, Result};
use fcmkit_core::Point;
use fcmlib::{FileType, Generator, PathTool, PieceRestrictions};
use std::path::Path as FsPath;
use tracing::{debug, info};

use crate::model::{
    CutData, CutFile, Outline, Path, PathFlags, Piece, PieceFlags, SegmentBezier, SegmentLine,
    Thumbnail,
};

/// Format version written into every file header
const FCM_VERSION: &str = "0100";

fn to_fcm_point(point: Point) -> fcmlib::Point {
    fcmlib::Point {
        x: point.x,
        y: point.y,
    }
}

fn from_fcm_point(point: &fcmlib::Point) -> Point {
    Point::new(point.x, point.y)
}

impl From<&PathFlags> for PathTool {
    fn from(flags: &PathFlags) -> Self {
        let mut tool = PathTool::empty();
        tool.set(PathTool::PATH_OPEN, flags.open);
        tool.set(PathTool::FILL, flags.fill);
        tool.set(PathTool::SEAM_ALLOWANCE, flags.seam_allowance);
        tool.set(PathTool::AUTO_ALIGN, flags.auto_align);
        tool.set(PathTool::TOOL_CUT, flags.tool_cut);
        tool.set(PathTool::TOOL_DRAW, flags.tool_draw);
        tool.set(PathTool::TOOL_DRAW_ONLY, flags.tool_draw_only);
        tool.set(PathTool::TOOL_RHINESTONE, flags.tool_rhinestone);
        tool.set(PathTool::TOOL_EMBOSS, flags.tool_emboss);
        tool.set(PathTool::TOOL_FOIL, flags.tool_foil);
        tool.set(PathTool::TOOL_PERFORATING, flags.tool_perforating);
        tool
    }
}

impl From<&PathTool> for PathFlags {
    fn from(tool: &PathTool) -> Self {
        Self {
            open: tool.contains(PathTool::PATH_OPEN),
            fill: tool.contains(PathTool::FILL),
            seam_allowance: tool.contains(PathTool::SEAM_ALLOWANCE),
            auto_align: tool.contains(PathTool::AUTO_ALIGN),
            tool_cut: tool.contains(PathTool::TOOL_CUT),
            tool_draw: tool.contains(PathTool::TOOL_DRAW),
            tool_draw_only: tool.contains(PathTool::TOOL_DRAW_ONLY),
            tool_rhinestone: tool.contains(PathTool::TOOL_RHINESTONE),
            tool_emboss: tool.contains(PathTool::TOOL_EMBOSS),
            tool_foil: tool.contains(PathTool::TOOL_FOIL),
            tool_perforating: tool.contains(PathTool::TOOL_PERFORATING),
        }
    }
}

impl From<&PieceFlags> for PieceRestrictions {
    fn from(flags: &PieceFlags) -> Self {
        let mut restrictions = PieceRestrictions::empty();
        restrictions.set(PieceRestrictions::LICENSE_DESIGN, flags.licensed);
        restrictions.set(PieceRestrictions::SEAM_ALLOWANCE, flags.seam_allowance_enabled);
        restrictions.set(
            PieceRestrictions::PROHIBITION_OF_SEAM_ALLOWANCE_SETTING,
            flags.seam_allowance_locked,
        );
        restrictions.set(
            PieceRestrictions::NO_ASPECT_RATIO_CHANGE_PROHIBITED,
            flags.aspect_ratio_locked,
        );
        restrictions.set(PieceRestrictions::TEST_PATTERN, flags.test_pattern);
        restrictions.set(PieceRestrictions::PROHIBITION_OF_EDIT, flags.path_locked);
        restrictions.set(PieceRestrictions::PROHIBITION_OF_TOOL, flags.tool_locked);
        restrictions
    }
}

impl From<&PieceRestrictions> for PieceFlags {
    fn from(restrictions: &PieceRestrictions) -> Self {
        Self {
            licensed: restrictions.contains(PieceRestrictions::LICENSE_DESIGN),
            seam_allowance_enabled: restrictions.contains(PieceRestrictions::SEAM_ALLOWANCE),
            seam_allowance_locked: restrictions
                .contains(PieceRestrictions::PROHIBITION_OF_SEAM_ALLOWANCE_SETTING),
            aspect_ratio_locked: restrictions
                .contains(PieceRestrictions::NO_ASPECT_RATIO_CHANGE_PROHIBITED),
            test_pattern: restrictions.contains(PieceRestrictions::TEST_PATTERN),
            path_locked: restrictions.contains(PieceRestrictions::PROHIBITION_OF_EDIT),
            tool_locked: restrictions.contains(PieceRestrictions::PROHIBITION_OF_TOOL),
        }
    }
}

impl From<&Outline> for fcmlib::Outline {
    fn from(outline: &Outline) -> Self {
        match outline {
            Outline::Line { segments } => fcmlib::Outline::Line(
                segments
                    .iter()
                    .map(|segment| fcmlib::SegmentLine {
                        end: to_fcm_point(segment.end),
                    })
                    .collect(),
            ),
            Outline::Bezier { segments } => fcmlib::Outline::Bezier(
                segments
                    .iter()
                    .map(|segment| fcmlib::SegmentBezier {
                        control1: to_fcm_point(segment.control1),
                        control2: to_fcm_point(segment.control2),
                        end: to_fcm_point(segment.end),
                    })
                    .collect(),
            ),
        }
    }
}

impl From<&fcmlib::Outline> for Outline {
    fn from(outline: &fcmlib::Outline) -> Self {
        match outline {
            fcmlib::Outline::Line(segments) => Outline::Line {
                segments: segments
                    .iter()
                    .map(|segment| SegmentLine::new(from_fcm_point(&segment.end)))
                    .collect(),
            },
            fcmlib::Outline::Bezier(segments) => Outline::Bezier {
                segments: segments
                    .iter()
                    .map(|segment| {
                        SegmentBezier::new(
                            from_fcm_point(&segment.control1),
                            from_fcm_point(&segment.control2),
                            from_fcm_point(&segment.end),
                        )
                    })
                    .collect(),
            },
        }
    }
}

impl From<&Path> for fcmlib::Path {
    fn from(path: &Path) -> Self {
        fcmlib::Path {
            tool: (&path.flags).into(),
            shape: Some(fcmlib::PathShape {
                start: to_fcm_point(path.start),
                outlines: path.outlines.iter().map(Into::into).collect(),
            }),
            rhinestone_diameter: None,
            rhinestones: Vec::new(),
        }
    }
}

impl TryFrom<&fcmlib::Path> for Path {
    type Error = ();

    fn try_from(path: &fcmlib::Path) -> std::result::Result<Self, Self::Error> {
        let shape = path.shape.as_ref().ok_or(())?;
        Ok(Path::new(
            PathFlags::from(&path.tool),
            from_fcm_point(&shape.start),
            shape.outlines.iter().map(Outline::from).collect(),
        ))
    }
}

impl From<&Piece> for fcmlib::Piece {
    fn from(piece: &Piece) -> Self {
        fcmlib::Piece {
            width: piece.width,
            height: piece.height,
            transform: piece.transform,
            expansion_limit_value: piece.expansion_limit,
            reduction_limit_value: piece.reduction_limit,
            restriction_flags: (&piece.flags).into(),
            label: piece.label.clone(),
            paths: piece.paths.iter().map(Into::into).collect(),
        }
    }
}

impl From<&fcmlib::Piece> for Piece {
    fn from(piece: &fcmlib::Piece) -> Self {
        let paths: Vec<Path> = piece
            .paths
            .iter()
            .filter_map(|path| Path::try_from(path).ok())
            .collect();
        if paths.len() < piece.paths.len() {
            debug!(
                label = %piece.label,
                skipped = piece.paths.len() - paths.len(),
                "Skipped paths without a shape"
            );
        }

        Self {
            width: piece.width,
            height: piece.height,
            expansion_limit: piece.expansion_limit_value,
            reduction_limit: piece.reduction_limit_value,
            transform: piece.transform,
            flags: PieceFlags::from(&piece.restriction_flags),
            label: piece.label.clone(),
            paths,
        }
    }
}

impl From<&CutData> for fcmlib::CutData {
    fn from(cut_data: &CutData) -> Self {
        fcmlib::CutData {
            file_type: FileType::Cut,
            mat_id: cut_data.mat_id,
            cut_width: cut_data.cut_width,
            cut_height: cut_data.cut_height,
            seam_allowance_width: cut_data.seam_allowance_width,
            alignment: None,
        }
    }
}

impl From<&fcmlib::CutData> for CutData {
    fn from(cut_data: &fcmlib::CutData) -> Self {
        Self {
            mat_id: cut_data.mat_id,
            cut_width: cut_data.cut_width,
            cut_height: cut_data.cut_height,
            seam_allowance_width: cut_data.seam_allowance_width,
        }
    }
}

impl From<&CutFile> for fcmlib::FcmFile {
    fn from(file: &CutFile) -> Self {
        fcmlib::FcmFile {
            file_header: fcmlib::FileHeader {
                variant: fcmlib::FileVariant::FCM,
                version: FCM_VERSION.to_string(),
                content_id: file.content_id,
                short_name: file.short_name.clone(),
                long_name: file.long_name.clone(),
                author_name: file.author_name.clone(),
                copyright: file.copyright.clone(),
                thumbnail_block_size_width: file.thumbnail.block_width,
                thumbnail_block_size_height: file.thumbnail.block_height,
                thumbnail: file.thumbnail.data.clone(),
                generator: Generator::App(0),
                print_to_cut: None,
            },
            cut_data: (&file.cut_data).into(),
            piece_table: fcmlib::PieceTable {
                pieces: file
                    .pieces
                    .iter()
                    .enumerate()
                    .map(|(index, piece)| (index as u16, piece.into()))
                    .collect(),
            },
        }
    }
}

impl From<&fcmlib::FcmFile> for CutFile {
    fn from(file: &fcmlib::FcmFile) -> Self {
        let header = &file.file_header;
        let mut pieces: Vec<(u16, &fcmlib::Piece)> = file
            .piece_table
            .pieces
            .iter()
            .map(|(index, piece)| (*index, piece))
            .collect();
        pieces.sort_by_key(|(index, _)| *index);

        Self {
            content_id: header.content_id,
            short_name: header.short_name.clone(),
            long_name: header.long_name.clone(),
            author_name: header.author_name.clone(),
            copyright: header.copyright.clone(),
            cut_data: CutData::from(&file.cut_data),
            thumbnail: Thumbnail {
                block_width: header.thumbnail_block_size_width,
                block_height: header.thumbnail_block_size_height,
                data: header.thumbnail.clone(),
            },
            pieces: pieces.into_iter().map(|(_, piece)| piece.into()).collect(),
        }
    }
}

impl CutFile {
    /// Binary form of this cut file
    pub fn to_fcm(&self) -> fcmlib::FcmFile {
        self.into()
    }

    /// Save as a binary `.fcm` file
    pub fn save_fcm(&self, path: impl AsRef<FsPath>) -> Result<()> {
        let path = path.as_ref();
        self.to_fcm()
            .to_file(path)
            .map_err(|err| anyhow!("Failed to write FCM file {}: {}", path.display(), err))?;

        info!(path = %path.display(), pieces = self.pieces.len(), "Wrote FCM file");
        Ok(())
    }

    /// Load a binary `.fcm` file
    pub fn load_fcm(path: impl AsRef<FsPath>) -> Result<Self> {
        let path = path.as_ref();
        let file = fcmlib::FcmFile::from_file(path)
            .map_err(|err| anyhow!("Failed to read FCM file {}: {}", path.display(), err))?;
        Ok(Self::from(&file))
    }
}
