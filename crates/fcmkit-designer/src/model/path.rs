use fcmkit_core::Point;
use serde::{Deserialize, Serialize};

use super::segment::{Outline, Segment};

/// Path attributes understood by the cutting machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathFlags {
    pub open: bool,
    pub fill: bool,
    pub seam_allowance: bool,
    pub auto_align: bool,
    pub tool_cut: bool,
    pub tool_draw: bool,
    pub tool_draw_only: bool,
    pub tool_rhinestone: bool,
    pub tool_emboss: bool,
    pub tool_foil: bool,
    pub tool_perforating: bool,
}

impl PathFlags {
    /// Blade cut, every other attribute off
    pub fn cut(open: bool) -> Self {
        Self {
            open,
            tool_cut: true,
            ..Self::default()
        }
    }
}

/// One continuous tool path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub flags: PathFlags,
    pub start: Point,
    pub outlines: Vec<Outline>,
}

impl Path {
    pub fn new(flags: PathFlags, start: Point, outlines: Vec<Outline>) -> Self {
        Self {
            flags,
            start,
            outlines,
        }
    }

    pub fn is_open(&self) -> bool {
        self.flags.open
    }

    pub fn last_segment(&self) -> Option<Segment> {
        self.outlines.last().and_then(Outline::last_segment)
    }

    /// Where the tool lifts off: the last segment's end, or the start
    pub fn end_point(&self) -> Point {
        self.last_segment()
            .map(|segment| segment.end())
            .unwrap_or(self.start)
    }

    pub fn segment_count(&self) -> usize {
        self.outlines.iter().map(Outline::len).sum()
    }
}
