use fcmkit_core::{EncodingError, Point};
use serde::{Deserialize, Serialize};

/// Straight cut to `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentLine {
    pub end: Point,
}

impl SegmentLine {
    pub fn new(end: Point) -> Self {
        Self { end }
    }
}

/// Cubic Bezier cut to `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentBezier {
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl SegmentBezier {
    pub fn new(control1: Point, control2: Point, end: Point) -> Self {
        Self {
            control1,
            control2,
            end,
        }
    }
}

/// Either segment kind, used when looking back at the previous segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Line(SegmentLine),
    Bezier(SegmentBezier),
}

impl Segment {
    pub fn end(&self) -> Point {
        match self {
            Self::Line(line) => line.end,
            Self::Bezier(bezier) => bezier.end,
        }
    }

    pub fn kind(&self) -> OutlineKind {
        match self {
            Self::Line(_) => OutlineKind::Line,
            Self::Bezier(_) => OutlineKind::Bezier,
        }
    }

    /// Control point a smooth successor reflects through this segment's end.
    /// A line has no control point, so its end is used as is.
    pub fn smooth_control(&self) -> Result<Point, EncodingError> {
        match self {
            Self::Line(line) => Ok(line.end),
            Self::Bezier(bezier) => bezier.control2.reflect_through(bezier.end),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineKind {
    Line,
    Bezier,
}

/// Run of segments of a single kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Outline {
    Line { segments: Vec<SegmentLine> },
    Bezier { segments: Vec<SegmentBezier> },
}

impl Outline {
    /// Outline holding a single segment
    pub fn from_segment(segment: Segment) -> Self {
        match segment {
            Segment::Line(line) => Self::Line {
                segments: vec![line],
            },
            Segment::Bezier(bezier) => Self::Bezier {
                segments: vec![bezier],
            },
        }
    }

    pub fn kind(&self) -> OutlineKind {
        match self {
            Self::Line { .. } => OutlineKind::Line,
            Self::Bezier { .. } => OutlineKind::Bezier,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Line { segments } => segments.len(),
            Self::Bezier { segments } => segments.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last_segment(&self) -> Option<Segment> {
        match self {
            Self::Line { segments } => segments.last().copied().map(Segment::Line),
            Self::Bezier { segments } => segments.last().copied().map(Segment::Bezier),
        }
    }

    /// Appends `segment` if it has this outline's kind, else hands it back.
    pub fn try_push(&mut self, segment: Segment) -> Result<(), Segment> {
        match (self, segment) {
            (Self::Line { segments }, Segment::Line(line)) => {
                segments.push(line);
                Ok(())
            }
            (Self::Bezier { segments }, Segment::Bezier(bezier)) => {
                segments.push(bezier);
                Ok(())
            }
            (_, other) => Err(other),
        }
    }

    /// Every point the outline passes through or is pulled toward
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Line { segments } => segments.iter().map(|s| s.end).collect(),
            Self::Bezier { segments } => segments
                .iter()
                .flat_map(|s| [s.control1, s.control2, s.end])
                .collect(),
        }
    }
}
