//! # Curve Encoder
//!
//! Converts parsed path data into cut-file [`Path`]s. One `d` attribute can
//! produce several paths: every Move or Close ends the current subpath.
//!
//! The encoder is a left fold over the commands. The accumulator carries the
//! real-valued current point (relative coordinates resolve against it), the
//! subpath under construction, and the finished paths. Coordinates are
//! quantized and shifted by the piece offset as segments are emitted.
//!
//! Curves map onto the two segment kinds the format has:
//! - quadratic curves are degree-elevated to cubics,
//! - smooth curves synthesize their first control point by reflecting the
//!   previous segment's control through its end,
//! - elliptical arcs are dropped or rejected according to [`ArcPolicy`].

use fcmkit_core::{Coordinate, EncodingError, Point, Quantizer};
use fcmkit_settings::{ArcPolicy, EncoderSettings};
use tracing::{debug, warn};

use crate::model::{Outline, Path, PathFlags, Segment, SegmentBezier, SegmentLine};
use crate::path_data::{CommandKind, DrawCommand, PathData};

/// Settings that shape the encoded output
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EncoderOptions {
    pub quantizer: Quantizer,
    pub arc_policy: ArcPolicy,
}

impl From<&EncoderSettings> for EncoderOptions {
    fn from(settings: &EncoderSettings) -> Self {
        Self {
            quantizer: Quantizer::new(settings.scale),
            arc_policy: settings.arc_policy,
        }
    }
}

/// Cubic form of the quadratic `start, control, end`
pub fn elevate_quadratic(
    start: Point,
    control: Point,
    end: Point,
) -> Result<SegmentBezier, EncodingError> {
    let two_thirds = 2.0 / 3.0;
    Ok(SegmentBezier::new(
        start.try_add(control.try_sub(start)?.scale(two_thirds))?,
        end.try_add(control.try_sub(end)?.scale(two_thirds))?,
        end,
    ))
}

#[derive(Debug)]
struct Subpath {
    start: Point,
    origin: Coordinate,
    outlines: Vec<Outline>,
}

impl Subpath {
    fn new(start: Point, origin: Coordinate) -> Self {
        Self {
            start,
            origin,
            outlines: Vec::new(),
        }
    }

    fn last_segment(&self) -> Option<Segment> {
        self.outlines.last().and_then(Outline::last_segment)
    }

    fn last_end(&self) -> Point {
        self.last_segment()
            .map(|segment| segment.end())
            .unwrap_or(self.start)
    }

    fn push(&mut self, segment: Segment) {
        let rejected = match self.outlines.last_mut() {
            Some(outline) => outline.try_push(segment).err(),
            None => Some(segment),
        };
        if let Some(segment) = rejected {
            self.outlines.push(Outline::from_segment(segment));
        }
    }

    fn into_path(self, open: bool) -> Option<Path> {
        if self.outlines.is_empty() {
            return None;
        }
        Some(Path::new(PathFlags::cut(open), self.start, self.outlines))
    }
}

#[derive(Debug, Default)]
struct EncoderState {
    cursor: Coordinate,
    subpath: Option<Subpath>,
    paths: Vec<Path>,
}

impl EncoderState {
    fn resolve(&self, absolute: bool, x: f64, y: f64) -> Coordinate {
        if absolute {
            Coordinate::new(x, y)
        } else {
            self.cursor + Coordinate::new(x, y)
        }
    }

    fn flush(&mut self, open: bool) {
        if let Some(path) = self.subpath.take().and_then(|s| s.into_path(open)) {
            debug!(
                open,
                outlines = path.outlines.len(),
                segments = path.segment_count(),
                "Encoded path"
            );
            self.paths.push(path);
        }
    }

    fn predecessor(&self, command: &DrawCommand) -> Result<Segment, EncodingError> {
        self.subpath
            .as_ref()
            .and_then(Subpath::last_segment)
            .ok_or(EncodingError::MissingPredecessor {
                command: command.letter(),
            })
    }
}

/// Encodes path data relative to a fixed offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveEncoder {
    options: EncoderOptions,
    offset: Point,
}

impl CurveEncoder {
    pub fn new(options: EncoderOptions, offset: Point) -> Self {
        Self { options, offset }
    }

    /// Encode one path-data string into finished paths
    pub fn encode(&self, data: &PathData) -> Result<Vec<Path>, EncodingError> {
        let mut state = data
            .commands
            .iter()
            .try_fold(EncoderState::default(), |mut state, command| {
                self.apply(&mut state, command)?;
                Ok::<_, EncodingError>(state)
            })?;
        state.flush(true);
        Ok(state.paths)
    }

    fn quantize(&self, coordinate: Coordinate) -> Result<Point, EncodingError> {
        self.options.quantizer.point(coordinate)?.try_sub(self.offset)
    }

    /// Subpath under construction; a drawing command without a preceding
    /// Move starts one at the current point.
    fn subpath<'s>(
        &self,
        state: &'s mut EncoderState,
    ) -> Result<&'s mut Subpath, EncodingError> {
        let subpath = match state.subpath.take() {
            Some(subpath) => subpath,
            None => Subpath::new(self.quantize(state.cursor)?, state.cursor),
        };
        Ok(state.subpath.insert(subpath))
    }

    fn emit(
        &self,
        state: &mut EncoderState,
        segment: Segment,
        cursor: Coordinate,
    ) -> Result<(), EncodingError> {
        self.subpath(state)?.push(segment);
        state.cursor = cursor;
        Ok(())
    }

    fn line_to(&self, state: &mut EncoderState, target: Coordinate) -> Result<(), EncodingError> {
        let segment = Segment::Line(SegmentLine::new(self.quantize(target)?));
        self.emit(state, segment, target)
    }

    fn apply(&self, state: &mut EncoderState, command: &DrawCommand) -> Result<(), EncodingError> {
        let absolute = command.absolute;
        match command.kind {
            CommandKind::Move => {
                let mut groups = command.groups();
                let Some(first) = groups.next() else {
                    debug!("Move without coordinates ignored");
                    return Ok(());
                };
                state.flush(true);
                let origin = state.resolve(absolute, first[0], first[1]);
                state.cursor = origin;
                state.subpath = Some(Subpath::new(self.quantize(origin)?, origin));
                for group in groups {
                    let target = state.resolve(absolute, group[0], group[1]);
                    self.line_to(state, target)?;
                }
            }
            CommandKind::Line => {
                for group in command.groups() {
                    let target = state.resolve(absolute, group[0], group[1]);
                    self.line_to(state, target)?;
                }
            }
            CommandKind::HorizontalLine => {
                for group in command.groups() {
                    let current = state.cursor;
                    let x = if absolute { group[0] } else { current.x + group[0] };
                    self.line_to(state, Coordinate::new(x, current.y))?;
                }
            }
            CommandKind::VerticalLine => {
                for group in command.groups() {
                    let current = state.cursor;
                    let y = if absolute { group[0] } else { current.y + group[0] };
                    self.line_to(state, Coordinate::new(current.x, y))?;
                }
            }
            CommandKind::CubicBezier => {
                for group in command.groups() {
                    let control1 = state.resolve(absolute, group[0], group[1]);
                    let control2 = state.resolve(absolute, group[2], group[3]);
                    let end = state.resolve(absolute, group[4], group[5]);
                    let segment = SegmentBezier::new(
                        self.quantize(control1)?,
                        self.quantize(control2)?,
                        self.quantize(end)?,
                    );
                    self.emit(state, Segment::Bezier(segment), end)?;
                }
            }
            CommandKind::SmoothCubicBezier => {
                for group in command.groups() {
                    let control1 = state.predecessor(command)?.smooth_control()?;
                    let control2 = state.resolve(absolute, group[0], group[1]);
                    let end = state.resolve(absolute, group[2], group[3]);
                    let segment =
                        SegmentBezier::new(control1, self.quantize(control2)?, self.quantize(end)?);
                    self.emit(state, Segment::Bezier(segment), end)?;
                }
            }
            CommandKind::QuadraticBezier => {
                for group in command.groups() {
                    let start = self.subpath(state)?.last_end();
                    let control = state.resolve(absolute, group[0], group[1]);
                    let end = state.resolve(absolute, group[2], group[3]);
                    let segment =
                        elevate_quadratic(start, self.quantize(control)?, self.quantize(end)?)?;
                    self.emit(state, Segment::Bezier(segment), end)?;
                }
            }
            CommandKind::SmoothQuadraticBezier => {
                let mut control: Option<Point> = None;
                for group in command.groups() {
                    let quadratic = match control {
                        Some(point) => point,
                        None => state.predecessor(command)?.smooth_control()?,
                    };
                    let start = self.subpath(state)?.last_end();
                    let end = state.resolve(absolute, group[0], group[1]);
                    let end_point = self.quantize(end)?;
                    let segment = elevate_quadratic(start, quadratic, end_point)?;
                    self.emit(state, Segment::Bezier(segment), end)?;
                    control = Some(quadratic.reflect_through(end_point)?);
                }
            }
            CommandKind::Arc => match self.options.arc_policy {
                ArcPolicy::Drop => {
                    for group in command.groups() {
                        warn!(
                            command = %command.letter(),
                            "Elliptical arc dropped from output"
                        );
                        state.cursor = state.resolve(absolute, group[5], group[6]);
                    }
                }
                ArcPolicy::Reject => {
                    return Err(EncodingError::UnsupportedCommand {
                        command: command.letter(),
                    });
                }
            },
            CommandKind::Close => {
                if let Some(mut subpath) = state.subpath.take() {
                    state.cursor = subpath.origin;
                    if subpath.outlines.is_empty() {
                        debug!("Close of a subpath without segments ignored");
                    } else {
                        subpath.push(Segment::Line(SegmentLine::new(subpath.start)));
                        state.subpath = Some(subpath);
                        state.flush(false);
                    }
                }
            }
        }
        Ok(())
    }
}
