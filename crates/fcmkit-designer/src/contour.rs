//! Contour extraction for bounding boxes
//!
//! Breaks parsed path data into polylines at Move/Close boundaries. Curves
//! contribute only their endpoints, so the resulting box is the endpoint hull
//! rather than the exact curve extent.

use fcmkit_core::Coordinate;

use crate::path_data::{CommandKind, DrawCommand, PathData};

/// A polyline of document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Coordinate>,
    pub closed: bool,
}

impl Contour {
    pub fn new(points: Vec<Coordinate>, closed: bool) -> Self {
        Self { points, closed }
    }

    pub fn min_x(&self) -> Option<f64> {
        self.points.iter().map(|p| p.x).reduce(f64::min)
    }

    pub fn min_y(&self) -> Option<f64> {
        self.points.iter().map(|p| p.y).reduce(f64::min)
    }

    pub fn max_x(&self) -> Option<f64> {
        self.points.iter().map(|p| p.x).reduce(f64::max)
    }

    pub fn max_y(&self) -> Option<f64> {
        self.points.iter().map(|p| p.y).reduce(f64::max)
    }

    /// Closed rectangle around this contour, `None` when it has no points
    pub fn bounding_box(&self) -> Option<Contour> {
        BoundingBox::of(std::slice::from_ref(self)).map(|bounds| bounds.to_contour())
    }

    /// Absolute path data tracing this contour
    pub fn to_path_data(&self) -> PathData {
        let mut commands: Vec<DrawCommand> = self
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let kind = if index == 0 {
                    CommandKind::Move
                } else {
                    CommandKind::Line
                };
                DrawCommand::new(kind, true, vec![point.x, point.y])
            })
            .collect();

        if self.closed && !commands.is_empty() {
            commands.push(DrawCommand::new(CommandKind::Close, true, Vec::new()));
        }

        PathData::new(commands)
    }
}

/// Axis-aligned extent of a set of contours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl BoundingBox {
    /// Extent over every point of every contour
    pub fn of<'a>(contours: impl IntoIterator<Item = &'a Contour>) -> Option<Self> {
        contours
            .into_iter()
            .flat_map(|contour| contour.points.iter())
            .fold(None, |bounds: Option<Self>, point| {
                Some(match bounds {
                    None => Self {
                        min: *point,
                        max: *point,
                    },
                    Some(b) => Self {
                        min: Coordinate::new(b.min.x.min(point.x), b.min.y.min(point.y)),
                        max: Coordinate::new(b.max.x.max(point.x), b.max.y.max(point.y)),
                    },
                })
            })
    }

    /// Rectangle contour, clockwise from the top-left corner
    pub fn to_contour(&self) -> Contour {
        Contour::new(
            vec![
                self.min,
                Coordinate::new(self.max.x, self.min.y),
                self.max,
                Coordinate::new(self.min.x, self.max.y),
                self.min,
            ],
            true,
        )
    }
}

#[derive(Debug, Default)]
struct ContourAccumulator {
    pending: Vec<Coordinate>,
    finished: Vec<Contour>,
}

impl ContourAccumulator {
    /// Most recent point: pending, then last finished contour, then origin
    fn current(&self) -> Coordinate {
        self.pending
            .last()
            .or_else(|| self.finished.last().and_then(|c| c.points.last()))
            .copied()
            .unwrap_or(Coordinate::ORIGIN)
    }

    fn flush(&mut self, closed: bool) {
        if !self.pending.is_empty() {
            let points = std::mem::take(&mut self.pending);
            self.finished.push(Contour::new(points, closed));
        }
    }

    fn push(&mut self, point: Coordinate) {
        self.pending.push(point);
    }

    fn resolve(&self, absolute: bool, x: f64, y: f64) -> Coordinate {
        if absolute {
            Coordinate::new(x, y)
        } else {
            self.current() + Coordinate::new(x, y)
        }
    }

    fn apply(mut self, command: &DrawCommand) -> Self {
        let absolute = command.absolute;
        match command.kind {
            CommandKind::Move => {
                self.flush(false);
                for group in command.groups() {
                    let point = self.resolve(absolute, group[0], group[1]);
                    self.push(point);
                }
            }
            CommandKind::Line => {
                for group in command.groups() {
                    let point = self.resolve(absolute, group[0], group[1]);
                    self.push(point);
                }
            }
            CommandKind::HorizontalLine => {
                for group in command.groups() {
                    let current = self.current();
                    let x = if absolute { group[0] } else { current.x + group[0] };
                    self.push(Coordinate::new(x, current.y));
                }
            }
            CommandKind::VerticalLine => {
                for group in command.groups() {
                    let current = self.current();
                    let y = if absolute { group[0] } else { current.y + group[0] };
                    self.push(Coordinate::new(current.x, y));
                }
            }
            CommandKind::CubicBezier
            | CommandKind::SmoothCubicBezier
            | CommandKind::QuadraticBezier
            | CommandKind::SmoothQuadraticBezier
            | CommandKind::Arc => {
                for group in command.groups() {
                    let n = group.len();
                    let point = self.resolve(absolute, group[n - 2], group[n - 1]);
                    self.push(point);
                }
            }
            CommandKind::Close => {
                if self.pending.len() > 1 {
                    let first = self.pending[0];
                    self.push(first);
                }
                self.flush(true);
            }
        }
        self
    }
}

/// Splits path data into contours
pub fn contours_of(data: &PathData) -> Vec<Contour> {
    let mut accumulator = data
        .commands
        .iter()
        .fold(ContourAccumulator::default(), ContourAccumulator::apply);
    accumulator.flush(false);
    accumulator.finished
}
