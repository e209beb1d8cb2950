//! Arc-length parametrization of paths.
//!
//! [`PathMeasure`] flattens a path into a cumulative-length polyline so
//! sub-segments can be extracted by arc-length position. Pure geometry,
//! decoupled from any rendering API: measurement and extraction are
//! testable without a graphics context.

use infinity_core::{Path, PathCommand, Point};
use lyon::math::point;
use lyon::path::iterator::PathIterator;
use lyon::path::PathEvent;

/// Default flattening tolerance in pixels
pub const DEFAULT_TOLERANCE: f32 = 0.1;

/// Slack allowed before an out-of-range window is reported
const RANGE_EPSILON: f32 = 1e-3;

/// Arc-length lookup table for a single path contour
///
/// Only the first contour is measured, as a single traversal with no
/// wraparound. Paths whose last command returns to the start point (like the
/// loader's figure-eight) measure their full perimeter that way.
#[derive(Debug)]
pub struct PathMeasure {
    /// Polyline vertices after flattening
    points: Vec<Point>,
    /// Cumulative arc length at each vertex
    lengths: Vec<f32>,
}

impl PathMeasure {
    /// Measure a path at the default tolerance
    pub fn new(path: &Path) -> Self {
        Self::with_tolerance(path, DEFAULT_TOLERANCE)
    }

    /// Measure a path, flattening curves at the given tolerance
    pub fn with_tolerance(path: &Path, tolerance: f32) -> Self {
        let mut points = Vec::new();
        let mut lengths = Vec::new();

        for event in path_events(path).into_iter().flattened(tolerance) {
            match event {
                PathEvent::Begin { at } => {
                    push_vertex(&mut points, &mut lengths, Point::new(at.x, at.y));
                }
                PathEvent::Line { to, .. } => {
                    push_vertex(&mut points, &mut lengths, Point::new(to.x, to.y));
                }
                PathEvent::End { first, close, .. } => {
                    if close {
                        push_vertex(&mut points, &mut lengths, Point::new(first.x, first.y));
                    }
                    break;
                }
                // flattened() never yields curve events
                _ => {}
            }
        }

        Self { points, lengths }
    }

    /// Total arc length of the measured contour
    pub fn length(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Position on the contour at the given arc-length distance
    ///
    /// Distances are clamped to the measured range.
    pub fn point_at(&self, distance: f32) -> Point {
        if self.points.is_empty() {
            return Point::ZERO;
        }
        let i = self.lengths.partition_point(|&l| l < distance);
        if i == 0 {
            return self.points[0];
        }
        if i >= self.points.len() {
            return self.points[self.points.len() - 1];
        }
        let span = self.lengths[i] - self.lengths[i - 1];
        if span <= f32::EPSILON {
            return self.points[i];
        }
        let t = (distance - self.lengths[i - 1]) / span;
        Point::lerp(self.points[i - 1], self.points[i], t)
    }

    /// Extract the sub-path between two arc-length positions.
    ///
    /// Interior polyline vertices are carried over as-is; the two endpoints
    /// are interpolated exactly at the requested distances. An inverted or
    /// empty window yields a single-point path at the start position.
    pub fn segment(&self, start_distance: f32, stop_distance: f32) -> Path {
        if self.points.is_empty() {
            return Path::new();
        }

        let total = self.length();
        let start = start_distance.clamp(0.0, total);
        let stop = stop_distance.clamp(0.0, total);
        if (start - start_distance).abs() > RANGE_EPSILON
            || (stop - stop_distance).abs() > RANGE_EPSILON
        {
            tracing::warn!(
                start = start_distance,
                stop = stop_distance,
                length = total,
                "segment window clamped to measured range"
            );
        }

        let head = self.point_at(start);
        if stop <= start {
            return Path::new().move_to(head.x, head.y);
        }

        let mut path = Path::new().move_to(head.x, head.y);
        for (p, &len) in self.points.iter().zip(&self.lengths) {
            if len > start && len < stop {
                path = path.line_to(p.x, p.y);
            }
        }
        let tail = self.point_at(stop);
        path.line_to(tail.x, tail.y)
    }
}

fn push_vertex(points: &mut Vec<Point>, lengths: &mut Vec<f32>, p: Point) {
    if let Some(&last) = points.last() {
        let total = lengths.last().copied().unwrap_or(0.0) + last.distance(p);
        points.push(p);
        lengths.push(total);
    } else {
        points.push(p);
        lengths.push(0.0);
    }
}

/// Convert a path's command list to lyon path events
fn path_events(path: &Path) -> Vec<PathEvent> {
    let mut events = Vec::new();
    let mut first_point: Option<Point> = None;
    let mut current_point = Point::ZERO;

    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => {
                if let Some(first) = first_point {
                    // End previous subpath
                    events.push(PathEvent::End {
                        last: point(current_point.x, current_point.y),
                        first: point(first.x, first.y),
                        close: false,
                    });
                }
                events.push(PathEvent::Begin {
                    at: point(p.x, p.y),
                });
                first_point = Some(*p);
                current_point = *p;
            }
            PathCommand::LineTo(p) => {
                ensure_begin(&mut events, &mut first_point, current_point);
                events.push(PathEvent::Line {
                    from: point(current_point.x, current_point.y),
                    to: point(p.x, p.y),
                });
                current_point = *p;
            }
            PathCommand::QuadTo { control, end } => {
                ensure_begin(&mut events, &mut first_point, current_point);
                events.push(PathEvent::Quadratic {
                    from: point(current_point.x, current_point.y),
                    ctrl: point(control.x, control.y),
                    to: point(end.x, end.y),
                });
                current_point = *end;
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => {
                ensure_begin(&mut events, &mut first_point, current_point);
                events.push(PathEvent::Cubic {
                    from: point(current_point.x, current_point.y),
                    ctrl1: point(control1.x, control1.y),
                    ctrl2: point(control2.x, control2.y),
                    to: point(end.x, end.y),
                });
                current_point = *end;
            }
            PathCommand::Close => {
                if let Some(first) = first_point {
                    events.push(PathEvent::End {
                        last: point(current_point.x, current_point.y),
                        first: point(first.x, first.y),
                        close: true,
                    });
                    current_point = first;
                    first_point = None;
                }
            }
        }
    }

    // End any remaining open subpath
    if let Some(first) = first_point {
        events.push(PathEvent::End {
            last: point(current_point.x, current_point.y),
            first: point(first.x, first.y),
            close: false,
        });
    }

    events
}

fn ensure_begin(events: &mut Vec<PathEvent>, first_point: &mut Option<Point>, current: Point) {
    if first_point.is_none() {
        events.push(PathEvent::Begin {
            at: point(current.x, current.y),
        });
        *first_point = Some(current);
    }
}
