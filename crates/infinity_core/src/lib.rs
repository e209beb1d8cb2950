//! Infinity Loader Core
//!
//! Shared value types for the loader widget and its host renderer:
//!
//! - **Geometry**: points, sizes, rects, density-independent units
//! - **Brushes**: solid colors and gradients with bounds-relative resolution
//! - **Strokes and paths**: stroke configuration and vector path commands
//! - **Draw context**: the recording drawing surface widgets paint into

pub mod brush;
pub mod draw;
pub mod geometry;

pub use brush::{Brush, Color, Gradient, GradientSpace, GradientStop};
pub use draw::{
    DrawCommand, DrawContext, LineCap, LineJoin, Path, PathCommand, RecordingContext, Shadow,
    Stroke,
};
pub use geometry::{Density, Dp, Point, Rect, Size};
