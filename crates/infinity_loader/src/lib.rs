//! Infinity Loader
//!
//! An animated figure-eight loading indicator: a closed double-loop track
//! with a stroked segment that grows from the center, then chases itself
//! around the loop indefinitely. Optional glow and a faint full-track
//! placeholder underlay.
//!
//! The widget is renderer-agnostic: each frame it emits stroke commands into
//! a [`DrawContext`](infinity_core::DrawContext), and the host framework's
//! animation driver supplies elapsed time (or an explicit completion value).
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use infinity_core::{Color, Density, Dp, Gradient, RecordingContext, Size};
//! use infinity_loader::{Glow, InfinityLoaderConfig};
//!
//! let mut loader = InfinityLoaderConfig::new(Gradient::horizontal(Color::BLUE, Color::CYAN))
//!     .duration_ms(6_000)
//!     .glow(Glow::default().with_shift(Dp(2.0), Dp(2.0)))
//!     .placeholder_color(Color::RED.with_alpha(0.25))
//!     .build()?;
//!
//! // Per display frame, driven by the host scheduler:
//! let size = Size::new(256.0, 200.0);
//! let mut ctx = RecordingContext::new(size);
//! loader.paint_at(&mut ctx, size, Density::new(2.0), Duration::from_millis(1_250));
//! let commands = ctx.take_commands(); // replay on the host renderer
//! ```

pub mod error;
pub mod geometry;
pub mod loader;
pub mod measure;
pub mod paint;

pub use error::LoaderError;
pub use geometry::{infinity_path, path_segment};
pub use loader::{InfinityLoader, InfinityLoaderConfig};
pub use measure::PathMeasure;
pub use paint::{Glow, SegmentPaint};
