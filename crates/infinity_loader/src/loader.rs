//! The infinity loader widget.
//!
//! Per frame the widget maps the host-supplied completion value to the
//! visible sub-segment of its figure-eight track and strokes it into the
//! supplied draw context, after the optional full-track placeholder and with
//! the optional glow carried in the segment paint.

use std::time::Duration;

use infinity_animation::InfiniteTransition;
use infinity_core::{Brush, Color, Density, DrawContext, Dp, LineCap, Path, Size};

use crate::error::LoaderError;
use crate::geometry::{infinity_path, path_segment};
use crate::measure::PathMeasure;
use crate::paint::{Glow, SegmentPaint};

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Infinity loader configuration
#[derive(Clone, Debug)]
pub struct InfinityLoaderConfig {
    /// Brush stroking the animated segment
    pub brush: Brush,
    /// One full animation cycle, in milliseconds
    pub duration_ms: u32,
    /// Stroke thickness
    pub stroke_width: Dp,
    /// Stroke end-cap style
    pub stroke_cap: LineCap,
    /// Optional glow behind the animated segment
    pub glow: Option<Glow>,
    /// Optional color for the static full-track underlay
    pub placeholder_color: Option<Color>,
}

impl InfinityLoaderConfig {
    /// Create a config with the required brush and default options
    pub fn new(brush: impl Into<Brush>) -> Self {
        Self {
            brush: brush.into(),
            duration_ms: 3_000,
            stroke_width: Dp(4.0),
            stroke_cap: LineCap::Round,
            glow: None,
            placeholder_color: None,
        }
    }

    /// Set the animation cycle duration in milliseconds
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the stroke thickness
    pub fn stroke_width(mut self, width: Dp) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the stroke end-cap style
    pub fn stroke_cap(mut self, cap: LineCap) -> Self {
        self.stroke_cap = cap;
        self
    }

    /// Enable the glow behind the animated segment
    pub fn glow(mut self, glow: Glow) -> Self {
        self.glow = Some(glow);
        self
    }

    /// Enable the static full-track underlay in the given color
    pub fn placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = Some(color);
        self
    }

    /// Validate the config and build the widget
    pub fn build(self) -> Result<InfinityLoader, LoaderError> {
        if self.duration_ms == 0 {
            return Err(LoaderError::ZeroDuration);
        }
        let transition = InfiniteTransition::new(self.duration_ms);
        Ok(InfinityLoader {
            config: self,
            transition,
            geometry: None,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget
// ─────────────────────────────────────────────────────────────────────────────

/// Track geometry, rebuilt whenever the drawing bounds change
#[derive(Debug)]
struct FrameGeometry {
    size: Size,
    path: Path,
    measure: PathMeasure,
}

/// The animated infinity loader widget
#[derive(Debug)]
pub struct InfinityLoader {
    config: InfinityLoaderConfig,
    transition: InfiniteTransition,
    geometry: Option<FrameGeometry>,
}

impl InfinityLoader {
    /// The widget's configuration
    pub fn config(&self) -> &InfinityLoaderConfig {
        &self.config
    }

    /// The widget's completion clock
    pub fn transition(&self) -> &InfiniteTransition {
        &self.transition
    }

    /// Paint one frame at an elapsed time since the loader appeared
    pub fn paint_at(
        &mut self,
        ctx: &mut dyn DrawContext,
        size: Size,
        density: Density,
        elapsed: Duration,
    ) {
        let completion = self.transition.completion(elapsed);
        self.paint(ctx, size, density, completion);
    }

    /// Paint one frame at an explicit completion value.
    ///
    /// Values outside `[0, 2)` wrap into range. Drawing order is fixed:
    /// placeholder beneath, glow shadow next, active segment on top.
    pub fn paint(
        &mut self,
        ctx: &mut dyn DrawContext,
        size: Size,
        density: Density,
        completion: f32,
    ) {
        let completion = completion.rem_euclid(2.0);

        self.ensure_geometry(size);
        let Some(geometry) = self.geometry.as_ref() else {
            return;
        };

        let segment = path_segment(&geometry.measure, completion);
        let paint = SegmentPaint::for_frame(
            self.config.stroke_width,
            self.config.stroke_cap,
            &self.config.brush,
            self.config.glow,
            size.to_rect(),
            density,
        );

        if let Some(color) = self.config.placeholder_color {
            ctx.stroke_path(&geometry.path, &paint.stroke, Brush::Solid(color));
        }
        if let Some(shadow) = paint.glow {
            ctx.stroke_path_shadow(&segment, &paint.stroke, shadow);
        }
        ctx.stroke_path(&segment, &paint.stroke, paint.brush);
    }

    fn ensure_geometry(&mut self, size: Size) {
        let stale = self.geometry.as_ref().map_or(true, |g| g.size != size);
        if stale {
            tracing::trace!(
                width = size.width,
                height = size.height,
                "rebuilding loader track geometry"
            );
            let path = infinity_path(size);
            let measure = PathMeasure::new(&path);
            self.geometry = Some(FrameGeometry {
                size,
                path,
                measure,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infinity_core::{DrawCommand, Gradient, RecordingContext};

    fn loader(config: InfinityLoaderConfig) -> InfinityLoader {
        config.build().expect("valid config")
    }

    fn record(loader: &mut InfinityLoader, completion: f32) -> Vec<DrawCommand> {
        let size = Size::new(256.0, 200.0);
        let mut ctx = RecordingContext::new(size);
        loader.paint(&mut ctx, size, Density::default(), completion);
        ctx.take_commands()
    }

    #[test]
    fn test_config_defaults() {
        let config = InfinityLoaderConfig::new(Color::BLUE);
        assert_eq!(config.duration_ms, 3_000);
        assert_eq!(config.stroke_width, Dp(4.0));
        assert_eq!(config.stroke_cap, LineCap::Round);
        assert!(config.glow.is_none());
        assert!(config.placeholder_color.is_none());
    }

    #[test]
    fn test_build_wires_up_the_transition() {
        let loader = loader(InfinityLoaderConfig::new(Color::BLUE).duration_ms(6_000));
        assert_eq!(loader.transition().duration_ms(), 6_000);
        assert_eq!(loader.config().duration_ms, 6_000);
    }

    #[test]
    fn test_zero_duration_fails_to_build() {
        let err = InfinityLoaderConfig::new(Color::BLUE)
            .duration_ms(0)
            .build()
            .unwrap_err();
        assert_eq!(err, LoaderError::ZeroDuration);
    }

    #[test]
    fn test_bare_config_draws_only_the_segment() {
        let mut loader = loader(InfinityLoaderConfig::new(Color::BLUE));
        let commands = record(&mut loader, 0.5);

        assert_eq!(commands.len(), 1);
        match &commands[0] {
            DrawCommand::StrokePath { brush, stroke, .. } => {
                assert_eq!(*brush, Brush::Solid(Color::BLUE));
                assert_eq!(stroke.cap, LineCap::Round);
                assert!((stroke.width - 4.0).abs() < 1e-6);
            }
            other => panic!("expected segment stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_draw_order_placeholder_shadow_segment() {
        let mut loader = loader(
            InfinityLoaderConfig::new(Gradient::horizontal(Color::BLUE, Color::CYAN))
                .glow(Glow::new(Dp(8.0)).with_shift(Dp(2.0), Dp(2.0)))
                .placeholder_color(Color::RED.with_alpha(0.25)),
        );
        let commands = record(&mut loader, 1.5);
        assert_eq!(commands.len(), 3);

        match &commands[0] {
            DrawCommand::StrokePath { path, brush, .. } => {
                // Full undivided track beneath everything
                assert_eq!(path.commands().len(), 3);
                assert_eq!(*brush, Brush::Solid(Color::RED.with_alpha(0.25)));
            }
            other => panic!("expected placeholder stroke first, got {other:?}"),
        }
        match &commands[1] {
            DrawCommand::StrokePathShadow { shadow, .. } => {
                assert_eq!(shadow.color, Color::WHITE);
                assert!((shadow.blur - 8.0).abs() < 1e-6);
            }
            other => panic!("expected glow shadow second, got {other:?}"),
        }
        match &commands[2] {
            DrawCommand::StrokePath { brush, .. } => {
                assert!(matches!(brush, Brush::Gradient(Gradient::Linear { .. })));
            }
            other => panic!("expected segment stroke last, got {other:?}"),
        }
    }

    #[test]
    fn test_stroke_width_scales_with_density() {
        let mut loader = loader(InfinityLoaderConfig::new(Color::BLUE));
        let size = Size::new(256.0, 200.0);
        let mut ctx = RecordingContext::new(size);
        loader.paint(&mut ctx, size, Density::new(2.0), 0.5);

        match &ctx.commands()[0] {
            DrawCommand::StrokePath { stroke, .. } => {
                assert!((stroke.width - 8.0).abs() < 1e-6);
            }
            other => panic!("expected segment stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_completion_wraps_into_range() {
        let mut loader = loader(InfinityLoaderConfig::new(Color::BLUE));
        // c = 2.0 wraps to 0: the segment collapses to the start point
        let commands = record(&mut loader, 2.0);
        match &commands[0] {
            DrawCommand::StrokePath { path, .. } => {
                assert_eq!(path.commands().len(), 1);
            }
            other => panic!("expected segment stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_geometry_rebuilds_when_bounds_change() {
        let mut loader = loader(InfinityLoaderConfig::new(Color::BLUE));
        let density = Density::default();

        let small = Size::new(100.0, 100.0);
        let mut ctx = RecordingContext::new(small);
        loader.paint(&mut ctx, small, density, 1.0);
        let small_bounds = match &ctx.commands()[0] {
            DrawCommand::StrokePath { path, .. } => path.bounds(),
            other => panic!("expected segment stroke, got {other:?}"),
        };

        let large = Size::new(256.0, 200.0);
        let mut ctx = RecordingContext::new(large);
        loader.paint(&mut ctx, large, density, 1.0);
        let large_bounds = match &ctx.commands()[0] {
            DrawCommand::StrokePath { path, .. } => path.bounds(),
            other => panic!("expected segment stroke, got {other:?}"),
        };

        // The lobes peak at 3/4 of the surface width (a cubic stays inside
        // its control hull), so the stroked extent tracks the bounds
        assert!((small_bounds.width() - 75.0).abs() < 1.0);
        assert!((large_bounds.width() - 192.0).abs() < 1.0);
    }

    #[test]
    fn test_zero_size_frame_is_harmless() {
        let mut loader = loader(InfinityLoaderConfig::new(Color::BLUE));
        let mut ctx = RecordingContext::new(Size::ZERO);
        loader.paint(&mut ctx, Size::ZERO, Density::default(), 0.5);
        assert_eq!(ctx.commands().len(), 1);
    }

    #[test]
    fn test_paint_at_uses_the_transition() {
        let mut loader = loader(InfinityLoaderConfig::new(Color::BLUE).duration_ms(1_000));
        let size = Size::new(256.0, 200.0);
        let mut ctx = RecordingContext::new(size);
        // Half a cycle in: the full loop is visible
        loader.paint_at(&mut ctx, size, Density::default(), Duration::from_millis(500));

        match &ctx.commands()[0] {
            DrawCommand::StrokePath { path, .. } => {
                let measure = PathMeasure::new(path);
                let full = PathMeasure::new(&infinity_path(size)).length();
                assert!((measure.length() - full).abs() < full * 1e-3);
            }
            other => panic!("expected segment stroke, got {other:?}"),
        }
    }
}
