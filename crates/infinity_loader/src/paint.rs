//! Stroke paint and glow assembly for the animated segment.

use infinity_core::{Brush, Color, Density, Dp, LineCap, Rect, Shadow, Stroke};

/// Soft glow rendered behind the animated segment.
///
/// Dimensions are density-independent; they convert to physical pixels
/// against the frame's display density. The shadow color itself is fixed
/// opaque white.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    /// Blur radius
    pub radius: Dp,
    /// Horizontal shadow offset
    pub x_shift: Dp,
    /// Vertical shadow offset
    pub y_shift: Dp,
}

impl Default for Glow {
    fn default() -> Self {
        Self {
            radius: Dp(8.0),
            x_shift: Dp(0.0),
            y_shift: Dp(0.0),
        }
    }
}

impl Glow {
    /// Glow with the given blur radius and no offset
    pub fn new(radius: Dp) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    /// Set the x/y shadow offset
    pub fn with_shift(mut self, x: Dp, y: Dp) -> Self {
        self.x_shift = x;
        self.y_shift = y;
        self
    }

    /// Convert to a pixel-space shadow at the given density
    pub fn to_shadow(self, density: Density) -> Shadow {
        Shadow::new(
            self.x_shift.to_px(density),
            self.y_shift.to_px(density),
            self.radius.to_px(density),
            Color::WHITE,
        )
    }
}

/// Fully resolved per-frame paint for the animated segment
#[derive(Clone, Debug)]
pub struct SegmentPaint {
    pub stroke: Stroke,
    pub brush: Brush,
    pub glow: Option<Shadow>,
}

impl SegmentPaint {
    /// Resolve the configured stroke, brush, and glow for one frame.
    ///
    /// Stroke width converts dp→px, the brush is mapped across the full
    /// drawing bounds at full opacity, and the glow (when configured)
    /// becomes a pixel-space shadow carried with the paint.
    pub fn for_frame(
        width: Dp,
        cap: LineCap,
        brush: &Brush,
        glow: Option<Glow>,
        bounds: Rect,
        density: Density,
    ) -> Self {
        let stroke = Stroke::new(width.to_px(density)).with_cap(cap);
        Self {
            stroke,
            brush: brush.resolve(bounds),
            glow: glow.map(|g| g.to_shadow(density)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infinity_core::{Gradient, GradientSpace, Point};

    #[test]
    fn test_glow_defaults() {
        let glow = Glow::default();
        assert_eq!(glow.radius, Dp(8.0));
        assert_eq!(glow.x_shift, Dp(0.0));
        assert_eq!(glow.y_shift, Dp(0.0));
    }

    #[test]
    fn test_glow_shadow_is_white_and_scaled() {
        let glow = Glow::new(Dp(8.0)).with_shift(Dp(2.0), Dp(2.0));
        let shadow = glow.to_shadow(Density::new(2.0));

        assert_eq!(shadow.color, Color::WHITE);
        assert!((shadow.blur - 16.0).abs() < 1e-6);
        assert!((shadow.offset_x - 4.0).abs() < 1e-6);
        assert!((shadow.offset_y - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_paint_resolves_stroke_and_brush() {
        let brush = Brush::from(Gradient::horizontal(Color::BLUE, Color::CYAN));
        let bounds = Rect::new(0.0, 0.0, 256.0, 200.0);
        let paint = SegmentPaint::for_frame(
            Dp(4.0),
            LineCap::Round,
            &brush,
            None,
            bounds,
            Density::new(3.0),
        );

        assert!((paint.stroke.width - 12.0).abs() < 1e-6);
        assert_eq!(paint.stroke.cap, LineCap::Round);
        assert!(paint.stroke.anti_alias);
        assert!(paint.glow.is_none());

        match paint.brush {
            Brush::Gradient(Gradient::Linear {
                start, end, space, ..
            }) => {
                assert_eq!(space, GradientSpace::UserSpace);
                assert_eq!(start, Point::new(0.0, 100.0));
                assert_eq!(end, Point::new(256.0, 100.0));
            }
            other => panic!("expected resolved gradient brush, got {other:?}"),
        }
    }
}
