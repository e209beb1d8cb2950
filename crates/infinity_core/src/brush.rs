//! Colors, gradients, and brushes.
//!
//! A [`Brush`] is what a stroke is painted with: a solid color or a gradient.
//! Gradients can be declared in bounding-box space (fractional coordinates)
//! and resolved against the drawing bounds per frame, so the same brush
//! config adapts to any surface size.

use crate::geometry::{Point, Rect};

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gradients
// ─────────────────────────────────────────────────────────────────────────────

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// Gradient coordinate space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradientSpace {
    /// Coordinates are in user/world space (absolute pixels)
    #[default]
    UserSpace,
    /// Coordinates are relative to the bounding box (0.0-1.0)
    ObjectBoundingBox,
}

/// Gradient type
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    /// Linear gradient between two points
    Linear {
        start: Point,
        end: Point,
        /// Color stops (should be sorted by offset)
        stops: Vec<GradientStop>,
        /// Coordinate space interpretation
        space: GradientSpace,
    },
    /// Radial gradient from center outward
    Radial {
        center: Point,
        radius: f32,
        /// Color stops (should be sorted by offset)
        stops: Vec<GradientStop>,
        /// Coordinate space interpretation
        space: GradientSpace,
    },
}

impl Gradient {
    /// Create a simple linear gradient with two colors in user space
    pub fn linear(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
            space: GradientSpace::UserSpace,
        }
    }

    /// Create a linear gradient with multiple stops in user space
    pub fn linear_with_stops(start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        Gradient::Linear {
            start,
            end,
            stops,
            space: GradientSpace::UserSpace,
        }
    }

    /// Left-to-right gradient spanning whatever bounds it is resolved against
    pub fn horizontal(from: Color, to: Color) -> Self {
        Gradient::Linear {
            start: Point::new(0.0, 0.5),
            end: Point::new(1.0, 0.5),
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
            space: GradientSpace::ObjectBoundingBox,
        }
    }

    /// Create a simple radial gradient with two colors in user space
    pub fn radial(center: Point, radius: f32, from: Color, to: Color) -> Self {
        Gradient::Radial {
            center,
            radius,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
            space: GradientSpace::UserSpace,
        }
    }

    /// Get the gradient stops
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } => stops,
            Gradient::Radial { stops, .. } => stops,
        }
    }

    /// Resolve bounding-box-relative coordinates against `bounds`.
    ///
    /// User-space gradients pass through unchanged. Bounding-box gradients
    /// come back in user space, spanning the given bounds; the radial radius
    /// follows the SVG convention (relative to the bounds diagonal / √2).
    pub fn to_user_space(&self, bounds: Rect) -> Gradient {
        match self {
            Gradient::Linear {
                start,
                end,
                stops,
                space,
            } => match space {
                GradientSpace::UserSpace => self.clone(),
                GradientSpace::ObjectBoundingBox => Gradient::Linear {
                    start: bounds.relative(start.x, start.y),
                    end: bounds.relative(end.x, end.y),
                    stops: stops.clone(),
                    space: GradientSpace::UserSpace,
                },
            },
            Gradient::Radial {
                center,
                radius,
                stops,
                space,
            } => match space {
                GradientSpace::UserSpace => self.clone(),
                GradientSpace::ObjectBoundingBox => {
                    let diagonal =
                        (bounds.width() * bounds.width() + bounds.height() * bounds.height()).sqrt();
                    Gradient::Radial {
                        center: bounds.relative(center.x, center.y),
                        radius: radius * diagonal / std::f32::consts::SQRT_2,
                        stops: stops.clone(),
                        space: GradientSpace::UserSpace,
                    }
                }
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Brush
// ─────────────────────────────────────────────────────────────────────────────

/// Brush for painting strokes and fills
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Gradient(Gradient),
}

impl Brush {
    /// Resolve the brush against the current drawing bounds.
    ///
    /// Solid brushes are unchanged; gradients are mapped to user space so
    /// they span the full bounds.
    pub fn resolve(&self, bounds: Rect) -> Brush {
        match self {
            Brush::Solid(color) => Brush::Solid(*color),
            Brush::Gradient(gradient) => Brush::Gradient(gradient.to_user_space(bounds)),
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<Gradient> for Brush {
    fn from(gradient: Gradient) -> Self {
        Brush::Gradient(gradient)
    }
}
