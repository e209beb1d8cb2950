//! Core 2D geometry and unit types.
//!
//! Everything here is plain value types: points, sizes, rects, and the
//! density-independent units used to size strokes consistently across
//! displays.

// ─────────────────────────────────────────────────────────────────────────────
// Points, Sizes, Rects
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points
    pub fn lerp(a: Point, b: Point, t: f32) -> Point {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }
}

impl From<Size> for Rect {
    /// Convert Size to Rect at origin (0, 0)
    fn from(size: Size) -> Self {
        size.to_rect()
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Get the size of this rect
    pub fn size(&self) -> Size {
        self.size
    }

    /// Point at fractional coordinates within the rect (0.0–1.0 per axis)
    pub fn relative(&self, u: f32, v: f32) -> Point {
        Point::new(
            self.origin.x + self.size.width * u,
            self.origin.y + self.size.height * v,
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Density-independent Units
// ─────────────────────────────────────────────────────────────────────────────

/// A length in density-independent pixels.
///
/// Dimensions configured in dp render at the same physical size on every
/// display; conversion to physical pixels goes through [`Density`].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Convert to physical pixels at the given display density
    pub fn to_px(self, density: Density) -> f32 {
        self.0 * density.scale
    }
}

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

/// Display density: the dp→px scale factor of the current surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub scale: f32,
}

impl Density {
    pub const fn new(scale: f32) -> Self {
        Self { scale }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
