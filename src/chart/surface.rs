/// Point in CSS-pixel space, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// sRGB color with straight alpha in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Immediate-mode 2-D drawing target.
///
/// Coordinates passed to the drawing calls are CSS pixels; the surface maps
/// them to its backing buffer through the scale set with `set_scale`. Later
/// calls paint over earlier ones.
pub trait DrawingSurface {
    /// Displayed size in CSS pixels.
    fn css_size(&self) -> (f64, f64);

    /// Physical pixels per CSS pixel.
    fn device_pixel_ratio(&self) -> f64;

    fn backing_size(&self) -> (u32, u32);

    /// Reallocates the backing buffer.
    fn resize_backing(&mut self, width: u32, height: u32);

    /// Replaces the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f64);

    fn clear(&mut self);

    fn stroke_rect(&mut self, origin: Point, width: f64, height: f64, stroke: Stroke);

    /// Connects the points with straight segments.
    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke);

    /// Fills the closed polygon through the points.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Draws text with its baseline-left corner at `at`.
    fn fill_text(&mut self, text: &str, at: Point, font_px: f64, color: Color);
}
