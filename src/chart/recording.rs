use super::surface::{Color, DrawingSurface, Point, Stroke};

/// One call received by a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    Scale(f64),
    Clear,
    StrokeRect {
        origin: Point,
        width: f64,
        height: f64,
        stroke: Stroke,
    },
    Polyline { points: Vec<Point>, stroke: Stroke },
    Polygon { points: Vec<Point>, color: Color },
    Text {
        text: String,
        at: Point,
        font_px: f64,
        color: Color,
    },
}

/// Headless surface that keeps every draw call, in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
    pub backing: (u32, u32),
    pub resize_count: usize,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            css_width,
            css_height,
            device_pixel_ratio,
            backing: (0, 0),
            resize_count: 0,
            commands: Vec::new(),
        }
    }

    /// Commands issued after the most recent `clear`.
    pub fn frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map_or(0, |idx| idx + 1);
        &self.commands[start..]
    }

    pub fn all_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().flat_map(|command| match command {
            DrawCommand::StrokeRect { origin, .. } => vec![*origin],
            DrawCommand::Polyline { points, .. } | DrawCommand::Polygon { points, .. } => {
                points.clone()
            }
            DrawCommand::Text { at, .. } => vec![*at],
            _ => Vec::new(),
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn css_size(&self) -> (f64, f64) {
        (self.css_width, self.css_height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    fn resize_backing(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
        self.resize_count += 1;
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn set_scale(&mut self, scale: f64) {
        self.commands.push(DrawCommand::Scale(scale));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_rect(&mut self, origin: Point, width: f64, height: f64, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeRect {
            origin,
            width,
            height,
            stroke,
        });
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_text(&mut self, text: &str, at: Point, font_px: f64, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            font_px,
            color,
        });
    }
}
