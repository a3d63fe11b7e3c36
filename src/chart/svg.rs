use std::fmt::Write as _;

use super::surface::{Color, DrawingSurface, Point, Stroke};
use crate::format::escape_markup;

const FONT_FAMILY: &str = "system-ui, sans-serif";

/// Drawing surface that serializes to a standalone SVG document.
///
/// The backing size becomes the SVG's physical `width`/`height`; the scale
/// transform wraps every element so callers keep drawing in CSS pixels.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    css_width: f64,
    css_height: f64,
    device_pixel_ratio: f64,
    backing: (u32, u32),
    scale: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            css_width,
            css_height,
            device_pixel_ratio,
            backing: (0, 0),
            scale: 1.0,
            body: String::new(),
        }
    }

    pub fn to_svg(&self) -> String {
        let (width, height) = self.backing;
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\" style=\"width:{}px;height:{}px\">\
             <g transform=\"scale({})\">{}</g></svg>",
            num(self.css_width),
            num(self.css_height),
            num(self.scale),
            self.body
        )
    }
}

impl DrawingSurface for SvgSurface {
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
        self.body.clear();
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn clear(&mut self) {
        self.body.clear();
    }

    fn stroke_rect(&mut self, origin: Point, width: f64, height: f64, stroke: Stroke) {
        let _ = write!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\"{}/>",
            num(origin.x),
            num(origin.y),
            num(width),
            num(height),
            stroke_attrs(stroke)
        );
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        if points.is_empty() {
            return;
        }
        let _ = write!(
            self.body,
            "<polyline points=\"{}\" fill=\"none\" stroke-linejoin=\"round\"{}/>",
            point_list(points),
            stroke_attrs(stroke)
        );
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.is_empty() {
            return;
        }
        let _ = write!(
            self.body,
            "<polygon points=\"{}\"{}/>",
            point_list(points),
            paint_attrs("fill", color)
        );
    }

    fn fill_text(&mut self, text: &str, at: Point, font_px: f64, color: Color) {
        let _ = write!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"{FONT_FAMILY}\"{}>{}</text>",
            num(at.x),
            num(at.y),
            num(font_px),
            paint_attrs("fill", color),
            escape_markup(text)
        );
    }
}

fn stroke_attrs(stroke: Stroke) -> String {
    format!(
        "{} stroke-width=\"{}\"",
        paint_attrs("stroke", stroke.color),
        num(stroke.width)
    )
}

fn paint_attrs(kind: &str, color: Color) -> String {
    if color.is_opaque() {
        format!(" {kind}=\"{}\"", color.hex())
    } else {
        format!(
            " {kind}=\"{}\" {kind}-opacity=\"{}\"",
            color.hex(),
            num(color.alpha)
        )
    }
}

fn point_list(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two-decimal coordinate with trailing zeros removed.
fn num(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
