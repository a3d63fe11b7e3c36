//! Area/line chart of a projection: interest band stacked over the principal
//! band, with the total and principal lines drawn on top.

mod recording;
mod surface;
mod svg;

pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Color, DrawingSurface, Point, Stroke};
pub use svg::SvgSurface;

use tracing::debug;

use crate::core::ChartSeries;
use crate::error::{ChartError, ChartResult};
use crate::format::CurrencyFormatter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub border: Color,
    pub grid: Color,
    pub axis_label: Color,
    pub total_line: Color,
    pub principal_line: Color,
    pub interest_legend: Color,
    pub interest_fill: Color,
    pub principal_fill: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            border: Color::rgb(0xe5, 0xe7, 0xeb),
            grid: Color::rgb(0xf1, 0xf5, 0xf9),
            axis_label: Color::rgb(0x66, 0x66, 0x66),
            total_line: Color::rgb(0x03, 0x69, 0xa1),
            principal_line: Color::rgb(0x0e, 0xa5, 0xe9),
            interest_legend: Color::rgb(0x22, 0xc5, 0x5e),
            interest_fill: Color::rgba(34, 197, 94, 0.25),
            principal_fill: Color::rgba(14, 165, 233, 0.25),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub padding: Padding,
    pub palette: Palette,
    pub font_px: f64,
    pub line_width: f64,
    pub grid_divisions: u32,
    /// Legend column distance from the right edge of the plot.
    pub legend_inset: f64,
    pub legend_spacing: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            padding: Padding {
                left: 48.0,
                right: 12.0,
                top: 10.0,
                bottom: 28.0,
            },
            palette: Palette::default(),
            font_px: 12.0,
            line_width: 2.0,
            grid_divisions: 5,
            legend_inset: 110.0,
            legend_spacing: 16.0,
        }
    }
}

/// Linear index→x and value→y mappings for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotScales {
    pub left: f64,
    pub top: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    pub max_y: f64,
    last_index: f64,
}

impl PlotScales {
    pub fn new(css_width: f64, css_height: f64, padding: Padding, total: &[f64]) -> Self {
        // max(1, ...) keeps the y mapping finite when every value is zero.
        let max_y = total.iter().copied().fold(1.0, f64::max);
        Self {
            left: padding.left,
            top: padding.top,
            plot_width: css_width - padding.left - padding.right,
            plot_height: css_height - padding.top - padding.bottom,
            max_y,
            last_index: total.len().saturating_sub(1).max(1) as f64,
        }
    }

    pub fn x(&self, index: usize) -> f64 {
        self.left + (index as f64 / self.last_index) * self.plot_width
    }

    pub fn y(&self, value: f64) -> f64 {
        self.top + (1.0 - value / self.max_y) * self.plot_height
    }

    fn points(&self, values: &[f64]) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(idx, v)| Point::new(self.x(idx), self.y(*v)))
            .collect()
    }
}

pub struct ChartRenderer<'a> {
    formatter: &'a CurrencyFormatter,
    style: ChartStyle,
}

impl<'a> ChartRenderer<'a> {
    pub fn new(formatter: &'a CurrencyFormatter) -> Self {
        Self::with_style(formatter, ChartStyle::default())
    }

    pub fn with_style(formatter: &'a CurrencyFormatter, style: ChartStyle) -> Self {
        Self { formatter, style }
    }

    /// Redraws the whole chart onto `surface`.
    ///
    /// Paint order is fixed: interest band, principal band, total line,
    /// principal line, so the lines sit above both fills and the principal
    /// band never covers the interest band.
    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        series: &ChartSeries,
    ) -> ChartResult<()> {
        let total = &series.total_balance;
        let principal = &series.principal_contributed;
        if total.len() != principal.len() {
            return Err(ChartError::MismatchedSeries {
                total: total.len(),
                principal: principal.len(),
            });
        }
        if total.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        let (width, height) = surface.css_size();
        let pad = self.style.padding;
        let scales = PlotScales::new(width, height, pad, total);
        if !(width.is_finite() && height.is_finite())
            || !(scales.plot_width > 0.0 && scales.plot_height > 0.0)
        {
            return Err(ChartError::InvalidSurface { width, height });
        }

        fit_backing(surface, width, height);

        let palette = self.style.palette;
        surface.clear();
        surface.stroke_rect(
            Point::new(pad.left, pad.top),
            scales.plot_width,
            scales.plot_height,
            Stroke::new(palette.border, 1.0),
        );
        self.draw_gridlines(surface, &scales, width);

        let total_points = scales.points(total);
        let principal_points = scales.points(principal);

        let mut interest_band = total_points.clone();
        interest_band.extend(principal_points.iter().rev());
        surface.fill_polygon(&interest_band, palette.interest_fill);

        let mut principal_band = principal_points.clone();
        principal_band.push(Point::new(scales.x(total.len() - 1), scales.y(0.0)));
        principal_band.push(Point::new(scales.x(0), scales.y(0.0)));
        surface.fill_polygon(&principal_band, palette.principal_fill);

        let line_width = self.style.line_width;
        surface.stroke_polyline(&total_points, Stroke::new(palette.total_line, line_width));
        surface.stroke_polyline(
            &principal_points,
            Stroke::new(palette.principal_line, line_width),
        );

        self.draw_legend(surface, width);
        Ok(())
    }

    fn draw_gridlines<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        scales: &PlotScales,
        width: f64,
    ) {
        let divisions = self.style.grid_divisions.max(1);
        let grid = Stroke::new(self.style.palette.grid, 1.0);
        let right = width - self.style.padding.right;
        for step in 0..=divisions {
            let value = step as f64 / divisions as f64 * scales.max_y;
            let y = scales.y(value);
            surface.stroke_polyline(&[Point::new(scales.left, y), Point::new(right, y)], grid);
            surface.fill_text(
                &self.formatter.format(value),
                Point::new(6.0, y + 4.0),
                self.style.font_px,
                self.style.palette.axis_label,
            );
        }
    }

    fn draw_legend<S: DrawingSurface + ?Sized>(&self, surface: &mut S, width: f64) {
        let palette = self.style.palette;
        let x = width - self.style.padding.right - self.style.legend_inset;
        let y0 = self.style.padding.top + self.style.legend_spacing;
        let entries = [
            ("Total", palette.total_line),
            ("Interest", palette.interest_legend),
            ("Principal", palette.principal_line),
        ];
        for (idx, (label, color)) in entries.into_iter().enumerate() {
            let y = y0 + self.style.legend_spacing * idx as f64;
            surface.fill_text(label, Point::new(x, y), self.style.font_px, color);
        }
    }
}

/// Renders `series` onto a fresh SVG surface with the default style.
pub fn render_svg(
    series: &ChartSeries,
    formatter: &CurrencyFormatter,
    css_width: f64,
    css_height: f64,
    device_pixel_ratio: f64,
) -> ChartResult<String> {
    let mut surface = SvgSurface::new(css_width, css_height, device_pixel_ratio);
    ChartRenderer::new(formatter).render(&mut surface, series)?;
    Ok(surface.to_svg())
}

/// Sizes the backing buffer to the displayed box times the pixel density and
/// switches drawing to CSS-pixel coordinates.
fn fit_backing<S: DrawingSurface + ?Sized>(surface: &mut S, width: f64, height: f64) {
    let dpr = surface.device_pixel_ratio();
    let dpr = if dpr.is_finite() { dpr.max(1.0) } else { 1.0 };
    let target = ((width * dpr).round() as u32, (height * dpr).round() as u32);
    if surface.backing_size() != target {
        debug!(width = target.0, height = target.1, dpr, "resizing chart backing buffer");
        surface.resize_backing(target.0, target.1);
    }
    surface.set_scale(dpr);
}
