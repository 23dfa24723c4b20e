// File: crates/chart-render-plotters/src/view.rs
// Summary: Chart surface driving the datasource protocol and delegating drawing to plotters.

use std::path::Path;

use chart_datasource::{collect_series, ChartDataSource, Series, SeriesKind};
use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, Rectangle};
use plotters::prelude::SVGBackend;
use plotters::series::LineSeries;
use plotters::style::{Color, IntoFont};
use tracing::{debug, info};

use crate::bounds::DataBounds;
use crate::error::{RenderError, RenderResult};
use crate::options::RenderOptions;

/// Rendered RGB8 frame, row-major, three bytes per pixel.
#[derive(Clone, Debug)]
pub struct RgbFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Host-side chart surface.
///
/// Owns the display configuration, pulls series through the query protocol
/// and hands the collected data to plotters. The datasource never sees the
/// surface; the surface never retains the datasource.
pub struct ChartView {
    pub options: RenderOptions,
}

impl ChartView {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render every series the source describes to a PNG at `path`.
    pub fn render_to_png(
        &self,
        source: &dyn ChartDataSource,
        path: impl AsRef<Path>,
    ) -> RenderResult<()> {
        let path = path.as_ref();
        self.validate()?;
        let series = self.pull(source)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        {
            let root = BitMapBackend::new(path, (self.options.width, self.options.height))
                .into_drawing_area();
            draw_on(&root, &series, &self.options)?;
            root.present().map_err(backend_err)?;
        }
        info!(path = %path.display(), theme = self.options.theme.name, "rendered png");
        Ok(())
    }

    /// Render every series the source describes to an SVG at `path`.
    pub fn render_to_svg(
        &self,
        source: &dyn ChartDataSource,
        path: impl AsRef<Path>,
    ) -> RenderResult<()> {
        let path = path.as_ref();
        self.validate()?;
        let series = self.pull(source)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        {
            let root = SVGBackend::new(path, (self.options.width, self.options.height))
                .into_drawing_area();
            draw_on(&root, &series, &self.options)?;
            root.present().map_err(backend_err)?;
        }
        info!(path = %path.display(), theme = self.options.theme.name, "rendered svg");
        Ok(())
    }

    /// Render into an in-memory RGB8 frame of the configured size.
    pub fn render_to_rgb8(&self, source: &dyn ChartDataSource) -> RenderResult<RgbFrame> {
        self.validate()?;
        let series = self.pull(source)?;
        let (width, height) = (self.options.width, self.options.height);
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        {
            let root =
                BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            draw_on(&root, &series, &self.options)?;
            root.present().map_err(backend_err)?;
        }
        Ok(RgbFrame { pixels, width, height })
    }

    fn validate(&self) -> RenderResult<()> {
        let o = &self.options;
        if o.width == 0 || o.height == 0 || o.width <= o.insets.hsum() || o.height <= o.insets.vsum()
        {
            return Err(RenderError::InvalidSurface { width: o.width, height: o.height });
        }
        Ok(())
    }

    /// Full protocol walk; a source with nothing to draw is not renderable.
    fn pull(&self, source: &dyn ChartDataSource) -> RenderResult<Vec<Series>> {
        let series = collect_series(source);
        if series.iter().all(|s| s.is_empty()) {
            return Err(RenderError::EmptyDataSource);
        }
        Ok(series)
    }
}

fn backend_err<E: std::error::Error>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

fn draw_on<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &[Series],
    opts: &RenderOptions,
) -> RenderResult<()> {
    let theme = &opts.theme;
    root.fill(&theme.background).map_err(backend_err)?;

    let bounds = DataBounds::from_series(series).ok_or(RenderError::EmptyDataSource)?;
    debug!(?bounds, count = series.len(), "framing series");

    let mut builder = ChartBuilder::on(root);
    builder
        .margin_top(opts.insets.top)
        .margin_right(opts.insets.right)
        .x_label_area_size(opts.insets.bottom)
        .y_label_area_size(opts.insets.left);
    if opts.draw_labels {
        if let Some(caption) = &opts.caption {
            builder.caption(caption, ("sans-serif", 24).into_font().color(&theme.caption));
        }
    }
    let mut chart = builder
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
        .map_err(backend_err)?;

    let mut mesh = chart.configure_mesh();
    mesh.light_line_style(&theme.grid);
    if opts.draw_labels {
        mesh.axis_style(&theme.axis)
            .label_style(("sans-serif", 14).into_font().color(&theme.axis))
            .x_desc(opts.x_desc.as_str())
            .y_desc(opts.y_desc.as_str());
    } else {
        // Grid lines stay; zero labels means zero text on any platform.
        mesh.x_labels(0).y_labels(0);
    }
    mesh.draw().map_err(backend_err)?;

    for s in series {
        match s.kind {
            SeriesKind::Line => {
                chart
                    .draw_series(LineSeries::new(
                        s.points.iter().map(|p| (p.x, p.y)),
                        theme.line_stroke.stroke_width(2),
                    ))
                    .map_err(backend_err)?;
            }
            SeriesKind::Bar => {
                // One slot per point across the x span, bar at 70% slot width.
                let half = bounds.x_span() / s.len().max(1) as f64 * 0.35;
                chart
                    .draw_series(s.points.iter().map(|p| {
                        Rectangle::new(
                            [(p.x - half, 0.0), (p.x + half, p.y)],
                            theme.bar_fill.filled(),
                        )
                    }))
                    .map_err(backend_err)?;
            }
            SeriesKind::Scatter => {
                chart
                    .draw_series(
                        s.points
                            .iter()
                            .map(|p| Circle::new((p.x, p.y), 3, theme.scatter_fill.filled())),
                    )
                    .map_err(backend_err)?;
            }
        }
    }
    Ok(())
}
