// File: crates/demo/src/main.rs
// Summary: Demo walks the square-law datasource and renders it to PNG and SVG in both themes.

use anyhow::{Context, Result};
use chart_datasource::{collect_series, ChartDataSource, SquareLawSource};
use chart_render_plotters::{ChartView, RenderOptions, Theme};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    // Accept an output stem from CLI or fall back to target/out/square_law
    let stem = std::env::args().nth(1).unwrap_or_else(|| "target/out/square_law".to_string());

    let source = SquareLawSource;
    println!(
        "Dataset: {} series, {} points, y = x^2",
        source.series_count(),
        source.point_count(0)
    );

    let series = collect_series(&source);
    let total: usize = series.iter().map(|s| s.len()).sum();
    println!("Pulled {} points over the query protocol", total);

    let mut opts = RenderOptions::default();
    opts.caption = Some("y = x^2".to_string());
    let view = ChartView::new(opts);

    let out_png = PathBuf::from(format!("{stem}.png"));
    view.render_to_png(&source, &out_png)
        .with_context(|| format!("rendering '{}'", out_png.display()))?;
    println!("Wrote {}", out_png.display());

    let out_svg = PathBuf::from(format!("{stem}.svg"));
    view.render_to_svg(&source, &out_svg)
        .with_context(|| format!("rendering '{}'", out_svg.display()))?;
    println!("Wrote {}", out_svg.display());

    // Same chart again on the dark theme.
    let mut dark = RenderOptions::default();
    dark.caption = Some("y = x^2".to_string());
    dark.theme = Theme::dark();
    let dark_view = ChartView::new(dark);

    let out_dark = PathBuf::from(format!("{stem}_dark.png"));
    dark_view
        .render_to_png(&source, &out_dark)
        .with_context(|| format!("rendering '{}'", out_dark.display()))?;
    println!("Wrote {}", out_dark.display());

    Ok(())
}
