// File: crates/chart-render-plotters/src/lib.rs
// Summary: Host-side library entry point; exports the chart surface and its configuration.

pub mod bounds;
pub mod error;
pub mod options;
pub mod theme;
pub mod view;

pub use bounds::DataBounds;
pub use error::{RenderError, RenderResult};
pub use options::{Insets, RenderOptions, HEIGHT, WIDTH};
pub use theme::Theme;
pub use view::{ChartView, RgbFrame};
