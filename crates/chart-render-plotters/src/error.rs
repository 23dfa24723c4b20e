// File: crates/chart-render-plotters/src/error.rs
// Summary: Typed render errors for the plotters host.

use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurface { width: u32, height: u32 },

    #[error("datasource produced no points to render")]
    EmptyDataSource,

    #[error("drawing backend: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
