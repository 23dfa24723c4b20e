// File: crates/chart-datasource/src/lib.rs
// Summary: Core library entry point; exports the datasource protocol and data model.

pub mod datasource;
pub mod series;
pub mod square_law;
pub mod types;

pub use datasource::ChartDataSource;
pub use series::{collect_series, Series, SeriesKind};
pub use square_law::SquareLawSource;
pub use types::DataPoint;
