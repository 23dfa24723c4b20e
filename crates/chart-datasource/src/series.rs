// File: crates/chart-datasource/src/series.rs
// Summary: Series model and the protocol walk that materializes series from a datasource.

use tracing::debug;

use crate::datasource::ChartDataSource;
use crate::types::DataPoint;

/// The trace kinds a series can render as. Closed set: hosts match on every
/// variant rather than falling through a wildcard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Bar,
    Scatter,
}

/// One visual trace: a typed, ordered sequence of data points.
///
/// Materialized fresh per query from a [`ChartDataSource`]; holds no link
/// back to the source and no state between walks.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub kind: SeriesKind,
    pub points: Vec<DataPoint>,
}

impl Series {
    pub fn new(kind: SeriesKind, points: Vec<DataPoint>) -> Self {
        Self { kind, points }
    }

    /// Materialize one series by walking the protocol in the documented
    /// order: `series_kind`, `point_count`, then `point_at` for each index.
    /// Issues exactly `point_count(series)` point queries.
    ///
    /// Precondition: `series < source.series_count()`.
    pub fn from_source(source: &dyn ChartDataSource, series: usize) -> Self {
        let kind = source.series_kind(series);
        let count = source.point_count(series);
        let points = (0..count).map(|i| source.point_at(i, series)).collect();
        debug!(series, count, ?kind, "materialized series");
        Self { kind, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Walk the full protocol: `series_count`, then materialize each series in
/// index order. This is the whole exchange between a host and a source.
pub fn collect_series(source: &dyn ChartDataSource) -> Vec<Series> {
    let count = source.series_count();
    let series = (0..count).map(|s| Series::from_source(source, s)).collect();
    debug!(series = count, "collected all series");
    series
}
