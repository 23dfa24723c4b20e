// File: crates/chart-datasource/src/datasource.rs
// Summary: The four-operation query protocol a host issues against a data-supplying collaborator.

use crate::series::SeriesKind;
use crate::types::DataPoint;

/// Answers a fixed, small query protocol issued by a host rendering component
/// to describe data series and produce their points on demand.
///
/// The host queries `series_count`, then per series `series_kind` and
/// `point_count`, then per point `point_at`. Every operation is synchronous,
/// stateless and idempotent: for a given `(point, series)` pair, repeated
/// queries must return the identical point, so the host may re-query at any
/// time (e.g. on redraw) without divergence.
///
/// Index preconditions: `series < series_count()` and
/// `point < point_count(series)`. An out-of-range index is a contract
/// violation by the caller, a programming error rather than a recoverable
/// condition; implementations are expected to fail fast instead of clamping.
pub trait ChartDataSource {
    /// How many series the source describes. Never negative by type.
    fn series_count(&self) -> usize;

    /// The kind of trace the given series renders as.
    fn series_kind(&self, series: usize) -> SeriesKind;

    /// Number of points in the given series.
    fn point_count(&self, series: usize) -> usize;

    /// The point at `point` within `series`. No randomness, no I/O, no
    /// allocation beyond the returned value.
    fn point_at(&self, point: usize, series: usize) -> DataPoint;
}
