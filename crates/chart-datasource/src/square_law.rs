// File: crates/chart-datasource/src/square_law.rs
// Summary: Synthetic datasource: one line series of 100 points following y = x^2.

use crate::datasource::ChartDataSource;
use crate::series::SeriesKind;
use crate::types::DataPoint;

/// Stateless generator for the square-law dataset.
///
/// Describes exactly one `Line` series of [`SquareLawSource::POINT_COUNT`]
/// points where point `i` is `(i, i*i)`. Every answer is a pure function of
/// the queried indices; nothing is cached or mutated between calls.
///
/// Indices are checked: an out-of-range `series` or `point` panics with the
/// violated precondition instead of clamping.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquareLawSource;

impl SquareLawSource {
    /// Series reported by this source.
    pub const SERIES_COUNT: usize = 1;
    /// Points in the single series.
    pub const POINT_COUNT: usize = 100;
}

impl ChartDataSource for SquareLawSource {
    fn series_count(&self) -> usize {
        Self::SERIES_COUNT
    }

    fn series_kind(&self, series: usize) -> SeriesKind {
        assert!(
            series < Self::SERIES_COUNT,
            "series index {series} out of range (count {})",
            Self::SERIES_COUNT
        );
        SeriesKind::Line
    }

    fn point_count(&self, series: usize) -> usize {
        assert!(
            series < Self::SERIES_COUNT,
            "series index {series} out of range (count {})",
            Self::SERIES_COUNT
        );
        Self::POINT_COUNT
    }

    fn point_at(&self, point: usize, series: usize) -> DataPoint {
        assert!(
            series < Self::SERIES_COUNT,
            "series index {series} out of range (count {})",
            Self::SERIES_COUNT
        );
        assert!(
            point < Self::POINT_COUNT,
            "point index {point} out of range (count {})",
            Self::POINT_COUNT
        );
        DataPoint::new(point as f64, (point * point) as f64)
    }
}
