// File: crates/chart-datasource/tests/protocol.rs
// Purpose: Validate the query protocol contract of the square-law source.

use std::cell::Cell;

use chart_datasource::{collect_series, ChartDataSource, DataPoint, Series, SeriesKind, SquareLawSource};

#[test]
fn reports_one_line_series() {
    let source = SquareLawSource;
    assert_eq!(source.series_count(), 1);
    for s in 0..source.series_count() {
        assert_eq!(source.series_kind(s), SeriesKind::Line);
        assert_eq!(source.point_count(s), 100);
    }
}

#[test]
fn every_point_follows_the_square_law() {
    let source = SquareLawSource;
    for s in 0..source.series_count() {
        for i in 0..source.point_count(s) {
            let p = source.point_at(i, s);
            assert_eq!(p, DataPoint::new(i as f64, (i * i) as f64));
        }
    }
}

#[test]
fn repeated_queries_are_identical() {
    let source = SquareLawSource;
    for i in [0usize, 1, 7, 50, 99] {
        assert_eq!(source.point_at(i, 0), source.point_at(i, 0));
    }
    assert_eq!(source.series_kind(0), source.series_kind(0));
    assert_eq!(source.point_count(0), source.point_count(0));
}

#[test]
fn boundary_points() {
    let source = SquareLawSource;
    assert_eq!(source.point_at(0, 0), DataPoint::new(0.0, 0.0));
    assert_eq!(source.point_at(99, 0), DataPoint::new(99.0, 9801.0));
}

#[test]
fn full_walk_reproduces_the_parabola_in_order() {
    let collected = collect_series(&SquareLawSource);
    assert_eq!(collected.len(), 1);

    let series = &collected[0];
    assert_eq!(series.kind, SeriesKind::Line);
    assert_eq!(series.len(), 100);

    let expected: Vec<DataPoint> = (0..100)
        .map(|i| DataPoint::new(i as f64, (i * i) as f64))
        .collect();
    assert_eq!(series.points, expected);
}

/// Probe that counts point queries while delegating to the square-law source.
struct CountingProbe {
    inner: SquareLawSource,
    point_calls: Cell<usize>,
}

impl CountingProbe {
    fn new() -> Self {
        Self { inner: SquareLawSource, point_calls: Cell::new(0) }
    }
}

impl ChartDataSource for CountingProbe {
    fn series_count(&self) -> usize {
        self.inner.series_count()
    }
    fn series_kind(&self, series: usize) -> SeriesKind {
        self.inner.series_kind(series)
    }
    fn point_count(&self, series: usize) -> usize {
        self.inner.point_count(series)
    }
    fn point_at(&self, point: usize, series: usize) -> DataPoint {
        self.point_calls.set(self.point_calls.get() + 1);
        self.inner.point_at(point, series)
    }
}

#[test]
fn one_hundred_point_queries_enumerate_series_zero() {
    let probe = CountingProbe::new();
    let series = Series::from_source(&probe, 0);
    assert_eq!(series.len(), 100);
    assert_eq!(probe.point_calls.get(), 100);
}

#[test]
#[should_panic(expected = "series index 1 out of range")]
fn series_kind_rejects_out_of_range_series() {
    let _ = SquareLawSource.series_kind(1);
}

#[test]
#[should_panic(expected = "series index 3 out of range")]
fn point_count_rejects_out_of_range_series() {
    let _ = SquareLawSource.point_count(3);
}

#[test]
#[should_panic(expected = "point index 100 out of range")]
fn point_at_rejects_out_of_range_point() {
    let _ = SquareLawSource.point_at(100, 0);
}

#[test]
#[should_panic(expected = "series index 1 out of range")]
fn point_at_rejects_out_of_range_series() {
    let _ = SquareLawSource.point_at(0, 1);
}
