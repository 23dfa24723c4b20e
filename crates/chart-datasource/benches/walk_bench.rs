use chart_datasource::{collect_series, ChartDataSource, DataPoint, Series, SeriesKind, SquareLawSource};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

/// Synthetic source with a configurable point count (waveform with drift).
struct WaveSource {
    points: usize,
}

impl ChartDataSource for WaveSource {
    fn series_count(&self) -> usize {
        1
    }
    fn series_kind(&self, _series: usize) -> SeriesKind {
        SeriesKind::Line
    }
    fn point_count(&self, _series: usize) -> usize {
        self.points
    }
    fn point_at(&self, point: usize, _series: usize) -> DataPoint {
        let y = (point as f64 * 0.01).sin() * 10.0 + point as f64 * 0.0001;
        DataPoint::new(point as f64, y)
    }
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("protocol_walk");

    group.bench_function("square_law_100", |b| {
        b.iter(|| {
            let series = collect_series(black_box(&SquareLawSource));
            black_box(series);
        });
    });

    for &n in &[10_000usize, 100_000usize] {
        let source = WaveSource { points: n };
        group.bench_with_input(BenchmarkId::from_parameter(format!("wave_{n}")), &source, |b, src| {
            b.iter(|| {
                let series = Series::from_source(black_box(src), 0);
                black_box(series);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_walk);
criterion_main!(benches);
