// File: crates/chart-render-plotters/src/bounds.rs
// Summary: Data extents derived per render from collected series.

use chart_datasource::Series;

/// Axis-aligned extents of the data to frame, with presentation headroom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    /// Scan every point of every series. Returns `None` when there is
    /// nothing to measure. Degenerate spans widen to unit width and the Y
    /// range gains 2% headroom so extremes do not sit on the frame edge.
    pub fn from_series(series: &[Series]) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut seen = 0usize;

        for s in series {
            for p in &s.points {
                x_min = x_min.min(p.x);
                x_max = x_max.max(p.x);
                y_min = y_min.min(p.y);
                y_max = y_max.max(p.y);
                seen += 1;
            }
        }

        if seen == 0 {
            return None;
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            // No finite extent on some axis; fall back to a unit frame.
            return Some(Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
        }

        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let headroom = (y_max - y_min) * 0.02;
        Some(Self { x_min, x_max, y_min: y_min - headroom, y_max: y_max + headroom })
    }

    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}
