// File: crates/chart-datasource/src/types.rs
// Summary: Shared value types for the datasource protocol.

/// A single (x, y) coordinate pair within a series.
///
/// Immutable once produced; sources derive every point on demand and never
/// hand out references into retained state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
