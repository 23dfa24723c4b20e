// File: crates/chart-render-plotters/src/options.rs
// Summary: Host-owned display configuration (surface size, margins, labels, theme).

use crate::theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: u32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 640;

/// Margins around the plot area, in pixels.
/// Left and bottom double as the Y/X label gutters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Everything the host owns about presentation. The datasource never sees
/// any of this; it is pass-through configuration on the rendering side.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    /// Optional caption drawn above the plot (when labels are on).
    pub caption: Option<String>,
    pub x_desc: String,
    pub y_desc: String,
    /// When false, no text is drawn at all (captions, tick labels, axis
    /// descriptions) so output stays identical across font environments.
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            caption: None,
            x_desc: "Index".to_string(),
            y_desc: "Value".to_string(),
            draw_labels: true,
            theme: Theme::light(),
        }
    }
}
