// File: crates/chart-render-plotters/src/theme.rs
// Summary: Light and dark color palettes for the plotters host.

use plotters::style::RGBColor;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: RGBColor,
    pub caption: RGBColor,
    pub axis: RGBColor,
    pub grid: RGBColor,
    pub line_stroke: RGBColor,
    pub bar_fill: RGBColor,
    pub scatter_fill: RGBColor,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: RGBColor(255, 255, 255),
            caption: RGBColor(20, 20, 24),
            axis: RGBColor(60, 60, 70),
            grid: RGBColor(220, 220, 226),
            line_stroke: RGBColor(30, 110, 220),
            bar_fill: RGBColor(96, 156, 255),
            scatter_fill: RGBColor(220, 80, 80),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: RGBColor(18, 18, 20),
            caption: RGBColor(235, 235, 245),
            axis: RGBColor(180, 180, 190),
            grid: RGBColor(40, 40, 45),
            line_stroke: RGBColor(64, 160, 255),
            bar_fill: RGBColor(96, 156, 255),
            scatter_fill: RGBColor(220, 80, 80),
        }
    }
}
