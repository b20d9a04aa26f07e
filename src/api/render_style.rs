use serde::{Deserialize, Serialize};

use crate::core::SeriesKind;
use crate::render::Color;

/// Alpha applied to curves, stems and point dots (`0x99`).
pub const ENCODING_ALPHA: f64 = 153.0 / 255.0;

/// Visual constants shared by all six panels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelStyle {
    pub encoding_stroke_width: f64,
    pub point_radius: f64,
    pub focus_radius: f64,
    pub axis_color: Color,
    pub axis_line_width: f64,
    pub axis_font_size_px: f64,
    /// Length of tick marks on both axes.
    pub tick_size_px: f64,
    /// Gap between a bottom-axis tick and its label.
    pub time_tick_padding_px: f64,
    /// Gap between a right-axis tick and its label.
    pub value_tick_padding_px: f64,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            encoding_stroke_width: 5.0,
            point_radius: 3.0,
            focus_radius: 5.0,
            axis_color: Color::from_rgb8(0x6c, 0x75, 0x7d).with_alpha(ENCODING_ALPHA),
            axis_line_width: 1.0,
            axis_font_size_px: 10.0,
            tick_size_px: 6.0,
            time_tick_padding_px: 3.0,
            value_tick_padding_px: 5.0,
        }
    }
}

impl PanelStyle {
    /// Full-strength series color, used by dots and the focus marker.
    #[must_use]
    pub fn series_color(series: SeriesKind) -> Color {
        let (red, green, blue) = series.color_rgb8();
        Color::from_rgb8(red, green, blue)
    }

    /// Translucent series color for curves and stems.
    #[must_use]
    pub fn encoding_color(series: SeriesKind) -> Color {
        Self::series_color(series).with_alpha(ENCODING_ALPHA)
    }
}
