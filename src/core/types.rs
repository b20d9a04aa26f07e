use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel margins around the plotting area of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Fixed geometry shared by all six panels.
///
/// The horizontal plotting extent is `[margins.left, chart_width()]` and the
/// vertical one is `[chart_height(), margins.top]` (inverted Y axis). The
/// right and bottom margins host the value and time axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub viewport: Viewport,
    pub margins: Margins,
}

impl PanelGeometry {
    pub const STANDARD: Self = Self {
        viewport: Viewport::new(650, 200),
        margins: Margins::new(0.0, 25.0, 60.0, 20.0),
    };

    #[must_use]
    pub fn chart_width(self) -> f64 {
        f64::from(self.viewport.width) - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn chart_height(self) -> f64 {
        f64::from(self.viewport.height) - self.margins.top - self.margins.bottom
    }

    /// Horizontal pixel range used by both the time scale and the index scale.
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (self.margins.left, self.chart_width())
    }

    /// Vertical pixel range of value scales; larger values map higher.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.chart_height(), self.margins.top)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let (x0, x1) = self.x_range();
        let (y0, y1) = self.y_range();
        self.viewport.is_valid() && x1 > x0 && y0 > y1
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self::STANDARD
    }
}
