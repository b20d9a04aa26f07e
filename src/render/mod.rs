mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PathCommand, PathPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_backend::{SvgRenderStats, SvgRenderer};

use crate::core::SeriesKind;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive fully materialized, validated panel frames so drawing
/// code stays isolated from scale derivation and pointer handling. Each of
/// the six panels is addressed by its series.
pub trait Renderer {
    /// Draws a complete panel, replacing whatever the panel showed before.
    fn render_panel(&mut self, series: SeriesKind, frame: &RenderFrame) -> ChartResult<()>;

    /// Tears down every element of a panel.
    fn clear_panel(&mut self, series: SeriesKind) -> ChartResult<()>;

    /// Repositions the focus marker of an already drawn panel in place.
    fn move_focus_marker(&mut self, series: SeriesKind, marker: CirclePrimitive)
    -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
