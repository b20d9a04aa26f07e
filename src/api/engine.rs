use crate::core::{PanelGeometry, ScaleSet, SeriesKind, Timeline};
use crate::interaction::{FocusState, IndexScale};
use crate::render::{RenderFrame, Renderer};

use super::{HostConfig, PanelStyle, RedrawState, RedrawStats};

/// Artifacts of the latest completed rebuild.
///
/// Scales, index scale and panel frames are replaced together and never
/// patched; only the focus state and the focus markers inside `panels`
/// change between rebuilds.
#[derive(Debug, Clone)]
pub(super) struct RebuildContext {
    pub(super) scales: ScaleSet,
    pub(super) index_scale: IndexScale,
    pub(super) panels: Vec<RenderFrame>,
    pub(super) focus: FocusState,
}

/// Main facade consumed by host pages.
///
/// `TimeSeriesChart` owns the dataset, the display mode, the six drawn
/// panels and the shared hover focus, and drives a `Renderer` backend.
/// Every handler runs to completion before returning, so a pointer event can
/// never observe a half-built scale set.
pub struct TimeSeriesChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: HostConfig,
    pub(super) geometry: PanelGeometry,
    pub(super) style: PanelStyle,
    pub(super) timeline: Option<Timeline>,
    pub(super) context: Option<RebuildContext>,
    pub(super) redraw: RedrawState,
    pub(super) stats: RedrawStats,
}

impl<R: Renderer> TimeSeriesChart<R> {
    /// Creates an empty chart set; nothing is drawn until a dataset arrives.
    #[must_use]
    pub fn new(renderer: R, config: HostConfig) -> Self {
        Self {
            renderer,
            config,
            geometry: PanelGeometry::STANDARD,
            style: PanelStyle::default(),
            timeline: None,
            context: None,
            redraw: RedrawState::Idle,
            stats: RedrawStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> HostConfig {
        self.config
    }

    #[must_use]
    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    #[must_use]
    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    #[must_use]
    pub fn timeline(&self) -> Option<&Timeline> {
        self.timeline.as_ref()
    }

    /// Scales of the latest rebuild, `None` before the first one.
    #[must_use]
    pub fn scales(&self) -> Option<&ScaleSet> {
        self.context.as_ref().map(|context| &context.scales)
    }

    #[must_use]
    pub fn index_scale(&self) -> Option<IndexScale> {
        self.context.as_ref().map(|context| context.index_scale)
    }

    /// Current scene of one panel, including its focus marker position.
    #[must_use]
    pub fn panel_frame(&self, series: SeriesKind) -> Option<&RenderFrame> {
        self.context
            .as_ref()
            .and_then(|context| context.panels.get(series.index()))
    }

    /// Whether all six panels are drawn and current.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.context.is_some() && !self.redraw.is_dirty()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
