use tracing::{debug, warn};

use crate::core::{Mode, PanelGeometry, ScaleSet, SeriesKind, Timeline};
use crate::error::ChartResult;
use crate::interaction::{FocusState, IndexScale};
use crate::render::Renderer;

use super::engine::RebuildContext;
use super::{
    PanelStyle, RedrawCause, RedrawOutcome, RedrawState, RedrawStats, TimeSeriesChart,
    build_panel_frame,
};

impl<R: Renderer> TimeSeriesChart<R> {
    #[must_use]
    pub fn redraw_state(&self) -> RedrawState {
        self.redraw
    }

    #[must_use]
    pub fn redraw_stats(&self) -> RedrawStats {
        self.stats
    }

    /// Marks the chart set dirty and rebuilds it immediately when possible.
    pub(super) fn invalidate(&mut self, cause: RedrawCause) -> ChartResult<RedrawOutcome> {
        self.redraw = self.redraw.mark(cause);
        debug!(cause = cause.as_str(), "chart set invalidated");
        self.flush_redraw()
    }

    /// Runs a pending rebuild.
    ///
    /// Returns `NotReady` while no drawable dataset exists; the chart stays
    /// dirty and rebuilds as soon as one arrives.
    pub fn flush_redraw(&mut self) -> ChartResult<RedrawOutcome> {
        let Some(cause) = self.redraw.cause() else {
            return Ok(RedrawOutcome::Unchanged);
        };
        let Some(timeline) = self.timeline.as_ref() else {
            debug!(cause = cause.as_str(), "rebuild deferred until data arrives");
            return Ok(RedrawOutcome::NotReady);
        };

        let mode = self.config.mode();
        debug!(
            cause = cause.as_str(),
            records = timeline.len(),
            shared_domain = mode.shared_domain,
            log_scale = mode.log_scale,
            "rebuild started"
        );

        self.context = None;
        for series in SeriesKind::ALL {
            self.renderer.clear_panel(series)?;
        }

        let context = match rebuild_context(timeline, mode, self.geometry, &self.style) {
            Ok(context) => context,
            Err(err) => {
                warn!(error = %err, "rebuild failed; panels left cleared");
                return Err(err);
            }
        };
        for (series, frame) in SeriesKind::ALL.into_iter().zip(&context.panels) {
            self.renderer.render_panel(series, frame)?;
        }

        self.context = Some(context);
        self.redraw = RedrawState::Idle;
        self.stats.rebuilds += 1;
        debug!(rebuilds = self.stats.rebuilds, "rebuild finished");
        Ok(RedrawOutcome::Rebuilt)
    }
}

fn rebuild_context(
    timeline: &Timeline,
    mode: Mode,
    geometry: PanelGeometry,
    style: &PanelStyle,
) -> ChartResult<RebuildContext> {
    let scales = ScaleSet::build(timeline, mode, geometry)?;
    let index_scale = IndexScale::new(timeline.len(), geometry)?;
    let focus = FocusState::latest(timeline);

    let panels = SeriesKind::ALL
        .into_iter()
        .map(|series| build_panel_frame(series, &scales, timeline, focus.record(), style))
        .collect::<ChartResult<Vec<_>>>()?;

    Ok(RebuildContext {
        scales,
        index_scale,
        panels,
        focus,
    })
}
