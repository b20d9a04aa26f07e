use tracing::trace;

use crate::core::SeriesKind;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FocusState, PointerEvent};
use crate::render::Renderer;

use super::TimeSeriesChart;
use super::engine::RebuildContext;

impl<R: Renderer> TimeSeriesChart<R> {
    /// Shared focus of the latest rebuild, `None` before the first one.
    #[must_use]
    pub fn focus_state(&self) -> Option<&FocusState> {
        self.context.as_ref().map(|context| &context.focus)
    }

    /// Routes a host pointer event; returns whether the focus moved.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> ChartResult<bool> {
        match event.x() {
            Some(x) => self.pointer_move(x),
            None => self.pointer_out(),
        }
    }

    /// Focuses the record under horizontal pixel `x` on every panel.
    ///
    /// Positions mapping outside the record range are ignored and leave
    /// the focus untouched.
    pub fn pointer_move(&mut self, x: f64) -> ChartResult<bool> {
        let (Some(timeline), Some(context)) = (self.timeline.as_ref(), self.context.as_mut())
        else {
            return Ok(false);
        };
        let Some(index) = context.index_scale.index_at(x) else {
            trace!(x, "pointer outside record range ignored");
            return Ok(false);
        };
        let record = *timeline.get(index).ok_or_else(|| {
            ChartError::InvalidData(format!("focus index {index} outside the dataset"))
        })?;

        trace!(x, index, date = %record.date, "pointer focus");
        context.focus.hover(index, record);
        sync_focus_markers(&mut self.renderer, context)?;
        self.stats.focus_moves += 1;
        Ok(true)
    }

    /// Snaps the focus back to the latest record on every panel.
    pub fn pointer_out(&mut self) -> ChartResult<bool> {
        let (Some(timeline), Some(context)) = (self.timeline.as_ref(), self.context.as_mut())
        else {
            return Ok(false);
        };

        trace!("pointer left; focus reset to latest record");
        context.focus.reset_to_latest(timeline);
        sync_focus_markers(&mut self.renderer, context)?;
        self.stats.focus_moves += 1;
        Ok(true)
    }
}

fn sync_focus_markers<R: Renderer>(
    renderer: &mut R,
    context: &mut RebuildContext,
) -> ChartResult<()> {
    let record = *context.focus.record();
    for series in SeriesKind::ALL {
        let (cx, cy) = context.scales.point(series, &record)?;
        let frame = context.panels.get_mut(series.index()).ok_or_else(|| {
            ChartError::InvalidData(format!("panel `{}` is missing", series.key()))
        })?;
        let marker = frame.reposition_focus_marker(cx, cy)?;
        renderer.move_focus_marker(series, marker)?;
    }
    Ok(())
}
