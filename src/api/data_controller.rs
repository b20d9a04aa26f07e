use tracing::{debug, warn};

use crate::core::{Record, Timeline};
use crate::error::ChartResult;
use crate::extensions::Preprocessor;
use crate::render::Renderer;

use super::{RedrawCause, RedrawOutcome, TimeSeriesChart};

impl<R: Renderer> TimeSeriesChart<R> {
    /// Replaces the dataset with already normalized records.
    ///
    /// Records must be sorted ascending by date. Fewer than two records is
    /// not drawable: the call is logged and ignored, keeping whatever is
    /// currently shown, and reports `NotReady` if nothing is shown yet.
    /// A dataset equal to the current one does not rebuild.
    pub fn set_records(&mut self, records: Vec<Record>) -> ChartResult<RedrawOutcome> {
        if records.len() < Timeline::MIN_LEN {
            self.stats.ignored_datasets += 1;
            warn!(
                len = records.len(),
                min_len = Timeline::MIN_LEN,
                "ignoring dataset too short to draw"
            );
            return Ok(if self.context.is_some() {
                RedrawOutcome::Unchanged
            } else {
                RedrawOutcome::NotReady
            });
        }

        if self
            .timeline
            .as_ref()
            .is_some_and(|current| current.records() == records.as_slice())
        {
            debug!(len = records.len(), "dataset unchanged");
            return self.flush_redraw();
        }

        let timeline = Timeline::new(records)?;
        debug!(
            len = timeline.len(),
            first = %timeline.first().date,
            last = %timeline.last().date,
            "dataset replaced"
        );
        self.timeline = Some(timeline);
        self.invalidate(RedrawCause::DatasetReplaced)
    }

    /// Normalizes `raw` through `preprocessor` and installs the result.
    pub fn load_with<P: Preprocessor>(
        &mut self,
        preprocessor: &P,
        raw: &P::Raw,
    ) -> ChartResult<RedrawOutcome> {
        let records = preprocessor.preprocess(raw)?;
        self.set_records(records)
    }
}
