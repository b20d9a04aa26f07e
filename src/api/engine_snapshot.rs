use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ChartGroup, Mode, SeriesKind, ValueScaleKind};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{RedrawStats, TimeSeriesChart};

/// Value axis of one panel as recorded in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScaleSnapshot {
    pub kind: ValueScaleKind,
    pub domain: (f64, f64),
    pub tick_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSnapshot {
    pub index: usize,
    pub date: NaiveDate,
    pub hovering: bool,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
///
/// `value_scales` is keyed by series key in panel order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub mode: Mode,
    pub visible_group: ChartGroup,
    pub record_count: usize,
    pub time_domain: (NaiveDate, NaiveDate),
    pub value_scales: IndexMap<String, ValueScaleSnapshot>,
    pub focus: FocusSnapshot,
    pub redraw: RedrawStats,
}

impl ChartSnapshot {
    #[must_use]
    pub fn value_scale(&self, series: SeriesKind) -> Option<&ValueScaleSnapshot> {
        self.value_scales.get(series.key())
    }
}

impl<R: Renderer> TimeSeriesChart<R> {
    /// Captures the state of the latest rebuild.
    ///
    /// Fails with `InsufficientData` while nothing is drawn.
    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        let (Some(timeline), Some(context)) = (self.timeline.as_ref(), self.context.as_ref())
        else {
            return Err(ChartError::InsufficientData {
                len: self.timeline.as_ref().map_or(0, |timeline| timeline.len()),
            });
        };

        let value_scales = SeriesKind::ALL
            .into_iter()
            .map(|series| {
                let scale = context.scales.value(series);
                (
                    series.key().to_owned(),
                    ValueScaleSnapshot {
                        kind: scale.kind(),
                        domain: scale.domain(),
                        tick_count: scale.tick_count(),
                    },
                )
            })
            .collect();

        Ok(ChartSnapshot {
            mode: context.scales.mode(),
            visible_group: self.config.visible_group,
            record_count: timeline.len(),
            time_domain: context.scales.time().domain(),
            value_scales,
            focus: FocusSnapshot {
                index: context.focus.index(),
                date: context.focus.record().date,
                hovering: context.focus.is_hovering(),
            },
            redraw: self.stats,
        })
    }
}
