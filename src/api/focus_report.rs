use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{Record, SeriesKind, Timeline};
use crate::interaction::FocusState;
use crate::render::Renderer;

use super::TimeSeriesChart;

/// Focused value of one series with its change from the previous day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesReading {
    pub series: SeriesKind,
    pub value: u64,
    /// `None` on the first record, which has no previous day.
    pub delta: Option<i64>,
}

/// Everything the display layer needs to label the focused day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusReport {
    pub index: usize,
    pub record: Record,
    pub hovering: bool,
    pub is_latest_day: bool,
    pub readings: Vec<SeriesReading>,
}

impl FocusReport {
    #[must_use]
    pub fn new(timeline: &Timeline, focus: &FocusState, today: NaiveDate) -> Self {
        let index = focus.index();
        let record = *focus.record();
        let previous = index
            .checked_sub(1)
            .and_then(|previous| timeline.get(previous));

        let readings = SeriesKind::ALL
            .into_iter()
            .map(|series| SeriesReading {
                series,
                value: record.value(series),
                delta: previous.map(|previous| day_delta(record.value(series), previous.value(series))),
            })
            .collect();

        Self {
            index,
            record,
            hovering: focus.is_hovering(),
            is_latest_day: is_latest_day(record.date, today),
            readings,
        }
    }

    /// Heading for the focused day, e.g. `"30 January"` or
    /// `"30 January Yesterday"`.
    #[must_use]
    pub fn date_label(&self) -> String {
        let date = self.record.date.format("%-d %B");
        if self.is_latest_day {
            format!("{date} Yesterday")
        } else {
            date.to_string()
        }
    }

    #[must_use]
    pub fn reading(&self, series: SeriesKind) -> Option<SeriesReading> {
        self.readings
            .iter()
            .copied()
            .find(|reading| reading.series == series)
    }
}

/// Whether `date` is the day before `today`, the newest day a feed reports.
#[must_use]
pub fn is_latest_day(date: NaiveDate, today: NaiveDate) -> bool {
    today.pred_opt() == Some(date)
}

fn day_delta(current: u64, previous: u64) -> i64 {
    let delta = i128::from(current) - i128::from(previous);
    i64::try_from(delta).unwrap_or(if delta > 0 { i64::MAX } else { i64::MIN })
}

impl<R: Renderer> TimeSeriesChart<R> {
    /// Report for the current focus, judged against `today`.
    #[must_use]
    pub fn focus_report(&self, today: NaiveDate) -> Option<FocusReport> {
        let timeline = self.timeline.as_ref()?;
        let focus = self.focus_state()?;
        Some(FocusReport::new(timeline, focus, today))
    }

    /// Report for the current focus, judged against the local calendar.
    #[must_use]
    pub fn focus_report_now(&self) -> Option<FocusReport> {
        self.focus_report(Local::now().date_naive())
    }
}
