use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PanelGeometry, Timeline};
use crate::error::{ChartError, ChartResult};

/// Approximate number of ticks requested from the time axis.
pub const TIME_AXIS_TARGET_TICKS: usize = 10;

/// Calendar interval between time-axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeTickCadence {
    Day,
    TwoDays,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeTickCadence {
    const ORDERED: [Self; 6] = [
        Self::Day,
        Self::TwoDays,
        Self::Week,
        Self::Month,
        Self::Quarter,
        Self::Year,
    ];

    const fn approx_days(self) -> f64 {
        match self {
            Self::Day => 1.0,
            Self::TwoDays => 2.0,
            Self::Week => 7.0,
            Self::Month => 30.0,
            Self::Quarter => 90.0,
            Self::Year => 365.0,
        }
    }

    /// Picks the cadence whose length is closest (in ratio) to `span / target`.
    #[must_use]
    pub fn for_span(span_days: f64, target_ticks: usize) -> Self {
        let target = span_days / target_ticks.max(1) as f64;
        match Self::ORDERED
            .iter()
            .position(|cadence| cadence.approx_days() >= target)
        {
            None => Self::Year,
            Some(0) => Self::Day,
            Some(position) => {
                let shorter = Self::ORDERED[position - 1];
                let longer = Self::ORDERED[position];
                if target / shorter.approx_days() < longer.approx_days() / target {
                    shorter
                } else {
                    longer
                }
            }
        }
    }

    #[must_use]
    pub fn includes(self, date: NaiveDate) -> bool {
        match self {
            Self::Day => true,
            Self::TwoDays => date.day0() % 2 == 0,
            Self::Week => date.weekday() == Weekday::Sun,
            Self::Month => date.day() == 1,
            Self::Quarter => date.day() == 1 && date.month0() % 3 == 0,
            Self::Year => date.day() == 1 && date.month() == 1,
        }
    }
}

/// One labelled tick on the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTick {
    pub date: NaiveDate,
    pub label: String,
}

/// Date axis shared by all six panels.
///
/// The domain is padded by one day on each side of the data so endpoint
/// markers never touch the panel edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    pub const PADDING_DAYS: u64 = 1;

    /// Creates a scale over `[start, end]` mapped onto `range`.
    pub fn new(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> ChartResult<Self> {
        if start >= end {
            return Err(ChartError::InvalidData(
                "time scale start must precede its end".to_owned(),
            ));
        }

        let linear = LinearScale::new(date_to_day_number(start), date_to_day_number(end))?
            .with_range(range.0, range.1)?;
        Ok(Self { start, end, linear })
    }

    /// Fits the padded date domain of `timeline` onto the panel's horizontal extent.
    pub fn from_timeline(timeline: &Timeline, geometry: PanelGeometry) -> ChartResult<Self> {
        let padding = Days::new(Self::PADDING_DAYS);
        let start = timeline
            .first()
            .date
            .checked_sub_days(padding)
            .ok_or_else(|| ChartError::InvalidData("first date out of range".to_owned()))?;
        let end = timeline
            .last()
            .date
            .checked_add_days(padding)
            .ok_or_else(|| ChartError::InvalidData("last date out of range".to_owned()))?;

        Self::new(start, end, geometry.x_range())
    }

    #[must_use]
    pub fn domain(self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn span_days(self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn date_to_pixel(self, date: NaiveDate) -> ChartResult<f64> {
        self.linear.map(date_to_day_number(date))
    }

    /// Maps a pixel back to the nearest calendar day.
    pub fn pixel_to_date(self, pixel: f64) -> ChartResult<NaiveDate> {
        let day = self.linear.invert(pixel)?.round();
        day_number_to_date(day)
            .ok_or_else(|| ChartError::InvalidData("pixel maps outside the calendar".to_owned()))
    }

    #[must_use]
    pub fn cadence(self) -> TimeTickCadence {
        TimeTickCadence::for_span(self.span_days() as f64, TIME_AXIS_TARGET_TICKS)
    }

    /// Calendar-aligned ticks inside the domain, labelled for the axis.
    #[must_use]
    pub fn ticks(self) -> Vec<TimeTick> {
        let cadence = self.cadence();
        self.start
            .iter_days()
            .take_while(|date| *date <= self.end)
            .filter(|date| cadence.includes(*date))
            .map(|date| TimeTick {
                date,
                label: format_time_tick(date),
            })
            .collect()
    }
}

#[must_use]
pub fn date_to_day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

#[must_use]
pub fn day_number_to_date(day: f64) -> Option<NaiveDate> {
    if !day.is_finite() || day < f64::from(i32::MIN) || day > f64::from(i32::MAX) {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(day as i32)
}

fn format_time_tick(date: NaiveDate) -> String {
    if date.day() == 1 && date.month() == 1 {
        date.format("%Y").to_string()
    } else if date.day() == 1 {
        date.format("%B").to_string()
    } else if date.weekday() == Weekday::Sun {
        date.format("%b %d").to_string()
    } else {
        date.format("%a %d").to_string()
    }
}
