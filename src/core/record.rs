use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One calendar day of counters, as produced by the preprocessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub total_confirmed: u64,
    pub total_recovered: u64,
    pub total_deceased: u64,
    pub daily_confirmed: u64,
    pub daily_recovered: u64,
    pub daily_deceased: u64,
}

impl Record {
    /// Creates a record with every counter set to zero.
    #[must_use]
    pub fn zeroed(date: NaiveDate) -> Self {
        Self {
            date,
            total_confirmed: 0,
            total_recovered: 0,
            total_deceased: 0,
            daily_confirmed: 0,
            daily_recovered: 0,
            daily_deceased: 0,
        }
    }

    #[must_use]
    pub fn value(&self, series: SeriesKind) -> u64 {
        match series {
            SeriesKind::TotalConfirmed => self.total_confirmed,
            SeriesKind::TotalRecovered => self.total_recovered,
            SeriesKind::TotalDeceased => self.total_deceased,
            SeriesKind::DailyConfirmed => self.daily_confirmed,
            SeriesKind::DailyRecovered => self.daily_recovered,
            SeriesKind::DailyDeceased => self.daily_deceased,
        }
    }

    #[must_use]
    pub fn with_value(mut self, series: SeriesKind, value: u64) -> Self {
        let slot = match series {
            SeriesKind::TotalConfirmed => &mut self.total_confirmed,
            SeriesKind::TotalRecovered => &mut self.total_recovered,
            SeriesKind::TotalDeceased => &mut self.total_deceased,
            SeriesKind::DailyConfirmed => &mut self.daily_confirmed,
            SeriesKind::DailyRecovered => &mut self.daily_recovered,
            SeriesKind::DailyDeceased => &mut self.daily_deceased,
        };
        *slot = value;
        self
    }
}

/// The two panel groups; the host shows one group at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartGroup {
    /// Running totals, drawn as connected curves.
    #[default]
    Cumulative,
    /// Per-day deltas, drawn as stems.
    Daily,
}

impl ChartGroup {
    #[must_use]
    pub const fn series(self) -> [SeriesKind; 3] {
        match self {
            Self::Cumulative => [
                SeriesKind::TotalConfirmed,
                SeriesKind::TotalRecovered,
                SeriesKind::TotalDeceased,
            ],
            Self::Daily => [
                SeriesKind::DailyConfirmed,
                SeriesKind::DailyRecovered,
                SeriesKind::DailyDeceased,
            ],
        }
    }

    /// Series whose maximum drives the whole group in shared-domain mode.
    #[must_use]
    pub const fn reference_series(self) -> SeriesKind {
        match self {
            Self::Cumulative => SeriesKind::TotalConfirmed,
            Self::Daily => SeriesKind::DailyConfirmed,
        }
    }
}

/// One of the six counters; each owns a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeriesKind {
    TotalConfirmed,
    TotalRecovered,
    TotalDeceased,
    DailyConfirmed,
    DailyRecovered,
    DailyDeceased,
}

impl SeriesKind {
    /// Panel order.
    pub const ALL: [Self; 6] = [
        Self::TotalConfirmed,
        Self::TotalRecovered,
        Self::TotalDeceased,
        Self::DailyConfirmed,
        Self::DailyRecovered,
        Self::DailyDeceased,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn group(self) -> ChartGroup {
        match self {
            Self::TotalConfirmed | Self::TotalRecovered | Self::TotalDeceased => {
                ChartGroup::Cumulative
            }
            Self::DailyConfirmed | Self::DailyRecovered | Self::DailyDeceased => ChartGroup::Daily,
        }
    }

    #[must_use]
    pub const fn is_cumulative(self) -> bool {
        matches!(self.group(), ChartGroup::Cumulative)
    }

    /// Only running totals switch to a logarithmic axis in log mode.
    #[must_use]
    pub const fn supports_log_scale(self) -> bool {
        self.is_cumulative()
    }

    /// Field name used by the raw feed and by snapshots.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TotalConfirmed => "totalconfirmed",
            Self::TotalRecovered => "totalrecovered",
            Self::TotalDeceased => "totaldeceased",
            Self::DailyConfirmed => "dailyconfirmed",
            Self::DailyRecovered => "dailyrecovered",
            Self::DailyDeceased => "dailydeceased",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TotalConfirmed | Self::DailyConfirmed => "Confirmed",
            Self::TotalRecovered | Self::DailyRecovered => "Recovered",
            Self::TotalDeceased | Self::DailyDeceased => "Deceased",
        }
    }

    /// Display color as 8-bit RGB.
    #[must_use]
    pub const fn color_rgb8(self) -> (u8, u8, u8) {
        match self {
            Self::TotalConfirmed | Self::DailyConfirmed => (0xff, 0x07, 0x3a),
            Self::TotalRecovered | Self::DailyRecovered => (0x28, 0xa7, 0x45),
            Self::TotalDeceased | Self::DailyDeceased => (0x6c, 0x75, 0x7d),
        }
    }
}

/// Ordered, non-degenerate sequence of daily records.
///
/// Holds at least two records; ordering and gap filling are the
/// preprocessor's responsibility and are not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    records: Vec<Record>,
}

impl Timeline {
    pub const MIN_LEN: usize = 2;

    pub fn new(records: Vec<Record>) -> ChartResult<Self> {
        if records.len() < Self::MIN_LEN {
            return Err(ChartError::InsufficientData { len: records.len() });
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    #[must_use]
    pub fn first(&self) -> &Record {
        &self.records[0]
    }

    #[must_use]
    pub fn last(&self) -> &Record {
        &self.records[self.last_index()]
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.records.len() - 1
    }

    /// Largest value of `series` across the sequence.
    #[must_use]
    pub fn series_max(&self, series: SeriesKind) -> u64 {
        self.records
            .iter()
            .map(|record| record.value(series))
            .max()
            .unwrap_or(0)
    }
}
