use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Record, SeriesKind};
use crate::error::{ChartError, ChartResult};

/// Turns raw feed data into date-ordered daily records.
///
/// Implementations must be pure: the same input always yields the same
/// records, sorted ascending by date, with every counter populated.
pub trait Preprocessor {
    type Raw: ?Sized;

    fn preprocess(&self, raw: &Self::Raw) -> ChartResult<Vec<Record>>;
}

/// Counter cell as it appears in a feed: usually a string, sometimes a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCounter {
    Number(u64),
    Text(String),
}

/// One row of the daily case-series feed.
///
/// Dates carry no year (`"30 January "`); counters are strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RawDailyRow {
    pub date: String,
    #[serde(default)]
    pub totalconfirmed: Option<RawCounter>,
    #[serde(default)]
    pub totalrecovered: Option<RawCounter>,
    #[serde(default)]
    pub totaldeceased: Option<RawCounter>,
    #[serde(default)]
    pub dailyconfirmed: Option<RawCounter>,
    #[serde(default)]
    pub dailyrecovered: Option<RawCounter>,
    #[serde(default)]
    pub dailydeceased: Option<RawCounter>,
}

impl RawDailyRow {
    fn counter(&self, series: SeriesKind) -> Option<&RawCounter> {
        match series {
            SeriesKind::TotalConfirmed => self.totalconfirmed.as_ref(),
            SeriesKind::TotalRecovered => self.totalrecovered.as_ref(),
            SeriesKind::TotalDeceased => self.totaldeceased.as_ref(),
            SeriesKind::DailyConfirmed => self.dailyconfirmed.as_ref(),
            SeriesKind::DailyRecovered => self.dailyrecovered.as_ref(),
            SeriesKind::DailyDeceased => self.dailydeceased.as_ref(),
        }
    }
}

/// Reference preprocessor for the daily case-series feed.
///
/// Appends `year` to each day-and-month date, treats empty or missing
/// counters as zero and sorts the result by date. Counters that are present
/// but not non-negative integers, unparsable dates and repeated dates are
/// rejected as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeriesPreprocessor {
    pub year: i32,
}

impl DailySeriesPreprocessor {
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self { year }
    }

    /// Parses a JSON array of feed rows and normalizes it.
    pub fn preprocess_json(&self, json: &str) -> ChartResult<Vec<Record>> {
        let rows: Vec<RawDailyRow> = serde_json::from_str(json).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse daily series json: {e}"))
        })?;
        self.preprocess(rows.as_slice())
    }

    fn parse_date(&self, index: usize, raw: &str) -> ChartResult<NaiveDate> {
        let text = format!("{} {}", raw.trim(), self.year);
        NaiveDate::parse_from_str(&text, "%d %B %Y").map_err(|_| ChartError::MalformedRecord {
            index,
            field: "date",
            value: raw.to_owned(),
        })
    }
}

impl Preprocessor for DailySeriesPreprocessor {
    type Raw = [RawDailyRow];

    fn preprocess(&self, raw: &[RawDailyRow]) -> ChartResult<Vec<Record>> {
        let mut indexed = Vec::with_capacity(raw.len());
        for (index, row) in raw.iter().enumerate() {
            let mut record = Record::zeroed(self.parse_date(index, &row.date)?);
            for series in SeriesKind::ALL {
                let value = parse_counter(index, series, row.counter(series))?;
                record = record.with_value(series, value);
            }
            indexed.push((index, record));
        }

        indexed.sort_by_key(|(_, record)| record.date);
        if let Some(pair) = indexed.windows(2).find(|pair| pair[0].1.date == pair[1].1.date) {
            let (index, _) = pair[1];
            return Err(ChartError::MalformedRecord {
                index,
                field: "date",
                value: raw[index].date.clone(),
            });
        }

        debug!(rows = raw.len(), year = self.year, "daily series preprocessed");
        Ok(indexed.into_iter().map(|(_, record)| record).collect())
    }
}

fn parse_counter(
    index: usize,
    series: SeriesKind,
    counter: Option<&RawCounter>,
) -> ChartResult<u64> {
    match counter {
        None => Ok(0),
        Some(RawCounter::Number(value)) => Ok(*value),
        Some(RawCounter::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed.parse().map_err(|_| ChartError::MalformedRecord {
                index,
                field: series.key(),
                value: text.clone(),
            })
        }
    }
}
