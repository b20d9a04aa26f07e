use chrono::NaiveDate;
use timeseries_chart::ChartError;
use timeseries_chart::core::SeriesKind;
use timeseries_chart::extensions::{
    DailySeriesPreprocessor, Preprocessor, RawCounter, RawDailyRow,
};
use timeseries_chart::render::NullRenderer;
use timeseries_chart::api::RedrawOutcome;
use timeseries_chart::{HostConfig, TimeSeriesChart};

const FEED: &str = r#"[
  {"date": "31 January ", "totalconfirmed": "1", "totalrecovered": "0", "totaldeceased": "0",
   "dailyconfirmed": "0", "dailyrecovered": "0", "dailydeceased": "0"},
  {"date": "30 January ", "totalconfirmed": "1", "totalrecovered": "0", "totaldeceased": "0",
   "dailyconfirmed": "1", "dailyrecovered": "0", "dailydeceased": "0"},
  {"date": "01 February ", "totalconfirmed": "1", "totalrecovered": "", "totaldeceased": "0",
   "dailyconfirmed": "0", "dailyrecovered": "0"},
  {"date": "02 February ", "totalconfirmed": 2, "totalrecovered": "0", "totaldeceased": "0",
   "dailyconfirmed": "1", "dailyrecovered": "0", "dailydeceased": "0"}
]"#;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn feed_rows_become_sorted_records_with_zero_defaults() {
    let records = DailySeriesPreprocessor::new(2020)
        .preprocess_json(FEED)
        .expect("preprocess");

    let dates: Vec<_> = records.iter().map(|record| record.date).collect();
    assert_eq!(
        dates,
        [
            day(2020, 1, 30),
            day(2020, 1, 31),
            day(2020, 2, 1),
            day(2020, 2, 2)
        ]
    );
    assert_eq!(records[0].daily_confirmed, 1);
    assert_eq!(records[2].total_recovered, 0);
    assert_eq!(records[2].daily_deceased, 0);
    assert_eq!(records[3].value(SeriesKind::TotalConfirmed), 2);
}

#[test]
fn unparsable_counters_are_malformed_records() {
    let rows = vec![
        RawDailyRow {
            date: "30 January ".to_owned(),
            ..RawDailyRow::default()
        },
        RawDailyRow {
            date: "31 January ".to_owned(),
            totaldeceased: Some(RawCounter::Text("n/a".to_owned())),
            ..RawDailyRow::default()
        },
    ];
    let err = DailySeriesPreprocessor::new(2020)
        .preprocess(rows.as_slice())
        .expect_err("malformed counter");
    match err {
        ChartError::MalformedRecord {
            index,
            field,
            value,
        } => {
            assert_eq!(index, 1);
            assert_eq!(field, "totaldeceased");
            assert_eq!(value, "n/a");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unparsable_and_repeated_dates_are_malformed_records() {
    let bad_date = vec![RawDailyRow {
        date: "31 Smarch ".to_owned(),
        ..RawDailyRow::default()
    }];
    let err = DailySeriesPreprocessor::new(2020)
        .preprocess(bad_date.as_slice())
        .expect_err("bad date");
    assert!(matches!(
        err,
        ChartError::MalformedRecord { index: 0, field: "date", .. }
    ));

    let repeated = vec![
        RawDailyRow {
            date: "30 January ".to_owned(),
            ..RawDailyRow::default()
        },
        RawDailyRow {
            date: "30 January".to_owned(),
            ..RawDailyRow::default()
        },
    ];
    let err = DailySeriesPreprocessor::new(2020)
        .preprocess(repeated.as_slice())
        .expect_err("repeated date");
    assert!(matches!(
        err,
        ChartError::MalformedRecord { index: 1, field: "date", .. }
    ));
}

#[test]
fn year_suffix_is_configurable() {
    let records = DailySeriesPreprocessor::new(2021)
        .preprocess_json(FEED)
        .expect("preprocess");
    assert_eq!(records[0].date, day(2021, 1, 30));
}

#[test]
fn invalid_json_is_invalid_data() {
    let err = DailySeriesPreprocessor::new(2020)
        .preprocess_json("{not json")
        .expect_err("invalid json");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn chart_loads_through_a_preprocessor() {
    let rows: Vec<RawDailyRow> = serde_json::from_str(FEED).expect("rows");
    let mut chart = TimeSeriesChart::new(NullRenderer::default(), HostConfig::default());
    let outcome = chart
        .load_with(&DailySeriesPreprocessor::new(2020), rows.as_slice())
        .expect("load");
    assert_eq!(outcome, RedrawOutcome::Rebuilt);
    assert_eq!(chart.timeline().expect("timeline").len(), 4);
}
