use chrono::NaiveDate;
use timeseries_chart::api::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1,
};
use timeseries_chart::core::{Record, SeriesKind, ValueScaleKind};
use timeseries_chart::render::NullRenderer;
use timeseries_chart::{ChartError, HostConfig, TimeSeriesChart};

fn records() -> Vec<Record> {
    let start = NaiveDate::from_ymd_opt(2020, 7, 1).expect("valid date");
    start
        .iter_days()
        .take(5)
        .enumerate()
        .map(|(i, date)| {
            let i = i as u64;
            Record {
                date,
                total_confirmed: 500 + 100 * i,
                total_recovered: 200 + 50 * i,
                total_deceased: 10 + i,
                daily_confirmed: 100,
                daily_recovered: 50,
                daily_deceased: 1,
            }
        })
        .collect()
}

fn drawn_chart() -> TimeSeriesChart<NullRenderer> {
    let mut chart = TimeSeriesChart::new(NullRenderer::default(), HostConfig::default());
    chart.set_records(records()).expect("set records");
    chart
}

#[test]
fn snapshot_before_data_is_insufficient() {
    let chart = TimeSeriesChart::new(NullRenderer::default(), HostConfig::default());
    let err = chart.snapshot().expect_err("nothing drawn");
    assert!(err.is_insufficient_data());
    assert!(chart.snapshot_json_contract_v1_pretty().is_err());
}

#[test]
fn snapshot_records_scales_in_panel_order() {
    let snapshot = drawn_chart().snapshot().expect("snapshot");
    assert_eq!(snapshot.record_count, 5);
    let keys: Vec<_> = snapshot.value_scales.keys().map(String::as_str).collect();
    let expected: Vec<_> = SeriesKind::ALL.iter().map(|series| series.key()).collect();
    assert_eq!(keys, expected);

    let confirmed = snapshot
        .value_scale(SeriesKind::TotalConfirmed)
        .expect("confirmed scale");
    assert_eq!(confirmed.kind, ValueScaleKind::Linear);
    assert_eq!(confirmed.domain.0, 0.0);
    assert_eq!(snapshot.focus.index, 4);
    assert!(!snapshot.focus.hovering);
    assert_eq!(
        snapshot.time_domain.0,
        NaiveDate::from_ymd_opt(2020, 6, 30).expect("valid date")
    );
    assert_eq!(snapshot.redraw.rebuilds, 1);
}

#[test]
fn versioned_payload_round_trips() {
    let chart = drawn_chart();
    let json = chart
        .snapshot_json_contract_v1_pretty()
        .expect("contract json");
    let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(&json).expect("payload");
    assert_eq!(payload.schema_version, CHART_SNAPSHOT_JSON_SCHEMA_V1);

    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, chart.snapshot().expect("snapshot"));
}

#[test]
fn bare_snapshot_json_is_still_accepted() {
    let snapshot = drawn_chart().snapshot().expect("snapshot");
    let json = snapshot.to_json_pretty().expect("bare json");
    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse bare");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = drawn_chart().snapshot().expect("snapshot");
    let payload = ChartSnapshotJsonContractV1 {
        schema_version: 2,
        snapshot,
    };
    let json = serde_json::to_string(&payload).expect("json");
    let err = ChartSnapshot::from_json_compat_str(&json).expect_err("version 2");
    match err {
        ChartError::InvalidData(message) => assert!(message.contains("version: 2")),
        other => panic!("unexpected error: {other}"),
    }
}
