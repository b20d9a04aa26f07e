use approx::assert_relative_eq;
use chrono::NaiveDate;
use timeseries_chart::core::{PanelGeometry, Record, SeriesKind};
use timeseries_chart::interaction::{IndexScale, PointerEvent};
use timeseries_chart::render::NullRenderer;
use timeseries_chart::{HostConfig, TimeSeriesChart};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn ten_days() -> Vec<Record> {
    (0..10u64)
        .map(|i| Record {
            date: day(2020, 3, 1 + i as u32),
            total_confirmed: 500 * (i + 1) * (i + 1),
            total_recovered: 100 * i * i,
            total_deceased: 10 * i,
            daily_confirmed: 100 * (i + 1),
            daily_recovered: 20 * i,
            daily_deceased: i,
        })
        .collect()
}

fn ready_chart() -> TimeSeriesChart<NullRenderer> {
    let mut chart = TimeSeriesChart::new(NullRenderer::default(), HostConfig::default());
    chart.set_records(ten_days()).expect("set records");
    chart
}

#[test]
fn index_scale_spreads_records_evenly() {
    let scale = IndexScale::new(10, PanelGeometry::STANDARD).expect("index scale");
    assert_relative_eq!(scale.index_to_pixel(0).expect("first"), 20.0);
    assert_relative_eq!(scale.index_to_pixel(4).expect("fifth"), 254.0);
    assert_relative_eq!(scale.index_to_pixel(10).expect("end"), 605.0);

    assert_eq!(scale.index_at(254.0), Some(4));
    assert_eq!(scale.index_at(254.0 + 29.0), Some(4));
    assert_eq!(scale.index_at(254.0 - 29.0), Some(4));
    assert_eq!(scale.index_at(20.0), Some(0));
}

#[test]
fn index_scale_ignores_positions_outside_the_records() {
    let scale = IndexScale::new(10, PanelGeometry::STANDARD).expect("index scale");
    // 9.74 rounds to 10, one past the last record.
    assert_eq!(scale.index_at(590.0), None);
    assert_eq!(scale.index_at(605.0), None);
    // -0.51 rounds away from zero to -1.
    assert_eq!(scale.index_at(-10.0), None);
    // -0.34 rounds to zero and still hits the first record.
    assert_eq!(scale.index_at(0.0), Some(0));
    assert_eq!(scale.index_at(f64::NAN), None);
    assert!(IndexScale::new(0, PanelGeometry::STANDARD).is_err());
}

#[test]
fn pointer_move_focuses_the_same_record_on_all_panels() {
    let mut chart = ready_chart();
    let rebuilds_before = chart.redraw_stats().rebuilds;

    let moved = chart
        .handle_pointer(PointerEvent::MouseMove { x: 254.0 })
        .expect("pointer move");
    assert!(moved);

    let focus = chart.focus_state().expect("focus");
    assert_eq!(focus.index(), 4);
    assert!(focus.is_hovering());
    assert_eq!(focus.record().date, day(2020, 3, 5));

    let scales = chart.scales().expect("scales");
    let record = *focus.record();
    for series in SeriesKind::ALL {
        let (x, y) = scales.point(series, &record).expect("point");
        let marker = chart
            .panel_frame(series)
            .and_then(|frame| frame.focus_marker)
            .expect("focus marker");
        assert_relative_eq!(marker.cx, x, epsilon = 1e-9);
        assert_relative_eq!(marker.cy, y, epsilon = 1e-9);
    }

    assert_eq!(chart.renderer().focus_moves, 6);
    assert_eq!(chart.redraw_stats().rebuilds, rebuilds_before);
}

#[test]
fn focus_marker_lands_on_the_hovered_date() {
    let mut chart = ready_chart();
    chart.pointer_move(254.0).expect("pointer move");

    let marker = chart
        .panel_frame(SeriesKind::TotalConfirmed)
        .and_then(|frame| frame.focus_marker)
        .expect("focus marker");
    // 2020-03-05 is five days into the padded eleven-day domain.
    assert_relative_eq!(marker.cx, 20.0 + 585.0 * 5.0 / 11.0, epsilon = 1e-9);
}

#[test]
fn touch_moves_behave_like_mouse_moves() {
    let mut chart = ready_chart();
    chart
        .handle_pointer(PointerEvent::TouchMove { x: 78.5 })
        .expect("touch move");
    let focus = chart.focus_state().expect("focus");
    assert_eq!(focus.index(), 1);
    assert!(focus.is_hovering());
}

#[test]
fn out_of_range_pointer_leaves_focus_untouched() {
    let mut chart = ready_chart();
    chart.pointer_move(254.0).expect("pointer move");
    let before = *chart.focus_state().expect("focus");
    let moves_before = chart.renderer().focus_moves;

    let moved = chart.pointer_move(620.0).expect("pointer move");
    assert!(!moved);
    assert_eq!(*chart.focus_state().expect("focus"), before);
    assert_eq!(chart.renderer().focus_moves, moves_before);
}

#[test]
fn pointer_out_resets_to_latest_day() {
    let mut chart = ready_chart();
    chart.pointer_move(254.0).expect("pointer move");

    let reset = chart
        .handle_pointer(PointerEvent::MouseOut)
        .expect("pointer out");
    assert!(reset);

    let focus = chart.focus_state().expect("focus");
    assert_eq!(focus.index(), 9);
    assert!(!focus.is_hovering());
    assert_eq!(focus.record().date, day(2020, 3, 10));

    let scales = chart.scales().expect("scales");
    let (x, y) = scales
        .point(SeriesKind::DailyDeceased, focus.record())
        .expect("point");
    let marker = chart
        .panel_frame(SeriesKind::DailyDeceased)
        .and_then(|frame| frame.focus_marker)
        .expect("marker");
    assert_relative_eq!(marker.cx, x, epsilon = 1e-9);
    assert_relative_eq!(marker.cy, y, epsilon = 1e-9);

    chart
        .handle_pointer(PointerEvent::TouchEnd)
        .expect("touch end");
    assert_eq!(chart.focus_state().expect("focus").index(), 9);
}

#[test]
fn pointer_events_before_data_are_ignored() {
    let mut chart = TimeSeriesChart::new(NullRenderer::default(), HostConfig::default());
    assert!(!chart.pointer_move(254.0).expect("pointer move"));
    assert!(!chart.pointer_out().expect("pointer out"));
    assert!(chart.focus_state().is_none());
    assert_eq!(chart.renderer().focus_moves, 0);
}
