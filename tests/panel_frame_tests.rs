use approx::assert_relative_eq;
use chrono::NaiveDate;
use timeseries_chart::api::{ENCODING_ALPHA, PanelStyle, build_panel_frame};
use timeseries_chart::core::{Mode, PanelGeometry, Record, ScaleSet, SeriesKind, Timeline};
use timeseries_chart::render::{Color, PathCommand, TextHAlign};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn timeline() -> Timeline {
    let records = (0..6u64)
        .map(|i| Record {
            date: day(2020, 5, 10 + i as u32),
            total_confirmed: 2_000 * (i + 1),
            total_recovered: 500 * i,
            total_deceased: 40 * i,
            daily_confirmed: 2_000,
            daily_recovered: if i == 0 { 0 } else { 500 },
            daily_deceased: 40,
        })
        .collect();
    Timeline::new(records).expect("valid timeline")
}

fn scales(timeline: &Timeline) -> ScaleSet {
    ScaleSet::build(timeline, Mode::default(), PanelGeometry::STANDARD).expect("scales")
}

#[test]
fn cumulative_panels_draw_one_cardinal_curve_through_every_record() {
    let timeline = timeline();
    let scales = scales(&timeline);
    let frame = build_panel_frame(
        SeriesKind::TotalConfirmed,
        &scales,
        &timeline,
        timeline.last(),
        &PanelStyle::default(),
    )
    .expect("frame");

    assert_eq!(frame.paths.len(), 1);
    let path = &frame.paths[0];
    assert_eq!(path.commands.len(), timeline.len());
    assert_eq!(path.stroke_width, 5.0);
    assert_relative_eq!(path.color.alpha, ENCODING_ALPHA);
    assert_eq!(path.color.to_hex(), "#ff073a");

    let points = scales
        .project(SeriesKind::TotalConfirmed, &timeline)
        .expect("points");
    match path.commands[0] {
        PathCommand::MoveTo { x, y } => {
            assert_relative_eq!(x, points[0].0);
            assert_relative_eq!(y, points[0].1);
        }
        other => panic!("expected move command, got {other:?}"),
    }
    for (command, point) in path.commands[1..].iter().zip(&points[1..]) {
        match *command {
            PathCommand::CubicTo { x, y, .. } => {
                assert_relative_eq!(x, point.0);
                assert_relative_eq!(y, point.1);
            }
            other => panic!("expected cubic command, got {other:?}"),
        }
    }

    assert_eq!(frame.circles.len(), timeline.len());
    assert!(frame.circles.iter().all(|dot| dot.radius == 3.0));
    assert!(frame.circles.iter().all(|dot| dot.fill.alpha == 1.0));
    assert!(frame.circles.iter().all(|dot| dot.fill.to_hex() == "#ff073a"));
}

#[test]
fn daily_panels_draw_stems_from_the_baseline_without_a_curve() {
    let timeline = timeline();
    let scales = scales(&timeline);
    let frame = build_panel_frame(
        SeriesKind::DailyRecovered,
        &scales,
        &timeline,
        timeline.last(),
        &PanelStyle::default(),
    )
    .expect("frame");

    assert!(frame.paths.is_empty());
    let stems: Vec<_> = frame
        .lines
        .iter()
        .filter(|line| line.stroke_width == 5.0)
        .collect();
    assert_eq!(stems.len(), timeline.len());
    for (stem, record) in stems.iter().zip(timeline.records()) {
        assert_eq!(stem.x1, stem.x2);
        assert_eq!(stem.y1, 140.0);
        let expected = scales
            .y(SeriesKind::DailyRecovered, record)
            .expect("value y");
        assert_relative_eq!(stem.y2, expected);
        assert_eq!(stem.color.to_hex(), "#28a745");
    }
    // A zero day collapses onto the baseline.
    assert_eq!(stems[0].y2, 140.0);
}

#[test]
fn focus_marker_is_larger_and_fully_opaque() {
    let timeline = timeline();
    let scales = scales(&timeline);
    let focus = timeline.get(2).expect("record");
    let frame = build_panel_frame(
        SeriesKind::TotalDeceased,
        &scales,
        &timeline,
        focus,
        &PanelStyle::default(),
    )
    .expect("frame");

    let marker = frame.focus_marker.expect("focus marker");
    let (x, y) = scales
        .point(SeriesKind::TotalDeceased, focus)
        .expect("point");
    assert_relative_eq!(marker.cx, x);
    assert_relative_eq!(marker.cy, y);
    assert_eq!(marker.radius, 5.0);
    assert_eq!(marker.fill, Color::from_rgb8(0x6c, 0x75, 0x7d));
}

#[test]
fn value_axis_labels_sit_right_of_the_plot_with_si_text() {
    let timeline = timeline();
    let scales = scales(&timeline);
    let frame = build_panel_frame(
        SeriesKind::TotalConfirmed,
        &scales,
        &timeline,
        timeline.last(),
        &PanelStyle::default(),
    )
    .expect("frame");

    let value_labels: Vec<_> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Left)
        .collect();
    assert!(!value_labels.is_empty());
    assert!(value_labels.iter().all(|text| text.x == 616.0));
    assert!(value_labels.iter().any(|text| text.text == "0"));
    assert!(value_labels.iter().any(|text| text.text.ends_with('k')));

    let time_labels: Vec<_> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .collect();
    assert_eq!(time_labels.len(), scales.time().ticks().len());
    assert!(time_labels.iter().all(|text| text.y > 140.0));
}

#[test]
fn frames_use_the_fixed_panel_viewport() {
    let timeline = timeline();
    let scales = scales(&timeline);
    for series in SeriesKind::ALL {
        let frame = build_panel_frame(
            series,
            &scales,
            &timeline,
            timeline.last(),
            &PanelStyle::default(),
        )
        .expect("frame");
        assert_eq!(frame.viewport.width, 650);
        assert_eq!(frame.viewport.height, 200);
        frame.validate().expect("valid frame");
    }
}
