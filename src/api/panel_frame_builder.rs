use crate::core::{
    CARDINAL_TENSION, Record, ScaleSet, SeriesKind, Timeline, project_cardinal_curve,
    project_stems,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PathCommand, PathPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::{PanelStyle, format_si_abbreviated};

/// Baseline offset of a label hanging below its anchor, in ems.
const HANGING_BASELINE_EM: f64 = 0.71;
/// Baseline offset of a label centred on its anchor, in ems.
const CENTERED_BASELINE_EM: f64 = 0.32;

/// Builds the complete scene of one panel.
///
/// The frame holds, in draw order: both axes, the series encoding (a
/// cardinal curve for running totals, stems for daily deltas), one dot per
/// record and the focus marker placed on `focus`.
pub fn build_panel_frame(
    series: SeriesKind,
    scales: &ScaleSet,
    timeline: &Timeline,
    focus: &Record,
    style: &PanelStyle,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(scales.geometry().viewport);

    append_time_axis(&mut frame, scales, style)?;
    append_value_axis(&mut frame, series, scales, style)?;

    let points = scales.project(series, timeline)?;
    if series.is_cumulative() {
        append_curve(&mut frame, series, &points, style)?;
    } else {
        append_stems(&mut frame, series, &points, scales, style)?;
    }

    let dot_color = PanelStyle::series_color(series);
    frame.circles.extend(
        points
            .iter()
            .map(|&(x, y)| CirclePrimitive::new(x, y, style.point_radius, dot_color)),
    );

    let (fx, fy) = scales.point(series, focus)?;
    frame.focus_marker = Some(CirclePrimitive::new(
        fx,
        fy,
        style.focus_radius,
        PanelStyle::series_color(series),
    ));

    frame.validate()?;
    Ok(frame)
}

fn append_time_axis(
    frame: &mut RenderFrame,
    scales: &ScaleSet,
    style: &PanelStyle,
) -> ChartResult<()> {
    let geometry = scales.geometry();
    let axis_y = geometry.chart_height();
    let (left, right) = geometry.x_range();
    frame.lines.push(LinePrimitive::new(
        left,
        axis_y,
        right,
        axis_y,
        style.axis_line_width,
        style.axis_color,
    ));

    let label_y = axis_y
        + style.tick_size_px
        + style.time_tick_padding_px
        + HANGING_BASELINE_EM * style.axis_font_size_px;
    let time = scales.time();
    for tick in time.ticks() {
        let x = time.date_to_pixel(tick.date)?;
        frame.lines.push(LinePrimitive::new(
            x,
            axis_y,
            x,
            axis_y + style.tick_size_px,
            style.axis_line_width,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.label,
            x,
            label_y,
            style.axis_font_size_px,
            style.axis_color,
            TextHAlign::Center,
        ));
    }
    Ok(())
}

fn append_value_axis(
    frame: &mut RenderFrame,
    series: SeriesKind,
    scales: &ScaleSet,
    style: &PanelStyle,
) -> ChartResult<()> {
    let geometry = scales.geometry();
    let axis_x = geometry.chart_width();
    let (bottom, top) = geometry.y_range();
    frame.lines.push(LinePrimitive::new(
        axis_x,
        bottom,
        axis_x,
        top,
        style.axis_line_width,
        style.axis_color,
    ));

    let scale = scales.value(series);
    let label_x = axis_x + style.tick_size_px + style.value_tick_padding_px;
    for value in scale.ticks() {
        let y = scale.value_to_pixel(value)?;
        frame.lines.push(LinePrimitive::new(
            axis_x,
            y,
            axis_x + style.tick_size_px,
            y,
            style.axis_line_width,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_si_abbreviated(value),
            label_x,
            y + CENTERED_BASELINE_EM * style.axis_font_size_px,
            style.axis_font_size_px,
            style.axis_color,
            TextHAlign::Left,
        ));
    }
    Ok(())
}

fn append_curve(
    frame: &mut RenderFrame,
    series: SeriesKind,
    points: &[(f64, f64)],
    style: &PanelStyle,
) -> ChartResult<()> {
    let &(start_x, start_y) = points.first().ok_or_else(|| {
        ChartError::InvalidData(format!("series `{}` has no points to draw", series.key()))
    })?;

    let segments = project_cardinal_curve(points, CARDINAL_TENSION)?;
    let mut commands = Vec::with_capacity(segments.len() + 1);
    commands.push(PathCommand::MoveTo {
        x: start_x,
        y: start_y,
    });
    commands.extend(segments.iter().map(|segment| PathCommand::CubicTo {
        c1x: segment.c1x,
        c1y: segment.c1y,
        c2x: segment.c2x,
        c2y: segment.c2y,
        x: segment.x1,
        y: segment.y1,
    }));

    frame.paths.push(PathPrimitive::new(
        commands,
        style.encoding_stroke_width,
        PanelStyle::encoding_color(series),
    ));
    Ok(())
}

fn append_stems(
    frame: &mut RenderFrame,
    series: SeriesKind,
    points: &[(f64, f64)],
    scales: &ScaleSet,
    style: &PanelStyle,
) -> ChartResult<()> {
    let color = PanelStyle::encoding_color(series);
    let baseline = scales.geometry().chart_height();
    for stem in project_stems(points, baseline)? {
        frame.lines.push(LinePrimitive::new(
            stem.x,
            stem.y_baseline,
            stem.x,
            stem.y_value,
            style.encoding_stroke_width,
            color,
        ));
    }
    Ok(())
}
