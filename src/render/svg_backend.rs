use std::fmt::{self, Write as _};

use crate::core::{SeriesKind, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, PathCommand, PathPrimitive, RenderFrame, Renderer, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub panels_written: usize,
    pub panels_cleared: usize,
    pub markers_moved: usize,
}

#[derive(Debug, Clone, Default)]
struct SvgPanel {
    viewport: Option<Viewport>,
    body: String,
    marker: Option<CirclePrimitive>,
}

/// Serializes each panel into a standalone SVG document.
///
/// Static primitives are written once per full render; the focus marker is
/// kept as a separate element (`id="focus-<series>"`) and rewritten alone
/// when it moves.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    panels: [SvgPanel; 6],
    stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stats(&self) -> SvgRenderStats {
        self.stats
    }

    /// Current SVG document of a panel, `None` when the panel is cleared.
    #[must_use]
    pub fn document(&self, series: SeriesKind) -> Option<String> {
        let panel = &self.panels[series.index()];
        let viewport = panel.viewport?;

        let mut svg = String::with_capacity(panel.body.len() + 512);
        write_document(&mut svg, series, viewport, panel).ok()?;
        Some(svg)
    }
}

impl Renderer for SvgRenderer {
    fn render_panel(&mut self, series: SeriesKind, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut body = String::new();
        write_body(&mut body, frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg panel: {err}")))?;

        self.panels[series.index()] = SvgPanel {
            viewport: Some(frame.viewport),
            body,
            marker: frame.focus_marker,
        };
        self.stats.panels_written += 1;
        Ok(())
    }

    fn clear_panel(&mut self, series: SeriesKind) -> ChartResult<()> {
        self.panels[series.index()] = SvgPanel::default();
        self.stats.panels_cleared += 1;
        Ok(())
    }

    fn move_focus_marker(
        &mut self,
        series: SeriesKind,
        marker: CirclePrimitive,
    ) -> ChartResult<()> {
        marker.validate()?;
        let panel = &mut self.panels[series.index()];
        if panel.viewport.is_none() {
            return Err(ChartError::InvalidData(format!(
                "svg panel `{}` has not been rendered",
                series.key()
            )));
        }
        panel.marker = Some(marker);
        self.stats.markers_moved += 1;
        Ok(())
    }
}

fn write_document(
    svg: &mut String,
    series: SeriesKind,
    viewport: Viewport,
    panel: &SvgPanel,
) -> fmt::Result {
    writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}' preserveAspectRatio='xMidYMid meet' data-series='{key}'>",
        w = viewport.width,
        h = viewport.height,
        key = series.key()
    )?;
    svg.push_str(&panel.body);
    if let Some(marker) = panel.marker {
        write_circle(svg, marker, Some(series))?;
    }
    svg.push_str("</svg>\n");
    Ok(())
}

fn write_body(body: &mut String, frame: &RenderFrame) -> fmt::Result {
    for line in &frame.lines {
        writeln!(
            body,
            "  <line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='{}' stroke-opacity='{:.3}' stroke-width='{}'/>",
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            line.color.to_hex(),
            line.color.alpha,
            line.stroke_width
        )?;
    }
    for path in &frame.paths {
        write_path(body, path)?;
    }
    for circle in &frame.circles {
        write_circle(body, *circle, None)?;
    }
    for text in &frame.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        writeln!(
            body,
            "  <text x='{:.2}' y='{:.2}' font-size='{}' font-family='sans-serif' text-anchor='{anchor}' fill='{}'>{}</text>",
            text.x,
            text.y,
            text.font_size_px,
            text.color.to_hex(),
            escape_text(&text.text)
        )?;
    }
    Ok(())
}

fn write_path(svg: &mut String, path: &PathPrimitive) -> fmt::Result {
    let mut data = String::new();
    for command in &path.commands {
        match *command {
            PathCommand::MoveTo { x, y } => write!(data, "M{x:.2},{y:.2}")?,
            PathCommand::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => write!(
                data,
                "C{c1x:.2},{c1y:.2},{c2x:.2},{c2y:.2},{x:.2},{y:.2}"
            )?,
        }
    }
    writeln!(
        svg,
        "  <path d='{data}' fill='none' stroke='{}' stroke-opacity='{:.3}' stroke-width='{}'/>",
        path.color.to_hex(),
        path.color.alpha,
        path.stroke_width
    )
}

fn write_circle(
    svg: &mut String,
    circle: CirclePrimitive,
    focus_of: Option<SeriesKind>,
) -> fmt::Result {
    let id = focus_of
        .map(|series| format!(" id='focus-{}'", series.key()))
        .unwrap_or_default();
    writeln!(
        svg,
        "  <circle{id} cx='{:.2}' cy='{:.2}' r='{}' fill='{}' fill-opacity='{:.3}' stroke='{}'/>",
        circle.cx,
        circle.cy,
        circle.radius,
        circle.fill.to_hex(),
        circle.fill.alpha,
        circle.stroke.to_hex()
    )
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
}
