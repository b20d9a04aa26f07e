use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;
use std::io::Write;

use crate::core::SeriesKind;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, Color, PathCommand, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

#[derive(Debug)]
struct CairoPanel {
    surface: ImageSurface,
    frame: RenderFrame,
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Each panel owns an offscreen image surface sized to its viewport. The last
/// frame is retained so a focus move only repaints the affected panel.
#[derive(Debug)]
pub struct CairoRenderer {
    panels: [Option<CairoPanel>; 6],
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl Default for CairoRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CairoRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            panels: Default::default(),
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    /// Surface of a drawn panel.
    #[must_use]
    pub fn surface(&self, series: SeriesKind) -> Option<&ImageSurface> {
        self.panels[series.index()]
            .as_ref()
            .map(|panel| &panel.surface)
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes a drawn panel as PNG.
    pub fn write_png<W: Write>(&self, series: SeriesKind, writer: &mut W) -> ChartResult<()> {
        let panel = self.panels[series.index()].as_ref().ok_or_else(|| {
            ChartError::InvalidData(format!(
                "cairo panel `{}` has not been rendered",
                series.key()
            ))
        })?;
        panel
            .surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn paint(&mut self, series: SeriesKind) -> ChartResult<()> {
        let clear_color = self.clear_color;
        let Some(panel) = self.panels[series.index()].as_ref() else {
            return Ok(());
        };
        let context = Context::new(&panel.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.last_stats = paint_frame(&context, &panel.frame, clear_color)?;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render_panel(&mut self, series: SeriesKind, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        let width = i32::try_from(frame.viewport.width).map_err(|_| {
            ChartError::InvalidViewport {
                width: frame.viewport.width,
                height: frame.viewport.height,
            }
        })?;
        let height = i32::try_from(frame.viewport.height).map_err(|_| {
            ChartError::InvalidViewport {
                width: frame.viewport.width,
                height: frame.viewport.height,
            }
        })?;

        let slot = &mut self.panels[series.index()];
        let reuse = slot
            .as_ref()
            .is_some_and(|panel| panel.surface.width() == width && panel.surface.height() == height);
        if reuse {
            if let Some(panel) = slot.as_mut() {
                panel.frame = frame.clone();
            }
        } else {
            let surface = ImageSurface::create(Format::ARgb32, width, height)
                .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
            *slot = Some(CairoPanel {
                surface,
                frame: frame.clone(),
            });
        }

        self.paint(series)
    }

    fn clear_panel(&mut self, series: SeriesKind) -> ChartResult<()> {
        self.panels[series.index()] = None;
        Ok(())
    }

    fn move_focus_marker(
        &mut self,
        series: SeriesKind,
        marker: CirclePrimitive,
    ) -> ChartResult<()> {
        marker.validate()?;
        let panel = self.panels[series.index()].as_mut().ok_or_else(|| {
            ChartError::InvalidData(format!(
                "cairo panel `{}` has not been rendered",
                series.key()
            ))
        })?;
        panel.frame.focus_marker = Some(marker);
        self.paint(series)
    }
}

fn paint_frame(
    context: &Context,
    frame: &RenderFrame,
    clear_color: Color,
) -> ChartResult<CairoRenderStats> {
    apply_color(context, clear_color);
    context
        .paint()
        .map_err(|err| map_backend_error("failed to clear surface", err))?;

    let mut stats = CairoRenderStats::default();

    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for path in &frame.paths {
        context.new_path();
        for command in &path.commands {
            match *command {
                PathCommand::MoveTo { x, y } => context.move_to(x, y),
                PathCommand::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                } => context.curve_to(c1x, c1y, c2x, c2y, x, y),
            }
        }
        apply_color(context, path.color);
        context.set_line_width(path.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
        stats.paths_drawn += 1;
    }

    for circle in frame.circles.iter().chain(frame.focus_marker.iter()) {
        draw_circle(context, *circle)?;
        stats.circles_drawn += 1;
    }

    for text in &frame.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        // Pango positions the layout by its top edge; `y` is the baseline.
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        context.move_to(x, text.y - baseline);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

fn draw_circle(context: &Context, circle: CirclePrimitive) -> ChartResult<()> {
    context.new_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
    apply_color(context, circle.fill);
    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill circle", err))?;
    apply_color(context, circle.stroke);
    context.set_line_width(1.0);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke circle", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
