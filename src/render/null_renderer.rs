use crate::core::SeriesKind;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frames and counts every call, so tests can assert how
/// many full panel draws a state change triggered.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub panels_rendered: usize,
    pub panels_cleared: usize,
    pub focus_moves: usize,
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_path_count: usize,
    pub last_focus_marker: Option<(SeriesKind, CirclePrimitive)>,
    drawn: [bool; 6],
}

impl NullRenderer {
    #[must_use]
    pub fn is_drawn(&self, series: SeriesKind) -> bool {
        self.drawn[series.index()]
    }
}

impl Renderer for NullRenderer {
    fn render_panel(&mut self, series: SeriesKind, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.panels_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_circle_count = frame.circles.len();
        self.last_path_count = frame.paths.len();
        self.drawn[series.index()] = true;
        Ok(())
    }

    fn clear_panel(&mut self, series: SeriesKind) -> ChartResult<()> {
        self.panels_cleared += 1;
        self.drawn[series.index()] = false;
        Ok(())
    }

    fn move_focus_marker(
        &mut self,
        series: SeriesKind,
        marker: CirclePrimitive,
    ) -> ChartResult<()> {
        if !self.drawn[series.index()] {
            return Err(ChartError::InvalidData(format!(
                "panel `{}` is not drawn",
                series.key()
            )));
        }
        marker.validate()?;
        self.focus_moves += 1;
        self.last_focus_marker = Some((series, marker));
        Ok(())
    }
}
