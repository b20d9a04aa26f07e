use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, TextPrimitive};

/// Backend-agnostic scene for one panel.
///
/// `focus_marker` is kept apart from the static primitives so backends can
/// reposition it without redrawing the rest of the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub focus_marker: Option<CirclePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            paths: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
            focus_marker: None,
        }
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_focus_marker(mut self, marker: CirclePrimitive) -> Self {
        self.focus_marker = Some(marker);
        self
    }

    /// Moves the focus marker in place and returns its new state.
    pub fn reposition_focus_marker(&mut self, cx: f64, cy: f64) -> ChartResult<CirclePrimitive> {
        let marker = self.focus_marker.as_mut().ok_or_else(|| {
            ChartError::InvalidData("frame has no focus marker to reposition".to_owned())
        })?;
        let moved = marker.moved_to(cx, cy);
        moved.validate()?;
        *marker = moved;
        Ok(moved)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        if let Some(marker) = self.focus_marker {
            marker.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.paths.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
            && self.focus_marker.is_none()
    }
}
