use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PanelGeometry, Record, Timeline};
use crate::error::{ChartError, ChartResult};

/// Pointer input delivered by the host for any of the six panels.
///
/// Only the horizontal coordinate matters: every panel shares one time index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    MouseMove { x: f64 },
    TouchMove { x: f64 },
    MouseOut,
    TouchEnd,
}

impl PointerEvent {
    /// Horizontal position for move events, `None` for leave events.
    #[must_use]
    pub fn x(self) -> Option<f64> {
        match self {
            Self::MouseMove { x } | Self::TouchMove { x } => Some(x),
            Self::MouseOut | Self::TouchEnd => None,
        }
    }
}

/// Pixel-to-record mapping used for hover targeting.
///
/// Maps `[0, len]` onto the panel's horizontal extent, one even slot per
/// record, regardless of the dates those records carry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexScale {
    linear: LinearScale,
    len: usize,
}

impl IndexScale {
    pub fn new(len: usize, geometry: PanelGeometry) -> ChartResult<Self> {
        if len == 0 {
            return Err(ChartError::InvalidData(
                "index scale needs at least one record".to_owned(),
            ));
        }
        let (left, right) = geometry.x_range();
        let linear = LinearScale::new(0.0, len as f64)?.with_range(left, right)?;
        Ok(Self { linear, len })
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    pub fn index_to_pixel(self, index: usize) -> ChartResult<f64> {
        self.linear.map(index as f64)
    }

    /// Continuous index under pixel `x`.
    pub fn invert(self, x: f64) -> ChartResult<f64> {
        self.linear.invert(x)
    }

    /// Nearest record index under `x`, or `None` outside `[0, len - 1]`.
    ///
    /// Rounds half away from zero.
    #[must_use]
    pub fn index_at(self, x: f64) -> Option<usize> {
        let index = self.invert(x).ok()?.round();
        if index < 0.0 || index >= self.len as f64 {
            return None;
        }
        Some(index as usize)
    }
}

/// Currently highlighted day, shared by all six panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusState {
    index: usize,
    record: Record,
    hovering: bool,
}

impl FocusState {
    /// Default focus: the most recent record, not driven by a pointer.
    #[must_use]
    pub fn latest(timeline: &Timeline) -> Self {
        Self {
            index: timeline.last_index(),
            record: *timeline.last(),
            hovering: false,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn record(&self) -> &Record {
        &self.record
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Moves focus to a pointer-selected record.
    pub fn hover(&mut self, index: usize, record: Record) {
        self.index = index;
        self.record = record;
        self.hovering = true;
    }

    pub fn reset_to_latest(&mut self, timeline: &Timeline) {
        *self = Self::latest(timeline);
    }
}
