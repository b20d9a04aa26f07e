use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{PanelGeometry, Record, SeriesKind, TimeScale, Timeline, ValueScale};
use crate::error::{ChartError, ChartResult};

/// Display mode toggles that shape every value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Mode {
    /// Each group scales against its "confirmed" series instead of per-series maxima.
    pub shared_domain: bool,
    /// Cumulative series use a logarithmic axis; daily series never do.
    pub log_scale: bool,
}

impl Mode {
    #[must_use]
    pub const fn new(shared_domain: bool, log_scale: bool) -> Self {
        Self {
            shared_domain,
            log_scale,
        }
    }

    /// Whether `series` is drawn on a logarithmic axis under this mode.
    #[must_use]
    pub const fn uses_log(self, series: SeriesKind) -> bool {
        self.log_scale && series.supports_log_scale()
    }
}

/// Maximum that sizes the value axis of `series` under `mode`.
#[must_use]
pub fn effective_max(timeline: &Timeline, series: SeriesKind, mode: Mode) -> u64 {
    if mode.shared_domain {
        timeline.series_max(series.group().reference_series())
    } else {
        timeline.series_max(series)
    }
}

/// Shared time axis plus one value axis per series.
///
/// Built in one pass from a timeline and a mode; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSet {
    geometry: PanelGeometry,
    mode: Mode,
    time: TimeScale,
    values: [ValueScale; 6],
}

impl ScaleSet {
    pub fn build(timeline: &Timeline, mode: Mode, geometry: PanelGeometry) -> ChartResult<Self> {
        if !geometry.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: geometry.viewport.width,
                height: geometry.viewport.height,
            });
        }

        let time = TimeScale::from_timeline(timeline, geometry)?;
        let range = geometry.y_range();

        let mut values = Vec::with_capacity(SeriesKind::ALL.len());
        for series in SeriesKind::ALL {
            let max = effective_max(timeline, series, mode) as f64;
            let scale = if mode.uses_log(series) {
                ValueScale::log(max, range)?
            } else {
                ValueScale::linear(max, range)?
            };
            trace!(
                series = series.key(),
                max,
                domain_end = scale.domain().1,
                tick_count = scale.tick_count(),
                "value scale built"
            );
            values.push(scale);
        }
        let values: [ValueScale; 6] = values
            .try_into()
            .map_err(|_| ChartError::InvalidData("expected six value scales".to_owned()))?;

        Ok(Self {
            geometry,
            mode,
            time,
            values,
        })
    }

    /// Builds from an unchecked record slice, rejecting degenerate input.
    pub fn from_records(records: &[Record], mode: Mode, geometry: PanelGeometry) -> ChartResult<Self> {
        let timeline = Timeline::new(records.to_vec())?;
        Self::build(&timeline, mode, geometry)
    }

    #[must_use]
    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn time(&self) -> TimeScale {
        self.time
    }

    #[must_use]
    pub fn value(&self, series: SeriesKind) -> ValueScale {
        self.values[series.index()]
    }

    #[must_use]
    pub fn values(&self) -> &[ValueScale; 6] {
        &self.values
    }

    pub fn x(&self, record: &Record) -> ChartResult<f64> {
        self.time.date_to_pixel(record.date)
    }

    /// Pixel Y of `record` on the panel of `series`, clamped for log axes.
    pub fn y(&self, series: SeriesKind, record: &Record) -> ChartResult<f64> {
        self.value(series).lookup(record.value(series))
    }

    pub fn point(&self, series: SeriesKind, record: &Record) -> ChartResult<(f64, f64)> {
        Ok((self.x(record)?, self.y(series, record)?))
    }

    /// Projects every record of `timeline` onto the panel of `series`.
    pub fn project(&self, series: SeriesKind, timeline: &Timeline) -> ChartResult<Vec<(f64, f64)>> {
        timeline
            .records()
            .iter()
            .map(|record| self.point(series, record))
            .collect()
    }
}
