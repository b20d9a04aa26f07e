use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Headroom applied above the effective maximum before rounding.
pub const DOMAIN_HEADROOM: f64 = 1.1;
/// Tick count requested from linear value axes.
pub const LINEAR_TICK_COUNT: usize = 5;
/// Lower bound of logarithmic domains; values below are clamped to it.
pub const LOG_FLOOR: f64 = 1.0;

const NICE_COUNT: usize = 10;

/// Tick values of one value axis; axes rarely carry more than a dozen.
pub type ValueTicks = SmallVec<[f64; 12]>;

/// Mapping mode of a value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueScaleKind {
    /// Uniform spacing in raw counter units, domain starts at zero.
    #[default]
    Linear,
    /// Uniform spacing per decade, domain starts at one.
    Log,
}

/// Value axis of one panel, mapped onto an inverted pixel range.
///
/// Instances are immutable once built; a mode change builds a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    kind: ValueScaleKind,
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    tick_count: usize,
}

impl ValueScale {
    /// Linear axis over `[0, 1.1 × max]`, rounded outward to round ticks.
    ///
    /// An all-zero series falls back to `[0, 1]`.
    pub fn linear(max: f64, range: (f64, f64)) -> ChartResult<Self> {
        validate_max(max)?;
        let padded = max * DOMAIN_HEADROOM;
        let upper = if padded > 0.0 { padded } else { 1.0 };
        let niced = LinearScale::new(0.0, upper)?
            .with_range(range.0, range.1)?
            .nice(NICE_COUNT)?;
        let (domain_start, domain_end) = niced.domain();

        Ok(Self {
            kind: ValueScaleKind::Linear,
            domain_start,
            domain_end,
            range_start: range.0,
            range_end: range.1,
            tick_count: LINEAR_TICK_COUNT,
        })
    }

    /// Logarithmic axis over `[1, 1.1 × max]`, rounded outward to whole decades.
    ///
    /// The upper bound is at least `10`, so a series that never exceeds one
    /// still gets a one-decade axis.
    pub fn log(max: f64, range: (f64, f64)) -> ChartResult<Self> {
        validate_max(max)?;
        if !range.0.is_finite() || !range.1.is_finite() || range.0 == range.1 {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        let padded = (max * DOMAIN_HEADROOM).max(LOG_FLOOR);
        let decades = padded.log10().ceil().max(1.0) as i32;
        let domain_end = 10f64.powi(decades);

        Ok(Self {
            kind: ValueScaleKind::Log,
            domain_start: LOG_FLOOR,
            domain_end,
            range_start: range.0,
            range_end: range.1,
            tick_count: domain_end.log10().ceil() as usize,
        })
    }

    #[must_use]
    pub fn kind(self) -> ValueScaleKind {
        self.kind
    }

    #[must_use]
    pub fn is_log(self) -> bool {
        self.kind == ValueScaleKind::Log
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Ticks requested from the axis: 5 for linear, one per decade for log.
    #[must_use]
    pub fn tick_count(self) -> usize {
        self.tick_count
    }

    /// Clamps a raw counter into the scale's valid input.
    #[must_use]
    pub fn clamp_input(self, value: f64) -> f64 {
        match self.kind {
            ValueScaleKind::Linear => value,
            ValueScaleKind::Log => value.max(LOG_FLOOR),
        }
    }

    /// Pixel Y of a counter value; log scales clamp the value to one first.
    pub fn lookup(self, value: u64) -> ChartResult<f64> {
        self.value_to_pixel(self.clamp_input(value as f64))
    }

    /// Pixel Y of an already valid value.
    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        let transformed = self.transform(value)?;
        let (start, end) = self.transformed_domain();
        let normalized = (transformed - start) / (end - start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    #[must_use]
    pub fn ticks(self) -> ValueTicks {
        match self.kind {
            ValueScaleKind::Linear => LinearScale::new(self.domain_start, self.domain_end)
                .map(|linear| linear.ticks(self.tick_count).into_iter().collect())
                .unwrap_or_default(),
            ValueScaleKind::Log => decade_ticks(self.domain_start, self.domain_end),
        }
    }

    fn transform(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        match self.kind {
            ValueScaleKind::Linear => Ok(value),
            ValueScaleKind::Log => {
                if value <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "log scale input must be > 0".to_owned(),
                    ));
                }
                Ok(value.log10())
            }
        }
    }

    fn transformed_domain(self) -> (f64, f64) {
        match self.kind {
            ValueScaleKind::Linear => (self.domain_start, self.domain_end),
            ValueScaleKind::Log => (self.domain_start.log10(), self.domain_end.log10()),
        }
    }
}

fn validate_max(max: f64) -> ChartResult<()> {
    if !max.is_finite() || max < 0.0 {
        return Err(ChartError::InvalidData(
            "series maximum must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

fn decade_ticks(start: f64, end: f64) -> ValueTicks {
    let first = start.log10().floor() as i32;
    let last = end.log10().ceil() as i32;
    (first..=last)
        .map(|exponent| 10f64.powi(exponent))
        .filter(|tick| *tick >= start && *tick <= end)
        .collect()
}
