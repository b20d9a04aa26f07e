use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const E10: f64 = 7.071_067_811_865_475_5;
const E5: f64 = 3.162_277_660_168_379_5;
const E2: f64 = std::f64::consts::SQRT_2;

/// Continuous linear mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Creates a scale over `[domain_start, domain_end]` with unit range.
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        validate_span(domain_start, domain_end, "scale domain")?;
        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    /// Returns a copy mapping onto `[range_start, range_end]`.
    pub fn with_range(mut self, range_start: f64, range_end: f64) -> ChartResult<Self> {
        validate_span(range_start, range_end, "scale range")?;
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(self)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Extends the domain outward to multiples of a round tick step.
    ///
    /// Iterates until the step stabilizes, so the result is a fixed point:
    /// calling `nice` again with the same `count` returns the same domain.
    pub fn nice(self, count: usize) -> ChartResult<Self> {
        let reversed = self.domain_end < self.domain_start;
        let (mut start, mut stop) = if reversed {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        let mut previous_step = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if previous_step == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            previous_step = Some(step);
        }

        let (domain_start, domain_end) = if reversed { (stop, start) } else { (start, stop) };
        let mut niced = Self::new(domain_start, domain_end)?;
        niced.range_start = self.range_start;
        niced.range_end = self.range_end;
        Ok(niced)
    }

    /// Round tick values inside the domain, approximately `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (start, stop) = if self.domain_end < self.domain_start {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };
        if count == 0 {
            return Vec::new();
        }

        let step = tick_increment(start, stop, count);
        if step > 0.0 {
            let first = (start / step).ceil() as i64;
            let last = (stop / step).floor() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        } else if step < 0.0 {
            let inverse = -step;
            let first = (start * inverse).ceil() as i64;
            let last = (stop * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        } else {
            Vec::new()
        }
    }
}

/// Step between round ticks for roughly `count` intervals over `[start, stop]`.
///
/// Positive results are the step itself; negative results encode fractional
/// steps as `-1 / step` so that tick values stay exact.
pub(crate) fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

fn validate_span(start: f64, end: f64, what: &str) -> ChartResult<()> {
    if !start.is_finite() || !end.is_finite() || start == end {
        return Err(ChartError::InvalidData(format!(
            "{what} must be finite and non-zero"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, tick_increment};

    #[test]
    fn tick_increment_prefers_round_steps() {
        assert_eq!(tick_increment(0.0, 1100.0, 10), 100.0);
        assert_eq!(tick_increment(0.0, 1100.0, 5), 200.0);
        assert_eq!(tick_increment(0.0, 2.2, 10), -5.0);
    }

    #[test]
    fn nice_is_a_fixed_point() {
        let once = LinearScale::new(0.0, 1234.5).expect("scale").nice(10).expect("nice");
        let twice = once.nice(10).expect("nice again");
        assert_eq!(once.domain(), (0.0, 1300.0));
        assert_eq!(once, twice);
    }

    #[test]
    fn fractional_domains_nice_to_decimal_steps() {
        let scale = LinearScale::new(0.0, 2.2).expect("scale").nice(10).expect("nice");
        let (start, end) = scale.domain();
        assert_eq!(start, 0.0);
        assert!((2.2..2.5).contains(&end));
        assert_eq!(scale.ticks(5), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }
}
