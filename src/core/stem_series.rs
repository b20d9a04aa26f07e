use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Vertical stem from the panel baseline up to a daily value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stem {
    pub x: f64,
    pub y_baseline: f64,
    pub y_value: f64,
}

/// Projects pixel points into stems anchored on `baseline_y`.
///
/// Daily series have no connecting line; each record stands alone.
pub fn project_stems(points: &[(f64, f64)], baseline_y: f64) -> ChartResult<Vec<Stem>> {
    if !baseline_y.is_finite() {
        return Err(ChartError::InvalidData(
            "stem baseline must be finite".to_owned(),
        ));
    }

    points
        .iter()
        .map(|&(x, y)| {
            if !x.is_finite() || !y.is_finite() {
                return Err(ChartError::InvalidData(
                    "stem coordinates must be finite".to_owned(),
                ));
            }
            Ok(Stem {
                x,
                y_baseline: baseline_y,
                y_value: y,
            })
        })
        .collect()
}
