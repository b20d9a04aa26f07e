use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Tension of the cardinal spline used by cumulative series (Catmull-style).
pub const CARDINAL_TENSION: f64 = 0.0;

/// Cubic Bézier piece of a projected curve, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub x0: f64,
    pub y0: f64,
    pub c1x: f64,
    pub c1y: f64,
    pub c2x: f64,
    pub c2y: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Interpolates pixel points with a cardinal spline.
///
/// The curve passes through every point. Control handles use the
/// neighbouring points; at both ends the missing neighbour collapses the
/// handle onto the endpoint. Two points yield a straight segment.
pub fn project_cardinal_curve(points: &[(f64, f64)], tension: f64) -> ChartResult<Vec<CurveSegment>> {
    if !tension.is_finite() || !(0.0..=1.0).contains(&tension) {
        return Err(ChartError::InvalidData(
            "cardinal tension must be finite and in [0, 1]".to_owned(),
        ));
    }
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let k = (1.0 - tension) / 6.0;
    let last = points.len() - 1;
    let mut segments = Vec::with_capacity(last);
    for i in 0..last {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];

        let (c1x, c1y) = if i == 0 {
            (x0, y0)
        } else {
            let (px, py) = points[i - 1];
            (x0 + k * (x1 - px), y0 + k * (y1 - py))
        };
        let (c2x, c2y) = if i + 1 == last {
            (x1, y1)
        } else {
            let (nx, ny) = points[i + 2];
            (x1 - k * (nx - x0), y1 - k * (ny - y0))
        };

        segments.push(CurveSegment {
            x0,
            y0,
            c1x,
            c1y,
            c2x,
            c2y,
            x1,
            y1,
        });
    }

    Ok(segments)
}
