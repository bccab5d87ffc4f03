//! Physical axis coordinates from the header calibrations.

use ndarray::Array1;
use tracing::{debug, warn};

use crate::types::calibration::{AxisCalibration, MAX_POLYNOM_ORDER};
use crate::types::header::Header;

/// Coordinates for both image axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

impl Axes {
    pub fn from_header(header: &Header) -> Self {
        Self {
            x: axis_values(&header.xcalibration, usize::from(header.xdim)),
            y: axis_values(&header.ycalibration, usize::from(header.ydim)),
        }
    }
}

/// One coordinate per pixel along an axis of `len` pixels.
///
/// Pixels are numbered from 1. Without a valid calibration the coordinate is
/// the pixel number itself; otherwise the calibration polynomial evaluated at it.
pub fn axis_values(calibration: &AxisCalibration, len: usize) -> Array1<f64> {
    let pixels = Array1::range(1.0, len as f64 + 1.0, 1.0);

    match calibration.coefficients() {
        Some(coefficients) => {
            if usize::from(calibration.polynom_order) > MAX_POLYNOM_ORDER {
                warn!(
                    "Polynomial order {} exceeds {}, using all stored coefficients",
                    calibration.polynom_order, MAX_POLYNOM_ORDER
                );
            }
            debug!("Calibrated axis of {} pixels: {:?}", len, coefficients);
            pixels.mapv(|p| eval_polynomial(coefficients, p))
        }
        None => pixels,
    }
}

/// Evaluates a polynomial whose coefficients start at the constant term.
pub fn eval_polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
