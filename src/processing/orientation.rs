//! Readout-direction correction.
//!
//! The shift register reads out in the opposite direction when the
//! `reversed` geometry flag is set, and again when the 100 KHz ADC is used.
//! The two cancel, so frames are flipped only when exactly one applies.

use ndarray::{Array3, Axis};

pub fn needs_flip(reversed: bool, low_rate_adc: bool) -> bool {
    reversed ^ low_rate_adc
}

/// Reverses the first spatial axis of `[frame, x, y]` data in every frame.
pub fn flip_frames<T>(frames: &mut Array3<T>) {
    frames.invert_axis(Axis(1));
}
