//! Interpretation of decoded header values

pub mod axes;
pub mod orientation;

pub use axes::{Axes, axis_values, eval_polynomial};
pub use orientation::{flip_frames, needs_flip};
