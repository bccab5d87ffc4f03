//! Type definitions for the SPE file format

pub mod calibration;
pub mod frame_data;
pub mod header;
pub mod roi;
pub mod settings;

// Re-export the main types for convenience
pub use calibration::AxisCalibration;
pub use frame_data::{Datatype, FrameData};
pub use header::{HEADER_SIZE, Header};
pub use roi::RoiInfo;
pub use settings::{AdcRate, AdcType};
