//! Reader for WinSpec SPE files.
//!
//! An SPE file is a 4100-byte header followed by one or more frames of pixel
//! data. [`SpeFile`] decodes the header on open and reads the frames on demand:
//!
//! ```no_run
//! use winspec::SpeFile;
//!
//! let spe = SpeFile::open("spectrum.spe")?;
//! println!("{}", spe.summary());
//! let frames = spe.data()?;
//! println!("{:?} {:?}", frames.shape(), spe.x_axis());
//! # Ok::<(), winspec::SpeError>(())
//! ```

pub mod error;
pub mod logger;
pub mod parser;
pub mod processing;
pub mod spe_file;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_fixtures;

pub use error::{FormatError, Result, SpeError};
pub use parser::FieldSpec;
pub use spe_file::{FileInfo, SpeFile};
pub use types::{
    AdcRate, AdcType, AxisCalibration, Datatype, FrameData, HEADER_SIZE, Header, RoiInfo,
};
pub use utils::{FileSource, SpeSource};
