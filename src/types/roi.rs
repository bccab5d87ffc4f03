use bon::Builder;

use crate::parser::field::spe_struct;

spe_struct! {
    /// Region of interest on the sensor, with binning per axis (12 bytes).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Builder)]
    pub struct RoiInfo {
        pub startx: u16,
        pub endx: u16,
        pub groupx: u16,
        pub starty: u16,
        pub endy: u16,
        pub groupy: u16,
    }
}

/// Number of ROI slots in the header.
pub const ROI_MAX: usize = 10;
