//! The 4100-byte SPE file header.
//!
//! Field order and widths follow the WinSpec 2.6 manual. Character fields are
//! kept as raw bytes; use the `*_text` helpers to read them.

use std::fmt;

use crate::parser::field::{Field, FieldSpec, spe_struct};
use crate::types::calibration::AxisCalibration;
use crate::types::roi::{ROI_MAX, RoiInfo};
use crate::types::settings::{AdcRate, AdcType, GEOMETRIC_REVERSE};
use crate::utils::text::ascii_text;

/// Size of the header in bytes; frame data starts right after it.
pub const HEADER_SIZE: usize = 4100;

spe_struct! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Header {
        pub controller_version: i16,
        pub logic_output: i16,
        pub amp_hi_cap_low_noise: u16,
        pub x_dim_det: u16,
        pub mode: i16,
        pub exp_sec: f32,
        pub v_chip_xdim: i16,
        pub v_chip_ydim: i16,
        pub y_dim_det: u16,
        pub date: [u8; 10],
        pub virtual_chip_flag: i16,
        pub spare_1: [u8; 2],
        pub noscan: i16,
        pub det_temperature: f32,
        pub det_type: i16,
        /// Number of pixels along x.
        pub xdim: u16,
        pub stdiode: i16,
        pub delay_time: f32,
        pub shutter_control: u16,
        pub absorb_live: i16,
        pub absorb_mode: u16,
        pub can_do_virtual_chip_flag: i16,
        pub threshold_min_live: i16,
        pub threshold_min_val: f32,
        pub threshold_max_live: i16,
        pub threshold_max_val: f32,
        pub spec_auto_spectro_mode: i16,
        pub spec_center_wl_nm: f32,
        pub spec_glue_flag: i16,
        pub spec_glue_start_wl_nm: f32,
        pub spec_glue_end_wl_nm: f32,
        pub spec_glue_min_ovrlp_nm: f32,
        pub spec_glue_final_res_nm: f32,
        pub pulser_type: i16,
        pub custom_chip_flag: i16,
        pub x_pre_pixels: i16,
        pub x_post_pixels: i16,
        pub y_pre_pixels: i16,
        pub y_post_pixels: i16,
        pub asynen: i16,
        /// 0 float, 1 long, 2 short, 3 unsigned short.
        pub datatype: i16,
        pub pulser_mode: i16,
        pub pulser_on_chip_accums: u16,
        pub pulser_repeat_exp: u32,
        pub pulse_rep_width: f32,
        pub pulse_rep_delay: f32,
        pub pulse_seq_start_width: f32,
        pub pulse_seq_end_width: f32,
        pub pulse_seq_start_delay: f32,
        pub pulse_seq_end_delay: f32,
        pub pulse_seq_inc_mode: i16,
        pub pimax_used: i16,
        pub pimax_mode: i16,
        pub pimax_gain: i16,
        pub back_grnd_applied: i16,
        pub pimax_2ns_brd_used: i16,
        pub minblk: u16,
        pub numminblk: u16,
        pub spec_mirror_location: [i16; 2],
        pub spec_slit_location: [i16; 4],
        pub custom_timing_flag: i16,
        pub experiment_time_local: [u8; 7],
        pub experiment_time_utc: [u8; 7],
        pub expos_units: i16,
        pub adc_offset: u16,
        pub adc_rate: u16,
        pub adc_type: u16,
        pub adc_resolution: u16,
        pub adc_bit_adjust: u16,
        pub gain: u16,
        pub comments: [[u8; 80]; 5],
        /// 0x01 rotate, 0x02 reverse, 0x04 flip.
        pub geometric: u16,
        pub xlabel: [u8; 16],
        pub cleans: u16,
        pub num_skp_per_cln: u16,
        pub spec_mirror_pos: [i16; 2],
        pub spec_slit_pos: [f32; 4],
        pub auto_cleans_active: i16,
        pub use_cont_cleans_inst: i16,
        pub absorb_strip_num: i16,
        pub spec_slip_pos_units: i16,
        pub spec_grooves: f32,
        pub srccmp: i16,
        /// Number of pixels along y.
        pub ydim: u16,
        pub scramble: i16,
        pub continuous_cleans_flag: i16,
        pub external_trigger_flag: i16,
        pub lnoscan: i32,
        pub lavgexp: i32,
        pub readout_time: f32,
        pub triggered_mode_flag: i16,
        pub spare_2: [u8; 10],
        pub sw_version: [u8; 16],
        pub controller_type: i16,
        pub flat_field_applied: i16,
        pub spare_3: [u8; 16],
        pub kin_trig_mode: i16,
        pub dlabel: [u8; 16],
        pub spare_4: [u8; 436],
        pub pulse_file_name: [u8; 120],
        pub absorb_file_name: [u8; 120],
        pub num_exp_repeats: u32,
        pub num_exp_accums: u32,
        pub yt_flag: i16,
        pub clkspd_us: f32,
        pub hw_accum_flag: i16,
        pub store_sync: i16,
        pub blemish_applied: i16,
        pub cosmic_applied: i16,
        pub cosmic_type: i16,
        pub cosmic_threshold: f32,
        pub num_frames: i32,
        pub max_intensity: f32,
        pub min_intensity: f32,
        pub ylabel: [u8; 16],
        pub shutter_type: u16,
        pub shutter_comp: f32,
        pub readout_mode: u16,
        pub window_size: u16,
        pub clkspd: u16,
        pub interface_type: u16,
        pub num_rois_in_experiment: i16,
        pub spare_5: [u8; 16],
        pub controller_num: u16,
        pub sw_made: u16,
        pub num_roi: i16,
        pub roi_info: [RoiInfo; ROI_MAX],
        pub flat_field: [u8; 120],
        pub background: [u8; 120],
        pub blemish: [u8; 120],
        pub file_header_ver: f32,
        pub yt_info: [u8; 1000],
        pub winview_id: i32,
        pub xcalibration: AxisCalibration,
        pub ycalibration: AxisCalibration,
        pub istring: [u8; 40],
        pub spare_6: [u8; 25],
        pub spec_type: u8,
        pub spec_model: u8,
        pub pulse_burst_used: u8,
        pub pulse_burst_count: u32,
        pub pulse_burst_period: f64,
        pub pulse_bracket_used: u8,
        pub pulse_bracket_type: u8,
        pub pulse_time_const_fast: f64,
        pub pulse_amplitude_fast: f64,
        pub pulse_time_const_slow: f64,
        pub pulse_amplitude_slow: f64,
        pub analog_gain: i16,
        pub av_gain_used: i16,
        pub av_gain: i16,
        pub lastvalue: i16,
    }
}

const _: () = assert!(Header::SIZE == HEADER_SIZE);
const _: () = assert!(AxisCalibration::SIZE == 489);
const _: () = assert!(RoiInfo::SIZE == 12);

impl Header {
    /// Look up one entry of the layout table by field name.
    pub fn field(name: &str) -> Option<FieldSpec> {
        Self::layout().into_iter().find(|f| f.name == name)
    }

    pub fn date_text(&self) -> String {
        ascii_text(&self.date)
    }

    pub fn sw_version_text(&self) -> String {
        ascii_text(&self.sw_version)
    }

    pub fn comment_lines(&self) -> Vec<String> {
        self.comments.iter().map(|line| ascii_text(line)).collect()
    }

    /// Readout direction reversed (`geometric` bit 0x02).
    pub fn is_reversed(&self) -> bool {
        self.geometric & GEOMETRIC_REVERSE != 0
    }

    pub fn adc_type(&self) -> AdcType {
        AdcType::from(self.adc_type)
    }

    pub fn adc_rate(&self) -> AdcRate {
        AdcRate::from(self.adc_rate)
    }

    /// The ROI descriptors in use, `num_roi` clamped to the ten slots.
    pub fn rois(&self) -> &[RoiInfo] {
        let count = usize::try_from(self.num_roi).unwrap_or(0).min(ROI_MAX);
        &self.roi_info[..count]
    }

    #[cfg(test)]
    pub(crate) fn zeroed() -> Self {
        crate::parser::parse_header(&[0u8; HEADER_SIZE]).expect("zeroed header decodes")
    }

    #[cfg(test)]
    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE);
        self.encode(&mut out);
        out
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SPE File\n\t{}x{} area, {} frames\n\tTaken on {}",
            self.xdim,
            self.ydim,
            self.num_frames,
            self.date_text()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_size() {
        assert_eq!(Header::SIZE, 4100);
        let layout = Header::layout();
        let last = layout.last().unwrap();
        assert_eq!(last.name, "lastvalue");
        assert_eq!(last.offset + last.size, HEADER_SIZE);
    }

    #[test]
    fn test_known_offsets() {
        let anchors = [
            ("date", 20),
            ("xdim", 42),
            ("datatype", 108),
            ("adc_rate", 190),
            ("adc_type", 192),
            ("gain", 198),
            ("comments", 200),
            ("geometric", 600),
            ("ydim", 656),
            ("readout_time", 672),
            ("num_frames", 1446),
            ("num_roi", 1510),
            ("roi_info", 1512),
            ("file_header_ver", 1992),
            ("yt_info", 1996),
            ("winview_id", 2996),
            ("xcalibration", 3000),
            ("ycalibration", 3489),
            ("istring", 3978),
            ("spec_type", 4043),
            ("pulse_burst_count", 4046),
            ("lastvalue", 4098),
        ];
        for (name, offset) in anchors {
            let spec = Header::field(name).unwrap_or_else(|| panic!("missing field {name}"));
            assert_eq!(spec.offset, offset, "offset of {name}");
        }
    }

    #[test]
    fn test_offsets_are_contiguous() {
        let layout = Header::layout();
        for pair in layout.windows(2) {
            assert_eq!(pair[0].offset + pair[0].size, pair[1].offset);
        }
        assert_eq!(layout[0].offset, 0);
    }

    #[test]
    fn test_unknown_field() {
        assert!(Header::field("ADCrate").is_none());
    }

    #[test]
    fn test_reversed_uses_bit() {
        let mut header = Header::zeroed();
        assert!(!header.is_reversed());
        header.geometric = 0x02;
        assert!(header.is_reversed());
        header.geometric = 0x03;
        assert!(header.is_reversed());
        header.geometric = 0x04;
        assert!(!header.is_reversed());
    }

    #[test]
    fn test_rois_clamped() {
        let mut header = Header::zeroed();
        assert!(header.rois().is_empty());
        header.num_roi = 2;
        header.roi_info[1].endx = 511;
        assert_eq!(header.rois().len(), 2);
        assert_eq!(header.rois()[1].endx, 511);
        header.num_roi = 40;
        assert_eq!(header.rois().len(), ROI_MAX);
        header.num_roi = -1;
        assert!(header.rois().is_empty());
    }

    #[test]
    fn test_display() {
        let mut header = Header::zeroed();
        header.xdim = 512;
        header.ydim = 100;
        header.num_frames = 3;
        header.date[..9].copy_from_slice(b"12Mar2014");
        assert_eq!(
            header.to_string(),
            "SPE File\n\t512x100 area, 3 frames\n\tTaken on 12Mar2014"
        );
    }
}
