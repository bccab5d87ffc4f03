//! Synthetic SPE files for tests.

use bon::Builder;

use crate::types::header::Header;

#[derive(Debug, Clone, Builder)]
pub struct SpeFixture {
    #[builder(default = 1)]
    pub xdim: u16,
    #[builder(default = 1)]
    pub ydim: u16,
    #[builder(default = 1)]
    pub frames: i32,
    #[builder(default = 3)]
    pub datatype: i16,
    #[builder(default)]
    pub geometric: u16,
    #[builder(default)]
    pub adc_type: u16,
    #[builder(default)]
    pub adc_rate: u16,
    #[builder(default)]
    pub gain: u16,
    #[builder(default)]
    pub readout_time: f32,
    #[builder(default, into)]
    pub date: String,
    #[builder(default, into)]
    pub x_label: String,
    /// Valid x calibration with these coefficients, constant term first.
    pub x_coefficients: Option<Vec<f64>>,
    #[builder(default)]
    pub payload: Vec<u8>,
}

impl SpeFixture {
    pub fn u16_payload(values: &[u16]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    pub fn header(&self) -> Header {
        let mut header = Header::zeroed();
        header.xdim = self.xdim;
        header.ydim = self.ydim;
        header.num_frames = self.frames;
        header.datatype = self.datatype;
        header.geometric = self.geometric;
        header.adc_type = self.adc_type;
        header.adc_rate = self.adc_rate;
        header.gain = self.gain;
        header.readout_time = self.readout_time;
        copy_text(&mut header.date, &self.date);
        copy_text(&mut header.xcalibration.string, &self.x_label);

        if let Some(coefficients) = &self.x_coefficients {
            let calibration = &mut header.xcalibration;
            calibration.calib_valid = 1;
            calibration.polynom_order = (coefficients.len().max(1) - 1) as u8;
            calibration.polynom_coeff[..coefficients.len()].copy_from_slice(coefficients);
        }
        header
    }

    /// Header followed by the payload.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.header().to_bytes();
        bytes.extend_from_slice(&self.payload);
        bytes
    }
}

fn copy_text(field: &mut [u8], text: &str) {
    let len = text.len().min(field.len());
    field[..len].copy_from_slice(&text.as_bytes()[..len]);
}
