use crate::parser::field::spe_struct;
use crate::utils::text::ascii_text;

/// Highest polynomial order the coefficient array can hold.
pub const MAX_POLYNOM_ORDER: usize = 5;

spe_struct! {
    /// Calibration of one spatial axis (489 bytes).
    #[derive(Debug, Clone, PartialEq)]
    pub struct AxisCalibration {
        pub offset: f64,
        pub factor: f64,
        pub current_unit: u8,
        pub reserved1: u8,
        /// Axis label, NUL-terminated.
        pub string: [u8; 40],
        pub reserved2: [u8; 40],
        /// Non-zero when `polynom_coeff` holds a usable calibration.
        pub calib_valid: u8,
        pub input_unit: u8,
        pub polynom_unit: u8,
        pub polynom_order: u8,
        pub calib_count: u8,
        pub pixel_position: [f64; 10],
        pub calib_value: [f64; 10],
        /// Polynomial coefficients, constant term first.
        pub polynom_coeff: [f64; 6],
        pub laser_position: f64,
        pub reserved3: u8,
        pub new_calib_flag: u8,
        pub calib_label: [u8; 81],
        pub expansion: [u8; 87],
    }
}

impl AxisCalibration {
    pub fn is_valid(&self) -> bool {
        self.calib_valid != 0
    }

    /// The coefficients in use, constant term first, or `None` when the
    /// calibration is not valid.
    ///
    /// Orders above [`MAX_POLYNOM_ORDER`] are clamped to the stored coefficients.
    pub fn coefficients(&self) -> Option<&[f64]> {
        if !self.is_valid() {
            return None;
        }
        let order = usize::from(self.polynom_order).min(MAX_POLYNOM_ORDER);
        Some(&self.polynom_coeff[..=order])
    }

    pub fn label(&self) -> String {
        ascii_text(&self.string)
    }

    pub fn calib_label_text(&self) -> String {
        ascii_text(&self.calib_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::field::Field;

    fn zeroed() -> AxisCalibration {
        AxisCalibration::decode(&mut &[0u8; 489][..]).unwrap()
    }

    #[test]
    fn test_calibration_layout() {
        assert_eq!(AxisCalibration::SIZE, 489);

        let layout = AxisCalibration::layout();
        let offset_of = |name: &str| layout.iter().find(|f| f.name == name).map(|f| f.offset);
        assert_eq!(offset_of("string"), Some(18));
        assert_eq!(offset_of("calib_valid"), Some(98));
        assert_eq!(offset_of("polynom_order"), Some(101));
        assert_eq!(offset_of("polynom_coeff"), Some(263));
        assert_eq!(offset_of("calib_label"), Some(321));
        assert_eq!(offset_of("expansion"), Some(402));
    }

    #[test]
    fn test_invalid_calibration_has_no_coefficients() {
        let mut calibration = zeroed();
        calibration.polynom_coeff = [1.0, 2.0, 0.0, 0.0, 0.0, 0.0];
        calibration.polynom_order = 1;
        assert_eq!(calibration.coefficients(), None);
    }

    #[test]
    fn test_coefficients_follow_order() {
        let mut calibration = zeroed();
        calibration.calib_valid = 1;
        calibration.polynom_order = 2;
        calibration.polynom_coeff = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(calibration.coefficients(), Some(&[1.0, 2.0, 3.0][..]));

        calibration.polynom_order = 9;
        assert_eq!(calibration.coefficients().map(<[f64]>::len), Some(6));
    }

    #[test]
    fn test_label() {
        let mut calibration = zeroed();
        calibration.string[..10].copy_from_slice(b"Wavelength");
        assert_eq!(calibration.label(), "Wavelength");
    }
}
