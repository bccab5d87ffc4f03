use tracing::debug;

use crate::error::FormatError;
use crate::parser::field::Field;
use crate::types::header::{HEADER_SIZE, Header};

/// Decodes the header from the first [`HEADER_SIZE`] bytes of `bytes`.
///
/// Anything past the header is ignored. A shorter buffer is an error, never
/// zero-filled.
pub fn parse_header(bytes: &[u8]) -> Result<Header, FormatError> {
    if bytes.len() < HEADER_SIZE {
        return Err(FormatError::HeaderTooShort {
            actual: bytes.len(),
        });
    }

    let mut input = &bytes[..HEADER_SIZE];
    let header =
        Header::decode(&mut input).map_err(|e| FormatError::Decode(format!("header: {e}")))?;
    debug_assert!(input.is_empty());

    debug!(
        "Decoded header: {}x{}, {} frames, datatype {}",
        header.xdim, header.ydim, header.num_frames, header.datatype
    );
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A header buffer where every byte differs from its neighbours.
    fn patterned_bytes() -> Vec<u8> {
        (0..HEADER_SIZE).map(|i| (i * 7 + 3) as u8).collect()
    }

    #[test]
    fn test_round_trip_is_bit_exact() {
        let bytes = patterned_bytes();
        let header = parse_header(&bytes).unwrap();
        assert_eq!(header.to_bytes(), bytes);
    }

    #[test]
    fn test_round_trip_after_edit() {
        let mut header = Header::zeroed();
        header.xdim = 1340;
        header.ydim = 400;
        header.num_frames = 7;
        header.ycalibration.polynom_coeff[1] = 0.25;
        header.roi_info[9].groupy = 2;

        let bytes = header.to_bytes();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(u16::from_le_bytes([bytes[42], bytes[43]]), 1340);
        assert_eq!(u16::from_le_bytes([bytes[656], bytes[657]]), 400);
        assert_eq!(i32::from_le_bytes(bytes[1446..1450].try_into().unwrap()), 7);
        // last ROI ends right before flat_field at 1632
        assert_eq!(u16::from_le_bytes([bytes[1630], bytes[1631]]), 2);

        assert_eq!(parse_header(&bytes).unwrap(), header);
    }

    #[test]
    fn test_fields_read_at_offsets() {
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes[108..110].copy_from_slice(&2i16.to_le_bytes());
        bytes[190..192].copy_from_slice(&6u16.to_le_bytes());
        bytes[600..602].copy_from_slice(&2u16.to_le_bytes());
        bytes[672..676].copy_from_slice(&1.5f32.to_le_bytes());
        bytes[3000 + 98] = 1;
        bytes[3489 + 101] = 3;

        let header = parse_header(&bytes).unwrap();
        assert_eq!(header.datatype, 2);
        assert_eq!(header.adc_rate, 6);
        assert_eq!(header.geometric, 2);
        assert_eq!(header.readout_time, 1.5);
        assert_eq!(header.xcalibration.calib_valid, 1);
        assert_eq!(header.ycalibration.polynom_order, 3);
    }

    #[test]
    fn test_short_buffer_fails() {
        for len in [0, 1, 4099] {
            let err = parse_header(&vec![0u8; len]).unwrap_err();
            assert!(matches!(err, FormatError::HeaderTooShort { actual } if actual == len));
        }
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = patterned_bytes();
        bytes.extend_from_slice(&[0xaa; 32]);
        let header = parse_header(&bytes).unwrap();
        assert_eq!(header.to_bytes(), bytes[..HEADER_SIZE]);
    }

    #[test]
    fn test_bad_datatype_still_decodes() {
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes[108..110].copy_from_slice(&9i16.to_le_bytes());
        assert_eq!(parse_header(&bytes).unwrap().datatype, 9);
    }
}
