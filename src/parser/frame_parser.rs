use bon::Builder;
use ndarray::Array3;
use tracing::debug;
use winnow::{Parser, combinator::repeat};

use crate::error::FormatError;
use crate::parser::field::Field;
use crate::processing::orientation::{flip_frames, needs_flip};
use crate::types::frame_data::{Datatype, FrameData};
use crate::types::header::Header;

/// Shape, element type and orientation of the frame payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct FrameLayout {
    pub frames: usize,
    pub xdim: usize,
    pub ydim: usize,
    pub datatype: Datatype,
    #[builder(default)]
    pub flip: bool,
}

impl FrameLayout {
    /// Derives the payload layout from the header.
    ///
    /// This is where `datatype` and the frame count are validated; decoding the
    /// header itself accepts any value.
    pub fn from_header(header: &Header) -> Result<Self, FormatError> {
        let datatype = Datatype::try_from(header.datatype)?;
        let frames = usize::try_from(header.num_frames)
            .map_err(|_| FormatError::InvalidFrameCount(header.num_frames))?;

        Ok(Self {
            frames,
            xdim: usize::from(header.xdim),
            ydim: usize::from(header.ydim),
            datatype,
            flip: needs_flip(header.is_reversed(), header.adc_rate().is_low_rate()),
        })
    }

    pub fn element_count(&self) -> usize {
        self.frames.saturating_mul(self.xdim).saturating_mul(self.ydim)
    }

    pub fn byte_len(&self) -> usize {
        self.element_count().saturating_mul(self.datatype.size())
    }
}

/// Reads all frames from the bytes that follow the header.
///
/// On disk each frame is stored row by row with y as the row index. The result
/// is indexed `[frame, x, y]`, flipped along x when the layout asks for it.
/// Bytes past the last frame are ignored.
pub fn parse_frames(payload: &[u8], layout: &FrameLayout) -> Result<FrameData, FormatError> {
    let expected = layout.byte_len();
    if payload.len() < expected {
        return Err(FormatError::TruncatedPayload {
            expected,
            actual: payload.len(),
        });
    }

    debug!(
        "Reading {} frames of {}x{} {:?} ({} bytes)",
        layout.frames, layout.xdim, layout.ydim, layout.datatype, expected
    );

    let mut input = &payload[..expected];
    let data = match layout.datatype {
        Datatype::F32 => FrameData::F32(read_frames(&mut input, layout)?),
        Datatype::I32 => FrameData::I32(read_frames(&mut input, layout)?),
        Datatype::I16 => FrameData::I16(read_frames(&mut input, layout)?),
        Datatype::U16 => FrameData::U16(read_frames(&mut input, layout)?),
    };
    Ok(data)
}

fn read_frames<T: Field + Clone>(
    input: &mut &[u8],
    layout: &FrameLayout,
) -> Result<Array3<T>, FormatError> {
    let values: Vec<T> = repeat(layout.element_count(), T::decode)
        .parse_next(input)
        .map_err(|e| FormatError::Decode(format!("frame data: {e}")))?;

    let stored = Array3::from_shape_vec((layout.frames, layout.ydim, layout.xdim), values)?;
    let mut frames = stored.permuted_axes([0, 2, 1]);
    if layout.flip {
        debug!("Flipping frames for reversed readout or 100 KHz ADC");
        flip_frames(&mut frames);
    }
    Ok(frames.as_standard_layout().into_owned())
}
