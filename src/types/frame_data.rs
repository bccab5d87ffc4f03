//! Types for the frame payload that follows the header

use ndarray::{Array3, ArrayView2, Axis};
use serde::Serialize;

use crate::error::FormatError;

/// Element type of the frame payload, selected by the header `datatype` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Datatype {
    F32,
    I32,
    I16,
    U16,
}

impl Datatype {
    /// Width of one element in bytes.
    pub fn size(&self) -> usize {
        match self {
            Datatype::F32 | Datatype::I32 => 4,
            Datatype::I16 | Datatype::U16 => 2,
        }
    }
}

impl TryFrom<i16> for Datatype {
    type Error = FormatError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Datatype::F32),
            1 => Ok(Datatype::I32),
            2 => Ok(Datatype::I16),
            3 => Ok(Datatype::U16),
            other => Err(FormatError::UnknownDatatype(other)),
        }
    }
}

/// All frames of a file, indexed `[frame, x, y]`.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameData {
    F32(Array3<f32>),
    I32(Array3<i32>),
    I16(Array3<i16>),
    U16(Array3<u16>),
}

impl FrameData {
    pub fn datatype(&self) -> Datatype {
        match self {
            FrameData::F32(_) => Datatype::F32,
            FrameData::I32(_) => Datatype::I32,
            FrameData::I16(_) => Datatype::I16,
            FrameData::U16(_) => Datatype::U16,
        }
    }

    /// `[frames, xdim, ydim]`
    pub fn shape(&self) -> [usize; 3] {
        let dim = match self {
            FrameData::F32(a) => a.dim(),
            FrameData::I32(a) => a.dim(),
            FrameData::I16(a) => a.dim(),
            FrameData::U16(a) => a.dim(),
        };
        [dim.0, dim.1, dim.2]
    }

    pub fn frame_count(&self) -> usize {
        self.shape()[0]
    }

    /// Every sample widened to `f64`, same shape.
    pub fn to_f64(&self) -> Array3<f64> {
        match self {
            FrameData::F32(a) => a.mapv(f64::from),
            FrameData::I32(a) => a.mapv(f64::from),
            FrameData::I16(a) => a.mapv(f64::from),
            FrameData::U16(a) => a.mapv(f64::from),
        }
    }

    pub fn as_f32(&self) -> Option<&Array3<f32>> {
        match self {
            FrameData::F32(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<&Array3<i32>> {
        match self {
            FrameData::I32(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<&Array3<i16>> {
        match self {
            FrameData::I16(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<&Array3<u16>> {
        match self {
            FrameData::U16(a) => Some(a),
            _ => None,
        }
    }

    /// One frame as `f64`, indexed `[x, y]`.
    pub fn frame_f64(&self, index: usize) -> Option<ndarray::Array2<f64>> {
        fn widen<T: Copy + Into<f64>>(frame: ArrayView2<'_, T>) -> ndarray::Array2<f64> {
            frame.mapv(Into::into)
        }

        if index >= self.frame_count() {
            return None;
        }
        let frame = match self {
            FrameData::F32(a) => widen(a.index_axis(Axis(0), index)),
            FrameData::I32(a) => widen(a.index_axis(Axis(0), index)),
            FrameData::I16(a) => widen(a.index_axis(Axis(0), index)),
            FrameData::U16(a) => widen(a.index_axis(Axis(0), index)),
        };
        Some(frame)
    }
}
