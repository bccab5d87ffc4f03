use std::fmt;
use std::path::Path;

use ndarray::Array1;
use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::parser::{FrameLayout, parse_frames, parse_header};
use crate::processing::Axes;
use crate::types::{AdcRate, AdcType, Datatype, FrameData, Header, RoiInfo};
use crate::utils::file_utils::{FileSource, SpeSource};

/// An opened SPE file.
///
/// The header is read once when the file is opened. Frame data and axis
/// coordinates are computed on first access and cached; the file is not read
/// again. Create a new `SpeFile` to pick up changes on disk.
///
/// The caches are safe to share between threads; concurrent first accesses
/// wait for a single computation.
pub struct SpeFile<S = FileSource> {
    header: Header,
    reversed: bool,
    adc: AdcType,
    adc_rate: AdcRate,
    source: S,
    data: OnceCell<FrameData>,
    axes: OnceCell<Axes>,
}

/// The convenience fields of a file, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    pub xdim: u16,
    pub ydim: u16,
    pub frames: i32,
    pub datatype: Option<Datatype>,
    pub date: String,
    pub adc: String,
    pub adc_rate: String,
    pub gain: u16,
    pub readout_time: f32,
    pub reversed: bool,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

impl SpeFile<FileSource> {
    /// Open and parse the header of the SPE file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let source = FileSource::new(path)?;
        debug!("Opening SPE file {}", source.path().display());
        Self::from_source(source)
    }

    /// Absolute path of the file.
    pub fn path(&self) -> &Path {
        self.source.path()
    }
}

impl<S: SpeSource> SpeFile<S> {
    /// Reads and decodes the header from `source`.
    pub fn from_source(source: S) -> Result<Self> {
        let bytes = source.read_header()?;
        let header = parse_header(&bytes)?;

        Ok(Self {
            reversed: header.is_reversed(),
            adc: header.adc_type(),
            adc_rate: header.adc_rate(),
            header,
            source,
            data: OnceCell::new(),
            axes: OnceCell::new(),
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn reversed(&self) -> bool {
        self.reversed
    }

    pub fn gain(&self) -> u16 {
        self.header.gain
    }

    pub fn adc(&self) -> AdcType {
        self.adc
    }

    pub fn adc_rate(&self) -> AdcRate {
        self.adc_rate
    }

    pub fn readout_time(&self) -> f32 {
        self.header.readout_time
    }

    /// Element type of the frame data, if the header names a known one.
    pub fn datatype(&self) -> Option<Datatype> {
        Datatype::try_from(self.header.datatype).ok()
    }

    pub fn rois(&self) -> &[RoiInfo] {
        self.header.rois()
    }

    /// All frames, indexed `[frame, x, y]`.
    ///
    /// The payload is read on the first call only. A failed read is not
    /// cached, so a later call tries again.
    pub fn data(&self) -> Result<&FrameData> {
        if let Some(data) = self.data.get() {
            debug!("Using cached data");
            return Ok(data);
        }
        self.data.get_or_try_init(|| self.load_data())
    }

    #[instrument(level = "debug", skip_all, fields(frames = self.header.num_frames))]
    fn load_data(&self) -> Result<FrameData> {
        let layout = FrameLayout::from_header(&self.header)?;
        self.source
            .with_payload(|payload| Ok(parse_frames(payload, &layout)?))
    }

    fn axes(&self) -> &Axes {
        self.axes.get_or_init(|| Axes::from_header(&self.header))
    }

    /// Coordinates along x, one per pixel.
    pub fn x_axis(&self) -> &Array1<f64> {
        &self.axes().x
    }

    /// Coordinates along y, one per pixel.
    pub fn y_axis(&self) -> &Array1<f64> {
        &self.axes().y
    }

    pub fn x_axis_label(&self) -> String {
        self.header.xcalibration.label()
    }

    pub fn y_axis_label(&self) -> String {
        self.header.ycalibration.label()
    }

    pub fn summary(&self) -> String {
        self.header.to_string()
    }

    pub fn info(&self) -> FileInfo {
        FileInfo {
            xdim: self.header.xdim,
            ydim: self.header.ydim,
            frames: self.header.num_frames,
            datatype: self.datatype(),
            date: self.header.date_text(),
            adc: self.adc.to_string(),
            adc_rate: self.adc_rate.to_string(),
            gain: self.gain(),
            readout_time: self.readout_time(),
            reversed: self.reversed,
            x_axis_label: self.x_axis_label(),
            y_axis_label: self.y_axis_label(),
        }
    }
}

impl<S: SpeSource> fmt::Display for SpeFile<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.header, f)
    }
}

impl<S> fmt::Debug for SpeFile<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeFile")
            .field("xdim", &self.header.xdim)
            .field("ydim", &self.header.ydim)
            .field("frames", &self.header.num_frames)
            .field("datatype", &self.header.datatype)
            .field("data_loaded", &self.data.get().is_some())
            .finish_non_exhaustive()
    }
}
