use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::header::HEADER_SIZE;

/// Reads everything after the header of the file at `path`.
///
/// The bytes are copied out rather than mapped, so a file shrunk by another
/// process shows up as a short payload instead of a fault.
pub fn read_payload(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    let mut payload = Vec::with_capacity(len.saturating_sub(HEADER_SIZE as u64) as usize);
    if file.seek(SeekFrom::Start(HEADER_SIZE as u64))? < len {
        file.read_to_end(&mut payload)?;
    }
    Ok(payload)
}

/// Where an SPE file's bytes come from.
pub trait SpeSource {
    /// Up to [`HEADER_SIZE`] bytes from the start of the file. Fewer bytes
    /// means the file is too short; the header decoder reports that.
    fn read_header(&self) -> io::Result<Vec<u8>>;

    /// Hands everything after the header to `visit`.
    fn with_payload<T>(&self, visit: impl FnOnce(&[u8]) -> Result<T>) -> Result<T>;
}

/// A file on disk, opened anew for every read.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Resolves `path` to an absolute path; fails if it does not exist.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            path: path.as_ref().canonicalize()?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SpeSource for FileSource {
    fn read_header(&self) -> io::Result<Vec<u8>> {
        let file = File::open(&self.path)?;
        let mut header = Vec::with_capacity(HEADER_SIZE);
        file.take(HEADER_SIZE as u64).read_to_end(&mut header)?;
        Ok(header)
    }

    fn with_payload<T>(&self, visit: impl FnOnce(&[u8]) -> Result<T>) -> Result<T> {
        let payload = read_payload(&self.path)?;
        visit(&payload)
    }
}

/// The whole file already in memory.
impl SpeSource for Vec<u8> {
    fn read_header(&self) -> io::Result<Vec<u8>> {
        Ok(self[..self.len().min(HEADER_SIZE)].to_vec())
    }

    fn with_payload<T>(&self, visit: impl FnOnce(&[u8]) -> Result<T>) -> Result<T> {
        visit(self.get(HEADER_SIZE..).unwrap_or_default())
    }
}
