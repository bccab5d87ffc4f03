//! Utility functions for file handling and text fields

pub mod file_utils;
pub mod text;

pub use file_utils::{FileSource, SpeSource};
pub use text::ascii_text;
