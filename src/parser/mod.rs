//! SPE binary decoding

pub mod field;
mod frame_parser;
mod header_parser;

pub use field::{Field, FieldSpec};
pub use frame_parser::{FrameLayout, parse_frames};
pub use header_parser::parse_header;
