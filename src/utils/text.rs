/// Decode a fixed-length character field.
///
/// The text ends at the first NUL. Non-ASCII bytes are replaced with U+FFFD.
pub fn ascii_text(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    bytes[..end]
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { char::REPLACEMENT_CHARACTER })
        .collect()
}
