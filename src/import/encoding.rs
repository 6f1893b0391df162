//! Text encoding detection for model documents
//!
//! Model files are written as UTF-8 or UTF-16 depending on the tool that saved
//! them, with or without a byte-order mark. Decoding never fails: malformed
//! sequences are replaced with U+FFFD.

/// Encoding chosen for a byte buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf8Bom,
    Utf16LeBom,
    Utf16BeBom,
    /// UTF-16LE recognized from its zero-byte pattern
    Utf16Le,
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Determine the encoding of `bytes`
///
/// Marks are checked before the UTF-16 heuristic. The heuristic requires zero
/// bytes at positions 1 and 3 plus either a non-zero first byte or, for longer
/// buffers, zeros at positions 2 and 4 as well.
pub fn detect(bytes: &[u8]) -> TextEncoding {
    if bytes.starts_with(UTF8_BOM) {
        TextEncoding::Utf8Bom
    } else if bytes.starts_with(UTF16_LE_BOM) {
        TextEncoding::Utf16LeBom
    } else if bytes.starts_with(UTF16_BE_BOM) {
        TextEncoding::Utf16BeBom
    } else if looks_like_utf16_le(bytes) {
        TextEncoding::Utf16Le
    } else {
        TextEncoding::Utf8
    }
}

fn looks_like_utf16_le(bytes: &[u8]) -> bool {
    if bytes.len() < 4 || bytes[1] != 0 || bytes[3] != 0 {
        return false;
    }
    bytes[0] != 0 || (bytes.len() > 10 && bytes[2] == 0 && bytes[4] == 0)
}

/// Decode `bytes` to text using the detected encoding
pub fn decode(bytes: &[u8]) -> String {
    decode_as(bytes, detect(bytes))
}

/// Decode `bytes` assuming `encoding`, stripping its mark if it has one
pub fn decode_as(bytes: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        TextEncoding::Utf8Bom => String::from_utf8_lossy(&bytes[UTF8_BOM.len()..]).into_owned(),
        TextEncoding::Utf16LeBom => utf16_le(&bytes[UTF16_LE_BOM.len()..]),
        TextEncoding::Utf16BeBom => utf16_le(&swap_pairs(&bytes[UTF16_BE_BOM.len()..])),
        TextEncoding::Utf16Le => utf16_le(bytes),
    }
}

fn swap_pairs(bytes: &[u8]) -> Vec<u8> {
    bytes
        .chunks_exact(2)
        .flat_map(|pair| [pair[1], pair[0]])
        .collect()
}

// A trailing odd byte cannot form a code unit and is dropped.
fn utf16_le(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}
