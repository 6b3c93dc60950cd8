//! Bounds-checked reads over a byte buffer.
//!
//! Every read takes the buffer and a cursor position; a read that would run
//! past the end is an explicit error, never a silent zero-fill. All
//! multi-byte integers are little-endian.

use thiserror::Error;

/// Decode-level errors, each carrying the absolute offset where the read
/// started.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReadError {
    /// A fixed-width field required more bytes than remain.
    #[error("truncated input at offset {at}: needed {wanted} byte(s)")]
    Truncated { at: usize, wanted: usize },

    /// A string field reached end-of-buffer before its terminating NUL.
    #[error("unterminated string at offset {at}")]
    UnterminatedString { at: usize },

    /// A string field held bytes that are not valid UTF-8.
    #[error("invalid UTF-8 in string at offset {at}")]
    InvalidUtf8 { at: usize },
}

impl ReadError {
    /// The absolute offset at which the failing read started.
    pub fn offset(&self) -> usize {
        match self {
            ReadError::Truncated { at, .. } => *at,
            ReadError::UnterminatedString { at } => *at,
            ReadError::InvalidUtf8 { at } => *at,
        }
    }
}

/// Read a single byte.
pub fn read_u8(bytes: &[u8], pos: &mut usize) -> Result<u8, ReadError> {
    if *pos >= bytes.len() {
        return Err(ReadError::Truncated { at: *pos, wanted: 1 });
    }
    let v = bytes[*pos];
    *pos += 1;
    Ok(v)
}

/// Read a little-endian u16.
pub fn read_u16(bytes: &[u8], pos: &mut usize) -> Result<u16, ReadError> {
    let raw = take(bytes, pos, 2)?;
    Ok(u16::from_le_bytes([raw[0], raw[1]]))
}

/// Read a little-endian u32.
pub fn read_u32(bytes: &[u8], pos: &mut usize) -> Result<u32, ReadError> {
    let raw = take(bytes, pos, 4)?;
    Ok(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

/// Read a little-endian u64.
pub fn read_u64(bytes: &[u8], pos: &mut usize) -> Result<u64, ReadError> {
    let raw = take(bytes, pos, 8)?;
    Ok(u64::from_le_bytes([
        raw[0], raw[1], raw[2], raw[3], raw[4], raw[5], raw[6], raw[7],
    ]))
}

/// Read a little-endian f32.
pub fn read_f32(bytes: &[u8], pos: &mut usize) -> Result<f32, ReadError> {
    let raw = take(bytes, pos, 4)?;
    Ok(f32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

/// Read a NUL-terminated UTF-8 string. The cursor ends up past the NUL.
pub fn read_cstr(bytes: &[u8], pos: &mut usize) -> Result<String, ReadError> {
    let start = *pos;
    let rest = &bytes[start.min(bytes.len())..];
    let Some(len) = rest.iter().position(|&b| b == 0) else {
        return Err(ReadError::UnterminatedString { at: start });
    };
    let s = std::str::from_utf8(&rest[..len])
        .map_err(|_| ReadError::InvalidUtf8 { at: start })?
        .to_string();
    *pos = start + len + 1;
    Ok(s)
}

fn take<'a>(bytes: &'a [u8], pos: &mut usize, wanted: usize) -> Result<&'a [u8], ReadError> {
    if wanted > bytes.len().saturating_sub(*pos) {
        return Err(ReadError::Truncated { at: *pos, wanted });
    }
    let raw = &bytes[*pos..*pos + wanted];
    *pos += wanted;
    Ok(raw)
}
