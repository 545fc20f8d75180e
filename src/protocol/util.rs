use crate::error::DecodeError;

/// read a big-endian u16 starting at `offset`, the first byte being the
/// most significant 8 bits.
pub fn read_be_u16(bytes: &[u8], offset: usize) -> Result<u16, DecodeError> {
    match bytes.get(offset..offset + 2) {
        Some(b) => Ok(u16::from_be_bytes([b[0], b[1]])),
        None => Err(DecodeError::InvalidPayload { len: bytes.len() }),
    }
}

pub fn scale(raw: u16, factor: f64) -> f64 {
    f64::from(raw) * factor
}
