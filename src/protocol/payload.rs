use super::{
    constant::{HUMIDITY_OFFSET, PAYLOAD_MIN_LEN, SCALE_FACTOR, TEMPERATURE_OFFSET},
    util,
};
use crate::{device::reading::DecodedReading, error::DecodeError};

/// Decode an sht31 uplink payload.
///
/// Layout, big-endian, only bytes 0..4 are read:
///
/// | offset | size | field                    |
/// |--------|------|--------------------------|
/// | 0      | 2    | temperature, 0.01 °C     |
/// | 2      | 2    | relative humidity, 0.01 % |
///
/// Anything after byte 3 is ignored. Payloads shorter than 4 bytes are
/// rejected with [`DecodeError::InvalidPayload`].
pub fn decode(payload: &[u8]) -> Result<DecodedReading, DecodeError> {
    if payload.len() < PAYLOAD_MIN_LEN {
        return Err(DecodeError::InvalidPayload { len: payload.len() });
    }

    let raw_temp = util::read_be_u16(payload, TEMPERATURE_OFFSET)?;
    let raw_hum = util::read_be_u16(payload, HUMIDITY_OFFSET)?;
    log::trace!("raw temperature: {raw_temp:#06x}, raw humidity: {raw_hum:#06x}");

    Ok(DecodedReading {
        temperature: util::scale(raw_temp, SCALE_FACTOR),
        humidity: util::scale(raw_hum, SCALE_FACTOR),
    })
}

impl TryFrom<&[u8]> for DecodedReading {
    type Error = DecodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        decode(bytes)
    }
}
