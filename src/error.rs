use thiserror::Error;

use crate::protocol::constant::PAYLOAD_MIN_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// uplink carried fewer bytes than the fixed layout needs
    #[error("invalid payload: expected at least {} bytes, got {len}", PAYLOAD_MIN_LEN)]
    InvalidPayload { len: usize },
}
