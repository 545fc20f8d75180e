use crate::device::reading::DecodedReading;
use serde::{Deserialize, Serialize};

/// UplinkInput is what the network server hands to a payload formatter,
/// `fPort` is carried along but this decoder never looks at it.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UplinkInput {
    pub bytes: Vec<u8>,
    #[serde(rename = "fPort")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub f_port: Option<u8>,
}

#[derive(Serialize, Debug, Default)]
pub struct DecodeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DecodedReading>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl DecodeOutput {
    pub fn with_data(reading: DecodedReading) -> Self {
        Self {
            data: Some(reading),
            ..Default::default()
        }
    }

    pub fn with_error(error: String) -> Self {
        Self {
            errors: vec![error],
            ..Default::default()
        }
    }

    pub fn is_rejected(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn serialize(&self, pretty: bool) -> anyhow::Result<String> {
        let str = match pretty {
            true => serde_json::to_string_pretty(self)?,
            false => serde_json::to_string(self)?,
        };
        Ok(str)
    }
}
