use serde::{self, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// device_name labels log lines for this decoder instance,
    /// for example `sht31-greenhouse-01`
    pub device_name: String,
    /// pretty prints every emitted message, handy when reading by eye
    pub pretty: bool,
    // skip_invalid drops uplinks that fail to decode instead of emitting
    // an `errors` message for them
    pub skip_invalid: bool,
}

impl Config {
    pub fn serialize(&self) -> anyhow::Result<String> {
        let str = serde_yaml::to_string(&self)?;
        Ok(str)
    }

    pub fn deserialize(content: &str) -> anyhow::Result<Self> {
        let config = serde_yaml::from_str::<Self>(content)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config_file = File::open(path)?;
        let mut buf_reader = BufReader::new(config_file);
        let mut content = String::new();
        buf_reader.read_to_string(&mut content)?;

        Self::deserialize(content.as_str())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_name: "sht31".to_string(),
            pretty: false,
            skip_invalid: false,
        }
    }
}
