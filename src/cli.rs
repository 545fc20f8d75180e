use anyhow::anyhow;
use clap::Parser;
use std::{path::PathBuf, str::FromStr};

#[derive(Parser, Debug)]
pub struct Cli {
    /// mode for working, see enum WorkingMode
    #[clap(short, long)]
    #[clap(default_value = "stdin")]
    pub mode: String,

    /// config file path, falls back to SHT31_UPLINK_CONFIG,
    /// defaults are used when neither is set
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// uplink file, one json object per line, used in file mode
    #[clap(short, long)]
    pub input: Option<PathBuf>,

    /// hex encoded payload, used in hex mode, for example `0929146C`
    #[clap(short, long)]
    pub payload: Option<String>,

    /// append decoded messages to this file instead of stdout
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum WorkingMode {
    StdinMode,
    FileMode,
    HexMode,
}

impl FromStr for WorkingMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdin" => Ok(Self::StdinMode),
            "file" => Ok(Self::FileMode),
            "hex" => Ok(Self::HexMode),
            _ => Err(anyhow!("only stdin, file and hex mode are supported")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn working_mode_from_str_should_ok() {
        assert_eq!(WorkingMode::from_str("stdin").unwrap(), WorkingMode::StdinMode);
        assert_eq!(WorkingMode::from_str("file").unwrap(), WorkingMode::FileMode);
        assert_eq!(WorkingMode::from_str("hex").unwrap(), WorkingMode::HexMode);
    }

    #[test]
    fn working_mode_from_str_should_err() {
        assert!(WorkingMode::from_str("mqtt").is_err());
    }

    #[test]
    fn parse_cli_should_ok() {
        let cli = Cli::parse_from(["sht31_uplink", "-m", "hex", "-p", "0929146c"]);

        assert_eq!(cli.mode, "hex");
        assert_eq!(cli.payload.as_deref(), Some("0929146c"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_cli_defaults_to_stdin() {
        let cli = Cli::parse_from(["sht31_uplink"]);

        assert_eq!(cli.mode, "stdin");
        assert!(cli.output.is_none());
    }
}
