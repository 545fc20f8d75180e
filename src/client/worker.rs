use super::sender::Sender;
use crate::{
    config::Config,
    dto::uplink::{DecodeOutput, UplinkInput},
    protocol::payload,
};
use anyhow::anyhow;
use std::io::BufRead;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// every uplink seen, including the ones that could not be parsed
    pub processed: u64,
    pub decoded: u64,
    pub rejected: u64,
}

pub struct Worker<'a> {
    sender: &'a dyn Sender,
    config: Config,
    stats: Stats,
}

impl<'a> Worker<'a> {
    pub fn new(sender: &'a dyn Sender, config: Config) -> Self {
        Self {
            sender,
            config,
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// decode_uplink is the formatter entry point, it never fails, an
    /// undecodable payload becomes an `errors` entry of the output.
    pub fn decode_uplink(&self, input: &UplinkInput) -> DecodeOutput {
        match payload::decode(&input.bytes) {
            Ok(reading) => DecodeOutput::with_data(reading),
            Err(err) => DecodeOutput::with_error(err.to_string()),
        }
    }

    pub fn process_uplink(&mut self, input: &UplinkInput) -> anyhow::Result<()> {
        let device_name = self.config.device_name.as_str();
        self.stats.processed += 1;

        log::debug!(
            "uplink for `{device_name}` - fPort: {:?}, bytes: {}",
            input.f_port,
            hex::encode(&input.bytes)
        );

        let output = self.decode_uplink(input);
        if output.is_rejected() {
            self.stats.rejected += 1;
            log::error!(
                "failed to decode uplink for `{device_name}`: {}",
                output.errors.join(", ")
            );
            if self.config.skip_invalid {
                return Ok(());
            }
        } else if let Some(reading) = &output.data {
            self.stats.decoded += 1;
            log::debug!(
                "decoded `{device_name}` - temperature: {}, humidity: {}",
                reading.temperature,
                reading.humidity_fixed()
            );
        }

        let message = match output.serialize(self.config.pretty) {
            Ok(m) => m,
            Err(err) => {
                log::error!("failed to serialize the message: {err}");
                return Err(err);
            }
        };

        if let Err(err) = self.sender.send(message) {
            log::error!("failed to egress message to output for `{device_name}`: {err}");
            return Err(err);
        }

        Ok(())
    }

    pub fn process_line(&mut self, line: &str) -> anyhow::Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let input = match serde_json::from_str::<UplinkInput>(line) {
            Ok(i) => i,
            Err(err) => {
                self.stats.processed += 1;
                self.stats.rejected += 1;
                log::error!("failed to parse uplink `{line}`: {err}");
                return Err(anyhow!(err));
            }
        };

        self.process_uplink(&input)
    }

    pub fn process_hex(&mut self, payload: &str) -> anyhow::Result<()> {
        let cleaned: String = payload.split_whitespace().collect();
        let bytes = hex::decode(&cleaned)
            .map_err(|err| anyhow!("failed to decode hex payload `{payload}`: {err}"))?;

        self.process_uplink(&UplinkInput {
            bytes,
            f_port: None,
        })
    }

    /// run consumes newline delimited uplinks until the reader is exhausted,
    /// bad lines are logged and skipped, only read errors stop the loop.
    pub fn run<R: BufRead>(&mut self, reader: R) -> anyhow::Result<()> {
        for line in reader.lines() {
            let line = line?;
            if let Err(err) = self.process_line(&line) {
                log::debug!("skipping uplink: {err}");
            }
        }

        self.log_summary();
        Ok(())
    }

    pub fn log_summary(&self) {
        log::info!(
            "`{}` processed {} uplinks, {} decoded, {} rejected",
            self.config.device_name,
            self.stats.processed,
            self.stats.decoded,
            self.stats.rejected
        );
    }
}
