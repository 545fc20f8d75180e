use super::sender::Sender;
use std::io::{self, Write};

/// StdoutSender writes every message as a single line to stdout so the
/// output can be piped into whatever forwards it upstream.
#[derive(Debug, Default)]
pub struct StdoutSender {}

impl StdoutSender {
    pub fn new() -> Self {
        Self {}
    }
}

impl Sender for StdoutSender {
    fn setup(&self) -> anyhow::Result<()> {
        log::debug!("egress to stdout");
        Ok(())
    }

    fn send(&self, data: String) -> anyhow::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{data}")?;
        stdout.flush()?;
        Ok(())
    }
}
