mod cli;
mod client;
mod config;
mod device;
mod dto;
mod env;
mod error;
mod protocol;

use crate::{cli::WorkingMode, client::worker::Worker};
use anyhow::anyhow;
use clap::Parser;
use cli::Cli;
use client::{file::FileSender, sender::Sender, stdout::StdoutSender};
use config::Config;
use signal_hook::{
    consts::{SIGHUP, SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    fs::File,
    io::{self, BufReader},
    str::FromStr,
    thread,
};

fn main() -> anyhow::Result<()> {
    env::init();
    env_logger::init();

    let args = Cli::parse();

    let mut signals = Signals::new([SIGTERM, SIGINT, SIGHUP])?;
    thread::spawn(move || {
        for _ in signals.forever() {
            log::info!("received shutdown request");
            std::process::exit(0);
        }
    });

    // config file, defaults if neither the flag nor the env var is set
    let config = match args.config.or_else(env::config_path) {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            Config::load(&path)?
        }
        None => Default::default(),
    };
    log::debug!("config:\n{}", config.serialize()?);

    // egress
    let stdout_sender;
    let file_sender;
    let sender: &dyn Sender = match &args.output {
        Some(path) => {
            file_sender = FileSender::new(path)?;
            &file_sender
        }
        None => {
            stdout_sender = StdoutSender::new();
            &stdout_sender
        }
    };
    sender.setup()?;

    let mut worker = Worker::new(sender, config);

    // working mode
    let working_mode = WorkingMode::from_str(&args.mode)?;
    match working_mode {
        WorkingMode::StdinMode => {
            log::info!("reading uplinks from stdin");
            worker.run(io::stdin().lock())?;
        }
        WorkingMode::FileMode => {
            let input_path = args.input.ok_or(anyhow!(
                "input file path is required in file mode, check --help"
            ))?;

            log::info!("reading uplinks from {}", input_path.display());
            let input_file = File::open(input_path)?;
            worker.run(BufReader::new(input_file))?;
        }
        WorkingMode::HexMode => {
            let payload = args.payload.ok_or(anyhow!(
                "payload is required in hex mode, check --help"
            ))?;

            worker.process_hex(&payload)?;
            worker.log_summary();
        }
    }

    Ok(())
}
