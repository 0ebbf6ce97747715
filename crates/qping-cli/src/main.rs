use anyhow::Result;
use qping_core::flags::Flags;
use qping_core::{logging, probe};
use std::io;

mod cli;

use crate::cli::Parsed;

fn main() {
    // Initialize logging as early as possible; a missing state dir is not fatal.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    let flags = match cli::parse_args(std::env::args_os()) {
        Ok(Parsed::Run(flags)) => flags,
        Ok(Parsed::Help(text)) => {
            print!("{}", text);
            return;
        }
        Err(err) => {
            tracing::debug!("argument parsing failed: {}", err);
            eprintln!("{}", err);
            eprintln!("Argument parsing failed.");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&flags) {
        eprintln!("qping error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(flags: &Flags) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    probe::run(flags, &mut out)
}
