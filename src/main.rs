use std::fs;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{debug, info};

use bunkai::batch::{BatchRequest, RunState, start_batch};
use bunkai::cli::CliArgs;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! so failures before logger init
        // are still reported
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Bunkai sprite sheet splitter v{}", env!("CARGO_PKG_VERSION"));

    let output_dir = cli.output.unwrap_or_else(|| ".".into());
    if !output_dir.exists() {
        fs::create_dir_all(&output_dir).with_context(|| {
            format!("failed to create output directory {}", output_dir.display())
        })?;
    }

    // One worker carries the whole batch; the shell tracks the run
    // state and blocks for the single terminal status.
    let task = start_batch(BatchRequest {
        descriptor: cli.atlas,
        sheet: cli.sheet,
        output_dir,
    });

    let outcome = task.wait();
    let state = if outcome.is_ok() {
        RunState::Done
    } else {
        RunState::Failed
    };
    debug!("batch finished: {state:?}");

    match outcome {
        Ok(message) => {
            info!("{message}");
            Ok(())
        }
        Err(message) => Err(anyhow!(message)),
    }
}
