//! The `tether-worker` binary: the bridge worker process.
//!
//! Spawned by a driver with the command protocol on stdin and frames on
//! stdout. Stderr stays outside the protocol and is only written to in
//! debug mode.

use std::io;

use anyhow::Context;
use clap::Parser;
use tether_worker::{Worker, WorkerConfig};

#[derive(Parser)]
#[command(name = "tether-worker")]
#[command(about = "Bridge worker exposing the tether runtime over stdin/stdout", long_about = None)]
#[command(version)]
struct Cli {
    /// Echo each incoming command name to stderr before execution
    /// (also enabled by TETHER_DEBUG=1)
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = WorkerConfig::from_env();
    if cli.debug {
        config.debug = true;
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut worker = Worker::new(stdin, stdout, config);
    worker.run().context("worker loop failed")?;
    Ok(())
}
