//! Feature demo CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse arguments** with `clap`.
//! 2. **Wire logging**: a `tracing-subscriber` text or JSON layer on stderr.
//!    Every event from the `registry` and `github` crates flows through it.
//! 3. **Run the command** inside a `run` span tagged with a fresh
//!    [`registry::RunId`], writing program output to stdout.
//!
//! With no arguments the program builds the "API Demo" registry, adds three
//! features and lists them.

use anyhow::Result;
use clap::Parser;
use registry::RunId;

mod cli;
mod console;
mod demo;
mod logging;

fn main() -> Result<()> {
    let parsed = cli::Cli::parse();
    logging::init(parsed.log_format, parsed.log_level)?;

    let run_id = RunId::new_random();
    let span = tracing::info_span!("run", %run_id);
    let _entered = span.enter();

    parsed.dispatch(&mut console::Console::stdout())
}
