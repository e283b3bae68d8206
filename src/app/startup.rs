//! Process startup: argument parsing, logging initialization, task execution

use clap::Parser;
use log::debug;
use std::io::IsTerminal;

use super::cli::args::Args;
use crate::core::logging::init_logging;
use crate::core::time::SystemClock;
use crate::core::version::{build_time, git_hash};
use crate::generator::{GenerateVersionTask, LogSink};

/// Run the version generator end to end; returns the process exit code.
pub fn startup() -> i32 {
    let args = Args::parse();

    let use_color = args
        .color
        .unwrap_or_else(|| std::io::stdout().is_terminal());

    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
        return 1;
    }

    debug!("genversion built {} ({})", build_time(), git_hash());

    let task = GenerateVersionTask::new(args.to_request());
    if task.execute(&SystemClock, &LogSink) {
        0
    } else {
        1
    }
}
