//! statistics: summary statistics of integers read from stdin.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing::debug;

use statbridge::cli::{init_logging, normalize_long_flags, parse_args, report_error, StatsArgs};
use statbridge::input::read_numbers;
use statbridge::report::{render_report, StatsFlags};

fn main() -> ExitCode {
    let args: StatsArgs = parse_args(normalize_long_flags(std::env::args_os()));
    init_logging();

    match run(args.flags()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(flags: StatsFlags) -> anyhow::Result<()> {
    if !flags.any() {
        debug!("no statistics selected");
    }

    let numbers = read_numbers(io::stdin().lock())?;
    let lines = render_report(&numbers, flags)?;

    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}").context("Failed to write report")?;
    }
    stdout.flush().context("Failed to write report")?;

    Ok(())
}
