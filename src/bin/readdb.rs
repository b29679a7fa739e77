//! readdb: prints an XML recipe database as JSON and a JSON one as XML.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;

use statbridge::cli::{init_logging, normalize_long_flags, parse_args, report_error, ConvertArgs};
use statbridge::formats::convert_file;

fn main() -> ExitCode {
    let args: ConvertArgs = parse_args(normalize_long_flags(std::env::args_os()));
    init_logging();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &ConvertArgs) -> anyhow::Result<()> {
    let output = convert_file(&args.file)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write converted database")?;
    stdout.flush().context("Failed to write converted database")?;

    Ok(())
}
