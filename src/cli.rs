//! Command-line surface shared by the `statistics` and `readdb` binaries.
//!
//! Argument structs, logging setup and error reporting live here so the
//! binaries stay thin.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::report::StatsFlags;

/// Arguments of the `statistics` binary.
#[derive(Debug, Parser)]
#[command(name = "statistics")]
#[command(about = "Print summary statistics of integers read from stdin until \"stop\"")]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
pub struct StatsArgs {
    /// Print the mean.
    #[arg(long)]
    pub mean: bool,

    /// Print the median.
    #[arg(long)]
    pub median: bool,

    /// Print the mode.
    #[arg(long)]
    pub mode: bool,

    /// Print the population standard deviation.
    #[arg(long)]
    pub sd: bool,
}

impl StatsArgs {
    pub const fn flags(&self) -> StatsFlags {
        StatsFlags {
            mean: self.mean,
            median: self.median,
            mode: self.mode,
            sd: self.sd,
        }
    }
}

/// Arguments of the `readdb` binary.
#[derive(Debug, Parser)]
#[command(name = "readdb")]
#[command(about = "Convert a recipe database between XML and JSON")]
#[command(version)]
pub struct ConvertArgs {
    /// Database file; `.xml` is printed as JSON and `.json` as XML.
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Rewrites single-dash long flags (`-mean`) to clap's `--mean` form.
///
/// Short flags (`-f`), values and everything after `--` are left alone.
pub fn normalize_long_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if index == 0 || passthrough {
            normalized.push(arg);
            continue;
        }

        match arg.to_str() {
            Some("--") => {
                passthrough = true;
                normalized.push(arg);
            }
            Some(text) if is_single_dash_long(text) => normalized.push(format!("-{text}").into()),
            _ => normalized.push(arg),
        }
    }

    normalized
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(name) = arg.strip_prefix('-') else {
        return false;
    };
    let name = name.split_once('=').map_or(name, |(name, _)| name);
    name.len() > 1
        && name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Parses arguments, exiting with status 1 on a usage error.
///
/// `--help` and `--version` print to stdout and exit 0.
pub fn parse_args<P, I, T>(args: I) -> P
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match P::try_parse_from(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            let code = i32::from(err.use_stderr());
            // Exiting anyway.
            err.print().ok();
            std::process::exit(code);
        }
    }
}

/// Installs a compact stderr logger filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Prints an error and its cause chain to stderr.
pub fn report_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "error:".red().bold());
}
