//! Selection and formatting of the statistics report.

use crate::error::StatsError;
use crate::stats::NumberList;

/// Which statistics to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct StatsFlags {
    pub mean: bool,
    pub median: bool,
    pub mode: bool,
    pub sd: bool,
}

impl StatsFlags {
    pub const fn any(self) -> bool {
        self.mean || self.median || self.mode || self.sd
    }
}

/// Builds the report lines for the selected statistics.
///
/// Lines always come out in the order mean, median, mode, SD. Statistics
/// that are not selected are never computed, so an empty list only fails
/// when something was requested.
pub fn render_report(numbers: &NumberList, flags: StatsFlags) -> Result<Vec<String>, StatsError> {
    let mut lines = Vec::new();

    if flags.mean {
        lines.push(format!("Mean: {:.2}", numbers.mean()?));
    }
    if flags.median {
        lines.push(format!("Median: {:.2}", numbers.median()?));
    }
    if flags.mode {
        lines.push(format!("Mode: {}", numbers.mode()?));
    }
    if flags.sd {
        lines.push(format!("SD: {:.2}", numbers.std_dev()?));
    }

    Ok(lines)
}
