//! Line-oriented integer reader for the statistics engine.

use std::io::BufRead;

use tracing::debug;

use crate::error::StatsError;
use crate::stats::NumberList;

/// Line that ends the numeric stream. Not part of the data.
pub const STOP_KEYWORD: &str = "stop";

/// Reads one integer per line until [`STOP_KEYWORD`] or end of stream.
///
/// The first line that is not an integer aborts the read.
pub fn read_numbers<R: BufRead>(reader: R) -> Result<NumberList, StatsError> {
    let mut values = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let token = line.trim();

        if token == STOP_KEYWORD {
            debug!(line = index + 1, "stop keyword reached");
            break;
        }

        let value = token
            .parse::<i64>()
            .map_err(|source| StatsError::InvalidToken {
                line: index + 1,
                token: token.to_string(),
                source,
            })?;
        values.push(value);
    }

    debug!(count = values.len(), "collected numbers");
    Ok(NumberList::new(values))
}
