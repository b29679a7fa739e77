//! statbridge: two small command-line utilities.
//!
//! - `statistics` reads integers from stdin until `stop` and prints mean,
//!   median, mode and standard deviation.
//! - `readdb` converts a recipe database between XML and JSON.

pub mod cli;
pub mod error;
pub mod formats;
pub mod input;
pub mod recipes;
pub mod report;
pub mod stats;
mod xml_db;
