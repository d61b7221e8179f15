//! Interactive search loop
//!
//! Reads one query per line until `exit` (any case) or end of input and
//! prints matching records as a table. Input and output are generic so the
//! loop can be driven from tests.

use crate::data::PriceData;
use crate::error::{PriceError, Result};
use crate::formatters::TableFormatter;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const PROMPT: &str = "Enter search text (or 'exit' to quit): ";
pub const EXIT_COMMAND: &str = "exit";
pub const NOTHING_FOUND: &str = "Nothing found.";
pub const FAREWELL: &str = "Done.";

pub fn interactive_search<R: BufRead, W: Write>(
    data: &PriceData,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT).map_err(stdout_error)?;
        output.flush().map_err(stdout_error)?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| PriceError::io(PathBuf::from("<stdin>"), e))?;
        if read == 0 {
            writeln!(output).map_err(stdout_error)?;
            break;
        }

        let query = line.trim_end_matches(['\n', '\r']);
        if query.to_lowercase() == EXIT_COMMAND {
            writeln!(output, "{}", FAREWELL).map_err(stdout_error)?;
            break;
        }

        let results = data.find_text(query);
        tracing::debug!("Query '{}': {} match(es)", query, results.len());

        if results.is_empty() {
            writeln!(output, "{}", NOTHING_FOUND).map_err(stdout_error)?;
        } else {
            write!(output, "{}", TableFormatter::format(&results)).map_err(stdout_error)?;
        }
    }
    Ok(())
}

fn stdout_error(e: std::io::Error) -> PriceError {
    PriceError::io(PathBuf::from("<stdout>"), e)
}
