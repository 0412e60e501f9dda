//! Typed failures for the dispatch pipeline.
//!
//! Every failure aborts the whole run: the pipeline is a deterministic
//! transform, so retrying the same input reproduces the same error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input schema is missing one or more required columns.
    ///
    /// Carries every missing name, in contract order, so the caller sees the
    /// full list in one message instead of fixing columns one at a time.
    #[error("missing required columns: {}", .0.join(", "))]
    Schema(Vec<String>),

    /// A scan timestamp did not match the `MM/DD/YYYY HH:mm:ss` contract.
    #[error("invalid scan timestamp {value:?} on line {line}: {source}")]
    Parse {
        /// 1-based line number in the input file (the header is line 1).
        line: usize,
        value: String,
        source: chrono::ParseError,
    },

    /// The raw bytes could not be read as a delimited table at all.
    #[error("input could not be read as a delimited table: {0}")]
    MalformedInput(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
