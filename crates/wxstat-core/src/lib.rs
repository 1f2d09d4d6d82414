//! Core records, reducers, unit conversions and report rendering for wxstat
//!
//! Everything in this crate is a pure function over in-memory data. Opening
//! and decoding input files is left to the caller.

pub mod records;
pub mod reducers;
pub mod report;
pub mod types;
pub mod units;

pub use records::*;
pub use reducers::*;
pub use report::*;
pub use types::*;
pub use units::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    /// Statistics over an empty sequence are rejected rather than defaulted.
    #[error("Cannot compute {operation} of an empty sequence")]
    EmptyInput { operation: &'static str },

    #[error("Invalid ISO-8601 date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },
}

pub type SummaryResult<T> = Result<T, SummaryError>;
