//! Errors raised while reading a checker session.
//!
//! Building a [`Blocklist`](crate::filter::Blocklist) and querying it never
//! fail; only the surrounding input and output can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("line {line}: unexpected end of input")]
    MissingLine { line: usize },

    #[error("line {line}: invalid count {value:?}")]
    InvalidCount { line: usize, value: String },

    #[error("line {line}: empty domain name")]
    EmptyDomain { line: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
