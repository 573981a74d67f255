//! Domain checker - subdomain-aware blocklist lookups.
//!
//! The [`filter`] module holds the core; [`input`] and [`checker`] wrap it
//! in the line-oriented session used by the binary.

pub mod checker;
pub mod error;
pub mod filter;
pub mod input;
pub mod stats;
