//! Domain filtering.
//!
//! [`Domain`] defines the reverse-label order and subdomain containment that
//! [`Blocklist`] relies on to answer lookups with one binary search.

mod blocklist;
mod domain;

pub use blocklist::Blocklist;
pub use domain::{Domain, SEPARATOR};
