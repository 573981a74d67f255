//! Blocklist of forbidden domains.
//!
//! Entries are sorted in reverse-label order and compacted once at
//! construction, so each lookup is a single binary search followed by one
//! containment check.

use std::slice;

use super::Domain;

/// A compacted, sorted set of blocked domains.
///
/// No entry is a subdomain of another entry: only the most general ancestor
/// of every blocked family is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    entries: Vec<Domain>,
}

impl Blocklist {
    /// Build a blocklist from any collection of domains.
    ///
    /// Order, duplicates and nesting in the input do not matter.
    pub fn new<I>(domains: I) -> Self
    where
        I: IntoIterator<Item = Domain>,
    {
        let mut entries: Vec<Domain> = domains.into_iter().collect();
        let total = entries.len();

        entries.sort_unstable();
        // Descendants sort right after their ancestor, so comparing each
        // entry with the last kept one removes every covered domain.
        entries.dedup_by(|next, kept| next.is_subdomain_of(kept) || kept.is_subdomain_of(next));
        entries.shrink_to_fit();

        tracing::debug!(total, kept = entries.len(), "compacted blocklist");

        Self { entries }
    }

    /// Check if a domain is blocked, either directly or through an ancestor.
    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        let upper = self.entries.partition_point(|entry| entry <= domain);

        match upper.checked_sub(1) {
            Some(idx) => domain.is_subdomain_of(&self.entries[idx]),
            None => false,
        }
    }

    /// Returns the number of domains left after compaction.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compacted entries in reverse-label order.
    pub fn entries(&self) -> &[Domain] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, Domain> {
        self.entries.iter()
    }
}

impl FromIterator<Domain> for Blocklist {
    fn from_iter<I: IntoIterator<Item = Domain>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Blocklist {
    type Item = &'a Domain;
    type IntoIter = slice::Iter<'a, Domain>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
