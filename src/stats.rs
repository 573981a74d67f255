//! Statistics for a checker session.

use crate::checker::Verdict;

/// Counters collected while answering queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckStats {
    /// Domains read into the blocked set, before compaction.
    pub blocked: usize,
    /// Domains left in the blocklist after compaction.
    pub compacted: usize,
    pub queries: u64,
    pub bad: u64,
    pub good: u64,
}

impl CheckStats {
    pub fn new(blocked: usize, compacted: usize) -> Self {
        Self {
            blocked,
            compacted,
            ..Self::default()
        }
    }

    pub fn record(&mut self, verdict: Verdict) {
        self.queries += 1;
        match verdict {
            Verdict::Bad => self.bad += 1,
            Verdict::Good => self.good += 1,
        }
    }

    /// Entries dropped because an ancestor or duplicate already covers them.
    pub fn redundant(&self) -> usize {
        self.blocked - self.compacted
    }
}
