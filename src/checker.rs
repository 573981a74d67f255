//! Checker session orchestration.
//!
//! Reads the blocked set, builds the blocklist once, then answers every
//! query in input order with a [`Verdict`].

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::error::Result;
use crate::filter::{Blocklist, Domain};
use crate::input::InputReader;
use crate::stats::CheckStats;

/// Configuration for a checker run.
#[derive(Debug, Clone, Default)]
pub struct CheckerConfig {
    /// Read the session from this file instead of stdin.
    pub input: Option<PathBuf>,
}

/// Outcome of a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The domain or one of its ancestors is blocked.
    Bad,
    Good,
}

impl Verdict {
    pub fn of(blocklist: &Blocklist, domain: &Domain) -> Self {
        if blocklist.is_forbidden(domain) {
            Verdict::Bad
        } else {
            Verdict::Good
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Bad => "Bad",
            Verdict::Good => "Good",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run one session: blocked set, then queries, one verdict line per query.
pub fn check_stream<R, W>(input: R, mut output: W) -> Result<CheckStats>
where
    R: BufRead,
    W: Write,
{
    let mut reader = InputReader::new(input);

    let blocked = reader.read_section()?;
    let total = blocked.len();
    let blocklist = Blocklist::new(blocked);
    let mut stats = CheckStats::new(total, blocklist.len());

    let queries = reader.read_section()?;
    for query in &queries {
        let verdict = Verdict::of(&blocklist, query);
        tracing::trace!(domain = %query, %verdict, "checked");
        writeln!(output, "{verdict}")?;
        stats.record(verdict);
    }
    output.flush()?;

    Ok(stats)
}

/// Run the checker with the given configuration.
///
/// Verdicts go to stdout; the summary is logged.
pub fn run(config: &CheckerConfig) -> Result<CheckStats> {
    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    let stats = match &config.input {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading session from file");
            check_stream(BufReader::new(File::open(path)?), output)?
        }
        None => check_stream(io::stdin().lock(), output)?,
    };

    tracing::info!(
        blocked = stats.blocked,
        compacted = stats.compacted,
        queries = stats.queries,
        bad = stats.bad,
        good = stats.good,
        "session complete"
    );

    Ok(stats)
}
