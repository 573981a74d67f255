//! Line-oriented session input.
//!
//! A session is a count line followed by that many domain lines, twice: once
//! for the blocked set and once for the queries.

use std::io::BufRead;

use crate::error::{CheckerError, Result};
use crate::filter::Domain;

/// Reads counts and domain names line by line, tracking line numbers for
/// error reporting.
pub struct InputReader<R> {
    inner: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next line without its terminator.
    fn next_line(&mut self) -> Result<&str> {
        self.buf.clear();
        self.line += 1;

        if self.inner.read_line(&mut self.buf)? == 0 {
            return Err(CheckerError::MissingLine { line: self.line });
        }

        let line = self.buf.strip_suffix('\n').unwrap_or(self.buf.as_str());
        Ok(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Read a line holding an unsigned count.
    pub fn read_count(&mut self) -> Result<usize> {
        let line = self.line + 1;
        let text = self.next_line()?.trim();

        text.parse().map_err(|_| CheckerError::InvalidCount {
            line,
            value: text.to_string(),
        })
    }

    /// Read `count` domain lines verbatim.
    pub fn read_domains(&mut self, count: usize) -> Result<Vec<Domain>> {
        let mut domains = Vec::with_capacity(count);

        for _ in 0..count {
            let line = self.line + 1;
            let name = self.next_line()?;
            if name.is_empty() {
                return Err(CheckerError::EmptyDomain { line });
            }
            domains.push(Domain::new(name));
        }

        Ok(domains)
    }

    /// Read a count line followed by that many domain lines.
    pub fn read_section(&mut self) -> Result<Vec<Domain>> {
        let count = self.read_count()?;
        self.read_domains(count)
    }
}
