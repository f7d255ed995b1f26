//! Line filtering and tokenization for normals files
//!
//! Normals files carry every station in one file, so most lines are usually
//! irrelevant to a given query. Filtering on a fixed-width identifier prefix
//! before tokenizing avoids splitting lines that are about to be discarded.

use crate::constants::IDENTIFIER_PREFIX_WIDTH;
use std::collections::HashSet;
use tracing::debug;

/// Filters raw normals file lines by station identifier and tokenizes the
/// survivors
///
/// Holds a fixed set of acceptable identifiers; the filter itself is stateless
/// across calls.
#[derive(Debug, Clone)]
pub struct LineFilter {
    identifiers: HashSet<String>,
}

impl LineFilter {
    /// Create a filter accepting the given station identifiers
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of identifiers this filter accepts
    pub fn identifier_count(&self) -> usize {
        self.identifiers.len()
    }

    /// Check whether a raw line belongs to one of the accepted stations
    ///
    /// Tests the first [`IDENTIFIER_PREFIX_WIDTH`] characters of the line
    /// against the identifier set. Lines shorter than the prefix width are
    /// compared whole.
    pub fn matches(&self, line: &str) -> bool {
        let prefix = line.get(..IDENTIFIER_PREFIX_WIDTH).unwrap_or(line);
        self.identifiers.contains(prefix)
    }

    /// Filter raw lines to the accepted stations and tokenize each survivor
    ///
    /// Retained lines keep their original order. Tokenization strips newline
    /// characters, splits on single spaces, and drops empty tokens, yielding
    /// field lists consumable by
    /// [`RecordFactory`](super::record_factory::RecordFactory).
    pub fn filter<'a, I>(&self, lines: I) -> Vec<Vec<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let filtered: Vec<Vec<String>> = lines
            .into_iter()
            .filter(|line| self.matches(line))
            .map(tokenize)
            .collect();

        debug!("Line filter retained {} lines", filtered.len());
        filtered
    }
}

/// Split a raw line into its whitespace-separated fields
///
/// Strips newline characters and collapses runs of spaces by dropping the
/// empty tokens they produce.
pub fn tokenize(line: &str) -> Vec<String> {
    line.replace('\n', "")
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
