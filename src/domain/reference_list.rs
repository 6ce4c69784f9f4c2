//! Reference list of tickers used as the inclusion filter.
//!
//! The list is a flat text file with one ticker per line. Each line may carry
//! a trailing comma; blank lines are skipped. A missing file is not an error
//! here: it yields an empty list and the pipeline decides what to do with it.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

pub const DEFAULT_REFERENCE_LIST_PATH: &str = "data/katilim.txt";

/// Ordered tickers plus a membership index over them.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    codes: Vec<String>,
    index: HashSet<String>,
}

impl ReferenceSet {
    pub fn new(codes: Vec<String>) -> Self {
        let index = codes.iter().cloned().collect();
        Self { codes, index }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// First `n` codes joined for log output.
    pub fn preview(&self, n: usize) -> String {
        self.codes
            .iter()
            .take(n)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

pub fn parse_reference_list(input: &str) -> ReferenceSet {
    input
        .lines()
        // Also trims space left before the comma: "ASELS ," is "ASELS".
        .map(|line| line.trim().trim_end_matches(',').trim_end())
        .filter(|code| !code.is_empty())
        .collect()
}

pub fn load_reference_list(path: &Path) -> ReferenceSet {
    match fs::read_to_string(path) {
        Ok(content) => parse_reference_list(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "reference list not found");
            ReferenceSet::default()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read reference list");
            ReferenceSet::default()
        }
    }
}
