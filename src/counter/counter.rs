use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;

use crate::errors::errors::Error;
use crate::scanner::pattern::ScanPattern;
use crate::scanner::scanner::scan;
use crate::source::source::read_source;

/// Mapping from captured token to occurrence count. First-encounter
/// order is kept so display output is reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> FrequencyTable {
        FrequencyTable {
            counts: HashMap::new(),
            order: vec![],
        }
    }

    pub fn record(&mut self, token: String) {
        if let Some(count) = self.counts.get_mut(&token) {
            *count += 1;
        } else {
            self.order.push(token.clone());
            self.counts.insert(token, 1);
        }
    }

    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    // Descending count, ties in first-encounter order.
    pub fn entries(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .order
            .iter()
            .map(|token| (token.clone(), self.counts[token]))
            .collect();

        // Stable sort, so equal counts stay in encounter order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        entries
    }
}

impl Display for FrequencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (token, count) in self.entries() {
            writeln!(f, "{}: {}", token, count)?;
        }

        Ok(())
    }
}

pub fn count_tokens(source: &str, pattern: &ScanPattern) -> FrequencyTable {
    let mut table = FrequencyTable::new();

    for matched in scan(source, pattern, None) {
        table.record(matched.token);
    }

    table
}

pub fn count_file(path: &Path, pattern: &ScanPattern) -> Result<FrequencyTable, Error> {
    let source = read_source(path)?;
    let matches = scan(&source, pattern, Some(path.to_string_lossy().into_owned()));

    let mut table = FrequencyTable::new();

    for matched in matches {
        table.record(matched.token);
    }

    Ok(table)
}
