//! Core types for textlab
//!
//! This module defines the value types shared across the engines: string
//! interning, frequency tables, and configuration.

use crate::errors::{Result, TextLabError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Threshold used when scoring whole texts without an explicit one
pub const DEFAULT_PLAGIARISM_THRESHOLD: f64 = 0.3;

// ============================================================================
// String Interning
// ============================================================================

/// A pool for string interning.
///
/// Each unique token is stored once and gets a dense `u32` id, which turns a
/// token sequence into a numeric one that compares cheaply during alignment.
#[derive(Debug, Default)]
pub struct StringPool {
    /// Maps strings to their interned IDs
    string_to_id: FxHashMap<Arc<str>, u32>,
    /// Maps IDs back to strings
    id_to_string: Vec<Arc<str>>,
}

impl StringPool {
    /// Create a new empty string pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a string pool with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            string_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            id_to_string: Vec::with_capacity(capacity),
        }
    }

    /// Intern a string, returning its ID
    pub fn intern(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.string_to_id.get(s) {
            return id;
        }

        let id = self.id_to_string.len() as u32;
        let arc: Arc<str> = s.into();
        self.string_to_id.insert(arc.clone(), id);
        self.id_to_string.push(arc);
        id
    }

    /// Get a string by its ID
    pub fn get(&self, id: u32) -> Option<&str> {
        self.id_to_string.get(id as usize).map(|s| s.as_ref())
    }

    /// Get the number of unique strings in the pool
    pub fn len(&self) -> usize {
        self.id_to_string.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.id_to_string.is_empty()
    }
}

// ============================================================================
// Frequency Table
// ============================================================================

/// Occurrence counts of tokens within one token sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`
    pub fn increment(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
    }

    /// Occurrences of `word` (0 when absent)
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(token, count)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// The `n` most frequent tokens.
    ///
    /// Ordered by descending count; equal counts are ordered by ascending
    /// token so the result never depends on hash iteration order.
    pub fn top_n(&self, n: usize) -> Vec<String> {
        let mut entries: Vec<(&String, &usize)> = self.counts.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        entries
            .into_iter()
            .take(n)
            .map(|(word, _)| word.clone())
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for concordance extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcordanceConfig {
    /// Number of tokens kept to the left of each occurrence
    pub left_context_size: usize,
    /// Number of tokens kept to the right of each occurrence
    pub right_context_size: usize,
    /// Sort windows by their first token (true) or by the token after the word
    #[serde(default = "default_left_sort")]
    pub left_sort: bool,
    /// Number of most frequent words to report
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Words removed before frequencies are computed
    #[serde(default)]
    pub stopwords: Vec<String>,
}

fn default_left_sort() -> bool {
    true
}

fn default_top_n() -> usize {
    10
}

impl Default for ConcordanceConfig {
    fn default() -> Self {
        Self {
            left_context_size: 2,
            right_context_size: 3,
            left_sort: default_left_sort(),
            top_n: default_top_n(),
            stopwords: Vec::new(),
        }
    }
}

impl ConcordanceConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing optional fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.left_context_size == 0 && self.right_context_size == 0 {
            return Err(TextLabError::invalid_config(
                "left_context_size and right_context_size cannot both be 0",
            ));
        }
        Ok(())
    }

    /// Builder method: set both context sizes
    pub fn with_context(mut self, left: usize, right: usize) -> Self {
        self.left_context_size = left;
        self.right_context_size = right;
        self
    }

    /// Builder method: choose the sort side
    pub fn with_left_sort(mut self, left_sort: bool) -> Self {
        self.left_sort = left_sort;
        self
    }

    /// Builder method: set top N words
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set stopwords
    pub fn with_stopwords<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.stopwords = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }
}

/// Configuration for plagiarism scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlagiarismConfig {
    /// Minimum LCS length / sentence length ratio for a pair to count
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_PLAGIARISM_THRESHOLD
}

impl Default for PlagiarismConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl PlagiarismConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(TextLabError::invalid_config(format!(
                "threshold must be between 0 and 1, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Builder method: set threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}
