//! Measurement counts and execution results.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Measurement counts: bitstring → number of shots that produced it.
///
/// Bitstrings are big-endian: the leftmost character is the
/// highest-indexed classical bit, so a 2-qubit register with both qubits
/// measured as one reads `"11"` and qubit 0 alone reads `"01"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts(FxHashMap<String, u64>);

impl Counts {
    /// Create an empty counts map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` additional observations of a bitstring.
    pub fn add(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for a bitstring (0 if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of recorded shots.
    pub fn total_shots(&self) -> u64 {
        self.0.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether any outcome was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (bitstring, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Outcomes sorted by descending count, ties by bitstring.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// The most frequently observed outcome.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.sorted().first().copied()
    }

    /// Fraction of shots that produced the given bitstring.
    pub fn probability(&self, bitstring: &str) -> f64 {
        let total = self.total_shots();
        if total == 0 {
            return 0.0;
        }
        self.get(bitstring) as f64 / total as f64
    }
}

impl fmt::Display for Counts {
    /// Formats as a mapping literal, most frequent outcome first:
    /// `{"11": 986, "00": 38}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (bitstring, count)) in self.sorted().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{bitstring}\": {count}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        let mut counts = Counts::new();
        for (bitstring, count) in iter {
            counts.add(bitstring, count);
        }
        counts
    }
}

/// The result of executing a circuit on a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the wall-clock execution time.
    #[must_use]
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}
