use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;

use super::Tally;
use crate::error::{Result, StatsError};
use crate::record::{Record, fields};

/// Registrant counts per state, ranked by popularity.
///
/// States are kept in first-seen order. Ranking sorts them by descending count
/// with a stable sort, so among equal counts the state seen first ranks higher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateRanking {
    counts: IndexMap<String, u64>,
}

/// One line of the state report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub state: String,
    pub count: u64,
    /// 1 is the state with the most registrants.
    pub rank: usize,
}

impl fmt::Display for StateCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\t{}\t({})", self.state, self.count, self.rank)
    }
}

impl StateRanking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, state: &str) {
        *self.counts.entry(state.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, state: &str) -> Option<u64> {
        self.counts.get(state).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Adds another shard's counts. States new to `self` are appended in the
    /// order `other` first saw them.
    pub fn merge(&mut self, other: &Self) {
        for (state, count) in &other.counts {
            *self.counts.entry(state.clone()).or_insert(0) += count;
        }
    }

    /// State codes from most to fewest registrants.
    pub fn ranking(&self) -> Vec<&str> {
        let mut ranked: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(state, count)| (state.as_str(), *count))
            .collect();
        ranked.sort_by_key(|(_, count)| Reverse(*count));
        ranked.into_iter().map(|(state, _)| state).collect()
    }

    /// Alphabetical report where every state carries its popularity rank.
    pub fn render(&self) -> Vec<StateCount> {
        let ranks: HashMap<&str, usize> = self
            .ranking()
            .into_iter()
            .enumerate()
            .map(|(position, state)| (state, position + 1))
            .collect();

        let mut rows: Vec<StateCount> = self
            .counts
            .iter()
            .map(|(state, count)| StateCount {
                state: state.clone(),
                count: *count,
                rank: ranks[state.as_str()],
            })
            .collect();

        rows.sort_by(|a, b| a.state.cmp(&b.state));
        rows
    }
}

impl Tally for StateRanking {
    fn observe_record(&mut self, record: &Record) -> Result<()> {
        let state = record.get(fields::STATE).ok_or(StatsError::AbsentField {
            field: fields::STATE,
        })?;
        self.observe(state);
        Ok(())
    }
}
