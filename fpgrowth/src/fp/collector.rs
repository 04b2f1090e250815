use super::itemset::{Item, Itemset};
use super::utils::FrequentPatterns;
use crate::error::{InvariantViolation, Result};
use std::collections::btree_map::{BTreeMap, Entry};

/// Gathers miner output into the final pattern mapping.
///
/// The miner emits every itemset exactly once, so a repeated key means the
/// tree or miner is broken and is reported rather than merged.
#[derive(Debug, Default)]
pub struct PatternCollector<I> {
    patterns: BTreeMap<Itemset<I>, usize>,
}

impl<I: Item> PatternCollector<I> {
    pub fn new() -> Self {
        Self {
            patterns: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, itemset: Itemset<I>, support: usize) -> Result<()> {
        match self.patterns.entry(itemset) {
            Entry::Occupied(entry) => Err(InvariantViolation::DuplicatePattern {
                itemset: format!("{:?}", entry.key().as_slice()),
            }
            .into()),
            Entry::Vacant(entry) => {
                entry.insert(support);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn finish(self, num_transactions: usize) -> FrequentPatterns<I> {
        FrequentPatterns::new(self.patterns, num_transactions)
    }
}
