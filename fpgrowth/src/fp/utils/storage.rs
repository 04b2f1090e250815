use crate::fp::itemset::{Item, Itemset};
use std::collections::BTreeMap;

/// Flat storage for many itemsets: one item buffer plus (start, len)
/// offsets, with a support per itemset.
#[derive(Debug, Clone)]
pub struct ItemsetStorage<I> {
    pub(crate) items: Vec<I>,
    pub(crate) offsets: Vec<(usize, usize)>,
    pub(crate) supports: Vec<usize>,
}

/// All frequent itemsets of one size.
#[derive(Debug, Clone)]
pub struct FrequentLevel<I> {
    pub(crate) storage: ItemsetStorage<I>,
    pub itemset_size: usize,
}

impl<I: Clone> ItemsetStorage<I> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
        }
    }

    /// `items` must already be canonical (sorted, no repeats).
    pub(crate) fn add_itemset(&mut self, items: &[I], support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }
}

impl<I> ItemsetStorage<I> {
    pub(crate) fn get_itemset(&self, idx: usize) -> &[I] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub(crate) fn len(&self) -> usize {
        self.offsets.len()
    }
}

impl<I: Clone> FrequentLevel<I> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: &[I], support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, support)
    }
}

impl<I> FrequentLevel<I> {
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    pub fn get_itemset(&self, idx: usize) -> &[I] {
        self.storage.get_itemset(idx)
    }

    pub fn support(&self, idx: usize) -> usize {
        self.storage.supports[idx]
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[I]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[I], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.support(idx)))
    }
}

/// Mined itemsets with their support counts, in ascending itemset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentPatterns<I> {
    patterns: BTreeMap<Itemset<I>, usize>,
    num_transactions: usize,
}

impl<I: Item> FrequentPatterns<I> {
    pub(crate) fn new(patterns: BTreeMap<Itemset<I>, usize>, num_transactions: usize) -> Self {
        Self {
            patterns,
            num_transactions,
        }
    }

    /// Wraps an existing itemset -> support mapping, e.g. one produced
    /// elsewhere, so rules can be generated from it. Keys are normalized;
    /// when two keys normalize to the same set, the later one wins.
    pub fn from_counts<S>(counts: impl IntoIterator<Item = (S, usize)>, num_transactions: usize) -> Self
    where
        S: IntoIterator<Item = I>,
    {
        let patterns = counts
            .into_iter()
            .map(|(items, support)| (Itemset::new(items), support))
            .collect();
        Self::new(patterns, num_transactions)
    }

    /// Support of a canonical (sorted, duplicate-free) itemset.
    pub fn support(&self, itemset: &[I]) -> Option<usize> {
        self.patterns.get(itemset).copied()
    }

    /// Support of an itemset given in any order.
    pub fn support_of(&self, items: impl IntoIterator<Item = I>) -> Option<usize> {
        self.support(&Itemset::new(items))
    }

    pub fn contains(&self, itemset: &[I]) -> bool {
        self.patterns.contains_key(itemset)
    }

    /// The single-item patterns, i.e. the filtered frequency table.
    pub fn singletons(&self) -> BTreeMap<I, usize> {
        self.patterns
            .iter()
            .filter(|(itemset, _)| itemset.len() == 1)
            .map(|(itemset, &support)| (itemset[0].clone(), support))
            .collect()
    }

    /// Itemsets grouped by size; level `k - 1` holds the `k`-itemsets.
    pub fn levels(&self) -> Vec<FrequentLevel<I>> {
        let mut levels: Vec<FrequentLevel<I>> = Vec::new();
        for (itemset, &support) in &self.patterns {
            if itemset.is_empty() {
                continue;
            }
            while levels.len() < itemset.len() {
                levels.push(FrequentLevel::new(levels.len() + 1));
            }
            levels[itemset.len() - 1].add_itemset(itemset, support);
        }
        levels
    }
}

impl<I> FrequentPatterns<I> {
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Length of the longest pattern, 0 when empty.
    pub fn max_len(&self) -> usize {
        self.patterns.keys().map(|itemset| itemset.len()).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset<I>, usize)> {
        self.patterns.iter().map(|(itemset, &support)| (itemset, support))
    }

    pub fn into_map(self) -> BTreeMap<Itemset<I>, usize> {
        self.patterns
    }
}
