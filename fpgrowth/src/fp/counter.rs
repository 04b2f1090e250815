use super::itemset::{Item, Itemset};
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Counts, for every item, the number of transactions containing it and keeps
/// the items reaching `min_support`. An item repeated inside one transaction
/// is counted once.
pub fn count_frequent_items<I, T>(transactions: &[T], min_support: usize) -> Result<BTreeMap<I, usize>>
where
    I: Item,
    T: AsRef<[I]>,
{
    if min_support == 0 {
        return Err(Error::InvalidSupport { min_support });
    }

    let mut item_counts: HashMap<&I, usize> = HashMap::new();
    let mut seen: HashSet<&I> = HashSet::new();

    for transaction in transactions {
        seen.clear();
        for item in transaction.as_ref() {
            if seen.insert(item) {
                *item_counts.entry(item).or_insert(0) += 1;
            }
        }
    }

    Ok(item_counts
        .into_iter()
        .filter(|&(_, count)| count >= min_support)
        .map(|(item, count)| (item.clone(), count))
        .collect())
}

/// Frequent items in canonical order: descending count, ties broken by
/// ascending item identifier. An item's position in that order is its rank;
/// trees only ever store ranks.
#[derive(Debug, Clone)]
pub struct ItemCatalog<I> {
    items: Vec<I>,
    counts: Vec<usize>,
    ranks: HashMap<I, usize>,
    // rank -> position of the item in ascending identifier order
    tiebreak: Vec<usize>,
}

impl<I: Item> ItemCatalog<I> {
    pub fn from_frequencies(frequencies: &BTreeMap<I, usize>) -> Self {
        // BTreeMap iteration is already ascending by identifier, so a stable
        // sort on count alone yields the canonical order.
        let mut ordered: Vec<(usize, &I, usize)> = frequencies
            .iter()
            .enumerate()
            .map(|(id_pos, (item, &count))| (id_pos, item, count))
            .collect();
        ordered.sort_by(|a, b| b.2.cmp(&a.2));

        let mut items = Vec::with_capacity(ordered.len());
        let mut counts = Vec::with_capacity(ordered.len());
        let mut tiebreak = Vec::with_capacity(ordered.len());
        let mut ranks = HashMap::with_capacity(ordered.len());

        for (rank, (id_pos, item, count)) in ordered.into_iter().enumerate() {
            ranks.insert(item.clone(), rank);
            items.push(item.clone());
            counts.push(count);
            tiebreak.push(id_pos);
        }

        Self {
            items,
            counts,
            ranks,
            tiebreak,
        }
    }

    pub fn rank_of(&self, item: &I) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    /// Maps a transaction to the ranks of its frequent items, in canonical
    /// order and without repeats. `buf` is cleared first.
    pub fn ranked_into(&self, transaction: &[I], buf: &mut Vec<usize>) {
        buf.clear();
        buf.extend(transaction.iter().filter_map(|item| self.rank_of(item)));
        buf.sort_unstable();
        buf.dedup();
    }

    pub fn itemset(&self, ranks: &[usize]) -> Itemset<I> {
        ranks.iter().map(|&rank| self.items[rank].clone()).collect()
    }
}

impl<I> ItemCatalog<I> {
    pub fn item(&self, rank: usize) -> &I {
        &self.items[rank]
    }

    pub fn count(&self, rank: usize) -> usize {
        self.counts[rank]
    }

    pub fn tiebreak(&self) -> &[usize] {
        &self.tiebreak
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
