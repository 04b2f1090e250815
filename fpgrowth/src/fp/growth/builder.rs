use super::tree::FPTree;
use crate::fp::counter::ItemCatalog;
use crate::fp::itemset::Item;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Builds the root tree. Every transaction is reduced to its frequent items
/// in canonical order; transactions with none left are skipped.
pub fn build_fp_tree<I, T>(transactions: &[T], catalog: &ItemCatalog<I>) -> FPTree
where
    I: Item,
    T: AsRef<[I]>,
{
    let mut fp_tree = FPTree::new();
    let mut tx_items = Vec::new();

    for transaction in transactions {
        catalog.ranked_into(transaction.as_ref(), &mut tx_items);
        if !tx_items.is_empty() {
            fp_tree.insert_transaction(&tx_items, 1);
        }
    }

    fp_tree
}

/// Builds a conditional tree from a conditional pattern base.
///
/// Items are filtered and ordered by their counts within the base, not by
/// their global counts; equal counts fall back to `tiebreak`.
pub fn build_conditional_fp_tree(
    prefix_paths: &[(Vec<usize>, usize)],
    min_count: usize,
    tiebreak: &[usize],
) -> FPTree {
    let mut item_counts: HashMap<usize, usize> = HashMap::new();

    for (path, count) in prefix_paths {
        for &item in path {
            *item_counts.entry(item).or_insert(0) += count;
        }
    }

    let mut frequent_items: Vec<(usize, usize)> = item_counts
        .into_iter()
        .filter(|&(_, count)| count >= min_count)
        .collect();
    frequent_items.sort_unstable_by_key(|&(item, count)| (Reverse(count), tiebreak[item]));

    let position: HashMap<usize, usize> = frequent_items
        .iter()
        .enumerate()
        .map(|(pos, &(item, _))| (item, pos))
        .collect();

    let mut conditional_tree = FPTree::new();
    let mut filtered_path = Vec::new();

    for (path, count) in prefix_paths {
        filtered_path.clear();
        filtered_path.extend(path.iter().copied().filter(|item| position.contains_key(item)));

        if !filtered_path.is_empty() {
            filtered_path.sort_unstable_by_key(|item| position[item]);
            conditional_tree.insert_transaction(&filtered_path, *count);
        }
    }

    conditional_tree
}
