use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::tree::FPTree;
use crate::config::MiningConfig;
use crate::error::Result;
use crate::fp::collector::PatternCollector;
use crate::fp::combinations::generate_combinations_from_path;
use crate::fp::counter::{count_frequent_items, ItemCatalog};
use crate::fp::itemset::Item;
use crate::fp::utils::FrequentPatterns;
use rayon::prelude::*;
use tracing::{debug, debug_span, trace};

/// A rank-encoded pattern and its support.
pub type Emission = (Vec<usize>, usize);

/// One unit of pending work: a tree still to be mined and the suffix it is
/// conditioned on.
struct Frame {
    tree: FPTree,
    suffix: Vec<usize>,
}

/// Mines all itemsets occurring in at least `min_support` transactions.
pub fn find_frequent_patterns<I, T>(transactions: &[T], min_support: usize) -> Result<FrequentPatterns<I>>
where
    I: Item,
    T: AsRef<[I]>,
{
    find_frequent_patterns_with(transactions, &MiningConfig::new(min_support))
}

pub fn find_frequent_patterns_with<I, T>(
    transactions: &[T],
    config: &MiningConfig,
) -> Result<FrequentPatterns<I>>
where
    I: Item,
    T: AsRef<[I]>,
{
    config.validate()?;

    let span = debug_span!(
        "find_frequent_patterns",
        transactions = transactions.len(),
        min_support = config.min_support
    );
    let _enter = span.enter();

    let frequencies = count_frequent_items(transactions, config.min_support)?;
    let catalog = ItemCatalog::from_frequencies(&frequencies);
    debug!(frequent_items = catalog.len(), "counted item frequencies");

    let fp_tree = build_fp_tree(transactions, &catalog);
    debug!(nodes = fp_tree.node_count(), "built fp-tree");

    let emissions = mine(fp_tree, catalog.tiebreak(), config)?;

    let mut collector = PatternCollector::new();
    for (ranks, support) in emissions {
        collector.record(catalog.itemset(&ranks), support)?;
    }
    let patterns = collector.finish(transactions.len());
    debug!(patterns = patterns.len(), "mined frequent patterns");

    Ok(patterns)
}

/// Mines a root tree into rank-encoded patterns.
///
/// Conditional trees are kept on an explicit stack, so stack depth does not
/// grow with the number of distinct items. With `config.parallel`, every
/// header item of the root tree is expanded on its own rayon task; each task
/// owns the conditional trees it builds.
pub fn mine(fp_tree: FPTree, tiebreak: &[usize], config: &MiningConfig) -> Result<Vec<Emission>> {
    if fp_tree.is_empty() {
        return Ok(Vec::new());
    }

    let root = Frame {
        tree: fp_tree,
        suffix: Vec::new(),
    };

    if !config.parallel || root.tree.has_single_path() {
        let mut emitted = Vec::new();
        drain(vec![root], tiebreak, config, &mut emitted)?;
        return Ok(emitted);
    }

    let items = root.tree.header_table.ascending(tiebreak);
    let per_item: Vec<Vec<Emission>> = items
        .par_iter()
        .map(|&item| -> Result<Vec<Emission>> {
            let mut emitted = Vec::new();
            let mut stack = Vec::new();
            expand_item(&root, item, tiebreak, config, &mut emitted, &mut stack)?;
            drain(stack, tiebreak, config, &mut emitted)?;
            Ok(emitted)
        })
        .collect::<Result<_>>()?;

    Ok(per_item.into_iter().flatten().collect())
}

fn drain(
    mut stack: Vec<Frame>,
    tiebreak: &[usize],
    config: &MiningConfig,
    emitted: &mut Vec<Emission>,
) -> Result<()> {
    while let Some(frame) = stack.pop() {
        if frame.tree.has_single_path() {
            let path = frame.tree.get_single_path();
            for k in 1..=path.len() {
                if !config.admits(frame.suffix.len() + k) {
                    break;
                }
                generate_combinations_from_path(&path, k, &frame.suffix, emitted);
            }
            continue;
        }

        for item in frame.tree.header_table.ascending(tiebreak) {
            expand_item(&frame, item, tiebreak, config, emitted, &mut stack)?;
        }
    }
    Ok(())
}

/// Emits `frame.suffix + item` and queues its conditional tree, if any.
fn expand_item(
    frame: &Frame,
    item: usize,
    tiebreak: &[usize],
    config: &MiningConfig,
    emitted: &mut Vec<Emission>,
    stack: &mut Vec<Frame>,
) -> Result<()> {
    let mut pattern = Vec::with_capacity(frame.suffix.len() + 1);
    pattern.extend_from_slice(&frame.suffix);
    pattern.push(item);

    if !config.admits(pattern.len()) {
        return Ok(());
    }

    let support = frame
        .tree
        .header_table
        .get(item)
        .map_or(0, |entry| entry.count);

    if config.admits(pattern.len() + 1) {
        let prefix_paths = frame.tree.get_prefix_paths(item)?;
        if !prefix_paths.is_empty() {
            let conditional_tree =
                build_conditional_fp_tree(&prefix_paths, config.min_support, tiebreak);
            if !conditional_tree.is_empty() {
                trace!(
                    suffix_len = pattern.len(),
                    nodes = conditional_tree.node_count(),
                    "queued conditional tree"
                );
                emitted.push((pattern.clone(), support));
                stack.push(Frame {
                    tree: conditional_tree,
                    suffix: pattern,
                });
                return Ok(());
            }
        }
    }

    emitted.push((pattern, support));
    Ok(())
}
