//! Property-based checks of the miner against a brute-force oracle.
//!
//! 1. **Soundness and completeness**: the mined mapping equals the set of all
//!    itemsets whose true support reaches the threshold, with true supports.
//! 2. **Singletons**: the 1-itemsets equal the frequency counter's table.
//! 3. **Determinism**: repeated runs, serial or parallel, are identical.
//! 4. **Monotonicity**: raising the threshold only removes patterns.
//! 5. **Rule bounds**: every rule's confidence lies in [min_confidence, 1]
//!    and matches a recount over the raw transactions.
//! 6. **Exact fractions**: a fraction `k / n` of `n` transactions converts
//!    back to exactly `k`.

use fpgrowth::{
    count_frequent_items, find_frequent_patterns, find_frequent_patterns_with,
    generate_association_rules, min_count_from_fraction, MiningConfig,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

const UNIVERSE: u8 = 8;

fn transactions() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0..UNIVERSE, 0..7), 0..14)
}

fn true_support(transactions: &[Vec<u8>], itemset: &[u8]) -> usize {
    transactions
        .iter()
        .filter(|tx| itemset.iter().all(|item| tx.contains(item)))
        .count()
}

/// Every non-empty subset of the universe with support >= `min_support`.
fn oracle(transactions: &[Vec<u8>], min_support: usize) -> BTreeMap<Vec<u8>, usize> {
    let mut expected = BTreeMap::new();
    for mask in 1u32..(1 << UNIVERSE) {
        let itemset: Vec<u8> = (0..UNIVERSE).filter(|bit| mask & (1 << bit) != 0).collect();
        let support = true_support(transactions, &itemset);
        if support >= min_support {
            expected.insert(itemset, support);
        }
    }
    expected
}

fn mined(transactions: &[Vec<u8>], config: &MiningConfig) -> BTreeMap<Vec<u8>, usize> {
    find_frequent_patterns_with(transactions, config)
        .unwrap()
        .iter()
        .map(|(itemset, support)| (itemset.to_vec(), support))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn matches_brute_force(txs in transactions(), min_support in 1usize..5, parallel in any::<bool>()) {
        let config = MiningConfig::new(min_support).with_parallel(parallel);
        prop_assert_eq!(mined(&txs, &config), oracle(&txs, min_support));
    }

    #[test]
    fn singletons_match_frequency_table(txs in transactions(), min_support in 1usize..5) {
        let patterns = find_frequent_patterns(&txs, min_support).unwrap();
        let table = count_frequent_items(&txs, min_support).unwrap();
        prop_assert_eq!(patterns.singletons(), table);
    }

    #[test]
    fn deterministic_across_runs_and_modes(txs in transactions(), min_support in 1usize..4) {
        let first = find_frequent_patterns_with(&txs, &MiningConfig::new(min_support).with_parallel(true)).unwrap();
        let second = find_frequent_patterns_with(&txs, &MiningConfig::new(min_support).with_parallel(true)).unwrap();
        let serial = find_frequent_patterns_with(&txs, &MiningConfig::new(min_support).with_parallel(false)).unwrap();

        let order = |p: &fpgrowth::FrequentPatterns<u8>| p.iter().map(|(s, c)| (s.to_vec(), c)).collect::<Vec<_>>();
        prop_assert_eq!(order(&first), order(&second));
        prop_assert_eq!(order(&first), order(&serial));
    }

    #[test]
    fn raising_threshold_only_removes(txs in transactions(), min_support in 1usize..5) {
        let lower = mined(&txs, &MiningConfig::new(min_support));
        let higher = mined(&txs, &MiningConfig::new(min_support + 1));

        prop_assert!(higher.len() <= lower.len());
        for (itemset, support) in &higher {
            prop_assert_eq!(lower.get(itemset), Some(support));
        }
    }

    #[test]
    fn max_len_truncates_the_full_result(txs in transactions(), min_support in 1usize..4, max_len in 1usize..4) {
        let full = mined(&txs, &MiningConfig::new(min_support));
        let capped = mined(&txs, &MiningConfig::new(min_support).with_max_len(max_len));
        let expected: BTreeMap<Vec<u8>, usize> = full
            .into_iter()
            .filter(|(itemset, _)| itemset.len() <= max_len)
            .collect();
        prop_assert_eq!(capped, expected);
    }

    #[test]
    fn rule_confidence_is_bounded_and_recomputable(
        txs in transactions(),
        min_support in 1usize..4,
        min_confidence in 0.0f64..=1.0,
    ) {
        let patterns = find_frequent_patterns(&txs, min_support).unwrap();
        let rules = generate_association_rules(&patterns, min_confidence).unwrap();

        for rule in &rules {
            prop_assert!(rule.confidence >= min_confidence);
            prop_assert!(rule.confidence <= 1.0);
            prop_assert!(rule.antecedent.iter().all(|item| !rule.consequent.contains(item)));

            let mut union = rule.antecedent.to_vec();
            union.extend(rule.consequent.iter().copied());
            let recount = true_support(&txs, &union) as f64 / true_support(&txs, &rule.antecedent) as f64;
            prop_assert!((rule.confidence - recount).abs() < 1e-9);
        }
    }

    #[test]
    fn exact_fraction_converts_to_its_count((num_transactions, count) in (1usize..10_000).prop_flat_map(|n| (Just(n), 1..=n))) {
        let fraction = count as f64 / num_transactions as f64;
        prop_assert_eq!(min_count_from_fraction(fraction, num_transactions), Ok(count));
    }
}
