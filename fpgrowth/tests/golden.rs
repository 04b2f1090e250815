//! Fixed vectors with fully known answers.

use fpgrowth::{
    find_frequent_patterns, generate_association_rules, Error, FrequentPatterns, Itemset,
};
use std::collections::BTreeMap;

fn textbook() -> Vec<Vec<u32>> {
    vec![
        vec![1, 2, 5],
        vec![2, 4],
        vec![2, 3],
        vec![1, 2, 4],
        vec![1, 3],
        vec![2, 3],
        vec![1, 3],
        vec![1, 2, 3, 5],
        vec![1, 2, 3],
    ]
}

fn as_map(patterns: &FrequentPatterns<u32>) -> BTreeMap<Vec<u32>, usize> {
    patterns
        .iter()
        .map(|(itemset, support)| (itemset.to_vec(), support))
        .collect()
}

#[test]
fn textbook_patterns_at_support_two() {
    let patterns = find_frequent_patterns(&textbook(), 2).unwrap();

    let expected: BTreeMap<Vec<u32>, usize> = [
        (vec![1], 6),
        (vec![2], 7),
        (vec![3], 6),
        (vec![4], 2),
        (vec![5], 2),
        (vec![1, 2], 4),
        (vec![1, 3], 4),
        (vec![1, 5], 2),
        (vec![2, 3], 4),
        (vec![2, 4], 2),
        (vec![2, 5], 2),
        (vec![1, 2, 3], 2),
        (vec![1, 2, 5], 2),
    ]
    .into_iter()
    .collect();

    assert_eq!(as_map(&patterns), expected);
    assert_eq!(patterns.num_transactions(), 9);
    assert_eq!(patterns.support_of([5, 4]), None);
}

#[test]
fn textbook_rules_at_confidence_point_seven() {
    let patterns = find_frequent_patterns(&textbook(), 2).unwrap();
    let rules = generate_association_rules(&patterns, 0.7).unwrap();

    let rendered: Vec<String> = rules.iter().map(|rule| rule.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "{5} => {1, 2} (support 2, confidence 1.000)",
            "{1, 5} => {2} (support 2, confidence 1.000)",
            "{2, 5} => {1} (support 2, confidence 1.000)",
            "{5} => {1} (support 2, confidence 1.000)",
            "{4} => {2} (support 2, confidence 1.000)",
            "{5} => {2} (support 2, confidence 1.000)",
        ]
    );

    // {1} -> {3} has confidence 4/6 and falls below the threshold
    assert!(!rules
        .iter()
        .any(|rule| rule.antecedent == Itemset::new([1]) && rule.consequent == Itemset::new([3])));

    let lift = rules[0].lift.unwrap();
    // (2/2) / (4/9)
    assert!((lift - 2.25).abs() < 1e-12);
}

// The package's own regression vector.
#[test]
fn agrawal_vector_patterns_and_rules() {
    let transactions = vec![vec![1, 3, 4], vec![2, 3, 5], vec![1, 2, 3, 5], vec![2, 5]];
    let patterns = find_frequent_patterns(&transactions, 2).unwrap();

    let expected: BTreeMap<Vec<u32>, usize> = [
        (vec![1], 2),
        (vec![2], 3),
        (vec![3], 3),
        (vec![5], 3),
        (vec![1, 3], 2),
        (vec![2, 3], 2),
        (vec![2, 5], 3),
        (vec![3, 5], 2),
        (vec![2, 3, 5], 2),
    ]
    .into_iter()
    .collect();
    assert_eq!(as_map(&patterns), expected);

    let rules = generate_association_rules(&patterns, 0.1).unwrap();
    let mut expected_rules = 0;
    for (itemset, support) in &expected {
        for (antecedent, antecedent_support) in &expected {
            let is_proper_subset = antecedent.len() < itemset.len()
                && antecedent.iter().all(|item| itemset.contains(item));
            if !is_proper_subset {
                continue;
            }
            expected_rules += 1;
            let consequent: Vec<u32> = itemset
                .iter()
                .copied()
                .filter(|item| !antecedent.contains(item))
                .collect();
            let rule = rules
                .iter()
                .find(|rule| {
                    rule.antecedent.as_slice() == antecedent.as_slice()
                        && rule.consequent.as_slice() == consequent.as_slice()
                })
                .unwrap();
            assert_eq!(rule.support, *support);
            let confidence = *support as f64 / *antecedent_support as f64;
            assert!((rule.confidence - confidence).abs() < 1e-12);
        }
    }
    assert_eq!(rules.len(), expected_rules);
}

#[test]
fn single_transaction_single_item() {
    let patterns = find_frequent_patterns(&[vec![1u32]], 1).unwrap();
    let expected: BTreeMap<Vec<u32>, usize> = [(vec![1], 1)].into_iter().collect();
    assert_eq!(as_map(&patterns), expected);
    assert!(generate_association_rules(&patterns, 0.0).unwrap().is_empty());
}

#[test]
fn identical_single_item_baskets_have_no_pairs() {
    let transactions = vec![vec![1u32]; 6];
    let patterns = find_frequent_patterns(&transactions, 2).unwrap();
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns.support(&[1]), Some(6));
    assert_eq!(patterns.max_len(), 1);
}

#[test]
fn empty_input_and_unreachable_threshold_are_not_errors() {
    let empty: Vec<Vec<u32>> = Vec::new();
    let patterns = find_frequent_patterns(&empty, 1).unwrap();
    assert!(patterns.is_empty());
    assert!(generate_association_rules(&patterns, 0.5).unwrap().is_empty());

    let patterns = find_frequent_patterns(&textbook(), 100).unwrap();
    assert!(patterns.is_empty());
}

#[test]
fn zero_support_is_rejected_before_mining() {
    assert_eq!(
        find_frequent_patterns(&textbook(), 0),
        Err(Error::InvalidSupport { min_support: 0 })
    );
}

#[test]
fn duplicate_items_within_a_transaction_count_once() {
    let transactions = vec![vec![7u32, 7, 8], vec![7, 8, 8]];
    let patterns = find_frequent_patterns(&transactions, 2).unwrap();
    assert_eq!(patterns.support(&[7]), Some(2));
    assert_eq!(patterns.support(&[7, 8]), Some(2));
}

#[test]
fn long_single_path_is_mined_without_recursion_limits() {
    let basket: Vec<u32> = (0..18).collect();
    let transactions = vec![basket.clone(), basket];
    let patterns = find_frequent_patterns(&transactions, 2).unwrap();
    assert_eq!(patterns.len(), (1 << 18) - 1);
    assert_eq!(patterns.max_len(), 18);
}
