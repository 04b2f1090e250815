//! Frequent itemset mining with FP-Growth, plus association rules.
//!
//! Transactions are compressed into an FP-tree (a prefix tree over items in
//! descending frequency order), which is then mined by repeatedly building
//! conditional trees for each item instead of enumerating candidates.
//!
//! ```
//! let transactions = vec![vec![1, 2, 5], vec![2, 4], vec![2, 3], vec![1, 2, 4]];
//! let patterns = fpgrowth::find_frequent_patterns(&transactions, 2).unwrap();
//! assert_eq!(patterns.support(&[1, 2]), Some(2));
//!
//! let rules = fpgrowth::generate_association_rules(&patterns, 0.9).unwrap();
//! assert_eq!(rules[0].to_string(), "{1} => {2} (support 2, confidence 1.000)");
//! ```

pub mod config;
pub mod error;
pub mod fp;
pub mod rules;

#[cfg(feature = "python")]
mod python;

pub use config::{min_count_from_fraction, MiningConfig};
pub use error::{Error, InvariantViolation, Result};
pub use fp::{
    count_frequent_items, find_frequent_patterns, find_frequent_patterns_with, fp_growth_dense,
    FrequentLevel, FrequentPatterns, Item, Itemset,
};
pub use rules::{generate_association_rules, AssociationRule};
