use super::growth::find_frequent_patterns_with;
use super::utils::FrequentPatterns;
use crate::config::{min_count_from_fraction, MiningConfig};
use crate::error::Result;
use ndarray::ArrayView2;

/// Mines a one-hot transaction matrix: row `i` is a transaction, column `j`
/// is item `j`, and any non-zero cell marks presence.
///
/// `min_support` is a fraction of the rows.
pub fn fp_growth_dense(transactions: ArrayView2<i32>, min_support: f64) -> Result<FrequentPatterns<usize>> {
    let min_count = min_count_from_fraction(min_support, transactions.nrows())?;
    fp_growth_dense_with(transactions, &MiningConfig::new(min_count))
}

pub fn fp_growth_dense_with(
    transactions: ArrayView2<i32>,
    config: &MiningConfig,
) -> Result<FrequentPatterns<usize>> {
    let transaction_list = matrix_to_transactions(transactions);
    find_frequent_patterns_with(&transaction_list, config)
}

/// Convert binary transaction matrix to list of item sets
pub fn matrix_to_transactions(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
    transactions
        .outer_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}
