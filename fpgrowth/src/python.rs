use crate::fp::{fp_growth_dense, FrequentLevel, FrequentPatterns};
use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::prelude::*;

/// Mines `transactions` (lists of integer items) at an absolute support
/// count. Returns `(itemset, support)` pairs with sorted itemsets.
#[pyfunction]
#[pyo3(name = "find_frequent_patterns")]
fn find_frequent_patterns_py(
    transactions: Vec<Vec<i64>>,
    min_support: usize,
) -> PyResult<Vec<(Vec<i64>, usize)>> {
    let patterns = crate::find_frequent_patterns(&transactions, min_support)?;
    Ok(patterns
        .iter()
        .map(|(itemset, support)| (itemset.to_vec(), support))
        .collect())
}

/// Returns `(antecedent, consequent, support, confidence)` tuples.
#[pyfunction]
#[pyo3(name = "generate_association_rules")]
fn generate_association_rules_py(
    patterns: Vec<(Vec<i64>, usize)>,
    num_transactions: usize,
    min_confidence: f64,
) -> PyResult<Vec<(Vec<i64>, Vec<i64>, usize, f64)>> {
    let patterns = FrequentPatterns::from_counts(patterns, num_transactions);
    let rules = crate::generate_association_rules(&patterns, min_confidence)?;
    Ok(rules
        .into_iter()
        .map(|rule| {
            (
                rule.antecedent.into_vec(),
                rule.consequent.into_vec(),
                rule.support,
                rule.confidence,
            )
        })
        .collect())
}

/// Mines a one-hot matrix at a fractional support. Returns one
/// `(n_itemsets, k)` array of column indices per itemset size `k`.
#[pyfunction]
#[pyo3(name = "fp_growth")]
fn fp_growth_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
    let patterns = fp_growth_dense(transactions.as_array(), min_support)?;

    let mut result = Vec::new();
    for level in patterns.levels() {
        if level.is_empty() {
            continue;
        }
        result.push(level_to_array(&level)?.into_pyarray(py));
    }

    Ok(result)
}

fn level_to_array(level: &FrequentLevel<usize>) -> PyResult<Array2<usize>> {
    let itemset_size = level.itemset_size;
    let mut data = Vec::with_capacity(level.len() * itemset_size);
    for itemset in level.iter_itemsets() {
        data.extend_from_slice(itemset);
    }

    Array2::from_shape_vec((level.len(), itemset_size), data)
        .map_err(|_| pyo3::exceptions::PyValueError::new_err("Failed to create array"))
}

#[pymodule]
fn fpgrowth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_frequent_patterns_py, m)?)?;
    m.add_function(wrap_pyfunction!(generate_association_rules_py, m)?)?;
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    Ok(())
}
