//! Association rules derived from mined frequent itemsets.
//!
//! Every frequent itemset `P` with at least two items is split into each
//! non-empty proper subset `A` and its complement `B = P - A`. The rule
//! `A -> B` is kept when `support(P) / support(A)` reaches the requested
//! confidence. The number of splits grows as `2^|P|`; frequent itemsets are
//! expected to stay short.

use crate::error::{Error, InvariantViolation, Result};
use crate::fp::combinations::for_each_combination;
use crate::fp::{FrequentPatterns, Item, Itemset};
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, debug_span};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssociationRule<I> {
    pub antecedent: Itemset<I>,
    pub consequent: Itemset<I>,
    /// Support count of `antecedent ∪ consequent`.
    pub support: usize,
    pub confidence: f64,
    /// `confidence / P(consequent)`; `None` when the transaction count is
    /// unknown (zero).
    pub lift: Option<f64>,
}

/// Generates every rule whose confidence is at least `min_confidence`.
///
/// Rules come out in a fixed order: by itemset (ascending), then by
/// antecedent size, then lexicographically by antecedent.
pub fn generate_association_rules<I: Item>(
    patterns: &FrequentPatterns<I>,
    min_confidence: f64,
) -> Result<Vec<AssociationRule<I>>> {
    if !(0.0..=1.0).contains(&min_confidence) {
        return Err(Error::InvalidConfidence { min_confidence });
    }

    let span = debug_span!(
        "generate_association_rules",
        patterns = patterns.len(),
        min_confidence
    );
    let _enter = span.enter();

    let candidates: Vec<(&Itemset<I>, usize)> = patterns
        .iter()
        .filter(|(itemset, _)| itemset.len() >= 2)
        .collect();

    let per_itemset: Vec<Vec<AssociationRule<I>>> = candidates
        .par_iter()
        .map(|&(itemset, support)| rules_for_itemset(patterns, itemset, support, min_confidence))
        .collect::<Result<_>>()?;

    let rules: Vec<AssociationRule<I>> = per_itemset.into_iter().flatten().collect();
    debug!(rules = rules.len(), "generated association rules");
    Ok(rules)
}

fn rules_for_itemset<I: Item>(
    patterns: &FrequentPatterns<I>,
    itemset: &Itemset<I>,
    support: usize,
    min_confidence: f64,
) -> Result<Vec<AssociationRule<I>>> {
    let mut rules = Vec::new();
    let mut failure = None;

    for k in 1..itemset.len() {
        for_each_combination(itemset.len(), k, &mut |combination: &[usize]| {
            if failure.is_some() {
                return;
            }
            let antecedent: Itemset<I> = combination.iter().map(|&idx| itemset[idx].clone()).collect();
            match make_rule(patterns, itemset, antecedent, support, min_confidence) {
                Ok(Some(rule)) => rules.push(rule),
                Ok(None) => {}
                Err(err) => failure = Some(err),
            }
        });

        if let Some(err) = failure.take() {
            return Err(err);
        }
    }

    Ok(rules)
}

fn make_rule<I: Item>(
    patterns: &FrequentPatterns<I>,
    itemset: &Itemset<I>,
    antecedent: Itemset<I>,
    support: usize,
    min_confidence: f64,
) -> Result<Option<AssociationRule<I>>> {
    let antecedent_support = lookup(patterns, &antecedent)?;
    let confidence = support as f64 / antecedent_support as f64;
    if confidence < min_confidence {
        return Ok(None);
    }

    let consequent = itemset.difference(&antecedent);
    let consequent_support = lookup(patterns, &consequent)?;
    let lift = match patterns.num_transactions() {
        0 => None,
        n => Some(confidence * n as f64 / consequent_support as f64),
    };

    Ok(Some(AssociationRule {
        antecedent,
        consequent,
        support,
        confidence,
        lift,
    }))
}

fn lookup<I: Item>(patterns: &FrequentPatterns<I>, itemset: &Itemset<I>) -> Result<usize> {
    match patterns.support(itemset) {
        Some(support) if support > 0 => Ok(support),
        _ => Err(InvariantViolation::MissingSubsetSupport {
            itemset: format!("{:?}", itemset.as_slice()),
        }
        .into()),
    }
}

impl<I: fmt::Display> fmt::Display for AssociationRule<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {} (support {}, confidence {:.3})",
            self.antecedent, self.consequent, self.support, self.confidence
        )
    }
}
