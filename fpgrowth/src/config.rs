use crate::error::{Error, Result};

/// Parameters for a single mining call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MiningConfig {
    /// Absolute support threshold (transaction count).
    pub min_support: usize,
    /// Longest itemset to report. `None` means unbounded.
    pub max_len: Option<usize>,
    /// Mine the root tree's header items on the rayon pool.
    pub parallel: bool,
}

impl MiningConfig {
    pub fn new(min_support: usize) -> Self {
        Self {
            min_support,
            max_len: None,
            parallel: true,
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_support == 0 {
            return Err(Error::InvalidSupport {
                min_support: self.min_support,
            });
        }
        if self.max_len == Some(0) {
            return Err(Error::InvalidMaxLen);
        }
        Ok(())
    }

    /// Whether an itemset of `len` items may still be reported.
    pub(crate) fn admits(&self, len: usize) -> bool {
        self.max_len.is_none_or(|max| len <= max)
    }
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Converts a relative support threshold into a transaction count.
///
/// The count is rounded up so that every reported itemset occurs in at least
/// `fraction` of the transactions; it never drops below 1.
pub fn min_count_from_fraction(fraction: f64, num_transactions: usize) -> Result<usize> {
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(Error::InvalidSupportFraction { fraction });
    }
    let raw = fraction * num_transactions as f64;
    // 0.07 * 100 evaluates a few ulps above 7; snap before rounding up
    let nearest = raw.round();
    let count = if (raw - nearest).abs() <= f64::EPSILON * raw.max(1.0) * 4.0 {
        nearest
    } else {
        raw.ceil()
    };
    Ok((count as usize).max(1))
}
