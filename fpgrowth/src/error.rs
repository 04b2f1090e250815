use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("minimum support must be a positive count, got {min_support}")]
    InvalidSupport { min_support: usize },

    #[error("minimum support fraction must lie in (0, 1], got {fraction}")]
    InvalidSupportFraction { fraction: f64 },

    #[error("minimum confidence must lie in [0, 1], got {min_confidence}")]
    InvalidConfidence { min_confidence: f64 },

    #[error("maximum pattern length must be at least 1")]
    InvalidMaxLen,

    #[error("internal invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// Defects in the tree or miner itself. None of these can be caused by
/// well-formed input; they abort the call instead of yielding wrong supports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("occurrence chain for item rank {rank} reached node {node} holding {found:?}")]
    BrokenOccurrenceChain {
        rank: usize,
        node: usize,
        found: Option<usize>,
    },

    #[error("occurrence chain for item rank {rank} sums to {chained}, header says {header}")]
    ChainCountMismatch {
        rank: usize,
        chained: usize,
        header: usize,
    },

    #[error("itemset {itemset} was emitted twice")]
    DuplicatePattern { itemset: String },

    #[error("no support recorded for subset {itemset}")]
    MissingSubsetSupport { itemset: String },
}

impl Error {
    #[must_use]
    pub fn is_invalid_config(&self) -> bool {
        !matches!(self, Self::Invariant(_))
    }
}

#[cfg(feature = "python")]
impl From<Error> for pyo3::PyErr {
    fn from(err: Error) -> Self {
        if err.is_invalid_config() {
            pyo3::exceptions::PyValueError::new_err(err.to_string())
        } else {
            pyo3::exceptions::PyRuntimeError::new_err(err.to_string())
        }
    }
}
