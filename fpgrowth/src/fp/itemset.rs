use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::Deref;

/// Anything usable as an item identifier.
pub trait Item: Ord + Hash + Clone + fmt::Debug + Send + Sync {}

impl<T: Ord + Hash + Clone + fmt::Debug + Send + Sync> Item for T {}

/// A set of items kept as a sorted, deduplicated vector, so that equal sets
/// compare and hash equal regardless of how they were written down.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Itemset<I>(Vec<I>);

impl<I: Ord> Itemset<I> {
    pub fn new(items: impl IntoIterator<Item = I>) -> Self {
        let mut items: Vec<I> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn contains(&self, item: &I) -> bool {
        self.0.binary_search(item).is_ok()
    }
}

impl<I: Ord + Clone> Itemset<I> {
    /// Items of `self` that are not in `other`.
    pub fn difference(&self, other: &Itemset<I>) -> Itemset<I> {
        Self(
            self.0
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        )
    }
}

impl<I> Itemset<I> {
    pub fn as_slice(&self) -> &[I] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<I> {
        self.0
    }
}

impl<I> Deref for Itemset<I> {
    type Target = [I];

    fn deref(&self) -> &[I] {
        &self.0
    }
}

impl<I> Borrow<[I]> for Itemset<I> {
    fn borrow(&self) -> &[I] {
        &self.0
    }
}

impl<I: Ord> From<Vec<I>> for Itemset<I> {
    fn from(items: Vec<I>) -> Self {
        Self::new(items)
    }
}

impl<I: Ord> FromIterator<I> for Itemset<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<I: fmt::Display> fmt::Display for Itemset<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, item) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("}")
    }
}
