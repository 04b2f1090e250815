pub mod builder;
pub mod mining;
pub mod tree;

pub use builder::{build_conditional_fp_tree, build_fp_tree};
pub use mining::{find_frequent_patterns, find_frequent_patterns_with, mine};
pub use tree::{FPNode, FPTree, HeaderEntry, HeaderTable};
