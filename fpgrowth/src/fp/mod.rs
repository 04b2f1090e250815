pub mod collector;
pub mod combinations;
pub mod counter;
pub mod dense;
pub mod growth;
pub mod itemset;
pub mod utils;


pub use collector::PatternCollector;
pub use counter::{count_frequent_items, ItemCatalog};
pub use dense::{fp_growth_dense, fp_growth_dense_with, matrix_to_transactions};
pub use growth::{find_frequent_patterns, find_frequent_patterns_with, FPNode, FPTree};
pub use itemset::{Item, Itemset};
pub use utils::{FrequentLevel, FrequentPatterns, ItemsetStorage};
