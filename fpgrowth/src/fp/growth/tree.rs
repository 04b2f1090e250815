use crate::error::{InvariantViolation, Result};
use std::collections::{BTreeMap, HashMap};

/// One item occurrence on one root path. `parent` and `next` are plain arena
/// indices; the arena in [`FPTree::nodes`] is the only owner.
#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Option<usize>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: BTreeMap<usize, usize>,
    pub next: Option<usize>,
}

/// Total count of an item across the tree plus both ends of its occurrence
/// chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderEntry {
    pub count: usize,
    pub head: usize,
    pub tail: usize,
}

#[derive(Debug, Clone, Default)]
pub struct HeaderTable {
    entries: HashMap<usize, HeaderEntry>,
}

#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header_table: HeaderTable,
    pub root_index: usize,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: BTreeMap::new(),
            next: None,
        }
    }

    pub fn new_item(item: usize, count: usize, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: BTreeMap::new(),
            next: None,
        }
    }
}

impl HeaderTable {
    pub fn get(&self, rank: usize) -> Option<&HeaderEntry> {
        self.entries.get(&rank)
    }

    pub fn contains(&self, rank: usize) -> bool {
        self.entries.contains_key(&rank)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Header items ordered least frequent first, ties broken by `tiebreak`
    /// (ascending item identifier).
    pub fn ascending(&self, tiebreak: &[usize]) -> Vec<usize> {
        let mut ranks: Vec<usize> = self.entries.keys().copied().collect();
        ranks.sort_unstable_by_key(|&rank| (self.entries[&rank].count, tiebreak[rank]));
        ranks
    }

    fn add_count(&mut self, rank: usize, count: usize) {
        if let Some(entry) = self.entries.get_mut(&rank) {
            entry.count += count;
        }
    }

    /// Registers a freshly created node. Returns the node that should point
    /// to it via `next`, if any.
    fn link(&mut self, rank: usize, node: usize, count: usize) -> Option<usize> {
        match self.entries.get_mut(&rank) {
            Some(entry) => {
                let previous = entry.tail;
                entry.tail = node;
                entry.count += count;
                Some(previous)
            }
            None => {
                self.entries.insert(
                    rank,
                    HeaderEntry {
                        count,
                        head: node,
                        tail: node,
                    },
                );
                None
            }
        }
    }
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HeaderTable::default(),
            root_index: 0,
        }
    }

    /// Inserts an already ordered rank path, adding `count` to every node on
    /// it.
    pub fn insert_transaction(&mut self, transaction: &[usize], count: usize) {
        let mut current_index = self.root_index;
        self.nodes[current_index].count += count;

        for &item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(&item) {
                self.nodes[child_index].count += count;
                self.header_table.add_count(item, count);
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes
                    .push(FPNode::new_item(item, count, current_index));
                self.nodes[current_index].children.insert(item, new_index);
                if let Some(previous) = self.header_table.link(item, new_index, count) {
                    self.nodes[previous].next = Some(new_index);
                }
                current_index = new_index;
            }
        }
    }

    /// Number of item nodes, not counting the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[self.root_index].children.is_empty()
    }

    /// Walks the occurrence chain of `rank`.
    pub fn occurrences(&self, rank: usize) -> Occurrences<'_> {
        Occurrences {
            tree: self,
            next: self.header_table.get(rank).map(|entry| entry.head),
        }
    }

    /// Conditional pattern base of `rank`: for every occurrence, the ranks
    /// from the root down to its parent, weighted by the occurrence's count.
    ///
    /// The chain is checked on the way: every node must hold `rank`, no node
    /// may be visited twice, and the counts must add up to the header count.
    pub fn get_prefix_paths(&self, rank: usize) -> Result<Vec<(Vec<usize>, usize)>> {
        let header = match self.header_table.get(rank) {
            Some(entry) => entry.count,
            None => return Ok(Vec::new()),
        };

        let mut paths = Vec::new();
        let mut chained = 0;
        let mut visited = 0;

        for idx in self.occurrences(rank) {
            visited += 1;
            let node = &self.nodes[idx];
            if node.item != Some(rank) || visited > self.node_count() {
                return Err(InvariantViolation::BrokenOccurrenceChain {
                    rank,
                    node: idx,
                    found: node.item,
                }
                .into());
            }
            chained += node.count;

            let mut path = Vec::new();
            let mut current = node.parent;
            while let Some(i) = current {
                if let Some(item) = self.nodes[i].item {
                    path.push(item);
                }
                current = self.nodes[i].parent;
            }

            if !path.is_empty() {
                path.reverse();
                paths.push((path, node.count));
            }
        }

        if chained != header {
            return Err(InvariantViolation::ChainCountMismatch {
                rank,
                chained,
                header,
            }
            .into());
        }

        Ok(paths)
    }

    pub fn has_single_path(&self) -> bool {
        let mut current_index = self.root_index;

        loop {
            let children = &self.nodes[current_index].children;
            if children.len() > 1 {
                return false;
            }
            match children.values().next() {
                Some(&child) => current_index = child,
                None => return true,
            }
        }
    }

    /// (rank, count) pairs from the root down, following the first child at
    /// every step. Only meaningful when [`has_single_path`](Self::has_single_path)
    /// holds.
    pub fn get_single_path(&self) -> Vec<(usize, usize)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while let Some(&child_index) = self.nodes[current_index].children.values().next() {
            let child = &self.nodes[child_index];
            if let Some(item) = child.item {
                path.push((item, child.count));
            }
            current_index = child_index;
        }
        path
    }
}

pub struct Occurrences<'a> {
    tree: &'a FPTree,
    next: Option<usize>,
}

impl Iterator for Occurrences<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = self.tree.nodes[current].next;
        Some(current)
    }
}
