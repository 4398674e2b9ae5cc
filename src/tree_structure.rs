//! Whole-tree queries that aren't part of the three core operations:
//! size, emptiness, height, and resetting to a fresh empty tree.

use crate::types::{BPlusTreeMap, NodeRef};

impl BPlusTreeMap {
    /// Total number of key-value pairs stored.
    pub fn len(&self) -> usize {
        self.count_subtree(self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn count_subtree(&self, node: NodeRef) -> usize {
        match node {
            NodeRef::Leaf(id) => self.leaves.get(id).map(|leaf| leaf.len()).unwrap_or(0),
            NodeRef::Branch(id) => self
                .branches
                .get(id)
                .map(|branch| {
                    branch
                        .children
                        .iter()
                        .map(|&child| self.count_subtree(child))
                        .sum()
                })
                .unwrap_or(0),
        }
    }

    /// Number of edges from the root to any leaf (all equal, per invariant 7).
    pub fn height(&self) -> usize {
        let mut depth = 0;
        let mut current = self.root;
        loop {
            match current {
                NodeRef::Leaf(_) => return depth,
                NodeRef::Branch(id) => {
                    let branch = self.branches.get(id).expect("root-reachable branch");
                    current = branch.children[0];
                    depth += 1;
                }
            }
        }
    }

    /// Discard all entries, resetting the tree to a single empty leaf root.
    pub fn clear(&mut self) {
        *self = Self::new(self.order).expect("order was already valid");
    }
}
