//! Construction of `BPlusTreeMap` and its nodes.

use crate::arena::Arena;
use crate::error::{BPlusTreeError, InitResult};
use crate::types::{BPlusTreeMap, LeafNode, NodeRef, MIN_ORDER};

/// Order used by the reference configuration (leaves sized for a 4 KiB page).
pub const DEFAULT_ORDER: usize = 124;

impl BPlusTreeMap {
    /// Create a B+ tree of order `d`. `CAPACITY = 2 * d`.
    ///
    /// The root starts as a single empty leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplustree_kv::BPlusTreeMap;
    ///
    /// let tree = BPlusTreeMap::new(4).unwrap();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new(order: usize) -> InitResult<Self> {
        if order < MIN_ORDER {
            return Err(BPlusTreeError::invalid_order(order, MIN_ORDER));
        }

        let mut leaves = Arena::new();
        let root_id = leaves.allocate(LeafNode::new());

        Ok(Self {
            order,
            capacity: 2 * order,
            root: NodeRef::Leaf(root_id),
            leaves,
            branches: Arena::new(),
        })
    }

    /// Create a tree at the reference order (`d = 124`, `CAPACITY = 248`).
    pub fn with_default_order() -> Self {
        Self::new(DEFAULT_ORDER).expect("default order satisfies MIN_ORDER")
    }

    /// Tree order `d`.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Node capacity `2 * d`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for BPlusTreeMap {
    fn default() -> Self {
        Self::with_default_order()
    }
}

impl LeafNode {
    pub(crate) fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            parent: None,
            left: None,
            right: None,
        }
    }
}
