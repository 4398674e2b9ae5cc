//! Insert and split propagation (§4.4).
//!
//! `insert` descends once, recording the ancestry of branch ids and child
//! indices it passed through (`search::descend_with_ancestry`), mutates the
//! target leaf, and, only if that leaf overflowed, replays the ancestry
//! in reverse, splitting each overfull ancestor in turn, per the state
//! machine in §4.4.3. The walk is a plain loop, not recursion: each step
//! either stops (the node fit, or we just built a new root) or consumes
//! one more ancestry entry.

use crate::node::SplitOutcome;
use crate::types::{BPlusTreeMap, BranchNode, LeafNode, NodeRef};

impl BPlusTreeMap {
    /// Insert `(key, value)`, overwriting the existing value if `key` is
    /// already present (last-writer-wins). Restores all §3 invariants
    /// before returning.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplustree_kv::BPlusTreeMap;
    ///
    /// let mut tree = BPlusTreeMap::new(2).unwrap();
    /// for k in [10, 20, 30, 40, 50] {
    ///     tree.insert(k, k);
    /// }
    /// tree.insert(50, 999);
    /// assert_eq!(tree.find(50), Some(999));
    /// ```
    pub fn insert(&mut self, key: i32, value: i32) {
        let (leaf_id, ancestry) = self.descend_with_ancestry(key);

        let leaf = self
            .leaves
            .get_mut(leaf_id)
            .expect("descend_with_ancestry always returns an allocated leaf");
        leaf.put(key, value);

        if leaf.len() <= self.capacity {
            return; // no overflow, nothing above the leaf needs to change
        }

        let mut split = self.split_leaf(leaf_id);
        let mut steps = ancestry.into_iter().rev();

        loop {
            match steps.next() {
                None => {
                    self.install_new_root(split);
                    return;
                }
                Some((parent_id, child_index)) => {
                    self.attach_split(parent_id, child_index, split);

                    let parent_len = self
                        .branches
                        .get(parent_id)
                        .expect("parent just attached to must still be allocated")
                        .len();
                    if parent_len <= self.capacity {
                        return;
                    }

                    split = self.split_branch(parent_id);
                }
            }
        }
    }

    /// Split the leaf at `leaf_id` (§4.4.1), rewire the leaf chain around
    /// it, free the old leaf, and return the replacement pair.
    fn split_leaf(&mut self, leaf_id: u32) -> SplitOutcome<NodeRef> {
        let mut old = self
            .leaves
            .deallocate(leaf_id)
            .expect("leaf_id passed in must be allocated");
        let outcome = old.split(self.capacity);

        let left_id = self.leaves.allocate(outcome.left);
        let right_id = self.leaves.allocate(outcome.right);

        // Stitch the new pair into each other and into the old neighbours.
        if let Some(left_sibling) = old.left {
            if let Some(node) = self.leaves.get_mut(left_sibling) {
                node.right = Some(left_id);
            }
        }
        if let Some(right_sibling) = old.right {
            if let Some(node) = self.leaves.get_mut(right_sibling) {
                node.left = Some(right_id);
            }
        }
        self.leaves.get_mut(left_id).unwrap().right = Some(right_id);
        self.leaves.get_mut(right_id).unwrap().left = Some(left_id);

        SplitOutcome {
            separator: outcome.separator,
            left: NodeRef::Leaf(left_id),
            right: NodeRef::Leaf(right_id),
        }
    }

    /// Split the branch at `branch_id` (§4.4.2), re-homing the immediate
    /// children of each half to their new parent, freeing the old branch,
    /// and returning the replacement pair.
    fn split_branch(&mut self, branch_id: u32) -> SplitOutcome<NodeRef> {
        let mut old = self
            .branches
            .deallocate(branch_id)
            .expect("branch_id passed in must be allocated");
        let outcome: SplitOutcome<BranchNode> = old.split(self.capacity);

        let left_id = self.branches.allocate(outcome.left);
        let right_id = self.branches.allocate(outcome.right);

        let left_children: Vec<NodeRef> = self.branches.get(left_id).unwrap().children.clone();
        for child in left_children {
            self.set_parent(child, left_id);
        }
        let right_children: Vec<NodeRef> = self.branches.get(right_id).unwrap().children.clone();
        for child in right_children {
            self.set_parent(child, right_id);
        }

        SplitOutcome {
            separator: outcome.separator,
            left: NodeRef::Branch(left_id),
            right: NodeRef::Branch(right_id),
        }
    }

    /// Insert the separator and the two replacement children into
    /// `parent_id` at `child_index` (displacing the node that used to sit
    /// there), then point both replacements' parent link at `parent_id`.
    fn attach_split(&mut self, parent_id: u32, child_index: usize, split: SplitOutcome<NodeRef>) {
        let parent = self
            .branches
            .get_mut(parent_id)
            .expect("parent recorded during descent must still be allocated");
        parent.splice_in(child_index, split.separator, split.left, split.right);

        self.set_parent(split.left, parent_id);
        self.set_parent(split.right, parent_id);
    }

    /// The split bubbled all the way past the old root: build a fresh
    /// branch root over the two halves.
    fn install_new_root(&mut self, split: SplitOutcome<NodeRef>) {
        let new_root_id = self.branches.allocate(BranchNode {
            keys: vec![split.separator],
            children: vec![split.left, split.right],
            parent: None,
        });
        self.set_parent(split.left, new_root_id);
        self.set_parent(split.right, new_root_id);
        self.root = NodeRef::Branch(new_root_id);
    }

    fn set_parent(&mut self, node: NodeRef, parent_id: u32) {
        match node {
            NodeRef::Leaf(id) => self.leaves.get_mut(id).unwrap().parent = Some(parent_id),
            NodeRef::Branch(id) => self.branches.get_mut(id).unwrap().parent = Some(parent_id),
        }
    }
}
