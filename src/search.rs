//! Search descent (§4.2): locating the leaf that would contain a key.

use crate::types::{BPlusTreeMap, NodeId, NodeRef};

impl BPlusTreeMap {
    /// Descend from the root to the leaf that would contain `key`.
    pub(crate) fn descend_to_leaf(&self, key: i32) -> NodeId {
        let mut current = self.root;
        loop {
            match current {
                NodeRef::Leaf(id) => return id,
                NodeRef::Branch(id) => {
                    let branch = self
                        .branches
                        .get(id)
                        .expect("branch id reachable from root must be allocated");
                    let index = branch.child_index_for(key);
                    current = branch.children[index];
                }
            }
        }
    }

    /// Descend from the root to the leaf that would contain `key`, recording
    /// the `(branch_id, child_index)` taken at every internal step. Insert
    /// replays this stack in reverse to propagate splits upward without
    /// recursing or re-deriving ancestors through parent links.
    pub(crate) fn descend_with_ancestry(&self, key: i32) -> (NodeId, Vec<(NodeId, usize)>) {
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            match current {
                NodeRef::Leaf(id) => return (id, stack),
                NodeRef::Branch(id) => {
                    let branch = self
                        .branches
                        .get(id)
                        .expect("branch id reachable from root must be allocated");
                    let index = branch.child_index_for(key);
                    stack.push((id, index));
                    current = branch.children[index];
                }
            }
        }
    }

    /// The leftmost leaf in the tree (used as the starting point for a full
    /// forward scan and by validation).
    pub(crate) fn leftmost_leaf(&self) -> NodeId {
        let mut current = self.root;
        loop {
            match current {
                NodeRef::Leaf(id) => return id,
                NodeRef::Branch(id) => {
                    let branch = self
                        .branches
                        .get(id)
                        .expect("branch id reachable from root must be allocated");
                    current = branch.children[0];
                }
            }
        }
    }
}
