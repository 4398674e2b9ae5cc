//! Structural invariant checking (§4.6, §8).
//!
//! Not on any hot path; used by tests and available as a CLI diagnostic.
//! Walks the tree once for the per-node invariants (capacity, ordering,
//! separator correctness, child counts, parent links) and once more along
//! the leaf chain for the cross-node invariants (global sortedness, equal
//! leaf depth).

use crate::types::{BPlusTreeMap, NodeRef};

/// A snapshot of tree shape, returned by a successful [`BPlusTreeMap::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub leaf_count: usize,
    pub branch_count: usize,
    pub key_count: usize,
    pub height: usize,
}

impl BPlusTreeMap {
    /// Check every invariant in §3 and return a small report, or the first
    /// violation found as an error string.
    pub fn validate(&self) -> Result<ValidationReport, String> {
        let mut leaf_count = 0;
        let mut branch_count = 0;
        let depth = self.check_node(self.root, None, None, true, &mut leaf_count, &mut branch_count)?;

        let key_count = self.check_leaf_chain()?;

        Ok(ValidationReport {
            leaf_count,
            branch_count,
            key_count,
            height: depth,
        })
    }

    /// Recursively check node-local invariants (1-5), returning this
    /// subtree's depth (number of edges to a leaf) on success.
    fn check_node(
        &self,
        node: NodeRef,
        expected_parent: Option<u32>,
        min_key_bound: Option<i32>,
        is_root: bool,
        leaf_count: &mut usize,
        branch_count: &mut usize,
    ) -> Result<usize, String> {
        match node {
            NodeRef::Leaf(id) => {
                let leaf = self
                    .leaves
                    .get(id)
                    .ok_or_else(|| format!("leaf {id} referenced but not allocated"))?;
                *leaf_count += 1;

                if !is_root && (leaf.len() < self.order || leaf.len() > self.capacity) {
                    return Err(format!(
                        "leaf {id} has {} keys, outside [{}, {}]",
                        leaf.len(),
                        self.order,
                        self.capacity
                    ));
                }
                if is_root && leaf.len() > self.capacity {
                    return Err(format!(
                        "root leaf {id} has {} keys, exceeding capacity {}",
                        leaf.len(),
                        self.capacity
                    ));
                }
                if leaf.parent != expected_parent {
                    return Err(format!(
                        "leaf {id} parent link {:?} does not match actual parent {:?}",
                        leaf.parent, expected_parent
                    ));
                }
                check_strictly_ascending(&leaf.keys, &format!("leaf {id}"))?;
                if let (Some(bound), Some(&first)) = (min_key_bound, leaf.keys.first()) {
                    if first < bound {
                        return Err(format!(
                            "leaf {id}'s first key {first} is below its separator lower bound {bound}"
                        ));
                    }
                }

                Ok(0)
            }
            NodeRef::Branch(id) => {
                let branch = self
                    .branches
                    .get(id)
                    .ok_or_else(|| format!("branch {id} referenced but not allocated"))?;
                *branch_count += 1;

                if !is_root && (branch.len() < self.order || branch.len() > self.capacity) {
                    return Err(format!(
                        "branch {id} has {} keys, outside [{}, {}]",
                        branch.len(),
                        self.order,
                        self.capacity
                    ));
                }
                if is_root && branch.len() > self.capacity {
                    return Err(format!(
                        "root branch {id} has {} keys, exceeding capacity {}",
                        branch.len(),
                        self.capacity
                    ));
                }
                if branch.parent != expected_parent {
                    return Err(format!(
                        "branch {id} parent link {:?} does not match actual parent {:?}",
                        branch.parent, expected_parent
                    ));
                }
                check_strictly_ascending(&branch.keys, &format!("branch {id}"))?;
                if branch.children.len() != branch.keys.len() + 1 {
                    return Err(format!(
                        "branch {id} has {} children but {} keys",
                        branch.children.len(),
                        branch.keys.len()
                    ));
                }

                let mut child_depth = None;
                for (i, &child) in branch.children.iter().enumerate() {
                    let child_bound = if i == 0 { min_key_bound } else { Some(branch.keys[i - 1]) };
                    let depth = self.check_node(
                        child,
                        Some(id),
                        child_bound,
                        false,
                        leaf_count,
                        branch_count,
                    )?;
                    match child_depth {
                        None => child_depth = Some(depth),
                        Some(d) if d == depth => {}
                        Some(d) => {
                            return Err(format!(
                                "branch {id}'s children have mismatched depths {d} and {depth}"
                            ))
                        }
                    }

                    if i > 0 {
                        let separator = branch.keys[i - 1];
                        if self.min_key_of(child) != Some(separator) {
                            return Err(format!(
                                "branch {id} separator {separator} does not equal min key of child {i}"
                            ));
                        }
                    }
                }

                Ok(child_depth.unwrap_or(0) + 1)
            }
        }
    }

    /// Minimum key reachable in the subtree rooted at `node`.
    fn min_key_of(&self, node: NodeRef) -> Option<i32> {
        match node {
            NodeRef::Leaf(id) => self.leaves.get(id).and_then(|leaf| leaf.keys.first().copied()),
            NodeRef::Branch(id) => {
                let branch = self.branches.get(id)?;
                self.min_key_of(*branch.children.first()?)
            }
        }
    }

    /// Check invariant 6: the leaf chain, walked via `right`, is globally
    /// sorted with no duplicate or missing keys relative to the tree.
    fn check_leaf_chain(&self) -> Result<usize, String> {
        let mut count = 0;
        let mut previous_key: Option<i32> = None;
        let mut current = Some(self.leftmost_leaf());

        while let Some(id) = current {
            let leaf = self
                .leaves
                .get(id)
                .ok_or_else(|| format!("leaf chain references unallocated leaf {id}"))?;
            for &key in &leaf.keys {
                if let Some(prev) = previous_key {
                    if key <= prev {
                        return Err(format!(
                            "leaf chain out of order: {key} follows {prev}"
                        ));
                    }
                }
                previous_key = Some(key);
                count += 1;
            }
            current = leaf.right;
        }

        Ok(count)
    }
}

fn check_strictly_ascending(keys: &[i32], context: &str) -> Result<(), String> {
    for pair in keys.windows(2) {
        if pair[0] >= pair[1] {
            return Err(format!(
                "{context} keys not strictly ascending: {} >= {}",
                pair[0], pair[1]
            ));
        }
    }
    Ok(())
}
