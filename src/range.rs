//! Half-open range scan (§4.5).

use crate::types::BPlusTreeMap;

impl BPlusTreeMap {
    /// Values for every key `k` with `min(lo, hi) <= k < max(lo, hi)`, in
    /// ascending key order. `O(log_d N + R)` where `R` is the result size.
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
    /// assert_eq!(tree.range(15, 45), vec![20, 30, 40]);
    /// assert_eq!(tree.range(45, 15), tree.range(15, 45)); // symmetric
    /// ```
    pub fn range(&self, lo: i32, hi: i32) -> Vec<i32> {
        let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
        if lo == hi {
            return Vec::new();
        }

        let mut results = Vec::new();
        let mut leaf_id = Some(self.descend_to_leaf(lo));
        let mut first_leaf = true;

        'leaves: while let Some(id) = leaf_id {
            let leaf = self
                .leaves
                .get(id)
                .expect("leaf chain must only reference allocated leaves");

            let start = if first_leaf {
                leaf.keys.partition_point(|&k| k < lo)
            } else {
                0
            };
            first_leaf = false;

            for i in start..leaf.keys.len() {
                if leaf.keys[i] >= hi {
                    break 'leaves;
                }
                results.push(leaf.values[i]);
            }

            leaf_id = leaf.right;
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BPlusTreeMap;

    #[test]
    fn range_on_empty_tree_is_empty() {
        let tree = BPlusTreeMap::new(4).unwrap();
        assert_eq!(tree.range(0, 100), Vec::<i32>::new());
    }

    #[test]
    fn range_with_equal_bounds_is_empty() {
        let mut tree = BPlusTreeMap::new(4).unwrap();
        tree.insert(5, 50);
        assert_eq!(tree.range(5, 5), Vec::<i32>::new());
    }

    #[test]
    fn range_is_symmetric_in_its_bounds() {
        let mut tree = BPlusTreeMap::new(4).unwrap();
        for k in [3, 1, 4, 1, 5, 9, 2, 6] {
            tree.insert(k, k * 10);
        }
        assert_eq!(tree.range(2, 6), tree.range(6, 2));
    }

    #[test]
    fn range_lookup_agrees_with_find_over_every_inserted_key() {
        let mut tree = BPlusTreeMap::new(3).unwrap();
        let keys: Vec<i32> = (0..200).map(|i| i * 3 - 50).collect();
        for &k in &keys {
            tree.insert(k, k * 2);
        }

        let lo = -40;
        let hi = 300;
        let expected: Vec<i32> = keys
            .iter()
            .filter(|&&k| k >= lo && k < hi)
            .map(|&k| tree.find(k).unwrap())
            .collect();
        assert_eq!(tree.range(lo, hi), expected);
    }

    #[test]
    fn scans_across_many_leaves() {
        let mut tree = BPlusTreeMap::new(2).unwrap();
        for k in 0..200 {
            tree.insert(k, k);
        }
        let got = tree.range(50, 150);
        let expected: Vec<i32> = (50..150).collect();
        assert_eq!(got, expected);
    }
}
