//! Point lookup (§4.3).

use crate::types::BPlusTreeMap;

impl BPlusTreeMap {
    /// Look up `key`. `O(log_d N + d)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplustree_kv::BPlusTreeMap;
    ///
    /// let mut tree = BPlusTreeMap::new(4).unwrap();
    /// tree.insert(30, 300);
    /// assert_eq!(tree.find(30), Some(300));
    /// assert_eq!(tree.find(25), None);
    /// ```
    pub fn find(&self, key: i32) -> Option<i32> {
        let leaf_id = self.descend_to_leaf(key);
        let leaf = self
            .leaves
            .get(leaf_id)
            .expect("descend_to_leaf always returns an allocated leaf");
        leaf.get(key)
    }

    /// `true` if `key` is present.
    pub fn contains_key(&self, key: i32) -> bool {
        self.find(key).is_some()
    }
}
