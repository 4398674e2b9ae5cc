//! An in-memory key-value store backed by a B+ tree over 32-bit signed
//! integer keys and values.
//!
//! This crate implements only the three core operations a B+ tree needs to
//! support a key-value store: [`BPlusTreeMap::insert`], [`BPlusTreeMap::find`],
//! and [`BPlusTreeMap::range`]. There is no deletion, no persistence, and no
//! concurrency inside the core; see the module-level notes in each file for
//! the reasoning.
//!
//! ```
//! use bplustree_kv::BPlusTreeMap;
//!
//! let mut tree = BPlusTreeMap::new(4).unwrap();
//! tree.insert(10, 100);
//! tree.insert(20, 200);
//! assert_eq!(tree.find(10), Some(100));
//! assert_eq!(tree.range(5, 25), vec![100, 200]);
//! ```

mod arena;
mod construction;
mod error;
mod get;
mod insert;
mod node;
mod range;
mod search;
mod tree_structure;
mod types;
mod validation;

pub use construction::DEFAULT_ORDER;
pub use error::{BPlusTreeError, InitResult};
pub use types::{BPlusTreeMap, BranchNode, LeafNode, NodeId, NodeRef};
pub use validation::ValidationReport;
