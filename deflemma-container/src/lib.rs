//! Generic ordered rose trees and their traversals.
//!
//! A rose tree is an ordered tree where each node may have any number of children. Two
//! interchangeable representations implement the [`Tree`] trait:
//!
//! - [`GraphTree`] keeps every value of the structure in one shared growable store, and the
//!   parent-children relations in a separate map keyed by the index of the parent. A handle is an
//!   index into that store, so copying a handle is O(1) and every copy aliases the same backing
//!   storage. Adding a node through any handle is visible from all the others, and any aggregate
//!   view previously taken (like [`Tree::all_data`]) goes stale.
//! - [`LinkedTree`] owns its children by value. Growing the children of a node reallocates only
//!   the storage of that node.
//!
//! [`Tree::add_child`] returns the *parent* handle, so that siblings can be added by chaining.
//! Navigation never fails: asking for a child that does not exist yields `None`.
//!
//! The four traversals ([`left_depth_first`], [`right_depth_first`], [`left_breadth_first`],
//! [`right_breadth_first`]) are all pre-order walks driven by the same work-list algorithm, see
//! [`Traversal`].
//!
//! # Example
//!
//! ```
//! use deflemma_container::{left_depth_first, GraphTree, Tree};
//!
//! let mut tree = GraphTree::new();
//! tree.set_value(1);
//! tree.add_child(2).add_child(4);
//! tree.child_mut(0).unwrap().add_child(3);
//! tree.child_mut(1).unwrap().add_child(5).add_child(6);
//!
//! assert_eq!(left_depth_first(&tree), vec![1, 2, 3, 4, 5, 6]);
//! ```

#![deny(missing_docs)]

mod graph_tree;
mod linked_tree;
mod traversal;
mod tree;

pub use graph_tree::{GraphNode, GraphTree};
pub use linked_tree::{LinkedNode, LinkedTree};
pub use traversal::*;
pub use tree::{add_children, Tree, TreeNode};
