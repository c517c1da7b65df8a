use std::collections::VecDeque;

use crate::{Tree, TreeNode};

/// The order in which a tree is walked.
///
/// Every traversal is a pre-order walk driven by the same work-list algorithm: the root seeds the
/// work-list, then a node is taken out, its value is recorded and its children are put in the
/// work-list, until the work-list is empty. The four orders only differ in the discipline of the
/// work-list (stack or queue) and in the order the children are put in it.
///
/// | Traversal | Work-list | Children put in |
/// |---|---|---|
/// | `LeftDepthFirst` | stack | last to first |
/// | `RightDepthFirst` | stack | first to last |
/// | `LeftBreadthFirst` | queue | first to last |
/// | `RightBreadthFirst` | queue | last to first |
///
/// It runs in O(n) time and uses O(max(width, depth)) extra space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Depth first, leftmost child first.
    LeftDepthFirst,
    /// Depth first, rightmost child first.
    RightDepthFirst,
    /// Breadth first, leftmost child first.
    LeftBreadthFirst,
    /// Breadth first, rightmost child first.
    RightBreadthFirst,
}

impl Traversal {
    /// Whether the work-list is a stack (LIFO) rather than a queue (FIFO).
    fn is_stack(self) -> bool {
        matches!(self, Traversal::LeftDepthFirst | Traversal::RightDepthFirst)
    }

    /// Whether the children are put in the work-list from the first to the last.
    fn is_left_right_add(self) -> bool {
        matches!(
            self,
            Traversal::RightDepthFirst | Traversal::LeftBreadthFirst
        )
    }

    /// Walk the tree starting from `root`, collecting the values of the nodes in this order.
    pub fn collect<V, N: TreeNode<V>>(self, root: N) -> Vec<V> {
        let mut work_list = VecDeque::new();
        work_list.push_back(root);
        let mut result = Vec::new();

        loop {
            let node = if self.is_stack() {
                work_list.pop_back()
            } else {
                work_list.pop_front()
            };
            let node = match node {
                Some(node) => node,
                None => break,
            };

            result.push(node.value());
            if node.is_leaf() {
                continue;
            }

            let count = node.child_count();
            if self.is_left_right_add() {
                work_list.extend((0..count).filter_map(|index| node.child(index)));
            } else {
                work_list.extend((0..count).rev().filter_map(|index| node.child(index)));
            }
        }

        result
    }
}

/// Pre-order, depth first, leftmost child first.
pub fn left_depth_first<V: Clone, T: Tree<V>>(tree: &T) -> Vec<V> {
    Traversal::LeftDepthFirst.collect(tree.as_node())
}

/// Pre-order, depth first, rightmost child first.
pub fn right_depth_first<V: Clone, T: Tree<V>>(tree: &T) -> Vec<V> {
    Traversal::RightDepthFirst.collect(tree.as_node())
}

/// Breadth first, leftmost child first.
pub fn left_breadth_first<V: Clone, T: Tree<V>>(tree: &T) -> Vec<V> {
    Traversal::LeftBreadthFirst.collect(tree.as_node())
}

/// Breadth first, rightmost child first.
pub fn right_breadth_first<V: Clone, T: Tree<V>>(tree: &T) -> Vec<V> {
    Traversal::RightBreadthFirst.collect(tree.as_node())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{GraphTree, LinkedTree, Tree};

    use super::*;

    fn right_breadth_scenario<T: Tree<i32>>(mut tree: T) -> Vec<i32> {
        tree.set_value(1);
        tree.add_child(3).add_child(2);
        tree.child_mut(1).unwrap().add_child(5).add_child(4);
        tree.child_mut(0).unwrap().add_child(6);
        right_breadth_first(&tree)
    }

    fn left_breadth_scenario<T: Tree<i32>>(mut tree: T) -> Vec<i32> {
        tree.set_value(1);
        tree.add_child(2).add_child(3).add_child(4);
        tree.child_mut(0).unwrap().add_child(5);
        tree.child_mut(1).unwrap().add_child(6);
        left_breadth_first(&tree)
    }

    fn left_depth_scenario<T: Tree<i32>>(mut tree: T) -> Vec<i32> {
        tree.set_value(1);
        tree.add_child(2).add_child(4);
        tree.child_mut(0).unwrap().add_child(3);
        tree.child_mut(1).unwrap().add_child(5).add_child(6);
        left_depth_first(&tree)
    }

    fn right_depth_scenario<T: Tree<i32>>(mut tree: T) -> Vec<i32> {
        tree.set_value(1);
        tree.add_child(6).add_child(3).add_child(2);
        tree.child_mut(1).unwrap().add_child(5).add_child(4);
        right_depth_first(&tree)
    }

    #[test]
    fn test_graph_tree_breadth() {
        assert_eq!(right_breadth_scenario(GraphTree::new()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(left_breadth_scenario(GraphTree::new()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_graph_tree_depth() {
        assert_eq!(left_depth_scenario(GraphTree::new()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(right_depth_scenario(GraphTree::new()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_linked_tree_breadth() {
        assert_eq!(right_breadth_scenario(LinkedTree::new()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(left_breadth_scenario(LinkedTree::new()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_linked_tree_depth() {
        assert_eq!(left_depth_scenario(LinkedTree::new()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(right_depth_scenario(LinkedTree::new()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_single_node() {
        let tree = LinkedTree::from_value("root");
        for traversal in [
            Traversal::LeftDepthFirst,
            Traversal::RightDepthFirst,
            Traversal::LeftBreadthFirst,
            Traversal::RightBreadthFirst,
        ] {
            assert_eq!(traversal.collect(tree.as_node()), vec!["root"]);
        }
    }

    #[test]
    fn test_all_orders_on_same_tree() {
        // 1 -> [2 -> [4, 5], 3 -> [6]]
        let mut tree = GraphTree::new();
        tree.set_value(1);
        tree.add_child(2).add_child(3);
        tree.child_mut(0).unwrap().add_child(4).add_child(5);
        tree.child_mut(1).unwrap().add_child(6);

        assert_eq!(left_depth_first(&tree), vec![1, 2, 4, 5, 3, 6]);
        assert_eq!(right_depth_first(&tree), vec![1, 3, 6, 2, 5, 4]);
        assert_eq!(left_breadth_first(&tree), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(right_breadth_first(&tree), vec![1, 3, 2, 6, 5, 4]);
    }

    #[test]
    fn test_traversal_from_inner_node() {
        let mut tree = GraphTree::new();
        tree.add_child(1).add_child(2);
        let mut inner = tree.child_mut(1).unwrap();
        inner.add_child(3).add_child(4);

        assert_eq!(left_depth_first(&inner), vec![2, 3, 4]);
        assert_eq!(right_breadth_first(&inner), vec![2, 4, 3]);
    }
}
