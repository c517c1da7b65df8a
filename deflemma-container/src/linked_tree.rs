use crate::tree::fill_shape;
use crate::{left_breadth_first, Tree, TreeNode};

/// A rose tree where every node owns its children by value.
///
/// [`Tree::length`] is the size of the subtree rooted at this node and [`Tree::all_data`] lists
/// it in left breadth-first order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LinkedTree<V> {
    value: V,
    children: Vec<LinkedTree<V>>,
}

/// Read-only handle to a node of a [`LinkedTree`].
#[derive(Debug)]
pub struct LinkedNode<'a, V>(&'a LinkedTree<V>);

impl<V: Default> LinkedTree<V> {
    /// Make a new tree with a single default-valued root.
    pub fn new() -> LinkedTree<V> {
        LinkedTree::default()
    }
}

impl<V: Clone + Default> LinkedTree<V> {
    /// Make a full tree where every node has `breadth` children, `depth` levels deep, and every
    /// node holds the default value.
    pub fn with_shape(breadth: usize, depth: usize) -> LinkedTree<V> {
        let mut tree = LinkedTree::new();
        fill_shape(&mut tree, breadth, depth);
        tree
    }
}

impl<V> LinkedTree<V> {
    /// Make a new tree with a single root holding `value`.
    pub fn from_value(value: V) -> LinkedTree<V> {
        LinkedTree {
            value,
            children: vec![],
        }
    }

    fn size(&self) -> usize {
        1 + self.children.iter().map(LinkedTree::size).sum::<usize>()
    }
}

impl<V: Clone> Tree<V> for LinkedTree<V> {
    type Node<'a> = LinkedNode<'a, V> where Self: 'a;
    type NodeMut<'a> = &'a mut LinkedTree<V> where Self: 'a;

    fn length(&self) -> usize {
        self.size()
    }

    fn value(&self) -> V {
        self.value.clone()
    }

    fn set_value(&mut self, value: V) -> &mut Self {
        self.value = value;
        self
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn add_child(&mut self, value: V) -> &mut Self {
        self.children.push(LinkedTree::from_value(value));
        self
    }

    fn child(&self, index: usize) -> Option<LinkedNode<'_, V>> {
        self.children.get(index).map(LinkedNode)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut LinkedTree<V>> {
        self.children.get_mut(index)
    }

    fn children(&self) -> Vec<V> {
        self.children.iter().map(|child| child.value.clone()).collect()
    }

    fn all_data(&self) -> Vec<V> {
        left_breadth_first(self)
    }

    fn as_node(&self) -> LinkedNode<'_, V> {
        LinkedNode(self)
    }
}

/// Mutable child handles of a [`LinkedTree`] are plain mutable references.
impl<'t, V: Clone> Tree<V> for &'t mut LinkedTree<V> {
    type Node<'a> = LinkedNode<'a, V> where Self: 'a;
    type NodeMut<'a> = &'a mut LinkedTree<V> where Self: 'a;

    fn length(&self) -> usize {
        (**self).length()
    }

    fn value(&self) -> V {
        (**self).value()
    }

    fn set_value(&mut self, value: V) -> &mut Self {
        (**self).set_value(value);
        self
    }

    fn child_count(&self) -> usize {
        (**self).child_count()
    }

    fn add_child(&mut self, value: V) -> &mut Self {
        (**self).add_child(value);
        self
    }

    fn child(&self, index: usize) -> Option<LinkedNode<'_, V>> {
        (**self).child(index)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut LinkedTree<V>> {
        (**self).child_mut(index)
    }

    fn children(&self) -> Vec<V> {
        (**self).children()
    }

    fn all_data(&self) -> Vec<V> {
        (**self).all_data()
    }

    fn as_node(&self) -> LinkedNode<'_, V> {
        (**self).as_node()
    }
}

impl<'a, V: Clone> TreeNode<V> for LinkedNode<'a, V> {
    fn value(&self) -> V {
        self.0.value.clone()
    }

    fn child_count(&self) -> usize {
        self.0.children.len()
    }

    fn child(&self, index: usize) -> Option<Self> {
        self.0.children.get(index).map(LinkedNode)
    }
}

impl<'a, V> Clone for LinkedNode<'a, V> {
    fn clone(&self) -> Self {
        LinkedNode(self.0)
    }
}
