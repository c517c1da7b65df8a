/// Read-only handle to a node of a [`Tree`], used by the traversals.
///
/// Handles are cheap to clone: they either borrow the node or share the backing store of the
/// tree they come from.
pub trait TreeNode<V>: Clone {
    /// The value stored at this node.
    fn value(&self) -> V;

    /// The number of children of this node.
    fn child_count(&self) -> usize;

    /// The handle of the `index`-th child, `None` if there is no such child.
    fn child(&self, index: usize) -> Option<Self>;

    /// Whether this node has no children.
    fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }
}

/// An ordered rose tree positioned at one of its nodes.
pub trait Tree<V: Clone> {
    /// Read-only handle to a node of this tree.
    type Node<'a>: TreeNode<V>
    where
        Self: 'a;

    /// Mutable handle to a child of the current node.
    type NodeMut<'a>: Tree<V>
    where
        Self: 'a;

    /// The number of nodes in the backing store of this representation.
    ///
    /// This is not necessarily the size of the subtree under the current node, see the
    /// documentation of each representation.
    fn length(&self) -> usize;

    /// The value stored at the current node.
    fn value(&self) -> V;

    /// Overwrite the value of the current node.
    fn set_value(&mut self, value: V) -> &mut Self;

    /// The number of children of the current node.
    fn child_count(&self) -> usize;

    /// Append a new child holding `value` to the current node.
    ///
    /// The returned handle is the parent, not the new child: `add_child(a).add_child(b)` adds two
    /// siblings.
    fn add_child(&mut self, value: V) -> &mut Self;

    /// Read-only handle of the `index`-th child, `None` if there is no such child.
    fn child(&self, index: usize) -> Option<Self::Node<'_>>;

    /// Mutable handle of the `index`-th child, `None` if there is no such child.
    fn child_mut(&mut self, index: usize) -> Option<Self::NodeMut<'_>>;

    /// The values of the children of the current node, in order.
    fn children(&self) -> Vec<V>;

    /// All the values of the structure, in the canonical order of the representation.
    fn all_data(&self) -> Vec<V>;

    /// Read-only handle of the current node.
    fn as_node(&self) -> Self::Node<'_>;

    /// Whether the current node has no children.
    fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }
}

/// Copy the subtree of `other` (its value and, recursively, all its descendants) as a new child
/// of the current node of `tree`.
///
/// The copy does not alias the backing storage of `other`. Returns `tree`.
pub fn add_children<'t, V, T, N>(tree: &'t mut T, other: &N) -> &'t mut T
where
    V: Clone,
    T: Tree<V>,
    N: TreeNode<V>,
{
    tree.add_child(other.value());
    let last = tree.child_count() - 1;
    if let Some(mut subtree) = tree.child_mut(last) {
        for index in 0..other.child_count() {
            if let Some(child) = other.child(index) {
                add_children(&mut subtree, &child);
            }
        }
    }
    tree
}

/// Fill the current node with `breadth` default-valued children, recursively, `depth` levels
/// deep.
pub(crate) fn fill_shape<V, T>(tree: &mut T, breadth: usize, depth: usize)
where
    V: Clone + Default,
    T: Tree<V>,
{
    if depth == 0 {
        return;
    }
    for _ in 0..breadth {
        tree.add_child(V::default());
    }
    for index in 0..breadth {
        if let Some(mut child) = tree.child_mut(index) {
            fill_shape(&mut child, breadth, depth - 1);
        }
    }
}
