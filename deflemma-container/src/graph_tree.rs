use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use crate::tree::fill_shape;
use crate::{Tree, TreeNode};

/// Default depth used when reserving the store of a new tree.
const DEFAULT_DEPTH: usize = 8;
/// Default breadth used when reserving the store of a new tree.
const DEFAULT_BREADTH: usize = 16;

/// The storage shared by all the handles of a [`GraphTree`].
struct GraphStore<V> {
    /// The values of every node, indexed by node index. The root is at index 0.
    data: Vec<V>,
    /// The children of each node, keyed by the index of the parent.
    relationships: HashMap<usize, Vec<usize>>,
    /// Capacity reserved for a list of children the first time it's created.
    breadth_alloc: usize,
}

/// A rose tree whose nodes live in one shared array, with the parent to children relations kept
/// in a separate map.
///
/// A `GraphTree` is a handle: an index into the shared store. Cloning it is O(1) and yields a
/// shallow view over the same storage, so a node added through one handle is visible through all
/// the others.
///
/// [`Tree::length`] is the size of the whole store, not of the subtree under the handle, and
/// [`Tree::all_data`] lists the store in insertion order (including default-valued pre-allocated
/// slots), regardless of the node the handle points to.
///
/// The store is not synchronized: a `GraphTree` is neither `Send` nor `Sync`.
pub struct GraphTree<V> {
    /// The index of the node this handle points to.
    current_index: usize,
    /// The storage shared with all the other handles of this tree.
    store: Rc<RefCell<GraphStore<V>>>,
}

/// Read-only handle to a node of a [`GraphTree`].
pub struct GraphNode<V> {
    index: usize,
    store: Rc<RefCell<GraphStore<V>>>,
}

impl<V: Default> GraphTree<V> {
    /// Make a new tree with a single default-valued root.
    pub fn new() -> GraphTree<V> {
        GraphTree::with_capacity(DEFAULT_DEPTH, DEFAULT_BREADTH)
    }

    /// Make a new tree with a single default-valued root, reserving room in the store for
    /// `breadth * depth` nodes and `breadth` children per node.
    pub fn with_capacity(depth: usize, breadth: usize) -> GraphTree<V> {
        let mut data = Vec::with_capacity(depth * breadth);
        data.push(V::default());
        GraphTree {
            current_index: 0,
            store: Rc::new(RefCell::new(GraphStore {
                data,
                relationships: HashMap::with_capacity(depth * breadth),
                breadth_alloc: breadth,
            })),
        }
    }
}

impl<V: Clone + Default> GraphTree<V> {
    /// Make a full tree where every node has `breadth` children, `depth` levels deep, and every
    /// node holds the default value.
    pub fn with_shape(breadth: usize, depth: usize) -> GraphTree<V> {
        let mut tree = GraphTree::with_capacity(depth, breadth);
        fill_shape(&mut tree, breadth, depth);
        tree
    }
}

impl<V> GraphTree<V> {
    /// The index in the shared store of the node this handle points to.
    pub fn index(&self) -> usize {
        self.current_index
    }

    /// Whether the two handles share the same backing store.
    pub fn same_store(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.store, &other.store)
    }

    fn handle(&self, index: usize) -> GraphTree<V> {
        GraphTree {
            current_index: index,
            store: self.store.clone(),
        }
    }

    fn child_index(&self, index: usize) -> Option<usize> {
        self.store
            .borrow()
            .relationships
            .get(&self.current_index)
            .and_then(|relation| relation.get(index))
            .copied()
    }
}

impl<V: Clone> Tree<V> for GraphTree<V> {
    type Node<'a> = GraphNode<V> where Self: 'a;
    type NodeMut<'a> = GraphTree<V> where Self: 'a;

    fn length(&self) -> usize {
        self.store.borrow().data.len()
    }

    fn value(&self) -> V {
        self.store.borrow().data[self.current_index].clone()
    }

    fn set_value(&mut self, value: V) -> &mut Self {
        self.store.borrow_mut().data[self.current_index] = value;
        self
    }

    fn child_count(&self) -> usize {
        self.store
            .borrow()
            .relationships
            .get(&self.current_index)
            .map_or(0, Vec::len)
    }

    fn add_child(&mut self, value: V) -> &mut Self {
        let mut store = self.store.borrow_mut();
        let child_index = store.data.len();
        store.data.push(value);
        let breadth_alloc = store.breadth_alloc;
        store
            .relationships
            .entry(self.current_index)
            .or_insert_with(|| Vec::with_capacity(breadth_alloc))
            .push(child_index);
        drop(store);
        self
    }

    fn child(&self, index: usize) -> Option<GraphNode<V>> {
        self.child_index(index).map(|index| GraphNode {
            index,
            store: self.store.clone(),
        })
    }

    fn child_mut(&mut self, index: usize) -> Option<GraphTree<V>> {
        self.child_index(index).map(|index| self.handle(index))
    }

    fn children(&self) -> Vec<V> {
        let store = self.store.borrow();
        match store.relationships.get(&self.current_index) {
            Some(relation) => relation.iter().map(|&i| store.data[i].clone()).collect(),
            None => vec![],
        }
    }

    fn all_data(&self) -> Vec<V> {
        self.store.borrow().data.clone()
    }

    fn as_node(&self) -> GraphNode<V> {
        GraphNode {
            index: self.current_index,
            store: self.store.clone(),
        }
    }
}

impl<V: Clone> TreeNode<V> for GraphNode<V> {
    fn value(&self) -> V {
        self.store.borrow().data[self.index].clone()
    }

    fn child_count(&self) -> usize {
        self.store
            .borrow()
            .relationships
            .get(&self.index)
            .map_or(0, Vec::len)
    }

    fn child(&self, index: usize) -> Option<GraphNode<V>> {
        let child = self
            .store
            .borrow()
            .relationships
            .get(&self.index)
            .and_then(|relation| relation.get(index))
            .copied();
        child.map(|index| GraphNode {
            index,
            store: self.store.clone(),
        })
    }
}

impl<V: Default> Default for GraphTree<V> {
    fn default() -> Self {
        GraphTree::new()
    }
}

// Handles are shallow: cloning never requires `V: Clone`.
impl<V> Clone for GraphTree<V> {
    fn clone(&self) -> Self {
        self.handle(self.current_index)
    }
}

impl<V> Clone for GraphNode<V> {
    fn clone(&self) -> Self {
        GraphNode {
            index: self.index,
            store: self.store.clone(),
        }
    }
}

impl<V: Debug> Debug for GraphTree<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let store = self.store.borrow();
        f.debug_struct("GraphTree")
            .field("current_index", &self.current_index)
            .field("data", &store.data)
            .field("relationships", &store.relationships)
            .finish()
    }
}

impl<V: Debug> Debug for GraphNode<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphNode")
            .field("index", &self.index)
            .field("value", &self.store.borrow().data[self.index])
            .finish()
    }
}
