//! Node storage for a [`crate::trie::Trie`].
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. The children map
//! of a node is the only owning edge in the tree; the `parent` link is a
//! plain index used to walk back up towards the root when pruning and
//! never keeps a node alive. Released slots are recycled through a free
//! list.

use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use crate::trie::TrieAtom;

/// Index of a node inside an [`Arena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// The root always occupies the first slot and is never released.
pub(crate) const ROOT: NodeId = NodeId(0);

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node<A, V> {
    /// `None` for the root and for slots sitting in the free list.
    pub(crate) atom: Option<A>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: BTreeMap<A, NodeId>,
    pub(crate) value: Option<V>,
    /// Number of stored keys in this subtree, this node included.
    pub(crate) count: usize,
}

impl<A: TrieAtom, V> Node<A, V> {
    fn root() -> Self {
        Self {
            atom: None,
            parent: None,
            children: BTreeMap::new(),
            value: None,
            count: 0,
        }
    }

    fn child(atom: A, parent: NodeId) -> Self {
        Self {
            atom: Some(atom),
            parent: Some(parent),
            ..Self::root()
        }
    }

    /// A node that neither stores a key nor leads to one.
    pub(crate) fn is_dead(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// A node which ends a key or where keys diverge.
    pub(crate) fn is_branch(&self) -> bool {
        self.value.is_some() || self.children.len() > 1
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<A, V> {
    nodes: Vec<Node<A, V>>,
    free: Vec<NodeId>,
}

impl<A: TrieAtom, V> Arena<A, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::root());
        Self {
            nodes,
            free: vec![],
        }
    }

    /// Live nodes, not counting the root.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len() - self.free.len() - 1
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::root());
        self.free.clear();
    }

    /// Create a new child of `parent` for `atom` and link it in.
    pub(crate) fn alloc_child(&mut self, parent: NodeId, atom: A) -> NodeId {
        let node = Node::child(atom, parent);
        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        };
        self.nodes[parent.0].children.insert(atom, id);
        id
    }

    /// Detach a childless node from its parent and recycle its slot.
    /// Returns the former parent, or `None` for the root.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<NodeId> {
        let node = &mut self.nodes[id.0];
        debug_assert!(node.children.is_empty());
        let parent = node.parent.take()?;
        let atom = node.atom.take();
        node.value = None;
        node.count = 0;
        if let Some(atom) = atom {
            self.nodes[parent.0].children.remove(&atom);
        }
        self.free.push(id);
        Some(parent)
    }

    /// Add one to the key count of `id` and all of its ancestors.
    pub(crate) fn increment_path(&mut self, id: NodeId) {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &mut self.nodes[current.0];
            node.count += 1;
            cursor = node.parent;
        }
    }

    /// Subtract one from the key count of `id` and all of its ancestors.
    pub(crate) fn decrement_path(&mut self, id: NodeId) {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &mut self.nodes[current.0];
            node.count -= 1;
            cursor = node.parent;
        }
    }

    /// Pre-order walk of everything below `start`, siblings in ascending
    /// atom order. The visitor gets each node and the atoms leading to it
    /// from `start`; returning `false` skips that node's subtree.
    pub(crate) fn descend<F>(&self, start: NodeId, mut visit: F)
    where
        F: FnMut(&Node<A, V>, &[A]) -> bool,
    {
        let mut path: Vec<A> = vec![];
        let mut stack: Vec<(NodeId, usize)> = self[start]
            .children
            .values()
            .rev()
            .map(|&child| (child, 1))
            .collect();

        while let Some((id, depth)) = stack.pop() {
            let node = &self[id];
            path.truncate(depth - 1);
            path.extend(node.atom);
            if visit(node, &path) {
                stack.extend(node.children.values().rev().map(|&child| (child, depth + 1)));
            }
        }
    }
}

impl<A, V> Index<NodeId> for Arena<A, V> {
    type Output = Node<A, V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl<A, V> IndexMut<NodeId> for Arena<A, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}
