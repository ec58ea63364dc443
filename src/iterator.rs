//! Provides Trie iterators.
//!
//! Iteration is a pre-order, depth-first walk driven by an explicit stack,
//! so arbitrarily long keys do not grow the call stack. Siblings are
//! visited in ascending atom order, which makes the output sorted.
//!
//! Example
//! ```
//! use stemtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("ban".chars(), 1);
//! trie.insert("banana".chars(), 2);
//! trie.insert("boo".chars(), 3);
//!
//! let keys: Vec<String> = trie
//!     .iter_prefix("ban".chars())
//!     .map(|kv| kv.key.into_iter().collect())
//!     .collect();
//! assert_eq!(keys, vec!["ban", "banana"]);
//! ```
use crate::node::{Arena, NodeId};
use crate::trie::{Trie, TrieAtom};

/// Iterator Item
#[derive(Debug, PartialEq, Eq)]
pub struct KeyValueRef<'a, A, V> {
    pub key: Vec<A>,
    pub value: &'a V,
}

/// Iterator over the keys of a Trie which share a prefix.
#[derive(Debug)]
pub struct PrefixIter<'a, A, V> {
    arena: &'a Arena<A, V>,
    head: Option<KeyValueRef<'a, A, V>>,
    key: Vec<A>,
    base: usize,
    stack: Vec<(NodeId, usize)>,
}

impl<'a, A: TrieAtom, V> PrefixIter<'a, A, V> {
    pub(crate) fn new(arena: &'a Arena<A, V>, start: Option<NodeId>, prefix: Vec<A>) -> Self {
        let base = prefix.len();
        let (head, stack) = match start {
            Some(id) => {
                let node = &arena[id];
                let head = node.value.as_ref().map(|value| KeyValueRef {
                    key: prefix.clone(),
                    value,
                });
                let stack = node
                    .children
                    .values()
                    .rev()
                    .map(|&child| (child, base + 1))
                    .collect();
                (head, stack)
            }
            None => (None, vec![]),
        };
        Self {
            arena,
            head,
            key: prefix,
            base,
            stack,
        }
    }
}

impl<'a, A: TrieAtom, V> Iterator for PrefixIter<'a, A, V> {
    type Item = KeyValueRef<'a, A, V>;

    fn next(&mut self) -> Option<Self::Item> {
        // The prefix node itself always comes first.
        if let Some(head) = self.head.take() {
            return Some(head);
        }
        let arena = self.arena;
        while let Some((id, depth)) = self.stack.pop() {
            let node = &arena[id];
            debug_assert!(depth > self.base);
            self.key.truncate(depth - 1);
            self.key.extend(node.atom);
            self.stack
                .extend(node.children.values().rev().map(|&child| (child, depth + 1)));
            if let Some(value) = node.value.as_ref() {
                return Some(KeyValueRef {
                    key: self.key.clone(),
                    value,
                });
            }
        }
        None
    }
}

// Iterator
impl<'a, A: TrieAtom, V> IntoIterator for &'a Trie<A, V> {
    type Item = KeyValueRef<'a, A, V>;
    type IntoIter = PrefixIter<'a, A, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_prefix(std::iter::empty())
    }
}
