//! Provides a Trie implementation for storing keys composed of sequences
//! of atoms, each key mapping to a value.
//!
//! Atoms must support the TrieAtom trait. Because the trie is based on the
//! concept of atoms, it is up to the user to decide what kind of atoms make
//! the most sense of the keys being stored: chars, bytes, grapheme clusters,
//! &str path segments, numbers, ...
//!
//! Anything which implements `IntoIterator<Item = A>` can be used as a key.
//! Keys handed back by the trie are rebuilt through `FromIterator<A>`, so
//! callers choose whether they want a `String`, a `Vec<A>`, etc.
//!
//! Example 1
//! ```
//! use stemtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("ban".chars(), 1);
//! trie.insert("banana".chars(), 2);
//! trie.insert("boo".chars(), 3);
//!
//! assert_eq!(trie.get("ban".chars()), Some(&1));
//! assert_eq!(trie.get("ba".chars()), None); // only a branch, never stored
//! assert_eq!(trie.remove("ban".chars()), Some(1));
//! assert_eq!(trie.get("ban".chars()), None);
//! assert_eq!(trie.get("banana".chars()), Some(&2));
//! ```
//!
//! Example 2
//! ```
//! use stemtrie::trie::Trie;
//!
//! let mut trie: Trie<&str, usize> = Trie::new();
//! trie.insert("home/teadove/Documents".split('/'), 1);
//! trie.insert("home/teadove/Downloads".split('/'), 2);
//! trie.insert("home/tainella/Documents".split('/'), 3);
//!
//! let keys: Vec<Vec<&str>> = trie.suggest("home/teadove".split('/'));
//! assert_eq!(keys.len(), 2);
//! ```
//!
//! Example 3: mining common stems
//! ```
//! use stemtrie::trie::TrieString;
//!
//! let mut trie = TrieString::new();
//! for (word, value) in [("car", 3), ("carpet", 4), ("cart", 5), ("cartridge", 9),
//!                       ("probe", 10), ("problem", 11), ("probability", 12),
//!                       ("foo", 1), ("food", 2)] {
//!     trie.insert(word.chars(), value);
//! }
//! let stems: Vec<String> = trie.common("".chars(), 3);
//! assert_eq!(stems, vec!["car", "prob", "foo"]);
//! ```
//!
//! The trie is not synchronized; wrap it in a lock to share it between
//! threads.
use std::fmt;

use tracing::trace;

use crate::error::TrieError;
use crate::iterator::{KeyValueRef, PrefixIter};
use crate::node::{Arena, Node, NodeId, ROOT};

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A
where
    A: Copy + Ord,
{
    // Nothing to implement, since A already supports the other traits.
    // It has the functions it needs already
}

/// A Trie keyed by the chars of a string.
pub type TrieString<V> = Trie<char, V>;

/// A Trie keyed by bytes.
pub type TrieBytes<V> = Trie<u8, V>;

/// A common prefix reported by [`Trie::stems`], with the number of stored
/// keys it covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stem<K> {
    pub key: K,
    pub count: usize,
}

/// Stores a key of atoms as individual nodes.
#[derive(Clone, Debug)]
pub struct Trie<A, V> {
    arena: Arena<A, V>,
}

impl<A: TrieAtom, V> Default for Trie<A, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: TrieAtom, V> Trie<A, V> {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new Trie with room for `nodes` nodes before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            arena: Arena::with_capacity(nodes),
        }
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.arena.clear();
    }

    /// Does the Trie contain the supplied key?
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Does the Trie contain any key starting with the supplied prefix?
    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        self.count_prefix(prefix) > 0
    }

    /// How many keys does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.arena[ROOT].count
    }

    /// How many keys start with the supplied prefix?
    pub fn count_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> usize {
        self.find_node(prefix).map_or(0, |id| self.arena[id].count)
    }

    /// How many nodes, not counting the root, make up the Trie?
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Get a reference to a key's associated value.
    pub fn get<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&V> {
        self.find_node(key).and_then(|id| self.arena[id].value.as_ref())
    }

    /// Get a mutable reference to a key's associated value.
    pub fn get_mut<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<&mut V> {
        let id = self.find_node(key)?;
        self.arena[id].value.as_mut()
    }

    /// Like [`Trie::get`], but tells a missing path apart from a path which
    /// exists only because longer keys run through it.
    pub fn lookup<K: IntoIterator<Item = A>>(&self, key: K) -> Result<&V, TrieError> {
        let id = self.find_node(key).ok_or(TrieError::NotFound)?;
        self.arena[id].value.as_ref().ok_or(TrieError::NoValue)
    }

    /// Insert the key and value into the Trie. If the key is already present
    /// the value is updated to the new value. Returns the previously
    /// associated value.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K, value: V) -> Option<V> {
        let mut node = ROOT;
        let mut created = 0;

        for atom in key {
            node = match self.arena[node].children.get(&atom) {
                Some(&child) => child,
                None => {
                    created += 1;
                    self.arena.alloc_child(node, atom)
                }
            };
        }

        let previous = self.arena[node].value.replace(value);
        if previous.is_none() {
            self.arena.increment_path(node);
        }
        trace!(created, replaced = previous.is_some(), "inserted key");
        previous
    }

    /// Remove the key from the Trie, returning its value. Nodes left with
    /// neither a value nor children are pruned on the way back up to the
    /// root. If the key is not stored, nothing changes and None is returned.
    pub fn remove<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<V> {
        let id = self.find_node(key)?;
        let value = self.arena[id].value.take()?;
        self.arena.decrement_path(id);
        self.prune(id);
        Some(value)
    }

    /// Call `visit` with every key, and its value, which starts with
    /// `prefix`. The prefix itself comes first if it is a stored key.
    pub fn walk<P, F>(&self, prefix: P, mut visit: F)
    where
        P: IntoIterator<Item = A>,
        F: FnMut(&[A], &V),
    {
        for kv in self.iter_prefix(prefix) {
            visit(&kv.key, kv.value);
        }
    }

    /// Create an iterator over the Trie.
    pub fn iter(&self) -> PrefixIter<'_, A, V> {
        self.into_iter()
    }

    /// Create an iterator over the keys which start with `prefix`.
    pub fn iter_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> PrefixIter<'_, A, V> {
        let prefix: Vec<A> = prefix.into_iter().collect();
        let start = self.find_node(prefix.iter().copied());
        PrefixIter::new(&self.arena, start, prefix)
    }

    /// Every stored key which starts with `prefix`, in sorted order. An
    /// empty result means nothing matched.
    pub fn suggest<P, K>(&self, prefix: P) -> Vec<K>
    where
        P: IntoIterator<Item = A>,
        K: FromIterator<A>,
    {
        self.iter_prefix(prefix)
            .map(|kv: KeyValueRef<'_, A, V>| kv.key.into_iter().collect())
            .collect()
    }

    /// Get the common prefixes below `prefix` which are at least `min_len`
    /// atoms long, most popular first.
    ///
    /// See [`Trie::stems`].
    pub fn common<P, K>(&self, prefix: P, min_len: usize) -> Vec<K>
    where
        P: IntoIterator<Item = A>,
        K: FromIterator<A>,
    {
        self.stems(prefix, min_len)
            .into_iter()
            .map(|stem| stem.key)
            .collect()
    }

    /// Get the common prefixes below `prefix`, each with the number of
    /// stored keys it covers.
    ///
    /// A prefix is reported once it is at least `min_len` atoms long
    /// (counted from the start of the key, `prefix` included) and it either
    /// is a stored key or is where keys diverge. Nothing below a reported
    /// prefix is examined, and single-child chains are passed through, so
    /// every stored key of at least `min_len` atoms falls under exactly one
    /// reported prefix.
    ///
    /// Results are ordered by covered key count, highest first. Ties keep
    /// ascending key order.
    pub fn stems<P, K>(&self, prefix: P, min_len: usize) -> Vec<Stem<K>>
    where
        P: IntoIterator<Item = A>,
        K: FromIterator<A>,
    {
        let prefix: Vec<A> = prefix.into_iter().collect();
        let start = match self.find_node(prefix.iter().copied()) {
            Some(id) => id,
            None => return vec![],
        };
        let budget = min_len.saturating_sub(prefix.len());

        let mut found: Vec<(Vec<A>, usize)> = vec![];
        self.arena.descend(start, |node: &Node<A, V>, path: &[A]| {
            if path.len() < budget || !node.is_branch() {
                return true;
            }
            found.push((path.to_vec(), node.count));
            false
        });
        trace!(budget, reported = found.len(), "mined common prefixes");

        // Stable, so ties keep traversal order
        found.sort_by(|a, b| b.1.cmp(&a.1));
        found
            .into_iter()
            .map(|(suffix, count)| Stem {
                key: prefix.iter().copied().chain(suffix).collect(),
                count,
            })
            .collect()
    }

    fn find_node<K: IntoIterator<Item = A>>(&self, key: K) -> Option<NodeId> {
        key.into_iter().try_fold(ROOT, |node, atom| {
            self.arena[node].children.get(&atom).copied()
        })
    }

    // Walk up from `id`, releasing nodes until one still holds a value or
    // leads somewhere. The root is never released.
    fn prune(&mut self, id: NodeId) {
        let mut cursor = id;
        let mut pruned = 0;
        while self.arena[cursor].is_dead() {
            match self.arena.release(cursor) {
                Some(parent) => {
                    pruned += 1;
                    cursor = parent;
                }
                None => break,
            }
        }
        if pruned > 0 {
            trace!(pruned, "pruned dead branch");
        }
    }
}

impl<A: TrieAtom, V: PartialEq> PartialEq for Trie<A, V> {
    fn eq(&self, other: &Self) -> bool {
        self.count() == other.count() && self.iter().eq(other.iter())
    }
}

impl<A: TrieAtom, V: Eq> Eq for Trie<A, V> {}

impl<A: TrieAtom, V, K: IntoIterator<Item = A>> Extend<(K, V)> for Trie<A, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<A: TrieAtom, V, K: IntoIterator<Item = A>> FromIterator<(K, V)> for Trie<A, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

/// Indented dump of every node, one per line, children one tab deeper than
/// their parent.
impl<A: TrieAtom + fmt::Debug, V: fmt::Debug> fmt::Display for Trie<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arena[ROOT].value {
            Some(value) => writeln!(f, "root value: {:?}", value)?,
            None => writeln!(f, "root")?,
        }
        let mut result = Ok(());
        self.arena.descend(ROOT, |node, path| {
            if result.is_err() {
                return false;
            }
            result = write_node(f, node, path);
            true
        });
        result
    }
}

fn write_node<A: fmt::Debug, V: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<A, V>,
    path: &[A],
) -> fmt::Result {
    let indent = "\t".repeat(path.len());
    match (path.last(), &node.value) {
        (Some(atom), Some(value)) => writeln!(f, "{}key: {:?} value: {:?}", indent, atom, value),
        (Some(atom), None) => writeln!(f, "{}key: {:?}", indent, atom),
        (None, _) => Ok(()),
    }
}
