//! Provides a generic Trie (prefix tree) for storing keys composed of
//! sequences of atoms, each mapped to a value.
//!
//! Atoms must support the [`crate::trie::TrieAtom`] trait. Any
//! `IntoIterator` over atoms can be used as a key, so the same Trie works
//! over chars, bytes, grapheme clusters, path segments or numbers.
//!
//! Since the most common uses of a trie are to store the chars or the bytes
//! of a string, the convenience types [`crate::trie::TrieString`] and
//! [`crate::trie::TrieBytes`] are provided. If these types don't suffice,
//! then use the [`crate::trie::Trie`] type directly.
//!
//! Besides exact lookups and removal (which prunes branches that no longer
//! lead to a key), the Trie answers prefix queries:
//!  - [`crate::trie::Trie::suggest`] lists every key under a prefix
//!  - [`crate::trie::Trie::common`] mines the most popular common prefixes
//!    ("stems") of the stored keys
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//!
//! Typical usages for this data structure:
//!  - Autocompletion
//!  - Discovering shared stems in a set of keys
//!  - Storing large numbers of keys with significant amounts of
//!    sub-key duplication
//!  - ...

pub mod error;

pub mod iterator;

mod node;

pub mod trie;

pub use error::TrieError;
pub use trie::{Stem, Trie, TrieAtom, TrieBytes, TrieString};
