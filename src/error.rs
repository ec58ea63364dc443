//! Lookup outcomes for [`crate::trie::Trie::lookup`].
use thiserror::Error;

/// Why a lookup did not yield a value.
///
/// Neither case is a failure of the trie; both are routine answers for a
/// key which is not stored.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrieError {
    /// No path for the key exists in the trie.
    #[error("key not found")]
    NotFound,
    /// The path exists because longer keys pass through it, but the key
    /// itself holds no value.
    #[error("key is a prefix of stored keys but holds no value")]
    NoValue,
}
