//! Provides the trie error taxonomy.

use thiserror::Error;

/// Errors reported by fallible trie operations.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum TrieError {
    /// The key's path does not exist in the trie, or the path exists only
    /// as a prefix of other keys and no value was ever stored for it.
    #[error("key not found")]
    KeyNotFound,
}
