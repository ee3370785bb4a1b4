//! Provides a simple prefix trie dictionary for storing keys composed of
//! sequences of atoms. Every stored key has an associated value.
//!
//! Atoms must support the TrieAtom trait. Values stored as counters must
//! support the TrieCounter trait.
//!
//! The interface relies on iterators to insert, remove and check for
//! existence of keys. Because the trie is based on the concept of atoms,
//! it is up to the user to decide what kind of atoms to use to make most
//! sense of the keys we are storing.
//!
//! This flexibility can be really useful when string processing. Here are
//! three examples which show that we can work with keys of:
//!  - chars
//!  - grapheme clusters
//!  - &str ('words')
//!
//! depending on what type of atom granularity we wish to use when
//! interacting with our strings.
//!
//! Example 1
//! ```
//! use triedict::trie::PrefixTrie;
//!
//! let mut trie = PrefixTrie::new();
//! let input = "abcdef".chars();
//! trie.insert(input.clone(), "abcdef".len());
//!
//! // Anything which implements IntoIterator<Item=char> can now be used
//! // to interact with our PrefixTrie
//! assert!(trie.contains(input.clone())); // Clone the original iterator
//! assert!(trie.contains("abcdef".chars())); // Create a new iterator
//! assert!(trie.contains(['a', 'b', 'c', 'd', 'e', 'f'])); // Build an array, etc...
//! assert_eq!(trie.get(['a', 'b', 'c', 'd', 'e', 'f']), Ok(&"abcdef".len()));
//! assert_eq!(trie.remove(input.clone()), Ok("abcdef".len()));
//! assert!(!trie.contains(input));
//! ```
//!
//! Example 2
//! ```
//! use triedict::trie::PrefixTrie;
//! use unicode_segmentation::UnicodeSegmentation;
//!
//! let mut trie: PrefixTrie<&str, usize> = PrefixTrie::new();
//! let s = "a̐éö̲\r\n";
//! let input = s.graphemes(true);
//! trie.insert(input.clone(), 1);
//! // Anything which implements IntoIterator<Item=&str> can now be used
//! // to interact with our PrefixTrie
//! assert!(trie.contains(input.clone()));
//! assert_eq!(trie.remove(input.clone()), Ok(1));
//! assert!(!trie.contains(input));
//! ```
//!
//! Example 3
//! ```
//! use triedict::trie::PrefixTrie;
//!
//! let mut trie = PrefixTrie::new();
//! let input = "the quick brown fox".split_whitespace();
//! trie.insert(input.clone(), 4);
//!
//! // Anything which implements IntoIterator<Item=&str> can now be used
//! // to interact with our PrefixTrie
//! assert!(trie.contains(input.clone()));
//! assert!(trie.contains_prefix("the quick brown".split_whitespace()));
//! assert_eq!(trie.remove(input.clone()), Ok(4));
//! assert!(!trie.contains(input));
//! ```
//!
//! Counter-style values can be adjusted in place without re-inserting.
//!
//! Example 4
//! ```
//! use triedict::trie::StringTrie;
//!
//! let mut trie: StringTrie<usize> = StringTrie::new();
//! trie.insert("hits".chars(), 41);
//! trie.increment("hits".chars()).expect("key is present");
//! assert_eq!(trie.get("hits".chars()), Ok(&42));
//! ```
//!
//! Typical usages for this data structure:
//!  - Dictionaries and symbol tables
//!  - Word/occurrence counting
//!  - Storing large numbers of keys with significant amounts of
//!    sub-key duplication
//!  - Lexicographically ordered key enumeration
//!  - ...

use crate::error::TrieError;
use crate::iterator::Iter;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Atoms which we wish to store in a PrefixTrie must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Default + PartialEq + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A
where
    A: Copy + Default + PartialEq + Ord,
{
    // Nothing to implement, since A already supports the other traits.
    // It has the functions it needs already
}

/// Values which we wish to adjust in place with [`PrefixTrie::increment`]
/// and [`PrefixTrie::decrement`] must implement TrieCounter.
///
/// Implementations are provided for the primitive integer types, using
/// wrapping arithmetic. Restricting the counter operations to this trait
/// means a non-numeric payload is rejected at compile time rather than
/// at run time.
pub trait TrieCounter {
    /// Adjust the counter up by one.
    fn increment(&mut self);

    /// Adjust the counter down by one.
    fn decrement(&mut self);
}

macro_rules! impl_trie_counter {
    ($($int:ty)*) => {
        $(
            impl TrieCounter for $int {
                fn increment(&mut self) {
                    *self = self.wrapping_add(1);
                }

                fn decrement(&mut self) {
                    *self = self.wrapping_sub(1);
                }
            }
        )*
    };
}

impl_trie_counter!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

/// A trie keyed by chars, the most common way to store strings.
pub type StringTrie<V> = PrefixTrie<char, V>;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Node<A, V> {
    pub(crate) children: Vec<Node<A, V>>,
    pub(crate) atom: A,
    pub(crate) value: Option<V>,
    pub(crate) terminal: bool,
}

/// Stores keys of atoms as individual nodes, each key with an associated
/// value.
///
/// Invariant: a node holds a value iff it is terminal, so the number of
/// stored keys always equals the number of terminal nodes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct PrefixTrie<A, V> {
    pub(crate) root: Node<A, V>,
    count: usize,
}

impl<A: TrieAtom, V> Default for Node<A, V> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            atom: A::default(),
            value: None,
            terminal: false,
        }
    }
}

impl<A: TrieAtom, V> Node<A, V> {
    fn new(atom: A) -> Self {
        Self {
            atom,
            ..Default::default()
        }
    }

    // Children are kept sorted by atom, so lookup is a binary search and
    // in-order traversal yields keys lexicographically.
    fn position(&self, atom: A) -> Result<usize, usize> {
        self.children.binary_search_by(|child| child.atom.cmp(&atom))
    }

    fn child(&self, atom: A) -> Option<&Node<A, V>> {
        self.position(atom).ok().map(|index| &self.children[index])
    }

    fn child_mut(&mut self, atom: A) -> Option<&mut Node<A, V>> {
        match self.position(atom) {
            Ok(index) => Some(&mut self.children[index]),
            Err(_) => None,
        }
    }
}

impl<A: TrieAtom, V> Default for PrefixTrie<A, V> {
    fn default() -> Self {
        Self {
            root: Node::default(),
            count: 0,
        }
    }
}

impl<A: TrieAtom, V> PrefixTrie<A, V> {
    /// Create a new PrefixTrie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the PrefixTrie.
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.count = 0;
    }

    /// Does the PrefixTrie contain the supplied key?
    ///
    /// Only complete keys count; a path which exists merely as a prefix of
    /// longer keys is not a match.
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.find(key).map_or(false, |node| node.terminal)
    }

    /// Does the PrefixTrie contain the supplied prefix?
    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        self.find(prefix).is_some()
    }

    /// How many keys does the PrefixTrie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Get a reference to a key's associated value.
    ///
    /// Fails with [`TrieError::KeyNotFound`] if the key's path does not
    /// exist, or if the path exists only as a prefix of longer keys and was
    /// never inserted itself. A key which was never inserted is therefore
    /// indistinguishable from one whose path happens to be shared.
    pub fn get<K: IntoIterator<Item = A>>(&self, key: K) -> Result<&V, TrieError> {
        self.find(key)
            .and_then(|node| node.value.as_ref())
            .ok_or(TrieError::KeyNotFound)
    }

    /// Get a mutable reference to a key's associated value.
    ///
    /// Same lookup policy as [`PrefixTrie::get`].
    pub fn get_mut<K: IntoIterator<Item = A>>(&mut self, key: K) -> Result<&mut V, TrieError> {
        self.find_mut(key)
            .and_then(|node| node.value.as_mut())
            .ok_or(TrieError::KeyNotFound)
    }

    /// Insert the key and value into the PrefixTrie. If the key is already
    /// present the value is updated to the new value. Returns the previously
    /// associated value.
    ///
    /// The empty key is valid and is stored at the root.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K, value: V) -> Option<V> {
        let mut node = &mut self.root;
        for atom in key {
            let index = match node.position(atom) {
                Ok(index) => index,
                Err(index) => {
                    node.children.insert(index, Node::new(atom));
                    index
                }
            };
            node = &mut node.children[index];
        }
        if !node.terminal {
            node.terminal = true;
            self.count += 1;
        }
        node.value.replace(value)
    }

    /// Is the PrefixTrie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Create an iterator over the PrefixTrie.
    ///
    /// Pairs are yielded in lexicographic key order.
    pub fn iter(&self) -> Iter<'_, A, V> {
        self.into_iter()
    }

    /// Collect every stored key, in lexicographic order.
    ///
    /// The output is rebuilt on every call by a pre-order walk of the tree,
    /// so the cost is proportional to the number of nodes. We use the
    /// `FromIterator` trait to re-assemble each key from its atoms, e.g.
    /// `keys::<String>()` for a char keyed trie.
    pub fn keys<K: FromIterator<A>>(&self) -> Vec<K> {
        let mut keys = Vec::new();
        let mut path = Vec::new();
        Self::collect_keys(&self.root, &mut path, &mut keys);
        keys
    }

    /// Remove the key from the PrefixTrie, returning its associated value.
    ///
    /// Fails with [`TrieError::KeyNotFound`], leaving the trie untouched, if
    /// the key is not present. On success, any nodes left childless and
    /// non-terminal along the key's path are pruned.
    pub fn remove<K: IntoIterator<Item = A>>(&mut self, key: K) -> Result<V, TrieError> {
        let atoms: Vec<A> = key.into_iter().collect();
        let value = Self::remove_in(&mut self.root, &atoms)?;
        self.count -= 1;
        Ok(value)
    }

    fn collect_keys<K: FromIterator<A>>(node: &Node<A, V>, path: &mut Vec<A>, keys: &mut Vec<K>) {
        if node.terminal {
            keys.push(path.iter().copied().collect());
        }
        for child in &node.children {
            path.push(child.atom);
            Self::collect_keys(child, path, keys);
            path.pop();
        }
    }

    fn find<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&Node<A, V>> {
        let mut node = &self.root;
        for atom in key {
            node = node.child(atom)?;
        }
        Some(node)
    }

    fn find_mut<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<&mut Node<A, V>> {
        let mut node = &mut self.root;
        for atom in key {
            node = node.child_mut(atom)?;
        }
        Some(node)
    }

    // Recursive removal. The end-of-key frame clears the terminal mark and
    // takes the value; each frame above prunes its child on unwind if the
    // child ended up childless and non-terminal. Nothing is mutated before
    // the key is known to be present.
    fn remove_in(node: &mut Node<A, V>, atoms: &[A]) -> Result<V, TrieError> {
        let (&atom, rest) = match atoms.split_first() {
            Some(split) => split,
            None => {
                if !node.terminal {
                    return Err(TrieError::KeyNotFound);
                }
                node.terminal = false;
                // Safe to expect here since a terminal node always holds a value
                return Ok(node.value.take().expect("terminal node holds a value"));
            }
        };
        let index = node.position(atom).map_err(|_| TrieError::KeyNotFound)?;
        let value = Self::remove_in(&mut node.children[index], rest)?;
        if node.children[index].children.is_empty() && !node.children[index].terminal {
            node.children.remove(index);
        }
        Ok(value)
    }
}

impl<A: TrieAtom, V: TrieCounter> PrefixTrie<A, V> {
    /// Adjust the value associated with the key up by one.
    ///
    /// Fails with [`TrieError::KeyNotFound`] under the same lookup policy as
    /// [`PrefixTrie::get`].
    pub fn increment<K: IntoIterator<Item = A>>(&mut self, key: K) -> Result<(), TrieError> {
        self.get_mut(key).map(TrieCounter::increment)
    }

    /// Adjust the value associated with the key down by one.
    ///
    /// Fails with [`TrieError::KeyNotFound`] under the same lookup policy as
    /// [`PrefixTrie::get`].
    pub fn decrement<K: IntoIterator<Item = A>>(&mut self, key: K) -> Result<(), TrieError> {
        self.get_mut(key).map(TrieCounter::decrement)
    }
}
