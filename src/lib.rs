//! Provides a simple prefix trie dictionary for storing keys composed of
//! a [`std::vec::Vec`] of atoms. Every key has an associated value.
//!
//! Atoms must support the [`crate::trie::TrieAtom`] trait. Values adjusted
//! with the counter operations must support the
//! [`crate::trie::TrieCounter`] trait.
//!
//! The interface relies on iterators to insert, remove, check for existence
//! of keys. Because the trie is based on the concept of atoms, then it
//! is up to the user to decide what kind of atoms to use to make most sense
//! of the keys we are storing. This flexibility can be really useful when
//! string processing: (atoms can be `Vec<char>` or `Vec<&str>` or ...?) or
//! when working with numeric tries.
//!
//! Since the most common use of a trie is to store the chars of a String,
//! a convenience type, [`crate::trie::StringTrie`], is provided. It
//! traverses keys one Unicode scalar value at a time; callers who want
//! grapheme cluster or word granularity can key the trie with `&str` atoms
//! instead.
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//!
//! Typical usages for this data structure:
//!  - Dictionaries and symbol tables
//!  - Word/occurrence counting
//!  - Storing large numbers of keys with significant amounts of
//!    sub-key duplication
//!  - Lexicographically ordered key enumeration
//!  - ...

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod error;

pub mod iterator;

pub mod trie;
