//! Provides ordered PrefixTrie iterators.
//!
//! Children within a node are kept sorted by atom, so a depth-first
//! traversal with an explicit stack yields key/value pairs in
//! lexicographic key order without a separate sort step.
use crate::trie::{Node, PrefixTrie, TrieAtom};

/// Iterator Item
#[derive(Debug, PartialEq)]
pub struct KeyValue<A, V> {
    pub key: Vec<A>,
    pub value: V,
}

/// Iterator Item
#[derive(Debug, PartialEq)]
pub struct KeyValueRef<'a, A, V> {
    pub key: Vec<A>,
    pub value: &'a V,
}

/// Consuming iterator over a PrefixTrie.
#[derive(Debug)]
pub struct IntoIter<A, V> {
    stack: Vec<(Vec<A>, Node<A, V>)>,
}

impl<A: TrieAtom, V> IntoIterator for PrefixTrie<A, V> {
    type Item = KeyValue<A, V>;
    type IntoIter = IntoIter<A, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            stack: vec![(Vec::new(), self.root)],
        }
    }
}

impl<A: TrieAtom, V> Iterator for IntoIter<A, V> {
    type Item = KeyValue<A, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, mut node)) = self.stack.pop() {
            // Popping children off the back pushes the largest atom first,
            // leaving the smallest on top of the stack
            while let Some(child) = node.children.pop() {
                let mut child_path = path.clone();
                child_path.push(child.atom);
                self.stack.push((child_path, child));
            }
            if node.terminal {
                if let Some(value) = node.value.take() {
                    return Some(KeyValue { key: path, value });
                }
            }
        }
        None
    }
}

/// Borrowing iterator over a PrefixTrie.
#[derive(Debug)]
pub struct Iter<'a, A, V> {
    stack: Vec<(Vec<A>, &'a Node<A, V>)>,
}

impl<'a, A: TrieAtom, V> IntoIterator for &'a PrefixTrie<A, V> {
    type Item = KeyValueRef<'a, A, V>;
    type IntoIter = Iter<'a, A, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            stack: vec![(Vec::new(), &self.root)],
        }
    }
}

impl<'a, A: TrieAtom, V> Iterator for Iter<'a, A, V> {
    type Item = KeyValueRef<'a, A, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            for child in node.children.iter().rev() {
                let mut child_path = path.clone();
                child_path.push(child.atom);
                self.stack.push((child_path, child));
            }
            if node.terminal {
                if let Some(value) = node.value.as_ref() {
                    return Some(KeyValueRef { key: path, value });
                }
            }
        }
        None
    }
}
