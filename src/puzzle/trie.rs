//! Prefix tree over the round's vocabulary
//!
//! The discovery engine walks grid lines letter by letter; the trie lets it
//! abandon a line as soon as no vocabulary word continues with the letters
//! seen so far. Terminal nodes store the canonical word so a hit needs no
//! separate lookup.

use std::collections::HashMap;

/// A single trie node: sparse child map keyed by uppercase letter, plus the
/// canonical word if a word ends here.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    word: Option<String>,
}

impl TrieNode {
    /// Child reached by `letter`, if any word continues with it.
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// The canonical word ending at this node, if any.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Whether a vocabulary word ends exactly here.
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// Whether any word continues past this node.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Prefix tree storing a set of uppercase words.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert `word`, normalizing to uppercase. Re-inserting an existing
    /// word is a no-op.
    pub fn insert(&mut self, word: &str) {
        let canonical = word.to_ascii_uppercase();
        let mut node = &mut self.root;
        for letter in canonical.chars() {
            node = node.children.entry(letter).or_default();
        }
        if node.word.is_none() {
            node.word = Some(canonical);
            self.len += 1;
        }
    }

    /// Entry point for prefix walks.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `word` (case-insensitive) is stored.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for letter in word.to_ascii_uppercase().chars() {
            match node.child(letter) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_terminal()
    }
}
