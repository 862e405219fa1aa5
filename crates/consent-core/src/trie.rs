//! Prefix tree over disease abbreviations.
//!
//! Each edge is one `-`-separated abbreviation piece, so `ADHD-RC` lives at
//! `root -> ADHD -> RC`. A node carries a value only when its path spells a
//! full abbreviation from the table; other nodes are shared prefixes.

use std::collections::BTreeMap;

/// Separator between abbreviation pieces.
pub const PIECE_SEPARATOR: char = '-';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseTrieNode {
    value: Option<String>,
    children: BTreeMap<String, DiseaseTrieNode>,
}

impl DiseaseTrieNode {
    /// Full disease name for the abbreviation ending at this node.
    ///
    /// An empty name in the table counts as no name.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref().filter(|value| !value.is_empty())
    }

    pub fn child(&self, piece: &str) -> Option<&DiseaseTrieNode> {
        self.children.get(piece)
    }

    pub fn has_child(&self, piece: &str) -> bool {
        self.children.contains_key(piece)
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &DiseaseTrieNode)> {
        self.children.iter().map(|(piece, node)| (piece.as_str(), node))
    }
}

/// Disease abbreviation trie, built once and then read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseTrie {
    root: DiseaseTrieNode,
    entries: usize,
}

impl DiseaseTrie {
    /// Build a trie from `(abbreviation, full name)` pairs.
    ///
    /// A repeated abbreviation overwrites the earlier name.
    pub fn from_entries<I, A, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A, N)>,
        A: AsRef<str>,
        N: Into<String>,
    {
        let mut trie = Self::default();
        for (abbreviation, name) in entries {
            trie.insert(abbreviation.as_ref(), name.into());
        }
        trie
    }

    fn insert(&mut self, abbreviation: &str, name: String) {
        let mut node = &mut self.root;
        for piece in abbreviation.split(PIECE_SEPARATOR) {
            node = node.children.entry(piece.to_string()).or_default();
        }
        if node.value.replace(name).is_none() {
            self.entries += 1;
        }
    }

    pub fn root(&self) -> &DiseaseTrieNode {
        &self.root
    }

    /// Number of distinct abbreviations.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Exact lookup of a full abbreviation such as `ADHD-RC`.
    pub fn lookup(&self, abbreviation: &str) -> Option<&str> {
        let mut node = &self.root;
        for piece in abbreviation.split(PIECE_SEPARATOR) {
            node = node.child(piece)?;
        }
        node.value()
    }
}
