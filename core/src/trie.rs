/// Prefix trie for longest-match glyph lookup.
use std::collections::HashMap;

/// A prefix tree keyed by `char`, carrying a value at every complete entry.
///
/// Glyph tables insert their multi-codepoint graphemes here so that the
/// encoder can find every table entry starting at a position of its input
/// without re-scanning the whole table.
///
/// # Example
/// ```
/// use tmphone_core::trie::TrieNode;
///
/// let mut trie = TrieNode::new();
/// trie.insert("க", "K");
/// trie.insert("க்க", "K2");
///
/// let input: Vec<char> = "க்கா".chars().collect();
/// assert_eq!(trie.walk_prefixes(&input, 0), vec![(1, &"K"), (3, &"K2")]);
/// ```
#[derive(Debug, Clone)]
pub struct TrieNode<V> {
    children: HashMap<char, Box<TrieNode<V>>>,
    /// Present only on nodes that terminate an inserted entry.
    value: Option<V>,
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TrieNode<V> {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }

    /// Insert an entry, replacing the value of an existing identical key.
    pub fn insert(&mut self, key: &str, value: V) {
        let mut node = self;
        for ch in key.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(TrieNode::new()));
        }
        node.value = Some(value);
    }

    /// Walk the trie from `start` in `input` and return every entry found.
    ///
    /// Results are `(end_index, value)` pairs where `end_index` is the
    /// exclusive char index after the match, in order of increasing length.
    pub fn walk_prefixes(&self, input: &[char], start: usize) -> Vec<(usize, &V)> {
        let mut res = Vec::new();
        let mut node = self;
        let mut idx = start;
        while idx < input.len() {
            match node.children.get(&input[idx]) {
                Some(child) => {
                    node = child;
                    idx += 1;
                    if let Some(v) = &node.value {
                        res.push((idx, v));
                    }
                }
                None => break,
            }
        }
        res
    }
}
