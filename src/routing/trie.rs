//! Segmented prefix tree mapping keys to route values.
//!
//! # Responsibilities
//! - Insert, look up and delete values keyed by segmented strings
//! - Resolve `/*` and `/**` wildcard children during lookup
//! - Prune childless, valueless nodes after deletion
//!
//! # Design Decisions
//! - Children are owned in a `HashMap` keyed by the exact segment string
//! - Internal nodes carry `None`; an absent value is never matched nor walked
//! - The segmenter is fixed at construction and used for every key
//! - No internal locking: mutate during registration, read afterwards
//!
//! # Matching precedence
//! ```text
//! exact child  >  "/*" sibling  >  "/**" sibling  >  no match
//! ```
//! The wildcard candidate is recomputed before every descent and only the
//! one from the deepest level reached survives.

use std::collections::HashMap;

use crate::routing::segmenter::{path_segmenter, Segments, StringSegmenter};

/// Single-level wildcard segment.
pub const WILDCARD: &str = "/*";

/// Multi-level wildcard segment.
pub const MULTI_WILDCARD: &str = "/**";

#[derive(Debug, Clone)]
struct Node<V> {
    value: Option<V>,
    children: HashMap<String, Node<V>>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self {
            value: None,
            children: HashMap::new(),
        }
    }
}

impl<V> Node<V> {
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Value of the wildcard child consulted when exact matching fails below.
    fn wildcard_value(&self) -> Option<&V> {
        self.children
            .get(WILDCARD)
            .or_else(|| self.children.get(MULTI_WILDCARD))
            .and_then(|child| child.value.as_ref())
    }

    fn count(&self) -> usize {
        let own = usize::from(self.value.is_some());
        own + self.children.values().map(Node::count).sum::<usize>()
    }

    fn walk<'a, E, F>(&'a self, key: &mut String, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&str, &'a V) -> Result<(), E>,
    {
        if let Some(value) = &self.value {
            f(key.as_str(), value)?;
        }
        for (part, child) in &self.children {
            let len = key.len();
            key.push_str(part);
            let res = child.walk(key, f);
            key.truncate(len);
            res?;
        }
        Ok(())
    }
}

/// Trie of string keys and `V` values.
///
/// Keys are split by a [`StringSegmenter`]; by default [`path_segmenter`],
/// so `"/a/b/c"` is stored under the nodes `/a`, `/b`, `/c`.
///
/// Values live in `Option<V>` and internal nodes hold `None`, so "no value"
/// and "no route" are the same thing. `put` only accepts a real `V`; there is
/// no way to store an explicit empty value.
#[derive(Debug, Clone)]
pub struct PathTrie<V> {
    segmenter: StringSegmenter,
    root: Node<V>,
}

impl<V> Default for PathTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PathTrie<V> {
    /// Create an empty trie segmenting keys on `/`.
    pub fn new() -> Self {
        Self::with_segmenter(path_segmenter)
    }

    /// Create an empty trie with a custom segmenter.
    ///
    /// Every key ever inserted must go through the same segmenter.
    pub fn with_segmenter(segmenter: StringSegmenter) -> Self {
        Self {
            segmenter,
            root: Node::default(),
        }
    }

    /// Insert `value` at `key`, replacing any existing value.
    ///
    /// Returns `true` if the key had no value before, `false` on replace.
    pub fn put(&mut self, key: &str, value: V) -> bool {
        let mut node = &mut self.root;
        for (part, _) in Segments::new(key, self.segmenter) {
            node = node.children.entry(part.to_string()).or_default();
        }
        node.value.replace(value).is_none()
    }

    /// Look up the value for `key`.
    ///
    /// Anything from the first `?` on is ignored. When the exact path is
    /// missing, or ends on an internal node, the `/*` (else `/**`) sibling
    /// recorded at the last level descended from is returned instead.
    pub fn get(&self, key: &str) -> Option<&V> {
        let key = key.split_once('?').map_or(key, |(path, _)| path);
        let mut node = &self.root;
        let mut fallback: Option<&V> = None;

        for (part, last) in Segments::new(key, self.segmenter) {
            fallback = node.wildcard_value();
            match node.children.get(part) {
                Some(child) if child.value.is_none() && last => return fallback,
                Some(child) => node = child,
                None => return fallback,
            }
        }
        node.value.as_ref()
    }

    /// Remove the value at `key`.
    ///
    /// Returns `false` if the path to `key` does not exist, `true` otherwise,
    /// even when the node reached was internal. Ancestors left without
    /// children or a value are pruned.
    pub fn delete(&mut self, key: &str) -> bool {
        // ancestors, root first, with the segment used to leave each one
        let mut path: Vec<(&Node<V>, &str)> = Vec::new();
        let mut node = &self.root;
        for (part, _) in Segments::new(key, self.segmenter) {
            path.push((node, part));
            match node.children.get(part) {
                Some(child) => node = child,
                None => return false,
            }
        }

        let mut cut = None;
        if node.is_leaf() {
            for (depth, (parent, _)) in path.iter().enumerate().rev() {
                cut = Some(depth);
                if parent.children.len() > 1 || parent.value.is_some() {
                    break;
                }
            }
        }
        let parts: Vec<&str> = path.into_iter().map(|(_, part)| part).collect();

        match cut {
            Some(depth) => {
                if let Some(parent) = self.node_mut(&parts[..depth]) {
                    parent.children.remove(parts[depth]);
                }
            }
            None => {
                if let Some(target) = self.node_mut(&parts) {
                    target.value = None;
                }
            }
        }
        true
    }

    /// Visit every stored value together with its full key.
    ///
    /// Sibling order is unspecified. The first error stops the walk.
    pub fn walk<'a, E, F>(&'a self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&str, &'a V) -> Result<(), E>,
    {
        let mut key = String::new();
        self.root.walk(&mut key, &mut f)
    }

    /// Visit the values stored at each prefix of `key`, shortest first.
    pub fn walk_path<'a, E, F>(&'a self, key: &str, mut f: F) -> Result<(), E>
    where
        F: FnMut(&str, &'a V) -> Result<(), E>,
    {
        let mut node = &self.root;
        if let Some(value) = &node.value {
            f("", value)?;
        }
        let mut end = 0;
        for (part, _) in Segments::new(key, self.segmenter) {
            node = match node.children.get(part) {
                Some(child) => child,
                None => return Ok(()),
            };
            end += part.len();
            if let Some(value) = &node.value {
                f(&key[..end], value)?;
            }
        }
        Ok(())
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.value.is_none() && self.root.is_leaf()
    }

    fn node_mut(&mut self, parts: &[&str]) -> Option<&mut Node<V>> {
        let mut node = &mut self.root;
        for part in parts {
            node = node.children.get_mut(*part)?;
        }
        Some(node)
    }

    #[cfg(test)]
    fn children_of(&self, key: &str) -> Option<usize> {
        let mut node = &self.root;
        for (part, _) in Segments::new(key, self.segmenter) {
            node = node.children.get(part)?;
        }
        Some(node.children.len())
    }
}
