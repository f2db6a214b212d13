//! Key segmentation for the path trie.
//!
//! # Responsibilities
//! - Split a key into the segments the trie is keyed on
//! - Never allocate (segmenters run on every lookup)
//!
//! # Contract
//! A segmenter receives a key and a start offset and returns the next
//! segment plus the offset the following call resumes at, or `None` once
//! the key is exhausted. An empty segment ends iteration. Every call must
//! make forward progress.

/// Returns `(segment, next_start)` for `key` beginning at `start`.
pub type StringSegmenter = fn(&str, usize) -> (&str, Option<usize>);

/// Splits a path on `/`, keeping the leading slash on each segment.
///
/// `"/a/b/c"` yields `("/a", Some(2))`, `("/b", Some(4))`, `("/c", None)`.
pub fn path_segmenter(path: &str, start: usize) -> (&str, Option<usize>) {
    if path.is_empty() || start >= path.len() {
        return ("", None);
    }
    // '/' is ASCII, so any byte offset found here is a char boundary.
    match path.as_bytes()[start + 1..].iter().position(|&b| b == b'/') {
        Some(offset) => {
            let end = start + 1 + offset;
            (&path[start..end], Some(end))
        }
        None => (&path[start..], None),
    }
}

/// One segment per character, for classic character tries.
pub fn char_segmenter(key: &str, start: usize) -> (&str, Option<usize>) {
    let Some(rest) = key.get(start..) else {
        return ("", None);
    };
    match rest.chars().next() {
        Some(c) => {
            let end = start + c.len_utf8();
            let next = if end < key.len() { Some(end) } else { None };
            (&key[start..end], next)
        }
        None => ("", None),
    }
}

/// Iterator over the segments of a key.
///
/// Yields `(segment, is_last)`; `is_last` is set on the segment after which
/// the segmenter reported end-of-key.
#[derive(Debug, Clone)]
pub struct Segments<'k> {
    key: &'k str,
    next: Option<usize>,
    segmenter: StringSegmenter,
}

impl<'k> Segments<'k> {
    pub fn new(key: &'k str, segmenter: StringSegmenter) -> Self {
        Self {
            key,
            next: Some(0),
            segmenter,
        }
    }
}

impl<'k> Iterator for Segments<'k> {
    type Item = (&'k str, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next?;
        let (part, next) = (self.segmenter)(self.key, start);
        if part.is_empty() {
            self.next = None;
            return None;
        }
        self.next = next;
        Some((part, next.is_none()))
    }
}
