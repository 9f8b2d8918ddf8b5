// src/analyze/tags.rs
//! Tag frequency over a result set.
//!
//! Ranking is by count, descending; equal counts keep the order in which the
//! tag was first seen. Tags are compared verbatim (case-sensitive), as the API
//! returns them.

use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct TagCounter {
    /// First-seen order.
    seen: Vec<TagCount>,
    index: HashMap<String, usize>,
}

impl TagCounter {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, tag: &str) {
        match self.index.get(tag) {
            Some(&i) => self.seen[i].count += 1,
            None => {
                self.index.insert(s!(tag), self.seen.len());
                self.seen.push(TagCount { tag: s!(tag), count: 1 });
            }
        }
    }

    pub fn extend<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for t in tags {
            self.add(t.as_ref());
        }
    }

    pub fn distinct(&self) -> usize { self.seen.len() }

    /// The `n` most frequent tags. Stable sort keeps first-seen order on ties.
    pub fn top(&self, n: usize) -> Vec<TagCount> {
        let mut ranked = self.seen.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}

/// One-shot helper over a flat tag list.
pub fn top_tags<S: AsRef<str>>(tags: &[S], n: usize) -> Vec<TagCount> {
    let mut counter = TagCounter::new();
    counter.extend(tags);
    counter.top(n)
}
