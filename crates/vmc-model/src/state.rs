//! The full status mapping shared by every page surface.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::entry::Entry;

/// Mapping from machine slug to [`Entry`].
///
/// Slugs without an entry are available. Iteration is ordered by slug so
/// the serialized form is deterministic; insertion order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct State {
    entries: BTreeMap<String, Entry>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slug: &str) -> Option<&Entry> {
        self.entries.get(slug)
    }

    /// Insert or replace the entry for `slug`.
    pub fn insert(&mut self, slug: impl Into<String>, entry: Entry) -> Option<Entry> {
        self.entries.insert(slug.into(), entry)
    }

    pub fn remove(&mut self, slug: &str) -> Option<Entry> {
        self.entries.remove(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a State {
    type Item = (&'a String, &'a Entry);
    type IntoIter = btree_map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Entry)> for State {
    fn from_iter<I: IntoIterator<Item = (S, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(slug, entry)| (slug.into(), entry))
                .collect(),
        }
    }
}
