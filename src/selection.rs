// SPDX-License-Identifier: PMPL-1.0-or-later

//! User selection of phrases and duas shown on the keyboard.
//!
//! The selected keys have been written under different key names and
//! encodings over the app's lifetime. Each category declares an ordered
//! list of [`SelectionSource`]s; [`resolve_selection`] walks it and takes
//! the first source that yields at least one catalog key. When none does,
//! the first few catalog entries are shown instead.

use crate::content::{ContentCatalog, ContentCategory, LocalizedContentEntry};
use crate::store::{keys, KeyValueStore, SharedStore, StoreExt};
use anyhow::{bail, Result};
use log::debug;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

/// Turns a stored value into a list of keys, or `None` if it cannot.
pub type Decoder = fn(&Value) -> Option<Vec<String>>;

/// One place a selection may have been stored.
#[derive(Clone, Copy)]
pub struct SelectionSource {
    pub key: &'static str,
    pub decode: Decoder,
}

impl std::fmt::Debug for SelectionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionSource").field("key", &self.key).finish()
    }
}

/// A JSON array of strings.
pub fn decode_key_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

/// A string holding the JSON text of an array of strings.
pub fn decode_encoded_key_array(value: &Value) -> Option<Vec<String>> {
    let text = value.as_str()?;
    let inner: Value = serde_json::from_str(text).ok()?;
    decode_key_array(&inner)
}

/// A JSON object mapping keys to `true` when selected.
pub fn decode_key_flags(value: &Value) -> Option<Vec<String>> {
    let flags = value.as_object()?;
    Some(
        flags
            .iter()
            .filter(|(_, selected)| selected.as_bool().unwrap_or(false))
            .map(|(key, _)| key.clone())
            .collect(),
    )
}

const PHRASE_SOURCES: &[SelectionSource] = &[
    SelectionSource { key: keys::SELECTED_PHRASES, decode: decode_key_array },
    SelectionSource { key: keys::SELECTED_PHRASES, decode: decode_encoded_key_array },
    SelectionSource { key: keys::KEYBOARD_SELECTED_PHRASES, decode: decode_key_array },
    SelectionSource { key: keys::KEYBOARD_SELECTED_PHRASES, decode: decode_encoded_key_array },
];

const DUA_SOURCES: &[SelectionSource] = &[
    SelectionSource { key: keys::SELECTED_DUAS, decode: decode_key_array },
    SelectionSource { key: keys::SELECTED_DUAS, decode: decode_encoded_key_array },
    SelectionSource { key: keys::SELECTED_DUAS, decode: decode_key_flags },
];

/// Sources for a category, highest priority first.
pub fn sources(category: ContentCategory) -> &'static [SelectionSource] {
    match category {
        ContentCategory::Phrase => PHRASE_SOURCES,
        ContentCategory::Dua => DUA_SOURCES,
    }
}

/// Where a [`SelectionSet`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOrigin {
    Stored(&'static str),
    Default,
}

/// Selected catalog keys for one category, in catalog order.
///
/// Only built by intersecting with the catalog, so it never holds a key
/// the catalog does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    category: ContentCategory,
    keys: Vec<&'static str>,
    origin: SelectionOrigin,
}

impl SelectionSet {
    fn from_catalog<'a>(
        catalog: &ContentCatalog,
        category: ContentCategory,
        wanted: impl IntoIterator<Item = &'a str>,
        origin: SelectionOrigin,
    ) -> Self {
        let wanted: Vec<&str> = wanted.into_iter().collect();
        let keys = catalog
            .keys(category)
            .filter(|key| wanted.contains(key))
            .collect();
        Self {
            category,
            keys,
            origin,
        }
    }

    /// The first `min(N, len)` catalog entries, N per category.
    pub fn default_for(catalog: &ContentCatalog, category: ContentCategory) -> Self {
        Self {
            category,
            keys: catalog
                .keys(category)
                .take(category.default_selection_len())
                .collect(),
            origin: SelectionOrigin::Default,
        }
    }

    pub fn category(&self) -> ContentCategory {
        self.category
    }

    pub fn origin(&self) -> SelectionOrigin {
        self.origin
    }

    pub fn is_default(&self) -> bool {
        self.origin == SelectionOrigin::Default
    }

    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| *k == key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selected entries, in catalog order.
    pub fn entries<'a, 'c: 'a>(
        &'a self,
        catalog: &'c ContentCatalog,
    ) -> impl Iterator<Item = &'c LocalizedContentEntry> + 'a {
        catalog
            .entries(self.category)
            .iter()
            .filter(move |entry| self.contains(entry.key))
    }
}

/// Resolve a selection from `sources` in order.
///
/// A source is used when its value decodes and keeps at least one key
/// after filtering against the catalog. Decode failures and keys missing
/// from the catalog are skipped silently.
pub fn resolve_selection(
    store: &dyn KeyValueStore,
    catalog: &ContentCatalog,
    category: ContentCategory,
    sources: &[SelectionSource],
) -> SelectionSet {
    for source in sources {
        let Some(value) = store.get(source.key) else {
            continue;
        };
        let Some(stored) = (source.decode)(&value) else {
            debug!("{}: value at {} does not decode here", category, source.key);
            continue;
        };
        let selection = SelectionSet::from_catalog(
            catalog,
            category,
            stored.iter().map(String::as_str),
            SelectionOrigin::Stored(source.key),
        );
        if selection.is_empty() {
            debug!("{}: {} holds no known keys", category, source.key);
            continue;
        }
        debug!("{}: {} selected via {}", category, selection.len(), source.key);
        return selection;
    }
    debug!("{}: no stored selection, using defaults", category);
    SelectionSet::default_for(catalog, category)
}

/// Reads and writes keyboard selections in the shared store.
pub struct SelectionStore<'c> {
    store: SharedStore,
    catalog: &'c ContentCatalog,
    loaded: RefCell<HashMap<ContentCategory, SelectionSet>>,
}

impl<'c> SelectionStore<'c> {
    pub fn new(store: SharedStore, catalog: &'c ContentCatalog) -> Self {
        Self {
            store,
            catalog,
            loaded: RefCell::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &'c ContentCatalog {
        self.catalog
    }

    /// Read the selection from the store.
    pub fn load(&self, category: ContentCategory) -> SelectionSet {
        let selection =
            resolve_selection(self.store.as_ref(), self.catalog, category, sources(category));
        self.loaded.borrow_mut().insert(category, selection.clone());
        selection
    }

    /// The selection from the last load, loading it if needed.
    pub fn current(&self, category: ContentCategory) -> SelectionSet {
        if let Some(selection) = self.loaded.borrow().get(&category) {
            return selection.clone();
        }
        self.load(category)
    }

    /// Drop remembered selections and read every category again.
    pub fn refresh(&self) {
        self.loaded.borrow_mut().clear();
        for category in ContentCategory::all() {
            self.load(*category);
        }
    }

    pub fn selected_entries(&self, category: ContentCategory) -> Vec<&'c LocalizedContentEntry> {
        self.load(category).entries(self.catalog).collect()
    }

    /// Store a selection under every key of the category.
    ///
    /// Unknown keys are dropped. Writing an empty selection makes the
    /// keyboard fall back to its defaults.
    pub fn save<'a>(
        &self,
        category: ContentCategory,
        wanted: impl IntoIterator<Item = &'a str>,
    ) -> Result<SelectionSet> {
        let selection = SelectionSet::from_catalog(
            self.catalog,
            category,
            wanted,
            SelectionOrigin::Stored(sources(category)[0].key),
        );
        let mut written: Vec<&str> = Vec::new();
        for source in sources(category) {
            if written.contains(&source.key) {
                continue;
            }
            self.store.set_json(source.key, &selection.keys)?;
            written.push(source.key);
        }
        self.loaded.borrow_mut().insert(category, selection.clone());
        Ok(selection)
    }

    /// Flip one key in or out of the selection; returns whether it is now selected.
    pub fn toggle(&self, category: ContentCategory, key: &str) -> Result<bool> {
        if !self.catalog.contains(category, key) {
            bail!("unknown {} key: {}", category, key);
        }
        let current = self.load(category);
        let mut keys: Vec<&str> = current.keys().to_vec();
        let selected = if current.contains(key) {
            keys.retain(|k| *k != key);
            false
        } else {
            keys.push(key);
            true
        };
        self.save(category, keys)?;
        Ok(selected)
    }

    pub fn select_all(&self, category: ContentCategory) -> Result<SelectionSet> {
        let all: Vec<&str> = self.catalog.keys(category).collect();
        self.save(category, all)
    }

    pub fn deselect_all(&self, category: ContentCategory) -> Result<SelectionSet> {
        self.save(category, std::iter::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn catalog() -> &'static ContentCatalog {
        ContentCatalog::builtin()
    }

    #[test]
    fn decoders() {
        assert_eq!(decode_key_array(&json!(["a", "b"])), Some(vec!["a".into(), "b".into()]));
        assert_eq!(decode_key_array(&json!(["a", 1])), None);
        assert_eq!(decode_key_array(&json!("[\"a\"]")), None);
        assert_eq!(decode_encoded_key_array(&json!("[\"a\"]")), Some(vec!["a".into()]));
        assert_eq!(decode_encoded_key_array(&json!("{oops")), None);
    }

    #[test]
    fn dua_flag_object_is_accepted() {
        let store = MemoryStore::new();
        store.set(keys::SELECTED_DUAS, json!({"rain": true, "travel": false})).unwrap();
        let selection = resolve_selection(&store, catalog(), ContentCategory::Dua, DUA_SOURCES);
        assert_eq!(selection.keys(), &["rain"]);
    }

    #[test]
    fn empty_store_gives_defaults() {
        let store = MemoryStore::new();
        let phrases = resolve_selection(&store, catalog(), ContentCategory::Phrase, PHRASE_SOURCES);
        let duas = resolve_selection(&store, catalog(), ContentCategory::Dua, DUA_SOURCES);
        assert!(phrases.is_default());
        assert_eq!(phrases.len(), 6);
        assert_eq!(duas.len(), 5);
        assert_eq!(phrases.keys()[0], "assalamu_alaikum");
    }

    #[test]
    fn selected_entries_outlive_the_store() {
        let entries = {
            let store = MemoryStore::shared();
            store.set(keys::SELECTED_DUAS, json!(["rain", "travel"])).unwrap();
            SelectionStore::new(store, catalog()).selected_entries(ContentCategory::Dua)
        };
        let selected: Vec<&str> = entries.iter().map(|entry| entry.key).collect();
        assert_eq!(selected, vec!["travel", "rain"]);
    }

    #[test]
    fn default_is_capped_by_small_catalog() {
        let small = ContentCatalog::from_entries(
            catalog().entries(ContentCategory::Phrase)[..2].iter().cloned(),
        );
        let store = MemoryStore::new();
        let phrases = resolve_selection(&store, &small, ContentCategory::Phrase, PHRASE_SOURCES);
        let duas = resolve_selection(&store, &small, ContentCategory::Dua, DUA_SOURCES);
        assert!(phrases.is_default());
        assert_eq!(phrases.keys(), &["assalamu_alaikum", "wa_alaikum_assalam"]);
        assert!(duas.is_empty());
    }

    #[test]
    fn first_usable_source_wins() {
        let store = MemoryStore::new();
        store.set(keys::SELECTED_PHRASES, json!(["not_a_phrase"])).unwrap();
        store.set(keys::KEYBOARD_SELECTED_PHRASES, json!("[\"ameen\",\"bismillah\"]")).unwrap();
        let selection =
            resolve_selection(&store, catalog(), ContentCategory::Phrase, PHRASE_SOURCES);
        assert_eq!(selection.origin(), SelectionOrigin::Stored(keys::KEYBOARD_SELECTED_PHRASES));
        // catalog order, not stored order
        assert_eq!(selection.keys(), &["bismillah", "ameen"]);
    }

    #[test]
    fn undecodable_source_is_skipped() {
        let store = MemoryStore::new();
        store.set(keys::SELECTED_PHRASES, json!({"bismillah": true})).unwrap();
        store.set(keys::KEYBOARD_SELECTED_PHRASES, json!(["ameen"])).unwrap();
        let selection =
            resolve_selection(&store, catalog(), ContentCategory::Phrase, PHRASE_SOURCES);
        assert_eq!(selection.keys(), &["ameen"]);
    }

    #[test]
    fn save_writes_every_phrase_key() {
        let store = MemoryStore::shared();
        let selections = SelectionStore::new(store.clone(), catalog());
        selections.save(ContentCategory::Phrase, ["ameen", "bogus"]).unwrap();
        assert_eq!(store.get(keys::SELECTED_PHRASES), Some(json!(["ameen"])));
        assert_eq!(store.get(keys::KEYBOARD_SELECTED_PHRASES), Some(json!(["ameen"])));
    }

    #[test]
    fn toggle_starts_from_defaults() {
        let store = MemoryStore::shared();
        let selections = SelectionStore::new(store, catalog());
        assert!(!selections.toggle(ContentCategory::Dua, "success").unwrap());
        let duas = selections.load(ContentCategory::Dua);
        assert_eq!(duas.len(), 4);
        assert!(!duas.contains("success"));
        assert!(selections.toggle(ContentCategory::Dua, "rain").unwrap());
        assert!(selections.load(ContentCategory::Dua).contains("rain"));
    }

    #[test]
    fn toggle_rejects_unknown_key() {
        let selections = SelectionStore::new(MemoryStore::shared(), catalog());
        assert!(selections.toggle(ContentCategory::Dua, "bismillah").is_err());
    }

    #[test]
    fn deselect_all_falls_back_to_defaults() {
        let selections = SelectionStore::new(MemoryStore::shared(), catalog());
        selections.deselect_all(ContentCategory::Phrase).unwrap();
        assert!(selections.load(ContentCategory::Phrase).is_default());
    }

    #[test]
    fn refresh_observes_external_writes() {
        let store = MemoryStore::shared();
        let selections = SelectionStore::new(store.clone(), catalog());
        assert!(selections.current(ContentCategory::Dua).is_default());
        store.set(keys::SELECTED_DUAS, json!(["rain"])).unwrap();
        assert!(selections.current(ContentCategory::Dua).is_default());
        selections.refresh();
        assert_eq!(selections.current(ContentCategory::Dua).keys(), &["rain"]);
    }
}
