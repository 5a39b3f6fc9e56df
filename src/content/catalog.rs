// SPDX-License-Identifier: PMPL-1.0-or-later

//! The master content catalog.

use super::{duas, phrases, ContentCategory, LocalizedContentEntry};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Immutable, ordered list of every phrase and dua.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    phrases: Vec<LocalizedContentEntry>,
    duas: Vec<LocalizedContentEntry>,
}

impl ContentCatalog {
    /// The built-in catalog, constructed on first use.
    pub fn builtin() -> &'static ContentCatalog {
        static CATALOG: OnceLock<ContentCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| ContentCatalog {
            phrases: phrases::build(),
            duas: duas::build(),
        })
    }

    /// A catalog over caller-supplied entries; entries are routed to
    /// their category and keep their relative order.
    pub fn from_entries(entries: impl IntoIterator<Item = LocalizedContentEntry>) -> Self {
        let (phrases, duas): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .partition(|entry| entry.category() == ContentCategory::Phrase);
        Self { phrases, duas }
    }

    pub fn entries(&self, category: ContentCategory) -> &[LocalizedContentEntry] {
        match category {
            ContentCategory::Phrase => &self.phrases,
            ContentCategory::Dua => &self.duas,
        }
    }

    pub fn get(&self, category: ContentCategory, key: &str) -> Option<&LocalizedContentEntry> {
        self.entries(category).iter().find(|entry| entry.key == key)
    }

    pub fn contains(&self, category: ContentCategory, key: &str) -> bool {
        self.get(category, key).is_some()
    }

    pub fn keys(&self, category: ContentCategory) -> impl Iterator<Item = &'static str> + '_ {
        self.entries(category).iter().map(|entry| entry.key)
    }

    pub fn key_set(&self, category: ContentCategory) -> HashSet<&'static str> {
        self.keys(category).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::EntryBody;
    use crate::i18n::Language;

    #[test]
    fn builtin_sizes() {
        let catalog = ContentCatalog::builtin();
        assert_eq!(catalog.entries(ContentCategory::Phrase).len(), 20);
        assert_eq!(catalog.entries(ContentCategory::Dua).len(), 20);
    }

    #[test]
    fn keys_are_unique_per_category() {
        let catalog = ContentCatalog::builtin();
        for category in ContentCategory::all() {
            let keys: Vec<_> = catalog.keys(*category).collect();
            assert_eq!(keys.len(), catalog.key_set(*category).len(), "{} keys repeat", category);
        }
    }

    #[test]
    fn entries_live_in_their_own_category() {
        let catalog = ContentCatalog::builtin();
        for category in ContentCategory::all() {
            for entry in catalog.entries(*category) {
                assert_eq!(entry.category(), *category);
            }
        }
    }

    #[test]
    fn english_fields_are_authored() {
        let catalog = ContentCatalog::builtin();
        for entry in catalog.entries(ContentCategory::Phrase) {
            let EntryBody::Phrase(phrase) = &entry.body else {
                panic!("{} is not a phrase", entry.key);
            };
            assert!(!phrase.arabic.is_empty());
            assert!(!phrase.transliteration.get(Language::English).is_empty());
            assert!(!phrase.translation.get(Language::English).is_empty());
            assert!(!phrase.meaning.get(Language::English).is_empty());
            assert!(!phrase.usage.get(Language::English).is_empty());
        }
        for entry in catalog.entries(ContentCategory::Dua) {
            let EntryBody::Dua(dua) = &entry.body else {
                panic!("{} is not a dua", entry.key);
            };
            assert!(!dua.arabic_text.is_empty());
            assert!(!dua.title.get(Language::English).is_empty());
            assert!(!dua.translation.get(Language::English).is_empty());
        }
    }

    #[test]
    fn dua_arabic_translation_is_arabic_text() {
        let catalog = ContentCatalog::builtin();
        let travel = catalog.get(ContentCategory::Dua, "travel").expect("travel dua");
        assert_eq!(travel.translation(Language::Arabic), travel.arabic());
    }

    #[test]
    fn from_entries_partitions_by_category() {
        let builtin = ContentCatalog::builtin();
        let mixed = builtin.entries(ContentCategory::Dua)[..2]
            .iter()
            .chain(&builtin.entries(ContentCategory::Phrase)[..3])
            .cloned();
        let catalog = ContentCatalog::from_entries(mixed);
        assert_eq!(catalog.entries(ContentCategory::Phrase).len(), 3);
        assert_eq!(catalog.entries(ContentCategory::Dua).len(), 2);
        assert!(catalog.contains(ContentCategory::Phrase, "assalamu_alaikum"));
        assert!(!catalog.contains(ContentCategory::Phrase, "success"));
    }
}
