// SPDX-License-Identifier: PMPL-1.0-or-later

//! Phrase and dua content model.
//!
//! Every localized field is a [`LocalizedText`]: one slot per supported
//! language, filled when the catalog is built. Languages without an
//! authored value take the value of their fallback language at that
//! point, so reads are a plain index and can never miss.

mod catalog;
mod duas;
mod phrases;

pub use catalog::ContentCatalog;

use crate::i18n::Language;
use serde::{Deserialize, Serialize};

/// Content categories offered on the Islamic keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Phrase,
    Dua,
}

impl ContentCategory {
    pub fn all() -> &'static [ContentCategory] {
        &[ContentCategory::Phrase, ContentCategory::Dua]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentCategory::Phrase => "phrase",
            ContentCategory::Dua => "dua",
        }
    }

    /// How many catalog entries are shown when the user has not chosen any.
    pub fn default_selection_len(self) -> usize {
        match self {
            ContentCategory::Phrase => 6,
            ContentCategory::Dua => 5,
        }
    }
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string with one resolved value per supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    values: [&'static str; Language::COUNT],
}

impl LocalizedText {
    /// Build from the authored values.
    ///
    /// `redirects` lists `(language, source)` pairs: an unauthored
    /// `language` copies `source`'s authored value before falling back to
    /// English. The English value must be authored.
    pub fn build(
        authored: &[(Language, &'static str)],
        redirects: &[(Language, Language)],
    ) -> Self {
        let authored_value = |language: Language| {
            authored
                .iter()
                .find(|(l, v)| *l == language && !v.is_empty())
                .map(|(_, v)| *v)
        };
        let fallback = authored_value(Language::FALLBACK).unwrap_or_default();
        debug_assert!(!fallback.is_empty(), "localized text needs an English value");

        let mut values = [fallback; Language::COUNT];
        for language in Language::all() {
            let redirected = redirects
                .iter()
                .find(|(from, _)| from == language)
                .and_then(|(_, to)| authored_value(*to));
            if let Some(value) = authored_value(*language).or(redirected) {
                values[language.index()] = value;
            }
        }
        Self { values }
    }

    /// Build from an English value only.
    pub fn english(value: &'static str) -> Self {
        Self::build(&[(Language::English, value)], &[])
    }

    pub fn get(&self, language: Language) -> &'static str {
        self.values[language.index()]
    }
}

/// Fields of a short phrase such as "Bismillah".
#[derive(Debug, Clone)]
pub struct PhraseContent {
    pub arabic: &'static str,
    pub transliteration: LocalizedText,
    pub translation: LocalizedText,
    pub meaning: LocalizedText,
    pub usage: LocalizedText,
}

/// Fields of a dua (supplication).
#[derive(Debug, Clone)]
pub struct DuaContent {
    pub icon: &'static str,
    pub arabic_text: &'static str,
    pub title: LocalizedText,
    pub translation: LocalizedText,
}

#[derive(Debug, Clone)]
pub enum EntryBody {
    Phrase(PhraseContent),
    Dua(DuaContent),
}

/// One immutable catalog record.
#[derive(Debug, Clone)]
pub struct LocalizedContentEntry {
    pub key: &'static str,
    pub body: EntryBody,
}

impl LocalizedContentEntry {
    pub fn category(&self) -> ContentCategory {
        match self.body {
            EntryBody::Phrase(_) => ContentCategory::Phrase,
            EntryBody::Dua(_) => ContentCategory::Dua,
        }
    }

    /// Arabic source text of the entry.
    pub fn arabic(&self) -> &'static str {
        match &self.body {
            EntryBody::Phrase(phrase) => phrase.arabic,
            EntryBody::Dua(dua) => dua.arabic_text,
        }
    }

    /// Title shown in lists: transliteration for phrases, title for duas.
    pub fn title(&self, language: Language) -> &'static str {
        match &self.body {
            EntryBody::Phrase(phrase) => phrase.transliteration.get(language),
            EntryBody::Dua(dua) => dua.title.get(language),
        }
    }

    pub fn translation(&self, language: Language) -> &'static str {
        match &self.body {
            EntryBody::Phrase(phrase) => phrase.translation.get(language),
            EntryBody::Dua(dua) => dua.translation.get(language),
        }
    }
}
