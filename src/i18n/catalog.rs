// SPDX-License-Identifier: PMPL-1.0-or-later

//! Keyboard languages and the label catalog for built-in keys.
//!
//! Labels for the keys the keyboard draws itself (space bar, the
//! phrases/duas toggle) live in compile-time static tables. Lookup falls
//! back to English when a language has no entry for a key, so every
//! supported language resolves every key.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Language`] and bump `Language::COUNT`
//! 2. Add its code to `Language::code()` and `Language::from_code()`
//! 3. Add it to `Language::all()` (the order defines table indices)
//! 4. Optionally add a `const XX: &[(&str, &str)]` label table below

use serde::{Deserialize, Serialize};

/// Languages the keyboard can be switched into.
///
/// Serialized as the ISO 639-1 code, which is also what the host app
/// writes to the shared store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "kk")]
    Kazakh,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "ky")]
    Kyrgyz,
    #[serde(rename = "uz")]
    Uzbek,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "ur")]
    Urdu,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "it")]
    Italian,
}

impl Language {
    /// Number of supported languages.
    pub const COUNT: usize = 14;

    /// Canonical language every localized field must be authored in.
    pub const FALLBACK: Language = Language::English;

    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::Kazakh => "kk",
            Language::Arabic => "ar",
            Language::French => "fr",
            Language::German => "de",
            Language::Chinese => "zh",
            Language::Hindi => "hi",
            Language::Kyrgyz => "ky",
            Language::Uzbek => "uz",
            Language::Korean => "ko",
            Language::Urdu => "ur",
            Language::Spanish => "es",
            Language::Italian => "it",
        }
    }

    /// Parse a stored language code.
    ///
    /// Returns `None` for codes the keyboard does not support. Surrounding
    /// whitespace and upper case are tolerated because older host builds
    /// wrote codes by hand.
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "ru" => Some(Language::Russian),
            "kk" | "kz" => Some(Language::Kazakh),
            "ar" => Some(Language::Arabic),
            "fr" => Some(Language::French),
            "de" => Some(Language::German),
            "zh" => Some(Language::Chinese),
            "hi" => Some(Language::Hindi),
            "ky" => Some(Language::Kyrgyz),
            "uz" => Some(Language::Uzbek),
            "ko" => Some(Language::Korean),
            "ur" => Some(Language::Urdu),
            "es" => Some(Language::Spanish),
            "it" => Some(Language::Italian),
            _ => None,
        }
    }

    /// Parse a code, resolving unsupported values to [`Language::FALLBACK`].
    pub fn from_code_or_fallback(code: &str) -> Language {
        Language::from_code(code).unwrap_or(Language::FALLBACK)
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Russian,
            Language::Kazakh,
            Language::Arabic,
            Language::French,
            Language::German,
            Language::Chinese,
            Language::Hindi,
            Language::Kyrgyz,
            Language::Uzbek,
            Language::Korean,
            Language::Urdu,
            Language::Spanish,
            Language::Italian,
        ]
    }

    /// Position of this language in per-language tables.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_arabic(&self) -> bool {
        *self == Language::Arabic
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::FALLBACK
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Language::from_code(value)
            .ok_or_else(|| anyhow::anyhow!("unsupported language code: {}", value))
    }
}

// ─── Label Lookup ───────────────────────────────────────────────────

/// Look up a key label in the specified language.
///
/// Falls back to English if the key is not found in the requested
/// language. Unknown keys return `""`.
///
/// # Examples
///
/// ```
/// use muslim_keyboard::i18n::{t, Language};
/// assert_eq!(t(Language::English, "key.space"), "space");
/// assert_eq!(t(Language::Russian, "key.space"), "пробел");
/// assert_eq!(t(Language::French, "key.space"), "space");
/// ```
pub fn t(language: Language, key: &str) -> &'static str {
    if let Some(value) = lookup(labels_for(language), key) {
        return value;
    }
    if language != Language::FALLBACK {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn labels_for(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::English => EN,
        Language::Russian => RU,
        Language::Kazakh => KK,
        Language::Arabic => AR,
        _ => &[],
    }
}

// ─── English (source language, all keys defined here) ───────────────

const EN: &[(&str, &str)] = &[
    ("key.space", "space"),
    ("toggle.duas", "Dua"),
    ("toggle.phrases", "Phrases"),
    ("section.stickers", "Stickers"),
];

const RU: &[(&str, &str)] = &[
    ("key.space", "пробел"),
    ("toggle.duas", "Дуа"),
    ("toggle.phrases", "Фразы"),
    ("section.stickers", "Стикеры"),
];

const KK: &[(&str, &str)] = &[
    ("key.space", "бос орын"),
    ("toggle.duas", "Дұға"),
    ("toggle.phrases", "Сөздер"),
    ("section.stickers", "Стикерлер"),
];

const AR: &[(&str, &str)] = &[
    ("key.space", "مسافة"),
    ("toggle.duas", "دعاء"),
    ("toggle.phrases", "عبارات"),
    ("section.stickers", "ملصقات"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_all_resolve() {
        for &(key, _) in EN {
            assert!(!t(Language::English, key).is_empty(), "EN key '{}' should resolve", key);
        }
    }

    #[test]
    fn every_language_resolves_every_key() {
        for language in Language::all() {
            for &(key, _) in EN {
                assert!(!t(*language, key).is_empty(), "{:?} should resolve {}", language, key);
            }
        }
    }

    #[test]
    fn unknown_key_returns_empty() {
        assert_eq!(t(Language::English, "nonexistent.key"), "");
        assert_eq!(t(Language::Arabic, "nonexistent.key"), "");
    }

    #[test]
    fn language_roundtrip() {
        for language in Language::all() {
            let parsed = Language::from_code(language.code()).expect("should parse");
            assert_eq!(*language, parsed);
        }
    }

    #[test]
    fn index_matches_display_order() {
        assert_eq!(Language::all().len(), Language::COUNT);
        for (position, language) in Language::all().iter().enumerate() {
            assert_eq!(language.index(), position);
        }
    }

    #[test]
    fn unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code_or_fallback("xx"), Language::English);
        assert_eq!(Language::from_code(" RU "), Some(Language::Russian));
    }

    #[test]
    fn serde_uses_language_codes() {
        let json = serde_json::to_string(&vec![Language::English, Language::Kazakh]).unwrap();
        assert_eq!(json, r#"["en","kk"]"#);
        let parsed: Vec<Language> = serde_json::from_str(r#"["ar","ru"]"#).unwrap();
        assert_eq!(parsed, vec![Language::Arabic, Language::Russian]);
    }
}
