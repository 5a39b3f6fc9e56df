// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text shown on and inserted by content keys.
//!
//! Resolution is a pure function of the entry, the keyboard language,
//! the Arabic display mode and the substitution flag. Arabic gets its own
//! branch because the user may prefer an English gloss over Arabic
//! script even while the keyboard is in Arabic.

use crate::content::{DuaContent, EntryBody, LocalizedContentEntry, PhraseContent};
use crate::i18n::Language;
use serde::{Deserialize, Serialize};

/// How entries render while the keyboard language is Arabic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArabicDisplayMode {
    /// Native Arabic script.
    #[default]
    #[serde(rename = "arabic")]
    Arabic,
    /// English text in place of Arabic script.
    #[serde(rename = "english_translation")]
    EnglishTranslation,
}

impl ArabicDisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ArabicDisplayMode::Arabic => "arabic",
            ArabicDisplayMode::EnglishTranslation => "english_translation",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "arabic" => Some(ArabicDisplayMode::Arabic),
            "english_translation" | "englishtranslation" | "english" => {
                Some(ArabicDisplayMode::EnglishTranslation)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for ArabicDisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves display and insert text for one Arabic display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentResolver {
    mode: ArabicDisplayMode,
}

impl ContentResolver {
    pub fn new(mode: ArabicDisplayMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ArabicDisplayMode {
        self.mode
    }

    /// Label for the entry's key.
    ///
    /// In Arabic, phrases show their script or English translation and
    /// duas show their Arabic or English title. Otherwise the entry's
    /// title in `language`.
    pub fn display_text(&self, entry: &LocalizedContentEntry, language: Language) -> &'static str {
        match &entry.body {
            EntryBody::Phrase(phrase) => self.phrase_display(phrase, language),
            EntryBody::Dua(dua) => self.dua_display(dua, language),
        }
    }

    /// Like [`display_text`](Self::display_text) for a raw language code;
    /// unsupported codes resolve as English.
    pub fn display_text_for_code(&self, entry: &LocalizedContentEntry, code: &str) -> &'static str {
        self.display_text(entry, Language::from_code_or_fallback(code))
    }

    /// Text inserted when the entry's key is tapped.
    ///
    /// `arabic_substitution` is the category's Arabic preference for the
    /// current language: phrases insert their Arabic script and duas
    /// their bare Arabic text.
    pub fn insert_text(
        &self,
        entry: &LocalizedContentEntry,
        language: Language,
        arabic_substitution: bool,
    ) -> String {
        match &entry.body {
            EntryBody::Phrase(phrase) => {
                self.phrase_insert(phrase, language, arabic_substitution).to_string()
            }
            EntryBody::Dua(dua) => self.dua_insert(dua, language, arabic_substitution).to_string(),
        }
    }

    pub fn insert_text_for_code(
        &self,
        entry: &LocalizedContentEntry,
        code: &str,
        arabic_substitution: bool,
    ) -> String {
        self.insert_text(entry, Language::from_code_or_fallback(code), arabic_substitution)
    }

    /// Arabic text followed by its translation, `"<arabic> (<translation>)"`.
    ///
    /// Used where a dua is shared with its meaning attached; with
    /// `with_arabic` unset only the translation is returned. Phrases
    /// resolve the same way through their script and translation.
    pub fn annotated_text(
        &self,
        entry: &LocalizedContentEntry,
        language: Language,
        with_arabic: bool,
    ) -> String {
        let translation = entry.translation(language);
        if with_arabic {
            format!("{} ({})", entry.arabic(), translation)
        } else {
            translation.to_string()
        }
    }

    fn phrase_display(&self, phrase: &PhraseContent, language: Language) -> &'static str {
        if language.is_arabic() {
            return match self.mode {
                ArabicDisplayMode::Arabic => phrase.arabic,
                ArabicDisplayMode::EnglishTranslation => phrase.translation.get(Language::English),
            };
        }
        phrase.transliteration.get(language)
    }

    fn dua_display(&self, dua: &DuaContent, language: Language) -> &'static str {
        if language.is_arabic() {
            return match self.mode {
                ArabicDisplayMode::Arabic => dua.title.get(Language::Arabic),
                ArabicDisplayMode::EnglishTranslation => dua.title.get(Language::English),
            };
        }
        dua.title.get(language)
    }

    fn phrase_insert(
        &self,
        phrase: &PhraseContent,
        language: Language,
        substitute: bool,
    ) -> &'static str {
        if language.is_arabic() {
            return match self.mode {
                ArabicDisplayMode::Arabic => phrase.arabic,
                ArabicDisplayMode::EnglishTranslation => phrase.translation.get(Language::English),
            };
        }
        if substitute {
            phrase.arabic
        } else {
            phrase.translation.get(language)
        }
    }

    fn dua_insert(&self, dua: &DuaContent, language: Language, substitute: bool) -> &'static str {
        if language.is_arabic() {
            return match self.mode {
                ArabicDisplayMode::Arabic => dua.arabic_text,
                ArabicDisplayMode::EnglishTranslation => dua.translation.get(Language::English),
            };
        }
        if substitute {
            dua.arabic_text
        } else {
            dua.translation.get(language)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentCatalog, ContentCategory};

    fn phrase(key: &str) -> &'static LocalizedContentEntry {
        ContentCatalog::builtin()
            .get(ContentCategory::Phrase, key)
            .expect("phrase in catalog")
    }

    fn dua(key: &str) -> &'static LocalizedContentEntry {
        ContentCatalog::builtin()
            .get(ContentCategory::Dua, key)
            .expect("dua in catalog")
    }

    #[test]
    fn bismillah_in_arabic_follows_mode() {
        let entry = phrase("bismillah");
        let script = ContentResolver::new(ArabicDisplayMode::Arabic);
        let gloss = ContentResolver::new(ArabicDisplayMode::EnglishTranslation);
        assert_eq!(script.display_text(entry, Language::Arabic), "بسم الله");
        assert_eq!(gloss.display_text(entry, Language::Arabic), "In the name of Allah");
    }

    #[test]
    fn phrase_display_uses_transliteration() {
        let resolver = ContentResolver::default();
        let entry = phrase("alhamdulillah");
        assert_eq!(resolver.display_text(entry, Language::English), "Alhamdulillah");
        assert_eq!(resolver.display_text(entry, Language::Russian), "Альхамдулиллях");
        assert_eq!(resolver.display_text(entry, Language::Korean), "Alhamdulillah");
    }

    #[test]
    fn phrase_insert_substitutes_arabic() {
        let resolver = ContentResolver::default();
        let entry = phrase("inshallah");
        assert_eq!(
            resolver.insert_text(entry, Language::Russian, false),
            "Если пожелает Аллах"
        );
        assert_eq!(resolver.insert_text(entry, Language::Russian, true), "إن شاء الله");
    }

    #[test]
    fn phrase_insert_in_arabic_ignores_substitution() {
        let entry = phrase("mashallah");
        let gloss = ContentResolver::new(ArabicDisplayMode::EnglishTranslation);
        assert_eq!(gloss.insert_text(entry, Language::Arabic, true), "What Allah has willed");
        let script = ContentResolver::new(ArabicDisplayMode::Arabic);
        assert_eq!(script.insert_text(entry, Language::Arabic, false), "ما شاء الله");
    }

    #[test]
    fn dua_insert_with_dua_preference_is_bare_arabic() {
        let resolver = ContentResolver::default();
        let entry = dua("travel");
        assert_eq!(
            resolver.insert_text(entry, Language::Russian, true),
            "اللهم إنا نسألك في سفرنا هذا البر والتقوى"
        );
        assert_eq!(
            resolver.insert_text(entry, Language::Russian, false),
            "О Аллах, даруй нам благочестие в этом пути"
        );
    }

    #[test]
    fn dua_display_in_arabic_follows_mode() {
        let entry = dua("health");
        let arabic = ContentResolver::new(ArabicDisplayMode::Arabic);
        let translated = ContentResolver::new(ArabicDisplayMode::EnglishTranslation);
        assert_eq!(arabic.display_text(entry, Language::Arabic), "للصحة");
        assert_eq!(translated.display_text(entry, Language::Arabic), "For Health");
    }

    #[test]
    fn annotated_dua_text() {
        let resolver = ContentResolver::default();
        let entry = dua("knowledge");
        assert_eq!(
            resolver.annotated_text(entry, Language::English, true),
            "رب زدني علما (My Lord, increase me in knowledge)"
        );
        assert_eq!(
            resolver.annotated_text(entry, Language::English, false),
            "My Lord, increase me in knowledge"
        );
    }

    #[test]
    fn unknown_code_resolves_as_english() {
        let resolver = ContentResolver::default();
        let entry = dua("rain");
        assert_eq!(resolver.display_text_for_code(entry, "tlh"), "Rain Dua");
        assert_eq!(
            resolver.insert_text_for_code(entry, "", false),
            "Allahumma sayyiban nafi'an"
        );
    }

    #[test]
    fn display_mode_parse() {
        assert_eq!(ArabicDisplayMode::parse("arabic"), Some(ArabicDisplayMode::Arabic));
        assert_eq!(
            ArabicDisplayMode::parse("english_translation"),
            Some(ArabicDisplayMode::EnglishTranslation)
        );
        assert_eq!(ArabicDisplayMode::parse("latin"), None);
        for mode in [ArabicDisplayMode::Arabic, ArabicDisplayMode::EnglishTranslation] {
            assert_eq!(ArabicDisplayMode::parse(mode.as_str()), Some(mode));
        }
    }
}
