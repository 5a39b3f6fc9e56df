// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language, Arabic substitution, display mode and theme preferences.
//!
//! State is read from the shared store when the manager is created and
//! every setter writes through immediately. The host app edits the same
//! keys from its own process; [`PreferenceManager::refresh_from_host`]
//! picks those edits up.

use crate::content::ContentCategory;
use crate::i18n::Language;
use crate::resolver::{ArabicDisplayMode, ContentResolver};
use crate::store::{keys, SharedStore, StoreExt};
use crate::theme::{self, Theme};
use anyhow::{anyhow, bail, Result};
use log::{debug, info, warn};
use serde::Serialize;

/// Languages enabled when the host app has not stored a list.
pub const DEFAULT_AVAILABLE_LANGUAGES: &[Language] = &[Language::English, Language::Russian];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceState {
    pub current_language: Language,
    pub available_languages: Vec<Language>,
    pub arabic_language_preference: Option<Language>,
    pub arabic_dua_language_preference: Option<Language>,
    pub arabic_display_mode: ArabicDisplayMode,
    pub selected_theme: &'static Theme,
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self {
            current_language: Language::English,
            available_languages: DEFAULT_AVAILABLE_LANGUAGES.to_vec(),
            arabic_language_preference: None,
            arabic_dua_language_preference: None,
            arabic_display_mode: ArabicDisplayMode::default(),
            selected_theme: theme::default_theme(),
        }
    }
}

pub struct PreferenceManager {
    store: SharedStore,
    state: PreferenceState,
}

impl PreferenceManager {
    /// Load preferences from `store`.
    ///
    /// A stored language missing from the available list is replaced by
    /// the first available language.
    pub fn load(store: SharedStore) -> Self {
        let state = PreferenceState {
            current_language: read_current_language(&store).unwrap_or_default(),
            available_languages: read_available_languages(&store),
            arabic_language_preference: read_language(&store, keys::ARABIC_LANGUAGE_PREFERENCE),
            arabic_dua_language_preference: read_language(
                &store,
                keys::ARABIC_DUA_LANGUAGE_PREFERENCE,
            ),
            arabic_display_mode: read_display_mode(&store),
            selected_theme: theme::resolve(store.get_string(keys::SELECTED_THEME).as_deref()),
        };
        let mut manager = Self { store, state };
        manager.recover_current_language();
        manager
    }

    pub fn state(&self) -> &PreferenceState {
        &self.state
    }

    pub fn current_language(&self) -> Language {
        self.state.current_language
    }

    /// Switch to an enabled language.
    pub fn set_current_language(&mut self, language: Language) -> Result<()> {
        if !self.state.available_languages.contains(&language) {
            bail!(
                "{} is not an enabled language (enabled: {})",
                language,
                codes(&self.state.available_languages).join(", ")
            );
        }
        self.write_current_language(language)
    }

    pub fn available_languages(&self) -> &[Language] {
        &self.state.available_languages
    }

    /// Replace the enabled languages.
    ///
    /// Duplicates are dropped; an empty list restores the defaults. If the
    /// current language is no longer enabled it moves to the first one.
    pub fn set_available_languages(&mut self, languages: &[Language]) -> Result<()> {
        let languages = normalize_languages(languages.iter().copied());
        self.store.set_json(keys::AVAILABLE_LANGUAGES, &codes(&languages))?;
        self.state.available_languages = languages;
        if !self.state.available_languages.contains(&self.state.current_language) {
            let first = self.state.available_languages[0];
            self.write_current_language(first)?;
        }
        Ok(())
    }

    pub fn arabic_language_preference(&self) -> Option<Language> {
        self.state.arabic_language_preference
    }

    pub fn set_arabic_language_preference(&mut self, language: Option<Language>) -> Result<()> {
        self.state.arabic_language_preference = language;
        write_optional_language(&self.store, keys::ARABIC_LANGUAGE_PREFERENCE, language)
    }

    pub fn arabic_dua_language_preference(&self) -> Option<Language> {
        self.state.arabic_dua_language_preference
    }

    pub fn set_arabic_dua_language_preference(&mut self, language: Option<Language>) -> Result<()> {
        self.state.arabic_dua_language_preference = language;
        write_optional_language(&self.store, keys::ARABIC_DUA_LANGUAGE_PREFERENCE, language)
    }

    pub fn arabic_display_mode(&self) -> ArabicDisplayMode {
        self.state.arabic_display_mode
    }

    pub fn set_arabic_display_mode(&mut self, mode: ArabicDisplayMode) -> Result<()> {
        self.state.arabic_display_mode = mode;
        self.store.set_string(keys::ARABIC_DISPLAY_MODE, mode.as_str())
    }

    pub fn selected_theme(&self) -> &'static Theme {
        self.state.selected_theme
    }

    /// Select a theme by id. Unknown ids are rejected and leave the
    /// current theme in place.
    pub fn set_theme(&mut self, id: &str) -> Result<&'static Theme> {
        let selected = theme::find(id).ok_or_else(|| anyhow!("unknown theme: {}", id))?;
        self.state.selected_theme = selected;
        self.store.set_string(keys::SELECTED_THEME, selected.id)?;
        Ok(selected)
    }

    /// Re-read the theme after the host app changed it.
    ///
    /// A missing or stale id keeps the theme currently in use.
    pub fn reload_theme(&mut self) -> &'static Theme {
        if let Some(stored) = self
            .store
            .get_string(keys::SELECTED_THEME)
            .as_deref()
            .and_then(theme::find)
        {
            self.state.selected_theme = stored;
        }
        self.state.selected_theme
    }

    /// Whether the category should insert Arabic in the current language.
    pub fn should_use_arabic(&self, category: ContentCategory) -> bool {
        self.should_use_arabic_in(category, self.state.current_language)
    }

    pub fn should_use_arabic_in(&self, category: ContentCategory, language: Language) -> bool {
        let preference = match category {
            ContentCategory::Phrase => self.state.arabic_language_preference,
            ContentCategory::Dua => self.state.arabic_dua_language_preference,
        };
        preference == Some(language)
    }

    /// Resolver for the current Arabic display mode.
    pub fn resolver(&self) -> ContentResolver {
        ContentResolver::new(self.state.arabic_display_mode)
    }

    /// Move to the next enabled language, wrapping around.
    ///
    /// Does nothing with fewer than two languages. A current language
    /// that is not enabled jumps to the first enabled one.
    pub fn toggle_language(&mut self) -> Result<Language> {
        let available = &self.state.available_languages;
        if available.len() < 2 {
            return Ok(self.state.current_language);
        }
        let next = match available
            .iter()
            .position(|language| *language == self.state.current_language)
        {
            Some(index) => available[(index + 1) % available.len()],
            None => available[0],
        };
        self.set_current_language(next)?;
        Ok(next)
    }

    /// Re-read everything the host app may have changed.
    pub fn refresh_from_host(&mut self) {
        self.state.available_languages = read_available_languages(&self.store);
        if let Some(language) = read_current_language(&self.store) {
            self.state.current_language = language;
        }
        self.state.arabic_language_preference =
            read_language(&self.store, keys::ARABIC_LANGUAGE_PREFERENCE);
        self.state.arabic_dua_language_preference =
            read_language(&self.store, keys::ARABIC_DUA_LANGUAGE_PREFERENCE);
        self.state.arabic_display_mode = read_display_mode(&self.store);
        self.recover_current_language();
        debug!(
            "preferences refreshed: {} of {:?}",
            self.state.current_language, self.state.available_languages
        );
    }

    fn write_current_language(&mut self, language: Language) -> Result<()> {
        self.state.current_language = language;
        self.store.set_string(keys::SELECTED_LANGUAGE, language.code())
    }

    fn recover_current_language(&mut self) {
        if self.state.available_languages.contains(&self.state.current_language) {
            return;
        }
        let first = self.state.available_languages[0];
        info!(
            "{} is no longer enabled, switching to {}",
            self.state.current_language, first
        );
        if let Err(err) = self.write_current_language(first) {
            warn!("could not persist recovered language: {:#}", err);
        }
    }
}

fn codes(languages: &[Language]) -> Vec<&'static str> {
    languages.iter().map(|language| language.code()).collect()
}

fn normalize_languages(languages: impl IntoIterator<Item = Language>) -> Vec<Language> {
    let mut unique = Vec::new();
    for language in languages {
        if !unique.contains(&language) {
            unique.push(language);
        }
    }
    if unique.is_empty() {
        DEFAULT_AVAILABLE_LANGUAGES.to_vec()
    } else {
        unique
    }
}

fn read_current_language(store: &SharedStore) -> Option<Language> {
    store
        .get_string(keys::SELECTED_LANGUAGE)
        .and_then(|code| Language::from_code(&code))
}

fn read_available_languages(store: &SharedStore) -> Vec<Language> {
    let codes: Vec<String> = store.get_json(keys::AVAILABLE_LANGUAGES).unwrap_or_default();
    normalize_languages(codes.iter().filter_map(|code| Language::from_code(code)))
}

fn read_language(store: &SharedStore, key: &str) -> Option<Language> {
    store
        .get_string(key)
        .and_then(|code| Language::from_code(&code))
}

fn read_display_mode(store: &SharedStore) -> ArabicDisplayMode {
    store
        .get_string(keys::ARABIC_DISPLAY_MODE)
        .and_then(|mode| ArabicDisplayMode::parse(&mode))
        .unwrap_or_default()
}

fn write_optional_language(
    store: &SharedStore,
    key: &str,
    language: Option<Language>,
) -> Result<()> {
    match language {
        Some(language) => store.set_string(key, language.code()),
        None => store.remove(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn manager_with(values: &[(&str, serde_json::Value)]) -> (SharedStore, PreferenceManager) {
        let store = MemoryStore::shared();
        for (key, value) in values {
            store.set(key, value.clone()).unwrap();
        }
        let manager = PreferenceManager::load(store.clone());
        (store, manager)
    }

    #[test]
    fn defaults_on_empty_store() {
        let (_, manager) = manager_with(&[]);
        assert_eq!(manager.state(), &PreferenceState::default());
    }

    #[test]
    fn toggle_cycles_through_available() {
        let (store, mut manager) = manager_with(&[
            (keys::AVAILABLE_LANGUAGES, json!(["en", "ru"])),
            (keys::SELECTED_LANGUAGE, json!("en")),
        ]);
        assert_eq!(manager.toggle_language().unwrap(), Language::Russian);
        assert_eq!(store.get_string(keys::SELECTED_LANGUAGE).as_deref(), Some("ru"));
        assert_eq!(manager.toggle_language().unwrap(), Language::English);
    }

    #[test]
    fn toggle_is_noop_with_one_language() {
        let (_, mut manager) = manager_with(&[
            (keys::AVAILABLE_LANGUAGES, json!(["kk"])),
            (keys::SELECTED_LANGUAGE, json!("kk")),
        ]);
        assert_eq!(manager.toggle_language().unwrap(), Language::Kazakh);
    }

    #[test]
    fn load_recovers_missing_current_language() {
        let (store, manager) = manager_with(&[
            (keys::AVAILABLE_LANGUAGES, json!(["ar", "kk"])),
            (keys::SELECTED_LANGUAGE, json!("ru")),
        ]);
        assert_eq!(manager.current_language(), Language::Arabic);
        assert_eq!(store.get_string(keys::SELECTED_LANGUAGE).as_deref(), Some("ar"));
    }

    #[test]
    fn available_languages_skip_unknown_and_duplicates() {
        let (_, manager) =
            manager_with(&[(keys::AVAILABLE_LANGUAGES, json!(["ru", "xx", "ru", "de"]))]);
        assert_eq!(manager.available_languages(), &[Language::Russian, Language::German]);
    }

    #[test]
    fn encoded_available_languages_are_read() {
        let (_, manager) = manager_with(&[(keys::AVAILABLE_LANGUAGES, json!("[\"en\",\"ar\"]"))]);
        assert_eq!(manager.available_languages(), &[Language::English, Language::Arabic]);
    }

    #[test]
    fn current_language_must_be_enabled() {
        let (store, mut manager) = manager_with(&[]);
        let err = manager.set_current_language(Language::French).unwrap_err();
        assert!(err.to_string().contains("en, ru"));
        assert_eq!(manager.current_language(), Language::English);
        assert!(store.get(keys::SELECTED_LANGUAGE).is_none());

        manager.set_available_languages(&[Language::English, Language::French]).unwrap();
        manager.set_current_language(Language::French).unwrap();
        let reloaded = PreferenceManager::load(store);
        assert_eq!(reloaded.current_language(), Language::French);
    }

    #[test]
    fn arabic_preference_matches_current_language() {
        let (_, mut manager) = manager_with(&[(keys::SELECTED_LANGUAGE, json!("ru"))]);
        manager.set_arabic_dua_language_preference(Some(Language::Russian)).unwrap();
        assert!(manager.should_use_arabic(ContentCategory::Dua));
        assert!(!manager.should_use_arabic(ContentCategory::Phrase));
        manager.set_current_language(Language::English).unwrap();
        assert!(!manager.should_use_arabic(ContentCategory::Dua));
        assert!(manager.should_use_arabic_in(ContentCategory::Dua, Language::Russian));
    }

    #[test]
    fn clearing_preference_removes_key() {
        let (store, mut manager) = manager_with(&[]);
        manager.set_arabic_language_preference(Some(Language::English)).unwrap();
        assert!(store.get(keys::ARABIC_LANGUAGE_PREFERENCE).is_some());
        manager.set_arabic_language_preference(None).unwrap();
        assert!(store.get(keys::ARABIC_LANGUAGE_PREFERENCE).is_none());
    }

    #[test]
    fn theme_setter_rejects_unknown_ids() {
        let (store, mut manager) = manager_with(&[]);
        assert!(manager.set_theme("neon").is_err());
        assert_eq!(manager.selected_theme().id, "islamic_green");
        manager.set_theme("ocean_blue").unwrap();
        assert_eq!(store.get_string(keys::SELECTED_THEME).as_deref(), Some("ocean_blue"));
    }

    #[test]
    fn stale_theme_id_loads_default() {
        let (_, manager) = manager_with(&[(keys::SELECTED_THEME, json!("retired_theme"))]);
        assert_eq!(manager.selected_theme().id, "islamic_green");
    }

    #[test]
    fn reload_theme_picks_up_host_change() {
        let (store, mut manager) = manager_with(&[]);
        store.set_string(keys::SELECTED_THEME, "soft_pink").unwrap();
        assert_eq!(manager.reload_theme().id, "soft_pink");
        store.set_string(keys::SELECTED_THEME, "gone").unwrap();
        assert_eq!(manager.reload_theme().id, "soft_pink");
    }

    #[test]
    fn invalid_display_mode_reads_as_default() {
        let (_, manager) = manager_with(&[(keys::ARABIC_DISPLAY_MODE, json!("latin"))]);
        assert_eq!(manager.arabic_display_mode(), ArabicDisplayMode::Arabic);
    }

    #[test]
    fn set_available_languages_moves_current() {
        let (_, mut manager) = manager_with(&[(keys::SELECTED_LANGUAGE, json!("ru"))]);
        manager
            .set_available_languages(&[Language::Kazakh, Language::Kazakh, Language::English])
            .unwrap();
        assert_eq!(manager.available_languages(), &[Language::Kazakh, Language::English]);
        assert_eq!(manager.current_language(), Language::Kazakh);
    }
}
