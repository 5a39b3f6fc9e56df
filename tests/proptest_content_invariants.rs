// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property-based invariant tests for content resolution.
//!
//! 1. Display and insert text is non-empty for every entry, language
//!    code, display mode and substitution flag
//! 2. Resolution is deterministic
//! 3. Any stored selection resolves to catalog keys only, never empty
//! 4. Language toggling stays inside the enabled list

use muslim_keyboard::content::{ContentCatalog, ContentCategory, LocalizedContentEntry};
use muslim_keyboard::i18n::Language;
use muslim_keyboard::preferences::PreferenceManager;
use muslim_keyboard::resolver::{ArabicDisplayMode, ContentResolver};
use muslim_keyboard::selection::{resolve_selection, sources};
use muslim_keyboard::store::{keys, KeyValueStore, MemoryStore};
use proptest::prelude::*;
use serde_json::json;

// ── Strategies ──────────────────────────────────────────────────────────

fn entry_strategy() -> impl Strategy<Value = &'static LocalizedContentEntry> {
    let catalog = ContentCatalog::builtin();
    let all: Vec<&'static LocalizedContentEntry> = ContentCategory::all()
        .iter()
        .flat_map(|category| catalog.entries(*category).iter())
        .collect();
    proptest::sample::select(all)
}

fn language_strategy() -> impl Strategy<Value = Language> {
    proptest::sample::select(Language::all().to_vec())
}

/// Supported codes mixed with junk the host app might have written.
fn code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        language_strategy().prop_map(|language| language.code().to_string()),
        "[a-z]{0,4}",
        Just("KK".to_string()),
        Just(" ru ".to_string()),
    ]
}

fn mode_strategy() -> impl Strategy<Value = ArabicDisplayMode> {
    prop_oneof![
        Just(ArabicDisplayMode::Arabic),
        Just(ArabicDisplayMode::EnglishTranslation),
    ]
}

fn category_strategy() -> impl Strategy<Value = ContentCategory> {
    prop_oneof![Just(ContentCategory::Phrase), Just(ContentCategory::Dua)]
}

fn stored_keys_strategy(category: ContentCategory) -> impl Strategy<Value = Vec<String>> {
    let known: Vec<String> = ContentCatalog::builtin()
        .keys(category)
        .map(str::to_string)
        .collect();
    prop::collection::vec(
        prop_oneof![proptest::sample::select(known), "[a-z_]{1,12}"],
        0..12,
    )
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn resolved_text_is_never_empty(
        entry in entry_strategy(),
        code in code_strategy(),
        mode in mode_strategy(),
        substitute in any::<bool>(),
    ) {
        let resolver = ContentResolver::new(mode);
        prop_assert!(!resolver.display_text_for_code(entry, &code).is_empty());
        prop_assert!(!resolver.insert_text_for_code(entry, &code, substitute).is_empty());
    }

    #[test]
    fn resolution_is_deterministic(
        entry in entry_strategy(),
        language in language_strategy(),
        mode in mode_strategy(),
        substitute in any::<bool>(),
    ) {
        let resolver = ContentResolver::new(mode);
        prop_assert_eq!(
            resolver.display_text(entry, language),
            resolver.display_text(entry, language)
        );
        prop_assert_eq!(
            resolver.insert_text(entry, language, substitute),
            resolver.insert_text(entry, language, substitute)
        );
    }

    #[test]
    fn substitution_inserts_arabic_outside_arabic(
        entry in entry_strategy(),
        language in language_strategy(),
    ) {
        prop_assume!(language != Language::Arabic);
        let inserted = ContentResolver::default().insert_text(entry, language, true);
        prop_assert_eq!(inserted.as_str(), entry.arabic());
    }

    #[test]
    fn selection_is_catalog_subset_and_never_empty(
        (category, stored) in category_strategy()
            .prop_flat_map(|category| (Just(category), stored_keys_strategy(category))),
        encoded in any::<bool>(),
    ) {
        let catalog = ContentCatalog::builtin();
        let store = MemoryStore::new();
        let key = sources(category)[0].key;
        let value = if encoded {
            json!(serde_json::to_string(&stored).unwrap())
        } else {
            json!(stored)
        };
        store.set(key, value).unwrap();

        let selection = resolve_selection(&store, catalog, category, sources(category));
        prop_assert!(!selection.is_empty());
        for selected in selection.keys() {
            prop_assert!(catalog.contains(category, selected));
        }
        let any_known = stored.iter().any(|k| catalog.contains(category, k));
        prop_assert_eq!(selection.is_default(), !any_known);
    }

    #[test]
    fn toggle_stays_in_enabled_languages(
        enabled in prop::collection::vec(language_strategy(), 0..6),
        start in language_strategy(),
        presses in 0usize..20,
    ) {
        let store = MemoryStore::shared();
        let codes: Vec<&str> = enabled.iter().map(Language::code).collect();
        store.set(keys::AVAILABLE_LANGUAGES, json!(codes)).unwrap();
        store.set(keys::SELECTED_LANGUAGE, json!(start.code())).unwrap();

        let mut preferences = PreferenceManager::load(store);
        for _ in 0..presses {
            preferences.toggle_language().unwrap();
            prop_assert!(preferences
                .available_languages()
                .contains(&preferences.current_language()));
        }
    }
}
