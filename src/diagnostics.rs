// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-check of the shared group store.
//!
//! Reports whether the store is provisioned and, for every known key,
//! whether its value decodes and refers to content that still exists.
//! Anything the keyboard silently falls back on shows up as a warning.

use crate::config::Config;
use crate::content::{ContentCatalog, ContentCategory};
use crate::i18n::Language;
use crate::resolver::ArabicDisplayMode;
use crate::selection;
use crate::stickers::{Sticker, StickerLibrary};
use crate::store::{decode_json, keys, FileStore, SharedStore, StoreExt};
use crate::theme;
use anyhow::{anyhow, Result};
use colored::Colorize;
use serde_json::Value;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        let tag = match self.level {
            Level::Ok => self.level.tag().green(),
            Level::Warn => self.level.tag().yellow(),
            Level::Error => self.level.tag().red(),
        };
        println!("  [{}] {:34} {}", tag, self.label, self.detail);
    }
}

/// Run every check, print the results and fail if any check errored.
pub fn run_self_diagnostics(
    config: &Config,
    store: &SharedStore,
    catalog: &ContentCatalog,
) -> Result<()> {
    println!("muslim-keyboard self-diagnostics");
    println!();
    let checks = collect(config, store, catalog);
    for entry in &checks {
        entry.print();
    }
    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

pub fn collect(config: &Config, store: &SharedStore, catalog: &ContentCatalog) -> Vec<Diagnostic> {
    let mut checks = vec![
        Diagnostic::ok("version", format!("muslim-keyboard {}", env!("CARGO_PKG_VERSION"))),
        check_provisioning(config, store),
    ];
    for key in keys::ALL.iter().copied() {
        checks.push(match store.get(key) {
            None => Diagnostic::ok(key, "not set, default in use".to_string()),
            Some(value) => check_value(key, value, store, catalog),
        });
    }
    checks
}

fn check_provisioning(config: &Config, store: &SharedStore) -> Diagnostic {
    const LABEL: &str = "shared group";
    if !store.is_shared() {
        return Diagnostic::warning(
            LABEL,
            format!("{} not provisioned, changes stay in this process", config.group_id),
        );
    }
    let Some(path) = config.store_path() else {
        return Diagnostic::ok(LABEL, store.describe());
    };
    match FileStore::open(&path).and_then(|file| file.read_all()) {
        Ok(values) => {
            Diagnostic::ok(LABEL, format!("{} ({} keys)", store.describe(), values.len()))
        }
        Err(err) => Diagnostic::error(LABEL, format!("{:#}", err)),
    }
}

fn check_value(
    key: &'static str,
    value: Value,
    store: &SharedStore,
    catalog: &ContentCatalog,
) -> Diagnostic {
    match key {
        keys::SELECTED_LANGUAGE
        | keys::ARABIC_LANGUAGE_PREFERENCE
        | keys::ARABIC_DUA_LANGUAGE_PREFERENCE => check_language_code(key, &value),
        keys::AVAILABLE_LANGUAGES => check_language_list(key, value),
        keys::ARABIC_DISPLAY_MODE => match value.as_str().and_then(ArabicDisplayMode::parse) {
            Some(mode) => Diagnostic::ok(key, mode.to_string()),
            None => {
                Diagnostic::warning(key, format!("{} is not a display mode, using arabic", value))
            }
        },
        keys::SELECTED_THEME => match value.as_str() {
            Some(id) if theme::find(id).is_some() => Diagnostic::ok(key, id.to_string()),
            _ => Diagnostic::warning(
                key,
                format!("{} is not a theme, using {}", value, theme::default_theme().id),
            ),
        },
        keys::SELECTED_DUAS => check_selection(key, &value, catalog, ContentCategory::Dua),
        keys::SELECTED_PHRASES | keys::KEYBOARD_SELECTED_PHRASES => {
            check_selection(key, &value, catalog, ContentCategory::Phrase)
        }
        keys::SAVED_STICKERS => check_stickers(key, value, store),
        keys::KEYBOARD_STICKER_SELECTION => match decode_json::<BTreeSet<String>>(key, value) {
            Some(ids) => Diagnostic::ok(key, format!("{} selected", ids.len())),
            None => Diagnostic::warning(key, "does not decode, showing every sticker".to_string()),
        },
        keys::STICKERS_ENABLED => match store.get_bool(key) {
            Some(enabled) => Diagnostic::ok(key, enabled.to_string()),
            None => {
                Diagnostic::warning(key, format!("{} is not a bool, stickers stay enabled", value))
            }
        },
        _ => Diagnostic::ok(key, "set".to_string()),
    }
}

fn check_language_code(key: &'static str, value: &Value) -> Diagnostic {
    match value.as_str() {
        Some(code) => match Language::from_code(code) {
            Some(language) => Diagnostic::ok(key, language.to_string()),
            None => Diagnostic::warning(key, format!("unsupported language code {:?}", code)),
        },
        None => Diagnostic::warning(key, format!("{} is not a language code", value)),
    }
}

fn check_language_list(key: &'static str, value: Value) -> Diagnostic {
    let Some(codes) = decode_json::<Vec<String>>(key, value) else {
        return Diagnostic::warning(key, "does not decode, using en, ru".to_string());
    };
    let unknown: Vec<&str> = codes
        .iter()
        .map(String::as_str)
        .filter(|code| Language::from_code(code).is_none())
        .collect();
    if unknown.is_empty() && !codes.is_empty() {
        Diagnostic::ok(key, codes.join(", "))
    } else if unknown.len() == codes.len() {
        Diagnostic::warning(key, "no supported languages, using en, ru".to_string())
    } else {
        Diagnostic::warning(key, format!("ignoring unsupported codes: {}", unknown.join(", ")))
    }
}

fn check_selection(
    key: &'static str,
    value: &Value,
    catalog: &ContentCatalog,
    category: ContentCategory,
) -> Diagnostic {
    let decoded = selection::sources(category)
        .iter()
        .filter(|source| source.key == key)
        .find_map(|source| (source.decode)(value));
    let Some(stored) = decoded else {
        return Diagnostic::warning(key, "does not decode, skipped".to_string());
    };
    let known = catalog.key_set(category);
    let stale = stored.iter().filter(|k| !known.contains(k.as_str())).count();
    let kept = stored.len() - stale;
    if kept == 0 {
        Diagnostic::warning(key, format!("no known {} keys, skipped", category))
    } else if stale > 0 {
        Diagnostic::warning(key, format!("{} selected, {} stale keys ignored", kept, stale))
    } else {
        Diagnostic::ok(key, format!("{} selected", kept))
    }
}

fn check_stickers(key: &'static str, value: Value, store: &SharedStore) -> Diagnostic {
    let Some(stickers) = decode_json::<Vec<Sticker>>(key, value) else {
        return Diagnostic::warning(key, "does not decode, library reads as empty".to_string());
    };
    let issues = StickerLibrary::new(store.clone()).validate();
    if issues.is_empty() {
        Diagnostic::ok(key, format!("{} stickers", stickers.len()))
    } else {
        Diagnostic::warning(key, issues.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn find<'a>(checks: &'a [Diagnostic], label: &str) -> &'a Diagnostic {
        checks.iter().find(|check| check.label == label).unwrap()
    }

    #[test]
    fn empty_memory_store_only_warns_on_provisioning() {
        let store = MemoryStore::shared();
        let checks = collect(&Config::default(), &store, ContentCatalog::builtin());
        assert_eq!(find(&checks, "shared group").level, Level::Warn);
        assert!(checks
            .iter()
            .filter(|check| check.label != "shared group")
            .all(|check| check.level == Level::Ok));
    }

    #[test]
    fn reports_stale_and_undecodable_values() {
        let store = MemoryStore::shared();
        store.set(keys::SELECTED_THEME, json!("neon")).unwrap();
        store.set(keys::SELECTED_DUAS, json!(["rain", "retired"])).unwrap();
        store.set(keys::SELECTED_PHRASES, json!(42)).unwrap();
        store.set(keys::SELECTED_LANGUAGE, json!("tlh")).unwrap();
        store.set(keys::AVAILABLE_LANGUAGES, json!(["en", "xx"])).unwrap();
        let checks = collect(&Config::default(), &store, ContentCatalog::builtin());
        for key in [
            keys::SELECTED_THEME,
            keys::SELECTED_DUAS,
            keys::SELECTED_PHRASES,
            keys::SELECTED_LANGUAGE,
            keys::AVAILABLE_LANGUAGES,
        ] {
            assert_eq!(find(&checks, key).level, Level::Warn, "{}", key);
        }
        assert!(find(&checks, keys::SELECTED_DUAS).detail.contains("1 stale"));
    }

    #[test]
    fn encoded_selection_is_accepted() {
        let store = MemoryStore::shared();
        store.set(keys::KEYBOARD_SELECTED_PHRASES, json!("[\"ameen\"]")).unwrap();
        let checks = collect(&Config::default(), &store, ContentCatalog::builtin());
        assert_eq!(find(&checks, keys::KEYBOARD_SELECTED_PHRASES).level, Level::Ok);
    }

    #[test]
    fn corrupt_store_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            group_id: "group.test".to_string(),
            group_dir: Some(dir.path().to_path_buf()),
        };
        std::fs::write(config.store_path().unwrap(), "{not json").unwrap();
        let file = FileStore::open(config.store_path().unwrap()).unwrap();
        let store: SharedStore = std::rc::Rc::new(file);
        let checks = collect(&config, &store, ContentCatalog::builtin());
        assert_eq!(find(&checks, "shared group").level, Level::Error);
    }
}
