// SPDX-License-Identifier: PMPL-1.0-or-later

//! Location of the shared group store.
//!
//! Resolution order: explicit overrides (CLI flags), then the
//! environment, then `$HOME/.muslim-keyboard`. Without any of these the
//! group is unprovisioned and the store degrades to process-local memory.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_GROUP_ID: &str = "group.school.nfactorial.muslim.keyboard";
pub const GROUP_DIR_ENV: &str = "MUSLIM_KEYBOARD_GROUP_DIR";
pub const GROUP_ID_ENV: &str = "MUSLIM_KEYBOARD_GROUP_ID";

const HOME_SUBDIR: &str = ".muslim-keyboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Shared group identifier; names the store file.
    pub group_id: String,
    /// Directory holding the group store, `None` when unprovisioned.
    pub group_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_id: DEFAULT_GROUP_ID.to_string(),
            group_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let group_id = non_empty_env(GROUP_ID_ENV).unwrap_or_else(|| DEFAULT_GROUP_ID.to_string());
        let group_dir = non_empty_env(GROUP_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| non_empty_env("HOME").map(|home| PathBuf::from(home).join(HOME_SUBDIR)));
        Self {
            group_id,
            group_dir,
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, group_dir: Option<PathBuf>, group_id: Option<String>) -> Self {
        if let Some(dir) = group_dir {
            self.group_dir = Some(dir);
        }
        if let Some(id) = group_id.filter(|id| !id.trim().is_empty()) {
            self.group_id = id;
        }
        self
    }

    /// Path of the store file, `<group_dir>/<group_id>.json`.
    pub fn store_path(&self) -> Option<PathBuf> {
        self.group_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.json", self.group_id)))
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_path_uses_group_id() {
        let config = Config {
            group_id: "group.example".to_string(),
            group_dir: Some(PathBuf::from("/tmp/shared")),
        };
        assert_eq!(
            config.store_path(),
            Some(PathBuf::from("/tmp/shared/group.example.json"))
        );
    }

    #[test]
    fn unprovisioned_has_no_path() {
        assert_eq!(Config::default().store_path(), None);
    }

    #[test]
    fn overrides_replace_fields() {
        let config = Config::default()
            .with_overrides(Some(PathBuf::from("/data")), Some("group.other".to_string()));
        assert_eq!(config.group_id, "group.other");
        assert_eq!(config.group_dir, Some(PathBuf::from("/data")));
    }

    #[test]
    fn blank_group_id_override_is_ignored() {
        let config = Config::default().with_overrides(None, Some("  ".to_string()));
        assert_eq!(config.group_id, DEFAULT_GROUP_ID);
    }
}
