// SPDX-License-Identifier: PMPL-1.0-or-later

//! Keyboard session state without any UI.
//!
//! A session owns the services of one keyboard process and turns key
//! presses into [`Edit`]s for the text field. Everything it shows is
//! read from the shared store; [`KeyboardSession::refresh`] picks up
//! changes made by the host app while the keyboard was hidden.

use crate::content::{ContentCatalog, LocalizedContentEntry};
use crate::i18n::Language;
use crate::layout::{self, Grid, IslamicMode, KeyKind, Plane, ShiftState};
use crate::preferences::PreferenceManager;
use crate::selection::SelectionStore;
use crate::stickers::{Sticker, StickerLibrary};
use crate::store::SharedStore;
use crate::theme::Theme;
use anyhow::Result;
use log::debug;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// A content key on the Islamic plane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IslamicKey {
    pub key: &'static str,
    pub label: &'static str,
}

/// Change to apply to the text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert(String),
    /// Delete this many grapheme clusters before the cursor.
    DeleteBackward(usize),
    None,
}

pub struct KeyboardSession<'c> {
    preferences: PreferenceManager,
    selections: SelectionStore<'c>,
    stickers: StickerLibrary,
    plane: Plane,
    islamic_mode: IslamicMode,
    shift: ShiftState,
    /// Last phrase or dua inserted; delete removes it whole.
    last_inserted: Option<String>,
}

impl<'c> KeyboardSession<'c> {
    pub fn new(store: SharedStore, catalog: &'c ContentCatalog) -> Self {
        Self {
            preferences: PreferenceManager::load(store.clone()),
            selections: SelectionStore::new(store.clone(), catalog),
            stickers: StickerLibrary::new(store),
            plane: Plane::default(),
            islamic_mode: IslamicMode::default(),
            shift: ShiftState::default(),
            last_inserted: None,
        }
    }

    pub fn preferences(&self) -> &PreferenceManager {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut PreferenceManager {
        &mut self.preferences
    }

    pub fn selections(&self) -> &SelectionStore<'c> {
        &self.selections
    }

    pub fn language(&self) -> Language {
        self.preferences.current_language()
    }

    pub fn theme(&self) -> &'static Theme {
        self.preferences.selected_theme()
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }

    pub fn islamic_mode(&self) -> IslamicMode {
        self.islamic_mode
    }

    pub fn shift(&self) -> ShiftState {
        self.shift
    }

    pub fn toggle_mode(&mut self) -> IslamicMode {
        self.islamic_mode = self.islamic_mode.toggled();
        self.islamic_mode
    }

    /// Key rows for the current plane and language.
    pub fn layout(&self) -> Grid {
        layout::grid(self.plane, self.language())
    }

    pub fn label(&self, key: KeyKind) -> String {
        layout::key_label(key, self.language(), self.islamic_mode, self.shift)
    }

    /// Content keys for the active mode, read fresh from the store.
    pub fn islamic_keys(&self) -> Vec<IslamicKey> {
        let language = self.language();
        let resolver = self.preferences.resolver();
        self.selected_entries()
            .into_iter()
            .map(|entry| IslamicKey {
                key: entry.key,
                label: resolver.display_text(entry, language),
            })
            .collect()
    }

    /// Text to insert for a content key, or `None` when the key is not
    /// selected in the active mode.
    pub fn tap(&mut self, key: &str) -> Option<String> {
        let entry = self
            .selected_entries()
            .into_iter()
            .find(|entry| entry.key == key)?;
        let substitute = self.preferences.should_use_arabic(entry.category());
        let text = self
            .preferences
            .resolver()
            .insert_text(entry, self.language(), substitute);
        debug!("{} {} inserts {} bytes", entry.category(), key, text.len());
        self.last_inserted = Some(text.clone());
        Some(text)
    }

    /// Stickers shown below the content keys.
    pub fn sticker_keys(&self) -> Vec<Sticker> {
        self.stickers.keyboard_stickers()
    }

    /// Apply a control or character key.
    pub fn press(&mut self, key: KeyKind) -> Result<Edit> {
        let edit = match key {
            KeyKind::Letter(letter) => {
                let text = self.shift.apply(letter);
                self.shift.after_letter();
                Edit::Insert(text)
            }
            KeyKind::Number(text) | KeyKind::Symbol(text) => Edit::Insert(text.to_string()),
            KeyKind::Space => Edit::Insert(" ".to_string()),
            KeyKind::Return => Edit::Insert("\n".to_string()),
            KeyKind::Delete => {
                let count = self
                    .last_inserted
                    .take()
                    .map(|text| text.graphemes(true).count())
                    .unwrap_or(1);
                return Ok(Edit::DeleteBackward(count));
            }
            KeyKind::Shift => {
                self.shift.tap();
                Edit::None
            }
            KeyKind::Numbers => self.switch_plane(Plane::Numbers),
            KeyKind::Symbols => self.switch_plane(Plane::Symbols),
            KeyKind::Letters => self.switch_plane(Plane::Letters),
            KeyKind::Moon => {
                let next = if self.plane == Plane::Islamic {
                    Plane::Letters
                } else {
                    Plane::Islamic
                };
                self.switch_plane(next)
            }
            KeyKind::Globe => {
                self.preferences.toggle_language()?;
                Edit::None
            }
            KeyKind::IslamicToggle => {
                self.toggle_mode();
                Edit::None
            }
        };
        if let Edit::Insert(_) = edit {
            self.last_inserted = None;
        }
        Ok(edit)
    }

    /// Re-read languages, theme and selections after the host app ran.
    pub fn refresh(&mut self) {
        self.preferences.refresh_from_host();
        self.preferences.reload_theme();
        self.selections.refresh();
    }

    fn switch_plane(&mut self, plane: Plane) -> Edit {
        self.plane = plane;
        Edit::None
    }

    fn selected_entries(&self) -> Vec<&'c LocalizedContentEntry> {
        self.selections.selected_entries(self.islamic_mode.category())
    }
}
