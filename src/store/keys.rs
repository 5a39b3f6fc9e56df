// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key names in the shared group store.
//!
//! These strings are shared with the host app and with older keyboard
//! builds, so they must never be renamed.

pub const SELECTED_LANGUAGE: &str = "selected_language";
pub const AVAILABLE_LANGUAGES: &str = "keyboard_available_languages";
pub const ARABIC_LANGUAGE_PREFERENCE: &str = "arabic_language_preference";
pub const ARABIC_DUA_LANGUAGE_PREFERENCE: &str = "arabic_dua_language_preference";
pub const ARABIC_DISPLAY_MODE: &str = "arabic_display_mode";
pub const SELECTED_THEME: &str = "selected_keyboard_theme";

pub const SELECTED_DUAS: &str = "keyboard_selected_duas";
pub const SELECTED_PHRASES: &str = "selected_islamic_phrases";
pub const KEYBOARD_SELECTED_PHRASES: &str = "keyboard_selected_islamic_phrases";

pub const SAVED_STICKERS: &str = "saved_stickers";
pub const KEYBOARD_STICKER_SELECTION: &str = "selected_stickers_for_keyboard";
pub const STICKERS_ENABLED: &str = "stickers_enabled_in_keyboard";

/// Every key this crate reads or writes.
pub const ALL: &[&str] = &[
    SELECTED_LANGUAGE,
    AVAILABLE_LANGUAGES,
    ARABIC_LANGUAGE_PREFERENCE,
    ARABIC_DUA_LANGUAGE_PREFERENCE,
    ARABIC_DISPLAY_MODE,
    SELECTED_THEME,
    SELECTED_DUAS,
    SELECTED_PHRASES,
    KEYBOARD_SELECTED_PHRASES,
    SAVED_STICKERS,
    KEYBOARD_STICKER_SELECTION,
    STICKERS_ENABLED,
];
