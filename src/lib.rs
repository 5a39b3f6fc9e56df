// SPDX-License-Identifier: PMPL-1.0-or-later

//! Muslim Keyboard core.
//!
//! The UI-free engine behind an Islamic phrases and duas keyboard: the
//! multilingual content catalog, the user's selections and preferences
//! shared with the host app through a group store, and the text each
//! content key shows and inserts.
//!
//! SERVICES:
//! 1. **Content**: built-in phrases and duas with per-language text.
//! 2. **Selection**: which entries the keyboard shows, read through an
//!    ordered list of legacy store keys.
//! 3. **Preferences**: languages, Arabic substitution, display mode, theme.
//! 4. **Resolver**: display and insert text for an entry.
//! 5. **Session**: key presses and content taps for one keyboard process.

pub mod config;
pub mod content;
pub mod diagnostics;
pub mod i18n;
pub mod layout;
pub mod preferences;
pub mod resolver;
pub mod selection;
pub mod session;
pub mod stickers;
pub mod store;
pub mod theme;
