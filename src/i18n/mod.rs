// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language support for the keyboard.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | ru   | Russian  | Русский     |
//! | kk   | Kazakh   | Қазақша     |
//! | ar   | Arabic   | العربية     |
//! | fr   | French   | Français    |
//! | de   | German   | Deutsch     |
//! | zh   | Chinese  | 中文         |
//! | hi   | Hindi    | हिन्दी        |
//! | ky   | Kyrgyz   | Кыргызча    |
//! | uz   | Uzbek    | Oʻzbekcha   |
//! | ko   | Korean   | 한국어        |
//! | ur   | Urdu     | اردو        |
//! | es   | Spanish  | Español     |
//! | it   | Italian  | Italiano    |
//!
//! Phrases are authored in English and Russian. Dua titles and
//! translations add Kazakh and Arabic. Everything else resolves through
//! the English fallback.

mod catalog;
mod iso639;

pub use catalog::{t, Language};
pub use iso639::{badge, flag, language_name, native_name};
