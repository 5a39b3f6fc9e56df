// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key grids and key labels.
//!
//! Every plane is four rows except the Islamic plane, whose content keys
//! come from the selection and which only has the control row here.

use crate::content::ContentCategory;
use crate::i18n::{badge, t, Language};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyKind {
    Letter(&'static str),
    Number(&'static str),
    Symbol(&'static str),
    Shift,
    Delete,
    Space,
    Return,
    /// Switch to the number plane.
    Numbers,
    /// Switch to the symbol plane.
    Symbols,
    /// Back to the letter plane (`ABC`).
    Letters,
    /// Open or close the Islamic plane.
    Moon,
    /// Next keyboard language.
    Globe,
    /// Switch the Islamic plane between phrases and duas.
    IslamicToggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    #[default]
    Letters,
    Numbers,
    Symbols,
    Islamic,
}

/// Content shown on the Islamic plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IslamicMode {
    #[default]
    Phrases,
    Duas,
}

impl IslamicMode {
    pub fn category(self) -> ContentCategory {
        match self {
            IslamicMode::Phrases => ContentCategory::Phrase,
            IslamicMode::Duas => ContentCategory::Dua,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            IslamicMode::Phrases => IslamicMode::Duas,
            IslamicMode::Duas => IslamicMode::Phrases,
        }
    }
}

/// Shift and caps lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftState {
    pub shift: bool,
    pub caps_lock: bool,
}

impl ShiftState {
    /// A second tap while shifted toggles caps lock.
    pub fn tap(&mut self) {
        if self.shift {
            self.caps_lock = !self.caps_lock;
            self.shift = self.caps_lock;
        } else {
            self.shift = true;
        }
    }

    /// Shift lasts for one letter unless caps lock is on.
    pub fn after_letter(&mut self) {
        if self.shift && !self.caps_lock {
            self.shift = false;
        }
    }

    pub fn is_upper(&self) -> bool {
        self.shift || self.caps_lock
    }

    pub fn apply(&self, letter: &str) -> String {
        if self.is_upper() {
            letter.to_uppercase()
        } else {
            letter.to_lowercase()
        }
    }
}

pub type Grid = &'static [&'static [KeyKind]];

use KeyKind::*;

#[rustfmt::skip]
const QWERTY: Grid = &[
    &[Letter("Q"), Letter("W"), Letter("E"), Letter("R"), Letter("T"), Letter("Y"), Letter("U"), Letter("I"), Letter("O"), Letter("P")],
    &[Letter("A"), Letter("S"), Letter("D"), Letter("F"), Letter("G"), Letter("H"), Letter("J"), Letter("K"), Letter("L")],
    &[Shift, Letter("Z"), Letter("X"), Letter("C"), Letter("V"), Letter("B"), Letter("N"), Letter("M"), Delete],
    &[Numbers, Moon, Space, Return],
];

#[rustfmt::skip]
const JCUKEN: Grid = &[
    &[Letter("Й"), Letter("Ц"), Letter("У"), Letter("К"), Letter("Е"), Letter("Н"), Letter("Г"), Letter("Ш"), Letter("Щ"), Letter("З")],
    &[Letter("Ф"), Letter("Ы"), Letter("В"), Letter("А"), Letter("П"), Letter("Р"), Letter("О"), Letter("Л"), Letter("Д")],
    &[Shift, Letter("Я"), Letter("Ч"), Letter("С"), Letter("М"), Letter("И"), Letter("Т"), Letter("Ь"), Delete],
    &[Numbers, Moon, Space, Return],
];

#[rustfmt::skip]
const ARABIC: Grid = &[
    &[Letter("ض"), Letter("ص"), Letter("ث"), Letter("ق"), Letter("ف"), Letter("غ"), Letter("ع"), Letter("ه"), Letter("خ"), Letter("ح")],
    &[Letter("ش"), Letter("س"), Letter("ي"), Letter("ب"), Letter("ل"), Letter("ا"), Letter("ت"), Letter("ن"), Letter("م")],
    &[Shift, Letter("ظ"), Letter("ط"), Letter("ذ"), Letter("د"), Letter("ز"), Letter("ر"), Letter("و"), Delete],
    &[Numbers, Moon, Space, Return],
];

#[rustfmt::skip]
const NUMBERS: Grid = &[
    &[Number("1"), Number("2"), Number("3"), Number("4"), Number("5"), Number("6"), Number("7"), Number("8"), Number("9"), Number("0")],
    &[Symbol("-"), Symbol("/"), Symbol(":"), Symbol(";"), Symbol("("), Symbol(")"), Symbol("$"), Symbol("&"), Symbol("@"), Symbol("\"")],
    &[Symbols, Symbol("."), Symbol(","), Symbol("?"), Symbol("!"), Symbol("'"), Delete],
    &[Letters, Moon, Space, Return],
];

#[rustfmt::skip]
const SYMBOLS: Grid = &[
    &[Symbol("["), Symbol("]"), Symbol("{"), Symbol("}"), Symbol("#"), Symbol("%"), Symbol("^"), Symbol("*"), Symbol("+"), Symbol("=")],
    &[Symbol("_"), Symbol("\\"), Symbol("|"), Symbol("~"), Symbol("<"), Symbol(">"), Symbol("€"), Symbol("£"), Symbol("¥")],
    &[Numbers, Symbol("•"), Symbol("°"), Symbol("…"), Symbol("¿"), Symbol("¡"), Symbol("§"), Delete],
    &[Letters, Moon, Space, Return],
];

/// Salawat sign offered next to the content keys.
pub const SALAWAT: &str = "ﷺ";

const ISLAMIC: Grid = &[&[Letters, IslamicToggle, Globe, Space, Symbol(SALAWAT), Delete, Return]];

/// Letter grid for a language; languages without their own use QWERTY.
pub fn letter_grid(language: Language) -> Grid {
    match language {
        Language::Russian | Language::Kazakh => JCUKEN,
        Language::Arabic => ARABIC,
        _ => QWERTY,
    }
}

pub fn grid(plane: Plane, language: Language) -> Grid {
    match plane {
        Plane::Letters => letter_grid(language),
        Plane::Numbers => NUMBERS,
        Plane::Symbols => SYMBOLS,
        Plane::Islamic => ISLAMIC,
    }
}

/// Label drawn on a key.
pub fn key_label(key: KeyKind, language: Language, mode: IslamicMode, shift: ShiftState) -> String {
    match key {
        Letter(letter) => shift.apply(letter),
        Number(text) | Symbol(text) => text.to_string(),
        Shift => "⇧".to_string(),
        Delete => "⌫".to_string(),
        Return => "⏎".to_string(),
        Space => t(language, "key.space").to_string(),
        Numbers => "123".to_string(),
        Symbols => "#+=".to_string(),
        Letters => "ABC".to_string(),
        Moon => "🌙".to_string(),
        Globe => badge(language),
        IslamicToggle => toggle_label(language, mode).to_string(),
    }
}

/// The toggle names the mode it switches to.
pub fn toggle_label(language: Language, mode: IslamicMode) -> &'static str {
    match mode {
        IslamicMode::Phrases => t(language, "toggle.duas"),
        IslamicMode::Duas => t(language, "toggle.phrases"),
    }
}
