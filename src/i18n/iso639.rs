// SPDX-License-Identifier: PMPL-1.0-or-later

//! Display metadata for supported keyboard languages.
//!
//! Names shown in the host app's language pickers and the short badge
//! drawn on the language key of the Islamic keyboard.

use super::catalog::Language;

/// English name of a language.
pub fn language_name(language: Language) -> &'static str {
    match language {
        Language::English => "English",
        Language::Russian => "Russian",
        Language::Kazakh => "Kazakh",
        Language::Arabic => "Arabic",
        Language::French => "French",
        Language::German => "German",
        Language::Chinese => "Chinese",
        Language::Hindi => "Hindi",
        Language::Kyrgyz => "Kyrgyz",
        Language::Uzbek => "Uzbek",
        Language::Korean => "Korean",
        Language::Urdu => "Urdu",
        Language::Spanish => "Spanish",
        Language::Italian => "Italian",
    }
}

/// Name of a language in its own script.
pub fn native_name(language: Language) -> &'static str {
    match language {
        Language::English => "English",
        Language::Russian => "Русский",
        Language::Kazakh => "Қазақша",
        Language::Arabic => "العربية",
        Language::French => "Français",
        Language::German => "Deutsch",
        Language::Chinese => "中文",
        Language::Hindi => "हिन्दी",
        Language::Kyrgyz => "Кыргызча",
        Language::Uzbek => "Oʻzbekcha",
        Language::Korean => "한국어",
        Language::Urdu => "اردو",
        Language::Spanish => "Español",
        Language::Italian => "Italiano",
    }
}

pub fn flag(language: Language) -> &'static str {
    match language {
        Language::English => "🇺🇸",
        Language::Russian => "🇷🇺",
        Language::Kazakh => "🇰🇿",
        Language::Arabic => "🇸🇦",
        Language::French => "🇫🇷",
        Language::German => "🇩🇪",
        Language::Chinese => "🇨🇳",
        Language::Hindi => "🇮🇳",
        Language::Kyrgyz => "🇰🇬",
        Language::Uzbek => "🇺🇿",
        Language::Korean => "🇰🇷",
        Language::Urdu => "🇵🇰",
        Language::Spanish => "🇪🇸",
        Language::Italian => "🇮🇹",
    }
}

/// Two-letter badge for the language key.
///
/// Kazakh uses the country code `KZ`, matching what users see on the
/// system keyboard; every other language shows its upper-cased code.
pub fn badge(language: Language) -> String {
    match language {
        Language::Kazakh => "KZ".to_string(),
        other => other.code().to_ascii_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges() {
        assert_eq!(badge(Language::English), "EN");
        assert_eq!(badge(Language::Kazakh), "KZ");
        assert_eq!(badge(Language::Arabic), "AR");
    }

    #[test]
    fn names_are_never_empty() {
        for language in Language::all() {
            assert!(!language_name(*language).is_empty());
            assert!(!native_name(*language).is_empty());
            assert!(!flag(*language).is_empty());
        }
    }
}
