// SPDX-License-Identifier: PMPL-1.0-or-later

//! Master list of Islamic phrases.
//!
//! Order matters: the first six rows are the default keyboard selection.

use super::{EntryBody, LocalizedContentEntry, LocalizedText, PhraseContent};
use crate::i18n::Language;

struct PhraseRow {
    key: &'static str,
    arabic: &'static str,
    transliteration_en: &'static str,
    transliteration_ru: &'static str,
    translation_en: &'static str,
    translation_ru: &'static str,
    meaning: &'static str,
    usage: &'static str,
}

pub(super) fn build() -> Vec<LocalizedContentEntry> {
    PHRASES
        .iter()
        .map(|row| LocalizedContentEntry {
            key: row.key,
            body: EntryBody::Phrase(PhraseContent {
                arabic: row.arabic,
                transliteration: LocalizedText::build(
                    &[
                        (Language::English, row.transliteration_en),
                        (Language::Russian, row.transliteration_ru),
                    ],
                    &[],
                ),
                translation: LocalizedText::build(
                    &[
                        (Language::English, row.translation_en),
                        (Language::Russian, row.translation_ru),
                    ],
                    &[],
                ),
                meaning: LocalizedText::english(row.meaning),
                usage: LocalizedText::english(row.usage),
            }),
        })
        .collect()
}

const PHRASES: &[PhraseRow] = &[
    PhraseRow {
        key: "assalamu_alaikum",
        arabic: "السلام عليكم",
        transliteration_en: "Assalamu Alaikum",
        transliteration_ru: "Ассаламу алейкум",
        translation_en: "Peace be upon you",
        translation_ru: "Мир вам",
        meaning: "A greeting wishing peace and safety upon the listener",
        usage: "When meeting someone or starting a conversation",
    },
    PhraseRow {
        key: "wa_alaikum_assalam",
        arabic: "وعليكم السلام",
        transliteration_en: "Wa Alaikum Assalam",
        transliteration_ru: "Уа алейкум ассалям",
        translation_en: "And upon you peace",
        translation_ru: "И вам мир",
        meaning: "The reply returning the greeting of peace",
        usage: "In response to Assalamu Alaikum",
    },
    PhraseRow {
        key: "bismillah",
        arabic: "بسم الله",
        transliteration_en: "Bismillah",
        transliteration_ru: "Бисмиллях",
        translation_en: "In the name of Allah",
        translation_ru: "Во имя Аллаха",
        meaning: "Beginning an action by invoking the name of Allah",
        usage: "Before eating, travelling, or starting any task",
    },
    PhraseRow {
        key: "alhamdulillah",
        arabic: "الحمد لله",
        transliteration_en: "Alhamdulillah",
        transliteration_ru: "Альхамдулиллях",
        translation_en: "Praise be to Allah",
        translation_ru: "Хвала Аллаху",
        meaning: "Gratitude to Allah for every circumstance",
        usage: "After good news, after eating, or when asked how you are",
    },
    PhraseRow {
        key: "subhanallah",
        arabic: "سبحان الله",
        transliteration_en: "SubhanAllah",
        transliteration_ru: "Субханаллах",
        translation_en: "Glory be to Allah",
        translation_ru: "Слава Аллаху",
        meaning: "Declaring Allah free of any imperfection",
        usage: "When amazed by something or during remembrance",
    },
    PhraseRow {
        key: "allahu_akbar",
        arabic: "الله أكبر",
        transliteration_en: "Allahu Akbar",
        transliteration_ru: "Аллаху Акбар",
        translation_en: "Allah is the Greatest",
        translation_ru: "Аллах велик",
        meaning: "Affirming that Allah is greater than everything",
        usage: "In prayer, in celebration, and in moments of awe",
    },
    PhraseRow {
        key: "la_ilaha_illallah",
        arabic: "لا إله إلا الله",
        transliteration_en: "La ilaha illallah",
        transliteration_ru: "Ля иляха илляллах",
        translation_en: "There is no god but Allah",
        translation_ru: "Нет бога кроме Аллаха",
        meaning: "The declaration of the oneness of Allah",
        usage: "During remembrance and as an affirmation of faith",
    },
    PhraseRow {
        key: "astaghfirullah",
        arabic: "أستغفر الله",
        transliteration_en: "Astaghfirullah",
        transliteration_ru: "Астагфируллах",
        translation_en: "I seek forgiveness from Allah",
        translation_ru: "Прошу прощения у Аллаха",
        meaning: "Asking Allah to forgive one's shortcomings",
        usage: "After a mistake or as daily remembrance",
    },
    PhraseRow {
        key: "inshallah",
        arabic: "إن شاء الله",
        transliteration_en: "InshaAllah",
        transliteration_ru: "ИншаАллах",
        translation_en: "If Allah wills",
        translation_ru: "Если пожелает Аллах",
        meaning: "Acknowledging that the future depends on the will of Allah",
        usage: "When speaking about plans or future events",
    },
    PhraseRow {
        key: "mashallah",
        arabic: "ما شاء الله",
        transliteration_en: "MashaAllah",
        transliteration_ru: "МашаАллах",
        translation_en: "What Allah has willed",
        translation_ru: "Как пожелал Аллах",
        meaning: "Recognising a blessing as coming from Allah",
        usage: "When praising someone or admiring something good",
    },
    PhraseRow {
        key: "jazakallahu_khairan",
        arabic: "جزاك الله خيراً",
        transliteration_en: "JazakAllahu Khairan",
        transliteration_ru: "Джазакаллаху хайран",
        translation_en: "May Allah reward you with good",
        translation_ru: "Да воздаст тебе Аллах добром",
        meaning: "Thanking someone by asking Allah to reward them",
        usage: "When someone helps you or does you a favour",
    },
    PhraseRow {
        key: "barakallahu_feek",
        arabic: "بارك الله فيك",
        transliteration_en: "BarakAllahu Feek",
        transliteration_ru: "Баракаллаху фик",
        translation_en: "May Allah bless you",
        translation_ru: "Да благословит тебя Аллах",
        meaning: "Asking Allah to place blessing in a person",
        usage: "As thanks or congratulations",
    },
    PhraseRow {
        key: "ameen",
        arabic: "آمين",
        transliteration_en: "Ameen",
        transliteration_ru: "Аминь",
        translation_en: "Amen",
        translation_ru: "Аминь",
        meaning: "Asking Allah to accept a supplication",
        usage: "After a dua, your own or someone else's",
    },
    PhraseRow {
        key: "la_hawla",
        arabic: "لا حول ولا قوة إلا بالله",
        transliteration_en: "La hawla wa la quwwata illa billah",
        transliteration_ru: "Ля хауля уа ля куввата илля биллях",
        translation_en: "There is no power except with Allah",
        translation_ru: "Нет силы кроме как у Аллаха",
        meaning: "Admitting that all strength comes from Allah",
        usage: "In hardship or when facing something overwhelming",
    },
    PhraseRow {
        key: "tawakkaltu",
        arabic: "توكلت على الله",
        transliteration_en: "Tawakkaltu 'ala Allah",
        transliteration_ru: "Таваккальту аля Аллах",
        translation_en: "I put my trust in Allah",
        translation_ru: "Я полагаюсь на Аллаха",
        meaning: "Placing reliance on Allah after taking the means",
        usage: "Before leaving home or making a decision",
    },
    PhraseRow {
        key: "rahimahu_allah",
        arabic: "رحمه الله",
        transliteration_en: "Rahimahu Allah",
        transliteration_ru: "Рахимаху Аллах",
        translation_en: "May Allah have mercy on him",
        translation_ru: "Да помилует его Аллах",
        meaning: "A prayer for mercy upon someone who has passed away",
        usage: "When mentioning a deceased person",
    },
    PhraseRow {
        key: "fi_amanillah",
        arabic: "في أمان الله",
        transliteration_en: "Fi Amanillah",
        transliteration_ru: "Фи аманиллях",
        translation_en: "In Allah's protection",
        translation_ru: "Под защитой Аллаха",
        meaning: "Entrusting someone to the protection of Allah",
        usage: "When saying goodbye",
    },
    PhraseRow {
        key: "taqabbal_allah",
        arabic: "تقبل الله",
        transliteration_en: "Taqabbal Allah",
        transliteration_ru: "ТакяббалАллах",
        translation_en: "May Allah accept",
        translation_ru: "Да примет Аллах",
        meaning: "Asking Allah to accept someone's worship",
        usage: "After prayer, fasting, or on Eid",
    },
    PhraseRow {
        key: "maa_salama",
        arabic: "مع السلامة",
        transliteration_en: "Ma'a Salama",
        transliteration_ru: "Маа саляма",
        translation_en: "Go in peace",
        translation_ru: "Иди с миром",
        meaning: "Wishing someone safety as they leave",
        usage: "When parting ways",
    },
    PhraseRow {
        key: "ya_allah",
        arabic: "يا الله",
        transliteration_en: "Ya Allah",
        transliteration_ru: "Я Аллах",
        translation_en: "O Allah",
        translation_ru: "О Аллах",
        meaning: "Calling directly upon Allah",
        usage: "At the start of a personal supplication",
    },
];
