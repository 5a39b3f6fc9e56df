// SPDX-License-Identifier: PMPL-1.0-or-later

//! Master list of duas.
//!
//! The Arabic translation slot of a dua is its Arabic text. Kazakh
//! titles and translations fall back to Russian before English.

use super::{DuaContent, EntryBody, LocalizedContentEntry, LocalizedText};
use crate::i18n::Language;

struct DuaRow {
    key: &'static str,
    icon: &'static str,
    arabic_text: &'static str,
    title_en: &'static str,
    title_ru: &'static str,
    title_kk: &'static str,
    title_ar: &'static str,
    translation_en: &'static str,
    translation_ru: &'static str,
    translation_kk: &'static str,
}

const REDIRECTS: &[(Language, Language)] = &[(Language::Kazakh, Language::Russian)];

pub(super) fn build() -> Vec<LocalizedContentEntry> {
    DUAS.iter()
        .map(|row| LocalizedContentEntry {
            key: row.key,
            body: EntryBody::Dua(DuaContent {
                icon: row.icon,
                arabic_text: row.arabic_text,
                title: LocalizedText::build(
                    &[
                        (Language::English, row.title_en),
                        (Language::Russian, row.title_ru),
                        (Language::Kazakh, row.title_kk),
                        (Language::Arabic, row.title_ar),
                    ],
                    REDIRECTS,
                ),
                translation: LocalizedText::build(
                    &[
                        (Language::English, row.translation_en),
                        (Language::Russian, row.translation_ru),
                        (Language::Kazakh, row.translation_kk),
                        (Language::Arabic, row.arabic_text),
                    ],
                    REDIRECTS,
                ),
            }),
        })
        .collect()
}

const DUAS: &[DuaRow] = &[
    DuaRow {
        key: "success",
        icon: "star.fill",
        arabic_text: "اللهم وفقه لما تحب وترضى",
        title_en: "Wish Success",
        title_ru: "Пожелать удачи",
        title_kk: "Табыс тілеу",
        title_ar: "تمني النجاح",
        translation_en: "O Allah, grant him success in what You love and are pleased with",
        translation_ru: "О Аллах, даруй ему успех в том, что Ты любишь и чем доволен",
        translation_kk: "Уа Аллаһ, оған Сен сүйетін және разы болатын нәрседе табыс бер",
    },
    DuaRow {
        key: "health",
        icon: "heart.fill",
        arabic_text: "اللهم اشفه شفاءً لا يغادر سقماً",
        title_en: "For Health",
        title_ru: "За здоровье",
        title_kk: "Денсаулық үшін",
        title_ar: "للصحة",
        translation_en: "O Allah, heal him with a healing that leaves no illness",
        translation_ru: "О Аллах, исцели его исцелением, после которого не будет болезни",
        translation_kk: "Уа Аллаһ, оны ауру қалдырмайтын сауықтырумен сауықтыр",
    },
    DuaRow {
        key: "blessing",
        icon: "hands.and.sparkles.fill",
        arabic_text: "اللهم بارك له ووفقه",
        title_en: "For Brother/Sister",
        title_ru: "За брата/сестру",
        title_kk: "Ағайын-бауырға",
        title_ar: "للأخ/الأخت",
        translation_en: "O Allah, bless him and grant him success",
        translation_ru: "О Аллах, благослови его и даруй успех",
        translation_kk: "Уа Аллаһ, оған баракат бер және табыс бер",
    },
    DuaRow {
        key: "start_task",
        icon: "play.fill",
        arabic_text: "بسم الله توكلت على الله",
        title_en: "Starting a Task",
        title_ru: "Начать дело",
        title_kk: "Іс бастау",
        title_ar: "بدء المهمة",
        translation_en: "In the name of Allah, I place my trust in Allah",
        translation_ru: "С именем Аллаха, я полагаюсь на Аллаха",
        translation_kk: "Аллаһтың атымен, мен Аллаһқа сенемін",
    },
    DuaRow {
        key: "comfort",
        icon: "shield.fill",
        arabic_text: "حسبنا الله ونعم الوكيل",
        title_en: "For Comfort",
        title_ru: "Успокоить",
        title_kk: "Тыныштандыру",
        title_ar: "للراحة",
        translation_en: "Allah is sufficient for us, and He is the best Disposer of affairs",
        translation_ru: "Доволен нам Аллах, и прекрасный Он Покровитель",
        translation_kk: "Бізге Аллаһ жеткілікті, Ол - ең жақсы қамқоршы",
    },
    DuaRow {
        key: "travel",
        icon: "car.fill",
        arabic_text: "اللهم إنا نسألك في سفرنا هذا البر والتقوى",
        title_en: "For Travel",
        title_ru: "В путь",
        title_kk: "Жолға шығу",
        title_ar: "للسفر",
        translation_en: "O Allah, we ask You for righteousness and piety in this journey",
        translation_ru: "О Аллах, даруй нам благочестие в этом пути",
        translation_kk: "Уа Аллаһ, осы сапарымызда бізден жақсылық пен тақуаны сұраймыз",
    },
    DuaRow {
        key: "forgiveness",
        icon: "square.fill",
        arabic_text: "أستغفر الله",
        title_en: "Seeking Forgiveness",
        title_ru: "Прощение",
        title_kk: "Кешірім сұрау",
        title_ar: "طلب المغفرة",
        translation_en: "I seek forgiveness from Allah",
        translation_ru: "Прошу прощения у Аллаха",
        translation_kk: "Аллаһтан кешірім сұраймын",
    },
    DuaRow {
        key: "beauty",
        icon: "sparkles",
        arabic_text: "ما شاء الله لا قوة إلا بالله",
        title_en: "Admiring Beauty",
        title_ru: "Красота (МашаАллах)",
        title_kk: "Сұлулық (МашаАллаһ)",
        title_ar: "إعجاب بالجمال",
        translation_en: "What Allah has willed. There is no power except with Allah",
        translation_ru: "То, что пожелал Аллах. Нет мощи и силы, кроме как у Аллаха",
        translation_kk: "Аллаһ қалағаны. Аллаһтан басқа күш жоқ",
    },
    DuaRow {
        key: "barakah",
        icon: "gift.fill",
        arabic_text: "اللهم بارك",
        title_en: "For Blessing",
        title_ru: "Баррака",
        title_kk: "Баракат үшін",
        title_ar: "للبركة",
        translation_en: "O Allah, grant blessing",
        translation_ru: "О Аллах, даруй благодать",
        translation_kk: "Уа Аллаһ, баракат бер",
    },
    DuaRow {
        key: "sisters",
        icon: "person.2.fill",
        arabic_text: "اللهم احفظ أخواتنا",
        title_en: "For Sisters",
        title_ru: "За сестер",
        title_kk: "Ағайын-қарындастарға",
        title_ar: "للأخوات",
        translation_en: "O Allah, protect our sisters",
        translation_ru: "О Аллах, оберегай наших сестёр",
        translation_kk: "Уа Аллаһ, біздің ағайын-қарындастарымызды қорға",
    },
    DuaRow {
        key: "knowledge",
        icon: "book.fill",
        arabic_text: "رب زدني علما",
        title_en: "Before Study",
        title_ru: "Перед учёбой",
        title_kk: "Оқу алдында",
        title_ar: "قبل الدراسة",
        translation_en: "My Lord, increase me in knowledge",
        translation_ru: "Господи, увеличь мои знания",
        translation_kk: "Раббым, менің білімімді арттыр",
    },
    DuaRow {
        key: "guidance",
        icon: "location.fill",
        arabic_text: "اللهم اهدنا الصراط المستقيم",
        title_en: "For Guidance",
        title_ru: "За наставление",
        title_kk: "Бағыт-бағдар үшін",
        title_ar: "للهداية",
        translation_en: "O Allah, guide us to the straight path",
        translation_ru: "О Аллах, веди нас прямым путём",
        translation_kk: "Уа Аллаһ, бізді түзу жолға бағыттай гөр",
    },
    DuaRow {
        key: "grief",
        icon: "drop.fill",
        arabic_text: "إنا لله وإنا إليه راجعون",
        title_en: "In Times of Grief",
        title_ru: "При горе",
        title_kk: "Қайғы кезінде",
        title_ar: "في أوقات الحزن",
        translation_en: "Indeed, we belong to Allah and to Him we shall return",
        translation_ru: "Поистине, мы принадлежим Аллаху и к Нему возвращаемся",
        translation_kk: "Шынында да, біз Аллаһқа тиістіміз және Оған қайтамыз",
    },
    DuaRow {
        key: "night",
        icon: "moon.fill",
        arabic_text: "باسمك اللهم أموت وأحيا",
        title_en: "Good Night",
        title_ru: "Спокойной ночи",
        title_kk: "Жақсы түн",
        title_ar: "ليلة سعيدة",
        translation_en: "In Your name, O Allah, I die and I live",
        translation_ru: "С Твоим именем, о Аллах, я умираю и живу",
        translation_kk: "Сенің атыңмен, уа Аллаһ, мен өлемін және тірі боламын",
    },
    DuaRow {
        key: "morning",
        icon: "sun.max.fill",
        arabic_text: "اللهم بك أصبحنا وبك أمسينا",
        title_en: "Morning",
        title_ru: "Утро",
        title_kk: "Таң",
        title_ar: "الصباح",
        translation_en: "O Allah, with You we begin our morning and with You we end our evening",
        translation_ru: "С Тобой мы встречаем утро и вечер",
        translation_kk: "Уа Аллаһ, Сенімен таңды және кешті қарсы аламыз",
    },
    DuaRow {
        key: "duaa_protection_blessing",
        icon: "shield.checkered",
        arabic_text: "اللَّهُمَّ إِنِّي أَعُوذُ بِكَ مِنْ زَوَالِ نِعْمَتِكَ، وَتَحَوُّلِ عَافِيَتِكَ، وَفُجَاءَةِ نِقْمَتِكَ، وَجَمِيعِ سَخَطِكَ",
        title_en: "Protection from Loss",
        title_ru: "Защита от потерь",
        title_kk: "Жоғалтудан қорғау",
        title_ar: "الحماية من الخسارة",
        translation_en: "Allahumma inni a'udhu bika min zawali ni'matika, wa tahawwuli 'afiyatika, wa fuja'ati niqmatika, wa jami'i sakhatika",
        translation_ru: "Аллахумма инни а'удзу бика мин завали ни'матика, ва тахаввули 'афийатика, ва фуджаати никматика, ва джами'и сахатика",
        translation_kk: "Аллахумма инни а'удзу бика мин завали ни'матика, ва тахаввули 'афийатика, ва фуджаати никматика, ва джами'и сахатика",
    },
    DuaRow {
        key: "may_allah_return_more",
        icon: "gift.circle.fill",
        arabic_text: "أَثَابَكَ اللَّهُ",
        title_en: "May Allah Reward You",
        title_ru: "Да воздаст Аллах",
        title_kk: "Аллаһ сізге сауап берсін",
        title_ar: "جزاك الله خيراً",
        translation_en: "Athabaka Allahu",
        translation_ru: "Асабака Аллаху",
        translation_kk: "Асабака Аллаху",
    },
    DuaRow {
        key: "duaa_against_evil_eye",
        icon: "eye.slash.fill",
        arabic_text: "اللَّهُمَّ بَارِكْ فِيهِ",
        title_en: "Against Evil Eye",
        title_ru: "От сглаза",
        title_kk: "Көз тигуден",
        title_ar: "ضد العين الحاسدة",
        translation_en: "Allahumma barik fihi",
        translation_ru: "Аллахумма барик фихи",
        translation_kk: "Аллахумма барик фихи",
    },
    DuaRow {
        key: "take_care",
        icon: "shield.lefthalf.filled",
        arabic_text: "بِأَمَانِ اللَّهِ",
        title_en: "Take Care",
        title_ru: "Береги себя",
        title_kk: "Өзіңді сақта",
        title_ar: "اعتن بنفسك",
        translation_en: "Bi amaani-llah",
        translation_ru: "Би амани Ллях",
        translation_kk: "Би амани Ллях",
    },
    DuaRow {
        key: "rain",
        icon: "cloud.rain.fill",
        arabic_text: "اللَّهُمَّ صَيِّبًا نَافِعًا",
        title_en: "Rain Dua",
        title_ru: "Дуа от дождя",
        title_kk: "Жаңбыр дұғасы",
        title_ar: "دعاء المطر",
        translation_en: "Allahumma sayyiban nafi'an",
        translation_ru: "Аллаахумма сойибэн наафи'а",
        translation_kk: "Аллаһумма сайибан нафиа",
    },
];
