// SPDX-License-Identifier: PMPL-1.0-or-later

//! muslim-keyboard: inspect and edit the shared keyboard state
//!
//! Works on the same group store the keyboard extension reads, so every
//! change made here shows up on the keyboard after its next refresh.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use muslim_keyboard::config::Config;
use muslim_keyboard::content::{ContentCatalog, ContentCategory, EntryBody};
use muslim_keyboard::diagnostics;
use muslim_keyboard::i18n::{flag, language_name, native_name, Language};
use muslim_keyboard::layout::{self, IslamicMode, Plane, ShiftState};
use muslim_keyboard::preferences::PreferenceManager;
use muslim_keyboard::resolver::ArabicDisplayMode;
use muslim_keyboard::selection::SelectionStore;
use muslim_keyboard::stickers::{format_size, StickerLibrary};
use muslim_keyboard::store::{self, SharedStore};
use muslim_keyboard::theme;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "muslim-keyboard")]
#[command(version)]
#[command(about = "Inspect and edit the Muslim Keyboard shared state")]
#[command(long_about = None)]
struct Cli {
    /// Directory holding the shared group store
    #[arg(long, global = true, value_name = "DIR")]
    group_dir: Option<PathBuf>,

    /// Shared group identifier
    #[arg(long, global = true, value_name = "ID")]
    group_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List phrases with the text the keyboard shows and inserts
    Phrases {
        /// Resolve for this language code instead of the current one
        #[arg(short, long)]
        language: Option<String>,

        /// List the whole catalog, not only the selection
        #[arg(short, long)]
        all: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// List duas with the text the keyboard shows and inserts
    Duas {
        #[arg(short, long)]
        language: Option<String>,

        #[arg(short, long)]
        all: bool,

        #[arg(long)]
        json: bool,
    },

    /// Change which phrases or duas the keyboard shows
    Select {
        #[arg(value_enum)]
        category: CategoryArg,

        #[command(subcommand)]
        action: SelectAction,
    },

    /// Show or change keyboard languages
    Language {
        #[command(subcommand)]
        action: Option<LanguageAction>,
    },

    /// Arabic substitution and display mode
    Arabic {
        #[command(subcommand)]
        action: Option<ArabicAction>,
    },

    /// Keyboard color themes
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Saved stickers
    Stickers {
        #[command(subcommand)]
        action: Option<StickerAction>,
    },

    /// Print a key grid
    Layout {
        #[arg(value_enum, default_value = "letters")]
        plane: PlaneArg,

        #[arg(short, long)]
        language: Option<String>,

        /// Show letters shifted
        #[arg(long)]
        shift: bool,
    },

    /// Check the shared store for problems
    Doctor,
}

#[derive(Subcommand)]
enum SelectAction {
    /// Print the current selection
    Show,
    /// Replace the selection
    Set { keys: Vec<String> },
    /// Flip one entry in or out
    Toggle { key: String },
    /// Select every entry
    All,
    /// Clear the selection; the keyboard shows its defaults
    Clear,
}

#[derive(Subcommand)]
enum LanguageAction {
    Show,
    /// Switch to a language code
    Set { code: String },
    /// Move to the next enabled language
    Toggle,
    /// Replace the enabled languages
    Available { codes: Vec<String> },
}

#[derive(Subcommand)]
enum ArabicAction {
    Show,
    /// Insert Arabic phrases while this language is active (omit to disable)
    Phrases { code: Option<String> },
    /// Insert Arabic duas while this language is active (omit to disable)
    Duas { code: Option<String> },
    /// How content renders while the keyboard is in Arabic
    Mode {
        #[arg(value_enum)]
        mode: DisplayModeArg,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    List,
    Set { id: String },
}

#[derive(Subcommand)]
enum StickerAction {
    List,
    /// Save an image file as a sticker
    Add {
        file: PathBuf,
        #[arg(short, long, default_value = "")]
        prompt: String,
        #[arg(short, long, default_value = "phrase")]
        content_type: String,
    },
    Delete { id: String },
    Clear,
    Enable,
    Disable,
    Stats,
    /// Stickers the keyboard currently shows
    Keyboard,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CategoryArg {
    Phrases,
    Duas,
}

impl From<CategoryArg> for ContentCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Phrases => ContentCategory::Phrase,
            CategoryArg::Duas => ContentCategory::Dua,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum DisplayModeArg {
    Arabic,
    EnglishTranslation,
}

impl From<DisplayModeArg> for ArabicDisplayMode {
    fn from(arg: DisplayModeArg) -> Self {
        match arg {
            DisplayModeArg::Arabic => ArabicDisplayMode::Arabic,
            DisplayModeArg::EnglishTranslation => ArabicDisplayMode::EnglishTranslation,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum PlaneArg {
    Letters,
    Numbers,
    Symbols,
    Islamic,
}

impl From<PlaneArg> for Plane {
    fn from(arg: PlaneArg) -> Self {
        match arg {
            PlaneArg::Letters => Plane::Letters,
            PlaneArg::Numbers => Plane::Numbers,
            PlaneArg::Symbols => Plane::Symbols,
            PlaneArg::Islamic => Plane::Islamic,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::from_env().with_overrides(cli.group_dir, cli.group_id);
    let store = store::open_shared_store(&config);
    let catalog = ContentCatalog::builtin();

    match cli.command {
        Commands::Phrases {
            language,
            all,
            json,
        } => list_content(&store, catalog, ContentCategory::Phrase, language, all, json)?,

        Commands::Duas {
            language,
            all,
            json,
        } => list_content(&store, catalog, ContentCategory::Dua, language, all, json)?,

        Commands::Select { category, action } => {
            let category = ContentCategory::from(category);
            let selections = SelectionStore::new(store.clone(), catalog);
            let selection = match action {
                SelectAction::Show => selections.load(category),
                SelectAction::Set { keys } => {
                    selections.save(category, keys.iter().map(String::as_str))?
                }
                SelectAction::Toggle { key } => {
                    let selected = selections.toggle(category, &key)?;
                    println!(
                        "{} {}",
                        key.bold(),
                        if selected { "selected".green() } else { "removed".yellow() }
                    );
                    selections.load(category)
                }
                SelectAction::All => selections.select_all(category)?,
                SelectAction::Clear => selections.deselect_all(category)?,
            };
            let origin = if selection.is_default() {
                " (defaults)".dimmed().to_string()
            } else {
                String::new()
            };
            println!("{} {} selected{}", selection.len(), category, origin);
            for key in selection.keys() {
                println!("  - {}", key);
            }
        }

        Commands::Language { action } => {
            let mut preferences = PreferenceManager::load(store.clone());
            match action.unwrap_or(LanguageAction::Show) {
                LanguageAction::Show => {}
                LanguageAction::Set { code } => {
                    let language: Language = code.parse()?;
                    preferences.set_current_language(language)?;
                }
                LanguageAction::Toggle => {
                    preferences.toggle_language()?;
                }
                LanguageAction::Available { codes } => {
                    let languages = codes
                        .iter()
                        .map(|code| code.parse())
                        .collect::<Result<Vec<Language>>>()?;
                    preferences.set_available_languages(&languages)?;
                }
            }
            print_languages(&preferences);
        }

        Commands::Arabic { action } => {
            let mut preferences = PreferenceManager::load(store.clone());
            match action.unwrap_or(ArabicAction::Show) {
                ArabicAction::Show => {}
                ArabicAction::Phrases { code } => {
                    preferences.set_arabic_language_preference(parse_optional(code)?)?
                }
                ArabicAction::Duas { code } => {
                    preferences.set_arabic_dua_language_preference(parse_optional(code)?)?
                }
                ArabicAction::Mode { mode } => preferences.set_arabic_display_mode(mode.into())?,
            }
            let state = preferences.state();
            println!("Arabic phrases in: {}", describe_optional(state.arabic_language_preference));
            println!(
                "Arabic duas in:    {}",
                describe_optional(state.arabic_dua_language_preference)
            );
            println!("Display mode:      {}", state.arabic_display_mode.to_string().bold());
        }

        Commands::Theme { action } => {
            let mut preferences = PreferenceManager::load(store.clone());
            if let Some(ThemeAction::Set { id }) = &action {
                preferences.set_theme(id)?;
            }
            let selected = preferences.selected_theme();
            for theme in theme::themes() {
                let swatch = "  ".on_truecolor(theme.color.r, theme.color.g, theme.color.b);
                let marker = if theme.id == selected.id {
                    "*".green().bold()
                } else {
                    " ".normal()
                };
                println!(
                    "{} {} {:14} {:16} {}",
                    marker,
                    swatch,
                    theme.id,
                    theme.name,
                    theme.color.hex().dimmed()
                );
            }
        }

        Commands::Stickers { action } => {
            run_stickers(&store, action.unwrap_or(StickerAction::List))?
        }

        Commands::Layout {
            plane,
            language,
            shift,
        } => {
            let language = match language {
                Some(code) => code.parse()?,
                None => PreferenceManager::load(store.clone()).current_language(),
            };
            let shift = ShiftState {
                shift,
                caps_lock: false,
            };
            for row in layout::grid(plane.into(), language) {
                let labels: Vec<String> = row
                    .iter()
                    .map(|key| {
                        let label = layout::key_label(*key, language, IslamicMode::Phrases, shift);
                        format!("[{}]", label)
                    })
                    .collect();
                println!("{}", labels.join(" "));
            }
        }

        Commands::Doctor => diagnostics::run_self_diagnostics(&config, &store, catalog)?,
    }

    Ok(())
}

fn list_content(
    store: &SharedStore,
    catalog: &ContentCatalog,
    category: ContentCategory,
    language: Option<String>,
    all: bool,
    json: bool,
) -> Result<()> {
    let preferences = PreferenceManager::load(store.clone());
    let language = match language {
        Some(code) => code.parse()?,
        None => preferences.current_language(),
    };
    let resolver = preferences.resolver();
    let substitute = preferences.should_use_arabic_in(category, language);
    let entries: Vec<_> = if all {
        catalog.entries(category).iter().collect()
    } else {
        SelectionStore::new(store.clone(), catalog).selected_entries(category)
    };

    if json {
        let rows: Vec<serde_json::Value> = entries
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "key": entry.key,
                    "display": resolver.display_text(entry, language),
                    "insert": resolver.insert_text(entry, language, substitute),
                    "arabic": entry.arabic(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{} {} in {} {}",
        entries.len(),
        category,
        flag(language),
        native_name(language)
    );
    for entry in entries {
        println!(
            "\n  {} {}",
            resolver.display_text(entry, language).bold(),
            format!("[{}]", entry.key).dimmed()
        );
        println!("    inserts: {}", resolver.insert_text(entry, language, substitute));
        match &entry.body {
            EntryBody::Phrase(phrase) => println!("    {}", phrase.meaning.get(language).italic()),
            EntryBody::Dua(dua) => println!("    {}", dua.arabic_text),
        }
    }
    Ok(())
}

fn run_stickers(store: &SharedStore, action: StickerAction) -> Result<()> {
    let library = StickerLibrary::new(store.clone());
    match action {
        StickerAction::List => {
            for sticker in library.load_all() {
                println!(
                    "{}  {:10} {:>8}  {}",
                    sticker.id.dimmed(),
                    sticker.content_type,
                    format_size(sticker.image_bytes.len()),
                    sticker.prompt
                );
            }
        }
        StickerAction::Add {
            file,
            prompt,
            content_type,
        } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let prompt = if prompt.is_empty() {
                file.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default()
            } else {
                prompt
            };
            let sticker = library.save_sticker(&prompt, &content_type, bytes, None)?;
            println!("{} {}", "saved".green(), sticker.id);
        }
        StickerAction::Delete { id } => {
            if library.delete(&id)? {
                println!("{} {}", "deleted".yellow(), id);
            } else {
                println!("no sticker {}", id);
            }
        }
        StickerAction::Clear => library.clear()?,
        StickerAction::Enable => library.set_enabled(true)?,
        StickerAction::Disable => library.set_enabled(false)?,
        StickerAction::Stats => {
            let stats = library.statistics();
            println!("Stickers: {} ({})", stats.count, stats.total_size());
            for (content_type, count) in &stats.by_content_type {
                println!("  {:12} {}", content_type, count);
            }
        }
        StickerAction::Keyboard => {
            let shown = library.keyboard_stickers();
            if !library.is_enabled() {
                println!("{}", "stickers are disabled in the keyboard".yellow());
            }
            for sticker in shown {
                println!("{}  {}", sticker.id.dimmed(), sticker.prompt);
            }
        }
    }
    Ok(())
}

fn print_languages(preferences: &PreferenceManager) {
    let current = preferences.current_language();
    for language in preferences.available_languages() {
        let line = format!(
            "{} {} ({}, {})",
            flag(*language),
            native_name(*language),
            language_name(*language),
            language.code()
        );
        if *language == current {
            println!("* {}", line.green().bold());
        } else {
            println!("  {}", line);
        }
    }
}

fn parse_optional(code: Option<String>) -> Result<Option<Language>> {
    code.map(|code| code.parse()).transpose()
}

fn describe_optional(language: Option<Language>) -> String {
    match language {
        Some(language) => format!("{} {}", flag(language), native_name(language)),
        None => "off".dimmed().to_string(),
    }
}
