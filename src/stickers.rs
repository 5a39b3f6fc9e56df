// SPDX-License-Identifier: PMPL-1.0-or-later

//! Saved stickers and the subset offered on the keyboard.
//!
//! Stickers are stored as one JSON array under `saved_stickers`, newest
//! first. Image bytes are base64 in JSON. The keyboard shows the stored
//! selection when there is one and every sticker otherwise.

use crate::store::{keys, SharedStore, StoreExt};
use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Stickers kept in the library; older ones are dropped past this.
pub const MAX_STICKERS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    pub id: String,
    pub prompt: String,
    pub content_type: String,
    #[serde(rename = "imageData", alias = "imageBytes", with = "base64_bytes")]
    pub image_bytes: Vec<u8>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Generator analysis, carried as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Value>,
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD
            .decode(text.trim())
            .map_err(serde::de::Error::custom)
    }
}

/// RFC 3339 on write. Reads also accept the host app's numeric form,
/// seconds since 2001-01-01T00:00:00Z.
mod timestamp {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    const REFERENCE_EPOCH: i64 = 978_307_200;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Text(DateTime<Utc>),
        Seconds(f64),
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Stored::deserialize(deserializer)? {
            Stored::Text(value) => Ok(value),
            Stored::Seconds(seconds) => {
                let out_of_range =
                    || <D::Error as serde::de::Error>::custom("timestamp out of range");
                let whole = seconds.floor();
                if !whole.is_finite() || whole.abs() >= i64::MAX as f64 {
                    return Err(out_of_range());
                }
                let nanos = ((seconds - whole) * 1e9) as u32;
                let secs = REFERENCE_EPOCH.checked_add(whole as i64).ok_or_else(out_of_range)?;
                Utc.timestamp_opt(secs, nanos).single().ok_or_else(out_of_range)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StickerStatistics {
    pub count: usize,
    pub total_bytes: usize,
    pub by_content_type: BTreeMap<String, usize>,
}

impl StickerStatistics {
    /// Total size as `"<n> KB"` or `"<n.n> MB"`.
    pub fn total_size(&self) -> String {
        format_size(self.total_bytes)
    }
}

pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1000.0;
    let bytes = bytes as f64;
    if bytes >= KB * KB {
        format!("{:.1} MB", bytes / (KB * KB))
    } else {
        format!("{} KB", (bytes / KB).ceil() as u64)
    }
}

/// Sticker records in the shared store.
pub struct StickerLibrary {
    store: SharedStore,
}

impl StickerLibrary {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All stickers, newest first. An undecodable list reads as empty.
    pub fn load_all(&self) -> Vec<Sticker> {
        if self.store.get(keys::SAVED_STICKERS).is_none() {
            return Vec::new();
        }
        self.store
            .get_json(keys::SAVED_STICKERS)
            .unwrap_or_else(|| {
                warn!("{} does not decode, treating library as empty", keys::SAVED_STICKERS);
                Vec::new()
            })
    }

    pub fn get(&self, id: &str) -> Option<Sticker> {
        self.load_all().into_iter().find(|sticker| sticker.id == id)
    }

    /// Add a sticker at the front of the library and to the keyboard selection.
    pub fn save_sticker(
        &self,
        prompt: &str,
        content_type: &str,
        image_bytes: Vec<u8>,
        analysis: Option<Value>,
    ) -> Result<Sticker> {
        if image_bytes.is_empty() {
            bail!("sticker image is empty");
        }
        let sticker = Sticker {
            id: new_sticker_id()?,
            prompt: prompt.to_string(),
            content_type: content_type.to_string(),
            image_bytes,
            created_at: Utc::now(),
            analysis,
        };

        let mut stickers = self.load_all();
        stickers.insert(0, sticker.clone());
        if stickers.len() > MAX_STICKERS {
            debug!("trimming sticker library from {} to {}", stickers.len(), MAX_STICKERS);
            stickers.truncate(MAX_STICKERS);
        }
        self.write_all(&stickers)?;

        let mut selection = self.keyboard_selection().unwrap_or_default();
        selection.insert(sticker.id.clone());
        self.set_keyboard_selection(&selection)?;

        info!(
            "saved sticker {} ({})",
            sticker.id,
            format_size(sticker.image_bytes.len())
        );
        Ok(sticker)
    }

    /// Remove one sticker; returns whether it existed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut stickers = self.load_all();
        let before = stickers.len();
        stickers.retain(|sticker| sticker.id != id);
        if stickers.len() == before {
            return Ok(false);
        }
        self.write_all(&stickers)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        self.write_all(&[])
    }

    pub fn statistics(&self) -> StickerStatistics {
        let stickers = self.load_all();
        let mut by_content_type = BTreeMap::new();
        for sticker in &stickers {
            *by_content_type.entry(sticker.content_type.clone()).or_insert(0) += 1;
        }
        StickerStatistics {
            count: stickers.len(),
            total_bytes: stickers.iter().map(|sticker| sticker.image_bytes.len()).sum(),
            by_content_type,
        }
    }

    /// Problems with stored stickers, one line each.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        for (index, sticker) in self.load_all().iter().enumerate() {
            if sticker.image_bytes.is_empty() {
                issues.push(format!("sticker {} ({}) has empty image data", index, sticker.id));
            }
            if sticker.prompt.trim().is_empty() {
                issues.push(format!("sticker {} ({}) has an empty prompt", index, sticker.id));
            }
        }
        issues
    }

    /// Whether the keyboard shows stickers at all. Defaults to on.
    pub fn is_enabled(&self) -> bool {
        self.store.get_bool(keys::STICKERS_ENABLED).unwrap_or(true)
    }

    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        self.store.set_bool(keys::STICKERS_ENABLED, enabled)
    }

    /// Ids chosen for the keyboard, `None` when no choice is stored.
    pub fn keyboard_selection(&self) -> Option<BTreeSet<String>> {
        self.store.get_json(keys::KEYBOARD_STICKER_SELECTION)
    }

    pub fn set_keyboard_selection(&self, ids: &BTreeSet<String>) -> Result<()> {
        self.store.set_json(keys::KEYBOARD_STICKER_SELECTION, ids)
    }

    /// Stickers the keyboard should show.
    pub fn keyboard_stickers(&self) -> Vec<Sticker> {
        if !self.is_enabled() {
            debug!("stickers disabled in keyboard");
            return Vec::new();
        }
        let stickers = self.load_all();
        match self.keyboard_selection() {
            Some(selected) => stickers
                .into_iter()
                .filter(|sticker| selected.contains(&sticker.id))
                .collect(),
            None => stickers,
        }
    }

    fn write_all(&self, stickers: &[Sticker]) -> Result<()> {
        self.store.set_json(keys::SAVED_STICKERS, &stickers)
    }
}

/// Random id in the upper-case 8-4-4-4-12 hex layout.
fn new_sticker_id() -> Result<String> {
    let mut bytes = [0u8; 16];
    getrandom::getrandom(&mut bytes).map_err(|err| anyhow!("generating sticker id: {}", err))?;
    let hex = hex::encode_upper(bytes);
    Ok(format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    ))
}
