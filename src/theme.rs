// SPDX-License-Identifier: PMPL-1.0-or-later

//! Keyboard color themes.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`
    pub fn hex(&self) -> String {
        format!("#{}", hex::encode_upper([self.r, self.g, self.b]))
    }
}

/// One entry of the fixed theme catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub color: Rgb,
    /// Darker shade for pressed and selected keys.
    pub pressed_color: Rgb,
    pub is_default: bool,
}

impl Theme {
    /// Key label color that stays readable on `color`.
    pub fn text_color(&self) -> Rgb {
        match self.id {
            "pure_white" | "golden_amber" | "warm_orange" => Rgb::BLACK,
            _ => Rgb::WHITE,
        }
    }
}

const THEMES: &[Theme] = &[
    Theme {
        id: "islamic_green",
        name: "Islamic Green",
        color: Rgb::new(0, 128, 0),
        pressed_color: Rgb::new(0, 102, 0),
        is_default: true,
    },
    Theme {
        id: "ocean_blue",
        name: "Ocean Blue",
        color: Rgb::new(0, 102, 204),
        pressed_color: Rgb::new(0, 77, 179),
        is_default: false,
    },
    Theme {
        id: "royal_purple",
        name: "Royal Purple",
        color: Rgb::new(102, 51, 204),
        pressed_color: Rgb::new(77, 26, 179),
        is_default: false,
    },
    Theme {
        id: "golden_amber",
        name: "Golden Amber",
        color: Rgb::new(204, 153, 0),
        pressed_color: Rgb::new(179, 128, 0),
        is_default: false,
    },
    Theme {
        id: "elegant_gray",
        name: "Elegant Gray",
        color: Rgb::new(102, 102, 102),
        pressed_color: Rgb::new(77, 77, 77),
        is_default: false,
    },
    Theme {
        id: "pure_white",
        name: "Pure White",
        color: Rgb::WHITE,
        pressed_color: Rgb::new(230, 230, 230),
        is_default: false,
    },
    Theme {
        id: "soft_pink",
        name: "Soft Pink",
        color: Rgb::new(230, 102, 153),
        pressed_color: Rgb::new(204, 77, 128),
        is_default: false,
    },
    Theme {
        id: "deep_teal",
        name: "Deep Teal",
        color: Rgb::new(0, 128, 128),
        pressed_color: Rgb::new(0, 102, 102),
        is_default: false,
    },
    Theme {
        id: "warm_orange",
        name: "Warm Orange",
        color: Rgb::new(230, 128, 26),
        pressed_color: Rgb::new(204, 102, 0),
        is_default: false,
    },
];

/// All themes, in picker order.
pub fn themes() -> &'static [Theme] {
    THEMES
}

pub fn find(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id == id)
}

/// The default theme, or the first one if none is marked.
pub fn default_theme() -> &'static Theme {
    THEMES
        .iter()
        .find(|theme| theme.is_default)
        .unwrap_or(&THEMES[0])
}

/// Resolve a stored id; stale or missing ids give the default theme.
pub fn resolve(id: Option<&str>) -> &'static Theme {
    id.and_then(find).unwrap_or_else(default_theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_default() {
        assert_eq!(themes().iter().filter(|theme| theme.is_default).count(), 1);
        assert_eq!(default_theme().id, "islamic_green");
    }

    #[test]
    fn stale_id_resolves_to_default() {
        assert_eq!(resolve(Some("neon_lime")).id, "islamic_green");
        assert_eq!(resolve(None).id, "islamic_green");
        assert_eq!(resolve(Some("deep_teal")).id, "deep_teal");
    }

    #[test]
    fn light_themes_use_dark_text() {
        assert_eq!(resolve(Some("pure_white")).text_color(), Rgb::BLACK);
        assert_eq!(resolve(Some("ocean_blue")).text_color(), Rgb::WHITE);
    }

    #[test]
    fn hex_rendering() {
        assert_eq!(default_theme().color.hex(), "#008000");
        assert_eq!(Rgb::WHITE.hex(), "#FFFFFF");
    }

    #[test]
    fn ids_are_unique() {
        for (i, theme) in themes().iter().enumerate() {
            assert!(themes()[i + 1..].iter().all(|other| other.id != theme.id));
        }
    }
}
