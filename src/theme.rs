//! Colours and display strings.
//!
//! Every view takes its look from a [`Theme`], so the dark and light
//! variants (and the English and Spanish copies) share one set of components.

use crate::model::StatKind;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: u32,
    pub title_bar: u32,
    pub border: u32,
    pub text: u32,
    pub text_muted: u32,
    pub text_strong: u32,
    pub input_bg: u32,
    pub primary: u32,
    pub on_primary: u32,
    pub disabled: u32,
    pub card: u32,
    pub card_hover: u32,
    pub card_notable: u32,
    pub accent: u32,
    pub accent_deep: u32,
    pub notable: u32,
    pub notable_deep: u32,
    pub bar_track: u32,
    pub high_row: u32,
    pub dialog: u32,
    /// RGBA, drawn over the screen behind the detail dialog.
    pub backdrop: u32,
    pub error_bg: u32,
    pub error_fg: u32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: 0x1e1e2e,
            title_bar: 0x11111b,
            border: 0x313244,
            text: 0xcdd6f4,
            text_muted: 0x9399b2,
            text_strong: 0xffffff,
            input_bg: 0x313244,
            primary: 0x1976d2,
            on_primary: 0xffffff,
            disabled: 0x45475a,
            card: 0x1e1e1e,
            card_hover: 0x2a2a2a,
            card_notable: 0x252525,
            accent: 0x64b5f6,
            accent_deep: 0x1976d2,
            notable: 0xffd700,
            notable_deep: 0xffa500,
            bar_track: 0x333333,
            high_row: 0x2a2a2a,
            dialog: 0x1e1e1e,
            backdrop: 0x000000aa,
            error_bg: 0xffebee,
            error_fg: 0xb71c1c,
        }
    }

    pub fn light() -> Self {
        Self {
            background: 0xf5f5f5,
            title_bar: 0xffffff,
            border: 0xe0e0e0,
            text: 0x212121,
            text_muted: 0x616161,
            text_strong: 0x000000,
            input_bg: 0xffffff,
            primary: 0x1976d2,
            on_primary: 0xffffff,
            disabled: 0xbdbdbd,
            card: 0xffffff,
            card_hover: 0xeeeeee,
            card_notable: 0xfff8e1,
            accent: 0x1976d2,
            accent_deep: 0x0d47a1,
            notable: 0xffa000,
            notable_deep: 0xff6f00,
            bar_track: 0xe0e0e0,
            high_row: 0xeeeeee,
            dialog: 0xffffff,
            backdrop: 0x00000066,
            error_bg: 0xffebee,
            error_fg: 0xb71c1c,
        }
    }

    pub fn named(name: PaletteName) -> Self {
        match name {
            PaletteName::Dark => Self::dark(),
            PaletteName::Light => Self::light(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Strings {
    pub app_title: &'static str,
    pub search_placeholder: &'static str,
    pub search_button: &'static str,
    pub loading: &'static str,
    pub empty_results: &'static str,
    pub notable_badge: &'static str,
    pub stats_title: &'static str,
    pub close: &'static str,
    found_prefix: &'static str,
    found_suffix: &'static str,
    id_prefix: &'static str,
    stat_labels: [&'static str; 6],
}

impl Strings {
    pub fn english() -> Self {
        Self {
            app_title: "Superhero Explorer",
            search_placeholder: "Search heroes...",
            search_button: "Search",
            loading: "Loading...",
            empty_results: "No heroes found. Try a different search term.",
            notable_badge: "⭐ Featured Hero",
            stats_title: "Power Stats",
            close: "Close",
            found_prefix: "Found",
            found_suffix: "heroes",
            id_prefix: "Hero ID:",
            stat_labels: [
                "Intelligence",
                "Strength",
                "Speed",
                "Durability",
                "Power",
                "Combat",
            ],
        }
    }

    pub fn spanish() -> Self {
        Self {
            app_title: "Explorador de Superhéroes",
            search_placeholder: "Buscar héroes...",
            search_button: "Buscar",
            loading: "Cargando...",
            empty_results: "No se encontraron héroes. Prueba otro término.",
            notable_badge: "⭐ Héroe Destacado",
            stats_title: "Estadísticas de Poder",
            close: "Cerrar",
            found_prefix: "Encontrados",
            found_suffix: "héroes",
            id_prefix: "ID del Héroe:",
            stat_labels: [
                "Inteligencia",
                "Fuerza",
                "Velocidad",
                "Resistencia",
                "Poder",
                "Combate",
            ],
        }
    }

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::english(),
            Locale::Es => Self::spanish(),
        }
    }

    pub fn stat_label(&self, kind: StatKind) -> &'static str {
        self.stat_labels[kind as usize]
    }

    pub fn found_heroes(&self, count: usize) -> String {
        format!("{} {} {}", self.found_prefix, count, self.found_suffix)
    }

    pub fn hero_id(&self, id: &str) -> String {
        format!("{} {}", self.id_prefix, id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub strings: Strings,
}

impl Theme {
    pub fn new(palette: PaletteName, locale: Locale) -> Self {
        Self {
            palette: Palette::named(palette),
            strings: Strings::for_locale(locale),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(PaletteName::default(), Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_dark_english() {
        let theme = Theme::default();
        assert_eq!(theme.palette, Palette::dark());
        assert_eq!(theme.strings.app_title, "Superhero Explorer");
    }

    #[test]
    fn stat_labels_follow_locale() {
        let en = Strings::english();
        let es = Strings::spanish();
        assert_eq!(en.stat_label(StatKind::Durability), "Durability");
        assert_eq!(es.stat_label(StatKind::Durability), "Resistencia");
        assert_eq!(es.stat_label(StatKind::Combat), "Combate");
    }

    #[test]
    fn formatted_strings() {
        let en = Strings::english();
        assert_eq!(en.found_heroes(3), "Found 3 heroes");
        assert_eq!(en.hero_id("69"), "Hero ID: 69");
        assert_eq!(Strings::spanish().hero_id("69"), "ID del Héroe: 69");
    }

    #[test]
    fn palette_names_deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Names {
            palette: PaletteName,
            locale: Locale,
        }
        let names: Names = toml::from_str("palette = \"light\"\nlocale = \"es\"").unwrap();
        assert_eq!(names.palette, PaletteName::Light);
        assert_eq!(names.locale, Locale::Es);
    }
}
