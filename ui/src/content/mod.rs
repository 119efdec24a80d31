//! Static site content: theme records and their bilingual display fields.

mod loader;

pub use loader::{
    apply_load, featured, load_themes, parse_themes, resolve_image_path, LoadError, Theme,
    FEATURED_THEME_COUNT,
};

/// Active display language. Supplied by the surrounding app (the web crate
/// provides a language-code context signal); this crate only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// Map a BCP-47 tag (`ja`, `ja-JP`, `en-US`, ...) onto the enum.
    /// Anything that is not Japanese renders as English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        if primary.eq_ignore_ascii_case("ja") {
            Self::Ja
        } else {
            Self::En
        }
    }

    /// Canonical tag for this locale, matching the embedded FTL folders.
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Ja => "ja-JP",
        }
    }
}

impl Theme {
    /// Display name for `locale`. Total: an empty field for the requested
    /// locale falls back to the other language, English preferred. A record
    /// with both names empty (malformed) yields the empty string.
    pub fn localized_name(&self, locale: Locale) -> &str {
        let (preferred, fallback) = match locale {
            Locale::Ja => (&self.name_ja, &self.name_en),
            Locale::En => (&self.name_en, &self.name_ja),
        };
        if preferred.is_empty() {
            fallback
        } else {
            preferred
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(name_en: &str, name_ja: &str) -> Theme {
        Theme {
            id: "wireless".to_string(),
            name_en: name_en.to_string(),
            name_ja: name_ja.to_string(),
            thumbnail: "wireless.png".to_string(),
        }
    }

    #[test]
    fn locale_tag_round_trip() {
        assert_eq!(Locale::from_tag("ja-JP"), Locale::Ja);
        assert_eq!(Locale::from_tag("ja"), Locale::Ja);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag(Locale::Ja.tag()), Locale::Ja);
        assert_eq!(Locale::from_tag(Locale::En.tag()), Locale::En);
    }

    #[test]
    fn unknown_tags_render_as_english() {
        assert_eq!(Locale::from_tag("fr-FR"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn localized_name_picks_the_requested_language() {
        let record = theme("Wireless Networks", "無線ネットワーク");
        assert_eq!(record.localized_name(Locale::En), "Wireless Networks");
        assert_eq!(record.localized_name(Locale::Ja), "無線ネットワーク");
    }

    #[test]
    fn localized_name_is_total_for_wellformed_records() {
        let record = theme("Wireless Networks", "無線ネットワーク");
        for locale in [Locale::En, Locale::Ja] {
            assert!(!record.localized_name(locale).is_empty());
        }
    }

    #[test]
    fn empty_field_falls_back_to_the_other_language() {
        let missing_ja = theme("Wireless Networks", "");
        assert_eq!(missing_ja.localized_name(Locale::Ja), "Wireless Networks");

        let missing_en = theme("", "無線ネットワーク");
        assert_eq!(missing_en.localized_name(Locale::En), "無線ネットワーク");
    }
}
