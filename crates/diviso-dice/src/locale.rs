//! Supported locales and bilingual text.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A display locale. Diviso ships Arabic and English strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Arabic.
    Ar,
    /// English.
    #[default]
    En,
}

impl Locale {
    /// Parse a locale from a user-supplied tag such as `ar`, `en-US`, or `English`.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let primary = lower.split(['-', '_']).next().unwrap_or("");
        match primary {
            "ar" | "arabic" => Some(Self::Ar),
            "en" | "english" => Some(Self::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ar => write!(f, "ar"),
            Self::En => write!(f, "en"),
        }
    }
}

/// A string available in both supported locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Arabic text.
    pub ar: Cow<'static, str>,
    /// English text.
    pub en: Cow<'static, str>,
}

impl LocalizedText {
    /// Text backed by static strings, usable in `static` tables.
    pub const fn fixed(ar: &'static str, en: &'static str) -> Self {
        Self {
            ar: Cow::Borrowed(ar),
            en: Cow::Borrowed(en),
        }
    }

    /// Text built at runtime.
    pub fn owned(ar: String, en: String) -> Self {
        Self {
            ar: Cow::Owned(ar),
            en: Cow::Owned(en),
        }
    }

    /// The text for the given locale.
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ar => &self.ar,
            Locale::En => &self.en,
        }
    }
}
