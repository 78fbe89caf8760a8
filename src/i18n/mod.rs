//! Localization
//!
//! Supported languages, the string catalog, and locale-aware formatting of
//! dates and counts. Language only changes what is displayed, never what is
//! sent to the backend.

mod catalog;
mod format;

pub use catalog::{Catalog, Table, TextKey};
pub use format::{format_count, format_long_date, format_range};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UI language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    /// Code persisted in storage
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Name shown in the language switcher
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| format!("unsupported language '{}' (expected en or de)", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("de"), Some(Language::De));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!("DE".parse::<Language>(), Ok(Language::De));
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
