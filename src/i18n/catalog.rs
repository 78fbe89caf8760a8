//! String catalog
//!
//! Views name strings by [`TextKey`]; the catalog resolves them for a
//! language. Tables can be replaced per language, e.g. by tests that want
//! to see keys instead of prose.

use std::collections::HashMap;

use super::Language;

/// Every user-visible string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    AppName,
    AppTitle,
    LanguageLabel,
    // Login
    LoginSubtitle,
    UsernameLabel,
    PasswordLabel,
    LoginSubmit,
    LoginFailed,
    // Dashboard
    LoggedInAs,
    Logout,
    DashboardSubtitle,
    WorkcodeLabel,
    WorkcodePlaceholder,
    FromLabel,
    ToLabel,
    SubmitIdle,
    SubmitLoading,
    MissingDates,
    InvalidRange,
    FetchFailed,
    ResultTitle,
    ResultCommunication,
    ResultAllTypes,
    ResultDateRange,
    ResultCount,
    ResultCountSuffix,
    ErrorTitle,
    // Footer
    FooterBuiltBy,
}

impl TextKey {
    pub const ALL: [TextKey; 28] = [
        TextKey::AppName,
        TextKey::AppTitle,
        TextKey::LanguageLabel,
        TextKey::LoginSubtitle,
        TextKey::UsernameLabel,
        TextKey::PasswordLabel,
        TextKey::LoginSubmit,
        TextKey::LoginFailed,
        TextKey::LoggedInAs,
        TextKey::Logout,
        TextKey::DashboardSubtitle,
        TextKey::WorkcodeLabel,
        TextKey::WorkcodePlaceholder,
        TextKey::FromLabel,
        TextKey::ToLabel,
        TextKey::SubmitIdle,
        TextKey::SubmitLoading,
        TextKey::MissingDates,
        TextKey::InvalidRange,
        TextKey::FetchFailed,
        TextKey::ResultTitle,
        TextKey::ResultCommunication,
        TextKey::ResultAllTypes,
        TextKey::ResultDateRange,
        TextKey::ResultCount,
        TextKey::ResultCountSuffix,
        TextKey::ErrorTitle,
        TextKey::FooterBuiltBy,
    ];
}

/// One language's strings
pub type Table = HashMap<TextKey, String>;

/// Language → table lookup
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: HashMap<Language, Table>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Catalog with the bundled English and German tables
    pub fn builtin() -> Self {
        let mut tables = HashMap::new();
        tables.insert(Language::En, table(ENGLISH));
        tables.insert(Language::De, table(GERMAN));
        Self { tables }
    }

    /// Replace the table for one language
    pub fn with_table(mut self, language: Language, table: Table) -> Self {
        self.tables.insert(language, table);
        self
    }

    /// Resolve a key. Falls back to English, then to the key's debug name.
    pub fn text(&self, language: Language, key: TextKey) -> String {
        [language, Language::En]
            .iter()
            .find_map(|lang| self.tables.get(lang)?.get(&key))
            .cloned()
            .unwrap_or_else(|| format!("{:?}", key))
    }
}

fn table(entries: &[(TextKey, &str)]) -> Table {
    entries
        .iter()
        .map(|(key, text)| (*key, text.to_string()))
        .collect()
}

const ENGLISH: &[(TextKey, &str)] = &[
    (TextKey::AppName, "UCCP DataVision"),
    (TextKey::AppTitle, "UCCP Analytics"),
    (TextKey::LanguageLabel, "Language"),
    (TextKey::LoginSubtitle, "Please sign in"),
    (TextKey::UsernameLabel, "Username"),
    (TextKey::PasswordLabel, "Password"),
    (TextKey::LoginSubmit, "Log in"),
    (TextKey::LoginFailed, "Login failed"),
    (TextKey::LoggedInAs, "Logged in as"),
    (TextKey::Logout, "Log out"),
    (
        TextKey::DashboardSubtitle,
        "Analyze work code statistics for any date range",
    ),
    (TextKey::WorkcodeLabel, "Work Code (optional)"),
    (
        TextKey::WorkcodePlaceholder,
        "e.g. PCMO.OC1, KCPF.BD1, KCPF.BD15",
    ),
    (TextKey::FromLabel, "From date *"),
    (TextKey::ToLabel, "To date *"),
    (TextKey::SubmitIdle, "ANALYZE"),
    (TextKey::SubmitLoading, "Loading…"),
    (TextKey::MissingDates, "Please provide a start and end date."),
    (TextKey::InvalidRange, "Start date must be before end date."),
    (TextKey::FetchFailed, "Failed to load data."),
    (TextKey::ResultTitle, "Result"),
    (TextKey::ResultCommunication, "Communication:"),
    (TextKey::ResultAllTypes, "All types"),
    (TextKey::ResultDateRange, "Date range:"),
    (TextKey::ResultCount, "Sent count:"),
    (TextKey::ResultCountSuffix, "times"),
    (TextKey::ErrorTitle, "Error"),
    (TextKey::FooterBuiltBy, "Built by Hanisten Thivakaran"),
];

const GERMAN: &[(TextKey, &str)] = &[
    (TextKey::AppName, "UCCP DataVision"),
    (TextKey::AppTitle, "UCCP Analytics"),
    (TextKey::LanguageLabel, "Sprache"),
    (TextKey::LoginSubtitle, "Bitte melden Sie sich an"),
    (TextKey::UsernameLabel, "Benutzername"),
    (TextKey::PasswordLabel, "Passwort"),
    (TextKey::LoginSubmit, "Anmelden"),
    (TextKey::LoginFailed, "Login fehlgeschlagen"),
    (TextKey::LoggedInAs, "Angemeldet als"),
    (TextKey::Logout, "Abmelden"),
    (
        TextKey::DashboardSubtitle,
        "Analysieren Sie Work Code Statistiken für beliebige Zeiträume",
    ),
    (TextKey::WorkcodeLabel, "Work Code (optional)"),
    (
        TextKey::WorkcodePlaceholder,
        "z.B. PCMO.OC1, KCPF.BD1, KCPF.BD15",
    ),
    (TextKey::FromLabel, "Von Datum *"),
    (TextKey::ToLabel, "Bis Datum *"),
    (TextKey::SubmitIdle, "ANALYSIEREN"),
    (TextKey::SubmitLoading, "Wird geladen…"),
    (TextKey::MissingDates, "Bitte Start- und Enddatum eingeben."),
    (TextKey::InvalidRange, "Startdatum muss vor Enddatum liegen."),
    (TextKey::FetchFailed, "Fehler beim Laden der Daten."),
    (TextKey::ResultTitle, "Ergebnis"),
    (TextKey::ResultCommunication, "Kommunikation:"),
    (TextKey::ResultAllTypes, "Alle Typen"),
    (TextKey::ResultDateRange, "Zeitraum:"),
    (TextKey::ResultCount, "Anzahl versendet:"),
    (TextKey::ResultCountSuffix, "mal"),
    (TextKey::ErrorTitle, "Fehler"),
    (TextKey::FooterBuiltBy, "Erstellt von Hanisten Thivakaran"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_complete() {
        let catalog = Catalog::builtin();
        for lang in Language::ALL {
            let table = &catalog.tables[&lang];
            for key in TextKey::ALL {
                assert!(table.contains_key(&key), "{:?} missing {:?}", lang, key);
            }
        }
    }

    #[test]
    fn test_lookup_per_language() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.text(Language::En, TextKey::LoginFailed), "Login failed");
        assert_eq!(
            catalog.text(Language::De, TextKey::LoginFailed),
            "Login fehlgeschlagen"
        );
        assert_eq!(
            catalog.text(Language::De, TextKey::FooterBuiltBy),
            "Erstellt von Hanisten Thivakaran"
        );
    }

    #[test]
    fn test_fallback_to_english_then_key() {
        let catalog = Catalog::builtin().with_table(Language::De, Table::new());
        assert_eq!(catalog.text(Language::De, TextKey::Logout), "Log out");

        let empty = Catalog::builtin()
            .with_table(Language::De, Table::new())
            .with_table(Language::En, Table::new());
        assert_eq!(empty.text(Language::De, TextKey::Logout), "Logout");
    }
}
