use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use super::{normalize_locale, primary_language, Localizer};
use crate::error::{Error, Result};

/// Tables compiled into the crate, one JSON object of key -> template each
const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("strings/en.json")),
    ("de", include_str!("strings/de.json")),
    ("ru", include_str!("strings/ru.json")),
    ("uk", include_str!("strings/uk.json")),
];

type StringTable = HashMap<String, String>;

/// On-disk layout of a table file: locale -> key -> template
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct CatalogFile {
    tables: HashMap<String, StringTable>,
}

/// Immutable translation tables keyed by locale.
///
/// Lookup tries the full locale (`pt-br`), then its language (`pt`). Loaded
/// once and only read afterwards, so it can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<String, StringTable>,
}

impl Catalog {
    /// An empty catalog; every lookup falls back to the key
    pub fn new() -> Self {
        Self::default()
    }

    /// The tables shipped with the crate, parsed on first use
    pub fn bundled() -> &'static Catalog {
        static BUNDLED_CATALOG: OnceLock<Catalog> = OnceLock::new();
        BUNDLED_CATALOG.get_or_init(Self::parse_bundled)
    }

    fn parse_bundled() -> Catalog {
        let mut catalog = Catalog::new();

        for (locale, json) in BUNDLED {
            match serde_json::from_str::<StringTable>(json) {
                Ok(table) => catalog.insert_table(locale, table),
                // Keys still render untranslated, so keep going
                Err(e) => warn!(locale = %locale, error = %e, "Skipping bundled string table"),
            }
        }

        catalog
    }

    /// Parse tables from JSON of the form `{ "ru": { "Yesterday": "Вчера" } }`
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut catalog = Catalog::new();
        for (locale, table) in file.tables {
            catalog.insert_table(&locale, table);
        }

        Ok(catalog)
    }

    /// Read tables from a JSON file, see [`Catalog::from_json`]
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::CatalogNotFound(path.to_path_buf()));
        }

        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        debug!(path = ?path, locales = ?catalog.locales(), "Loaded string tables");

        Ok(catalog)
    }

    /// Add entries for a locale; existing keys are overwritten
    pub fn insert_table(&mut self, locale: &str, table: HashMap<String, String>) {
        self.tables
            .entry(normalize_locale(locale))
            .or_default()
            .extend(table);
    }

    /// Lay `other` over this catalog, its entries winning on conflicts
    pub fn merge(&mut self, other: Catalog) {
        for (locale, table) in other.tables {
            self.insert_table(&locale, table);
        }
    }

    pub fn with(mut self, other: Catalog) -> Self {
        self.merge(other);
        self
    }

    /// Locales with at least one table, sorted
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }
}

impl Localizer for Catalog {
    fn lookup(&self, key: &str, locale: &str) -> Option<&str> {
        let exact = normalize_locale(locale);
        let language = primary_language(locale);

        [exact, language]
            .iter()
            .filter_map(|locale| self.tables.get(locale))
            .find_map(|table| table.get(key))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_tables_parse() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.locales(), vec!["de", "en", "ru", "uk"]);
    }

    #[test]
    fn test_bundled_ru_has_all_plural_forms() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.lookup("%d __years ago", "ru"), Some("%d год назад"));
        assert_eq!(catalog.lookup("%d _years ago", "ru"), Some("%d года назад"));
        assert_eq!(catalog.lookup("%d years ago", "ru"), Some("%d лет назад"));
        assert_eq!(catalog.lookup("Yesterday", "uk"), Some("Вчора"));
    }

    #[test]
    fn test_lookup_falls_back_to_language() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.lookup("Tomorrow", "ru_RU.UTF-8"), Some("Завтра"));
        assert_eq!(catalog.lookup("Tomorrow", "de-AT"), Some("Morgen"));
    }

    #[test]
    fn test_localize_falls_back_to_key() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.localize("Last month", "fr"), "Last month");
        assert_eq!(catalog.localize("No such phrase", "ru"), "No such phrase");
        assert_eq!(Catalog::new().localize("Just now", "de"), "Just now");
    }

    #[test]
    fn test_region_table_wins_over_language() {
        let catalog = Catalog::bundled().clone().with(
            Catalog::from_json(r#"{ "de_CH": { "Yesterday": "Gestern (CH)" } }"#).unwrap(),
        );
        assert_eq!(catalog.localize("Yesterday", "de-CH"), "Gestern (CH)");
        assert_eq!(catalog.localize("Yesterday", "de"), "Gestern");
        // Keys missing from the region table still come from the language table
        assert_eq!(catalog.localize("Tomorrow", "de-CH"), "Morgen");
    }

    #[test]
    fn test_merge_overrides_entries() {
        let mut catalog = Catalog::bundled().clone();
        catalog.merge(Catalog::from_json(r#"{ "ru": { "Just now": "Сейчас" } }"#).unwrap());
        assert_eq!(catalog.localize("Just now", "ru"), "Сейчас");
        assert_eq!(catalog.localize("Right now", "ru"), "Прямо сейчас");
    }

    #[test]
    fn test_from_json_rejects_malformed_tables() {
        let err = Catalog::from_json(r#"{ "ru": ["not", "a", "table"] }"#).unwrap_err();
        assert!(matches!(err, Error::CatalogParse(_)));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "fr": {{ "Yesterday": "Hier" }} }}"#).unwrap();

        let catalog = Catalog::load_file(file.path()).unwrap();
        assert_eq!(catalog.locales(), vec!["fr"]);
        assert_eq!(catalog.localize("Yesterday", "fr_FR"), "Hier");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::CatalogNotFound(_)));
    }
}
