//! Country reference list for the country and dial code selects

use crate::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

static BUILTIN_JSON: &str = include_str!("../data/countries.json");

/// Built-in country list, parsed on first use
pub static BUILTIN_CATALOG: Lazy<CountryCatalog> = Lazy::new(|| {
    CountryCatalog::from_json(BUILTIN_JSON).expect("Failed to parse built-in country list")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub dial_code: String,
    /// ISO 3166-1 alpha-2 code, unique per entry
    pub code: String,
    pub emoji: String,
}

impl Country {
    pub fn new(name: &str, dial_code: &str, code: &str, emoji: &str) -> Self {
        Self {
            name: name.to_string(),
            dial_code: dial_code.to_string(),
            code: code.to_string(),
            emoji: emoji.to_string(),
        }
    }

    /// Case-insensitive "starts with" match on the display name
    pub fn name_starts_with(&self, query: &str) -> bool {
        self.name.to_lowercase().starts_with(&query.to_lowercase())
    }
}

/// Ordered, read-only list of countries. Clones share the same entries.
#[derive(Debug, Clone)]
pub struct CountryCatalog {
    entries: Arc<[Country]>,
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self {
            entries: Arc::from(Vec::new()),
        }
    }
}

impl CountryCatalog {
    pub fn new(entries: Vec<Country>) -> CoreResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for country in &entries {
            if !seen.insert(country.code.as_str()) {
                return Err(CoreError::Catalog(format!(
                    "Duplicate country code {}",
                    country.code
                )));
            }
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        let entries: Vec<Country> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The catalog embedded in the crate
    pub fn builtin() -> Self {
        BUILTIN_CATALOG.clone()
    }

    pub fn all(&self) -> &[Country] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup by display name
    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        self.entries.iter().find(|c| c.name == name)
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        self.entries.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Entries whose name starts with `query`, in catalog order.
    /// An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<Country> {
        if query.is_empty() {
            return self.entries.to_vec();
        }

        self.entries
            .iter()
            .filter(|c| c.name_starts_with(query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CountryCatalog {
        CountryCatalog::new(vec![
            Country::new("Argentina", "+54", "AR", "🇦🇷"),
            Country::new("Canada", "+1", "CA", "🇨🇦"),
            Country::new("Armenia", "+374", "AM", "🇦🇲"),
            Country::new("United States", "+1", "US", "🇺🇸"),
        ])
        .unwrap()
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = CountryCatalog::builtin();
        assert!(catalog.len() > 200);

        let za = catalog.find_by_name("South Africa").unwrap();
        assert_eq!(za.dial_code, "+27");
        assert_eq!(za.code, "ZA");
    }

    #[test]
    fn test_filter_is_case_insensitive_prefix() {
        let catalog = sample();
        let names: Vec<_> = catalog.filter("ar").into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Argentina", "Armenia"]);

        // "States" appears inside a name but not at the start
        assert!(catalog.filter("States").is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = sample();
        assert_eq!(catalog.filter("").len(), 4);
    }

    #[test]
    fn test_shared_dial_codes_are_allowed() {
        let catalog = sample();
        assert_eq!(catalog.find_by_name("Canada").unwrap().dial_code, "+1");
        assert_eq!(catalog.find_by_code("us").unwrap().dial_code, "+1");
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let result = CountryCatalog::new(vec![
            Country::new("Argentina", "+54", "AR", "🇦🇷"),
            Country::new("Argentina Again", "+54", "AR", "🇦🇷"),
        ]);
        assert!(matches!(result, Err(CoreError::Catalog(_))));
    }

    #[test]
    fn test_exact_name_lookup() {
        let catalog = sample();
        assert!(catalog.find_by_name("argentina").is_none());
        assert!(catalog.find_by_name("Argentina").is_some());
    }
}
