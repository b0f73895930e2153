// src/domain/localized.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeMap;

/// Display names keyed by language code (`en`, `ru`, `kk`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedName(BTreeMap<String, String>);

impl LocalizedName {
    pub fn new(entries: BTreeMap<String, String>) -> DomainResult<Self> {
        if entries.is_empty() {
            return Err(DomainError::Validation(
                "name must contain at least one language".into(),
            ));
        }

        let mut normalized = BTreeMap::new();
        for (lang, name) in entries {
            let lang = lang.trim().to_ascii_lowercase();
            if !(2..=8).contains(&lang.len()) || !lang.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(DomainError::Validation(format!(
                    "invalid language code '{lang}'"
                )));
            }
            let name = name.trim();
            if name.is_empty() {
                return Err(DomainError::Validation(format!(
                    "name for language '{lang}' cannot be empty"
                )));
            }
            normalized.insert(lang, name.to_string());
        }

        Ok(Self(normalized))
    }

    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn normalizes_language_codes() {
        let name = LocalizedName::new(map(&[("EN", " Economy "), ("ru", "Экономика")])).unwrap();
        assert_eq!(name.get("en"), Some("Economy"));
        assert_eq!(name.get("ru"), Some("Экономика"));
    }

    #[test]
    fn rejects_empty_and_malformed_entries() {
        assert!(LocalizedName::new(BTreeMap::new()).is_err());
        assert!(LocalizedName::new(map(&[("e", "x")])).is_err());
        assert!(LocalizedName::new(map(&[("en-1", "x")])).is_err());
        assert!(LocalizedName::new(map(&[("en", "  ")])).is_err());
    }
}
