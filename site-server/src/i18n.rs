//! Translations
//!
//! Typed translation resolution with a fixed schema per locale. The catalogs
//! are embedded JSON, flattened to dot-keys and validated at startup:
//! missing keys, unknown keys or type mismatches fail the boot instead of
//! surfacing at some call site months later. After validation `get` and
//! `get_list` cannot fail; an unknown key falls back to the key itself.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SCHEMA
// ============================================================================

/// Every locale must provide exactly these string keys
const REQUIRED_STRINGS: &[&str] = &[
    "scan.headline",
    "scan.cta",
    "plans.s.name",
    "plans.s.tagline",
    "plans.m.name",
    "plans.m.tagline",
    "plans.l.name",
    "plans.l.tagline",
];

/// Every locale must provide exactly these list keys
const REQUIRED_LISTS: &[&str] = &[
    "plans.s.features",
    "plans.m.features",
    "plans.l.features",
    "testimonials.quotes",
    "testimonials.authors",
];

const EN_JSON: &str = include_str!("../locales/en.json");
const DE_JSON: &str = include_str!("../locales/de.json");

const EMPTY_LIST: &[String] = &[];

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("locale {locale}: catalog is not valid JSON: {source}")]
    Parse {
        locale: String,
        source: serde_json::Error,
    },

    #[error("locale {locale}: missing required key {key}")]
    MissingKey { locale: String, key: String },

    #[error("locale {locale}: unknown key {key}")]
    UnknownKey { locale: String, key: String },

    #[error("locale {locale}: key {key} has the wrong type")]
    WrongType { locale: String, key: String },
}

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Default)]
struct Catalog {
    strings: HashMap<String, String>,
    lists: HashMap<String, Vec<String>>,
}

/// All loaded locales plus the configured default
#[derive(Debug)]
pub struct Translations {
    locales: HashMap<String, Catalog>,
    default_locale: String,
}

impl Translations {
    /// Load and validate the embedded catalogs.
    pub fn load(default_locale: &str) -> Result<Self, I18nError> {
        let mut locales = HashMap::new();
        for (locale, raw) in [("en", EN_JSON), ("de", DE_JSON)] {
            locales.insert(locale.to_string(), load_catalog(locale, raw)?);
        }

        let default_locale = if locales.contains_key(default_locale) {
            default_locale.to_string()
        } else {
            tracing::warn!("Unknown default locale {:?}, using en", default_locale);
            "en".to_string()
        };

        Ok(Self {
            locales,
            default_locale,
        })
    }

    /// Resolve a requested locale, falling back to the default.
    pub fn resolve_locale<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(locale) if self.locales.contains_key(locale) => locale,
            _ => &self.default_locale,
        }
    }

    /// Look up a string key. Unknown keys return the key itself.
    pub fn get<'a>(&'a self, locale: &str, key: &'a str) -> &'a str {
        self.catalog(locale)
            .and_then(|c| c.strings.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Look up a list key. Unknown keys return an empty slice.
    pub fn get_list(&self, locale: &str, key: &str) -> &[String] {
        self.catalog(locale)
            .and_then(|c| c.lists.get(key))
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_LIST)
    }

    pub fn available_locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    fn catalog(&self, locale: &str) -> Option<&Catalog> {
        self.locales
            .get(locale)
            .or_else(|| self.locales.get(&self.default_locale))
    }
}

// ============================================================================
// LOADING & VALIDATION
// ============================================================================

fn load_catalog(locale: &str, raw: &str) -> Result<Catalog, I18nError> {
    let root: Value = serde_json::from_str(raw).map_err(|source| I18nError::Parse {
        locale: locale.to_string(),
        source,
    })?;

    let mut catalog = Catalog::default();
    flatten(locale, "", &root, &mut catalog)?;

    for key in REQUIRED_STRINGS {
        if !catalog.strings.contains_key(*key) {
            return Err(I18nError::MissingKey {
                locale: locale.to_string(),
                key: (*key).to_string(),
            });
        }
    }
    for key in REQUIRED_LISTS {
        if !catalog.lists.contains_key(*key) {
            return Err(I18nError::MissingKey {
                locale: locale.to_string(),
                key: (*key).to_string(),
            });
        }
    }

    Ok(catalog)
}

/// Walk the nested JSON and collect dot-keyed leaves, checking each against
/// the schema as it appears.
fn flatten(locale: &str, prefix: &str, value: &Value, out: &mut Catalog) -> Result<(), I18nError> {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                flatten(locale, &key, child, out)?;
            }
            Ok(())
        }
        Value::String(s) => {
            if !REQUIRED_STRINGS.contains(&prefix) {
                return Err(unknown_or_wrong_type(locale, prefix, REQUIRED_LISTS));
            }
            out.strings.insert(prefix.to_string(), s.clone());
            Ok(())
        }
        Value::Array(items) => {
            if !REQUIRED_LISTS.contains(&prefix) {
                return Err(unknown_or_wrong_type(locale, prefix, REQUIRED_STRINGS));
            }
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => list.push(s.clone()),
                    _ => {
                        return Err(I18nError::WrongType {
                            locale: locale.to_string(),
                            key: prefix.to_string(),
                        })
                    }
                }
            }
            out.lists.insert(prefix.to_string(), list);
            Ok(())
        }
        _ => Err(I18nError::WrongType {
            locale: locale.to_string(),
            key: prefix.to_string(),
        }),
    }
}

/// A leaf outside its schema table is either a key the schema never heard of
/// or a known key carrying the other type.
fn unknown_or_wrong_type(locale: &str, key: &str, other_table: &[&str]) -> I18nError {
    if other_table.contains(&key) {
        I18nError::WrongType {
            locale: locale.to_string(),
            key: key.to_string(),
        }
    } else {
        I18nError::UnknownKey {
            locale: locale.to_string(),
            key: key.to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalogs_pass_validation() {
        let translations = Translations::load("en").expect("embedded catalogs are valid");
        assert_eq!(translations.available_locales(), vec!["de", "en"]);
    }

    #[test]
    fn test_every_required_key_resolves_in_every_locale() {
        let translations = Translations::load("en").unwrap();
        for locale in ["en", "de"] {
            for key in REQUIRED_STRINGS {
                assert_ne!(translations.get(locale, key), *key, "{} unresolved", key);
            }
            for key in REQUIRED_LISTS {
                assert!(
                    !translations.get_list(locale, key).is_empty(),
                    "{} empty in {}",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn test_testimonial_lists_are_parallel() {
        let translations = Translations::load("en").unwrap();
        for locale in ["en", "de"] {
            assert_eq!(
                translations.get_list(locale, "testimonials.quotes").len(),
                translations.get_list(locale, "testimonials.authors").len()
            );
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let translations = Translations::load("en").unwrap();
        assert_eq!(translations.get("en", "no.such.key"), "no.such.key");
        assert!(translations.get_list("en", "no.such.list").is_empty());
    }

    #[test]
    fn test_unknown_locale_falls_back_to_default() {
        let translations = Translations::load("en").unwrap();
        assert_eq!(translations.resolve_locale(Some("fr")), "en");
        assert_eq!(translations.resolve_locale(Some("de")), "de");
        assert_eq!(translations.resolve_locale(None), "en");
        assert_eq!(
            translations.get("fr", "plans.s.name"),
            translations.get("en", "plans.s.name")
        );
    }

    #[test]
    fn test_missing_key_fails_load() {
        let err = load_catalog("xx", r#"{"scan": {"headline": "hi"}}"#).unwrap_err();
        assert!(matches!(err, I18nError::MissingKey { .. }));
    }

    #[test]
    fn test_unknown_key_fails_load() {
        let err = load_catalog("xx", r#"{"scan": {"subtitle": "hi"}}"#).unwrap_err();
        assert!(matches!(err, I18nError::UnknownKey { .. }));
    }

    #[test]
    fn test_type_mismatch_fails_load() {
        let err = load_catalog("xx", r#"{"scan": {"headline": ["a", "b"]}}"#).unwrap_err();
        assert!(matches!(err, I18nError::WrongType { .. }));

        let err = load_catalog("xx", r#"{"plans": {"s": {"features": "one"}}}"#).unwrap_err();
        assert!(matches!(err, I18nError::WrongType { .. }));
    }
}
