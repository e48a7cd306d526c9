//! Locale codes and translated text fields.
//!
//! # Responsibility
//! - Hold one translation per locale code for a single text field.
//! - Describe which locales the application requires.
//!
//! # Invariants
//! - A missing locale entry is a defect, never an "untranslated" state.
//! - `SupportedLocales` is never empty and never holds duplicates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Locale code as it appears in content file names, e.g. `en` or `fr`.
pub type LocaleCode = String;

/// Locale codes required when no configuration overrides them.
pub const DEFAULT_SUPPORTED_LOCALES: &[&str] = &["en", "fr"];

/// Translations of one text field, keyed by locale code.
///
/// Serialized as a plain JSON object (`{"en": "...", "fr": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<LocaleCode, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the translation for `locale`, returning the replaced value.
    pub fn insert(
        &mut self,
        locale: impl Into<LocaleCode>,
        text: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(locale.into(), text.into())
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Returns locale codes in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns required locales that are absent or blank in this field.
    pub fn missing_locales<'a>(&self, supported: &'a SupportedLocales) -> Vec<&'a str> {
        supported
            .iter()
            .filter(|locale| {
                self.get(locale)
                    .map(|text| text.trim().is_empty())
                    .unwrap_or(true)
            })
            .collect()
    }
}

impl<L, T> FromIterator<(L, T)> for LocalizedText
where
    L: Into<LocaleCode>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(locale, text)| (locale.into(), text.into()))
                .collect(),
        )
    }
}

/// Ordered, non-empty set of locales every translated field must cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocales(Vec<LocaleCode>);

impl SupportedLocales {
    /// Builds a locale set after trimming and checking each entry.
    ///
    /// # Errors
    /// - `Empty` when no locale is given.
    /// - `BlankLocale` when an entry is blank after trim.
    /// - `DuplicateLocale` when an entry repeats.
    pub fn new<I, S>(locales: I) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<LocaleCode> = Vec::new();
        for locale in locales {
            let trimmed = locale.as_ref().trim();
            if trimmed.is_empty() {
                return Err(LocaleError::BlankLocale);
            }
            if normalized.iter().any(|existing| existing == trimmed) {
                return Err(LocaleError::DuplicateLocale(trimmed.to_string()));
            }
            normalized.push(trimmed.to_string());
        }
        if normalized.is_empty() {
            return Err(LocaleError::Empty);
        }
        Ok(Self(normalized))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.0.iter().any(|value| value == locale)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SupportedLocales {
    fn default() -> Self {
        Self(
            DEFAULT_SUPPORTED_LOCALES
                .iter()
                .map(|locale| locale.to_string())
                .collect(),
        )
    }
}

/// Supported-locale set construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    Empty,
    BlankLocale,
    DuplicateLocale(String),
}

impl Display for LocaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "supported locale set must not be empty"),
            Self::BlankLocale => write!(f, "supported locale must not be blank"),
            Self::DuplicateLocale(value) => write!(f, "supported locale is duplicated: {value}"),
        }
    }
}

impl Error for LocaleError {}

#[cfg(test)]
mod tests {
    use super::{LocaleError, LocalizedText, SupportedLocales};

    #[test]
    fn default_locales_are_english_and_french() {
        let locales = SupportedLocales::default();
        assert_eq!(locales.iter().collect::<Vec<_>>(), vec!["en", "fr"]);
    }

    #[test]
    fn rejects_duplicate_and_blank_locales() {
        assert_eq!(
            SupportedLocales::new(["en", " en "]).unwrap_err(),
            LocaleError::DuplicateLocale("en".to_string())
        );
        assert_eq!(
            SupportedLocales::new(["en", "  "]).unwrap_err(),
            LocaleError::BlankLocale
        );
        assert_eq!(
            SupportedLocales::new(Vec::<String>::new()).unwrap_err(),
            LocaleError::Empty
        );
    }

    #[test]
    fn missing_locales_counts_blank_text_as_missing() {
        let text: LocalizedText = [("en", "Hello"), ("fr", "   ")].into_iter().collect();
        let supported = SupportedLocales::new(["en", "fr", "ar"]).unwrap();
        assert_eq!(text.missing_locales(&supported), vec!["fr", "ar"]);
    }

    #[test]
    fn serializes_as_plain_object() {
        let text: LocalizedText = [("fr", "Bonjour"), ("en", "Hello")].into_iter().collect();
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, r#"{"en":"Hello","fr":"Bonjour"}"#);
    }
}
