//! Languages

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while parsing a language tag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    /// The tag is not one of `en`, `es` or `it`.
    #[error("unknown language tag: {0}")]
    Unknown(String),
}

/// Supported storefront language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,

    /// Spanish
    Es,

    /// Italian
    It,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::It];

    /// The language tag, e.g. `"en"`.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::It => "it",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "it" => Ok(Language::It),
            _ => Err(LanguageError::Unknown(s.trim().to_string())),
        }
    }
}

/// A value translated into every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Localized<T> {
    /// English value
    pub en: T,

    /// Spanish value
    pub es: T,

    /// Italian value
    pub it: T,
}

impl<T> Localized<T> {
    /// Create a localized value from its three translations.
    pub fn new(en: T, es: T, it: T) -> Self {
        Self { en, es, it }
    }

    /// Get the value for the given language.
    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::Es => &self.es,
            Language::It => &self.it,
        }
    }

    /// Transform every translation with the same function.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Localized<U> {
        Localized {
            en: f(self.en),
            es: f(self.es),
            it: f(self.it),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_known_tags() -> TestResult {
        assert_eq!("en".parse::<Language>()?, Language::En);
        assert_eq!(" ES ".parse::<Language>()?, Language::Es);
        assert_eq!("it".parse::<Language>()?, Language::It);

        Ok(())
    }

    #[test]
    fn rejects_unknown_tag() {
        let result = "fr".parse::<Language>();

        assert_eq!(result, Err(LanguageError::Unknown("fr".to_string())));
    }

    #[test]
    fn display_round_trips_through_tag() -> TestResult {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>()?, lang);
        }

        Ok(())
    }

    #[test]
    fn localized_get_picks_language() {
        let greeting = Localized::new("hello", "hola", "ciao");

        assert_eq!(*greeting.get(Language::En), "hello");
        assert_eq!(*greeting.get(Language::Es), "hola");
        assert_eq!(*greeting.get(Language::It), "ciao");
    }

    #[test]
    fn localized_map_applies_to_all() {
        let lengths = Localized::new("a", "bb", "ccc").map(str::len);

        assert_eq!(lengths, Localized::new(1, 2, 3));
    }
}
