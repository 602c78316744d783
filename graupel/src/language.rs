//! Language selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StemError;

/// The languages with a bundled rule program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Romanian
    Romanian,
    /// Russian
    Russian,
    /// Spanish
    Spanish,
    /// Turkish
    Turkish,
}

impl Language {
    /// The two-letter ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Romanian => "ro",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Turkish => "tr",
        }
    }

    /// Every bundled language.
    pub fn all() -> &'static [Language] {
        &[
            Language::Romanian,
            Language::Russian,
            Language::Spanish,
            Language::Turkish,
        ]
    }
}

impl FromStr for Language {
    type Err = StemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ro" | "romanian" => Ok(Language::Romanian),
            "ru" | "russian" => Ok(Language::Russian),
            "es" | "spanish" => Ok(Language::Spanish),
            "tr" | "turkish" => Ok(Language::Turkish),
            other => Err(StemError::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Romanian => "romanian",
            Language::Russian => "russian",
            Language::Spanish => "spanish",
            Language::Turkish => "turkish",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("ro".parse::<Language>().unwrap(), Language::Romanian);
        assert_eq!("Turkish".parse::<Language>().unwrap(), Language::Turkish);
        assert_eq!("ES".parse::<Language>().unwrap(), Language::Spanish);
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for lang in Language::all() {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), *lang);
        }
    }
}
