//! Display language selector
//!
//! Passed explicitly to everything that produces user-facing text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
    Uk,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Ru, Language::Uk]
    }

    /// ISO-style language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Uk => "uk",
        }
    }

    /// Route segment used in share links
    pub fn path(&self) -> &'static str {
        match self {
            Language::En => "/en",
            Language::Ru => "/ru",
            Language::Uk => "/ua",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::all()
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Language for a route segment such as `/ua`
    pub fn try_from_path(path: &str) -> Option<Language> {
        Language::all().iter().copied().find(|l| l.path() == path)
    }

    pub fn next(&self) -> Language {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::Uk,
            Language::Uk => Language::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| format!("unknown language '{}' (expected en, ru or uk)", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_paths() {
        assert_eq!(Language::Uk.code(), "uk");
        assert_eq!(Language::Uk.path(), "/ua");
        assert_eq!(Language::from_code("RU"), Some(Language::Ru));
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn test_try_from_path() {
        assert_eq!(Language::try_from_path("/ua"), Some(Language::Uk));
        assert_eq!(Language::try_from_path("/en"), Some(Language::En));
        assert_eq!(Language::try_from_path("/"), None);
        assert_eq!(Language::try_from_path("/uk"), None);
    }

    #[test]
    fn test_cycle_covers_all() {
        let mut lang = Language::En;
        for _ in 0..Language::all().len() {
            lang = lang.next();
        }
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("uk".parse::<Language>(), Ok(Language::Uk));
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_toml_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            language: Language,
        }
        let w: Wrapper = toml::from_str("language = \"ru\"").unwrap();
        assert_eq!(w.language, Language::Ru);
    }
}
