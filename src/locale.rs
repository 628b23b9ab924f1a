use crate::CatalogError;
use crate::consts::{MONTH_LABELS_EN, MONTH_LABELS_ZH_TW};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locale selecting the month label table.
/// Traditional Chinese is the default, matching the catalog's original audience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Traditional Chinese (Taiwan), labels "1月".."12月"
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    /// English, labels "January".."December"
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// Returns the canonical BCP 47 tag for this locale
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZhTw => "zh-TW",
            Self::En => "en",
        }
    }

    /// Returns the label table for this locale (index 0 unused, months are 1-indexed)
    pub(crate) const fn month_labels(self) -> &'static [&'static str; 13] {
        match self {
            Self::ZhTw => &MONTH_LABELS_ZH_TW,
            Self::En => &MONTH_LABELS_EN,
        }
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    /// Case-insensitive, tolerant of region subtags and `_` separators:
    /// "zh", "zh-TW", "zh_tw" all select `ZhTw`; "en", "en-US" select `En`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::UnsupportedLocale(s.to_owned()));
        }
        let normalized = trimmed.to_ascii_lowercase().replace('_', "-");
        let language = normalized.split('-').next().unwrap_or(&normalized);
        match language {
            "zh" => Ok(Self::ZhTw),
            "en" => Ok(Self::En),
            _ => Err(CatalogError::UnsupportedLocale(trimmed.to_owned())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cases() {
        struct TestCase {
            input: &'static str,
            expected: Option<Locale>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input: "zh-TW",
                expected: Some(Locale::ZhTw),
                description: "canonical tag",
            },
            TestCase {
                input: "zh_tw",
                expected: Some(Locale::ZhTw),
                description: "underscore separator",
            },
            TestCase {
                input: "ZH",
                expected: Some(Locale::ZhTw),
                description: "uppercase, bare language",
            },
            TestCase {
                input: "en",
                expected: Some(Locale::En),
                description: "bare language",
            },
            TestCase {
                input: " en-US ",
                expected: Some(Locale::En),
                description: "region subtag with whitespace",
            },
            TestCase {
                input: "",
                expected: None,
                description: "empty input",
            },
            TestCase {
                input: "fr",
                expected: None,
                description: "unsupported language",
            },
        ];

        for case in &cases {
            let parsed = case.input.parse::<Locale>();
            match case.expected {
                Some(locale) => {
                    assert_eq!(parsed.ok(), Some(locale), "case: {}", case.description);
                }
                None => {
                    assert!(
                        matches!(parsed, Err(CatalogError::UnsupportedLocale(_))),
                        "case: {}",
                        case.description
                    );
                }
            }
        }
    }

    #[test]
    fn test_default_is_zh_tw() {
        assert_eq!(Locale::default(), Locale::ZhTw);
    }

    #[test]
    fn test_as_str_and_display() {
        assert_eq!(Locale::ZhTw.as_str(), "zh-TW");
        assert_eq!(Locale::En.as_str(), "en");
        assert_eq!(Locale::ZhTw.to_string(), "zh-TW");
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&Locale::ZhTw).unwrap();
        assert_eq!(json, r#""zh-TW""#);

        let parsed: Locale = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(parsed, Locale::En);
    }

    #[test]
    fn test_label_tables_complete() {
        for locale in [Locale::ZhTw, Locale::En] {
            let labels = locale.month_labels();
            for (index, label) in labels.iter().enumerate().skip(1) {
                assert!(!label.is_empty(), "{locale}: missing label for month {index}");
            }
        }
    }
}
