//! String case conversion
//!
//! Pure helpers that turn a phrase such as `"first name"`, `"user_id"` or
//! `"mobile-number"` into camelCase, kebab-case or dot.case. Input may only
//! contain ASCII letters, digits, whitespace, hyphens and underscores; anything
//! else is rejected rather than partially converted.

use crate::error::{AnythinkError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static ALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s\-_]+$").expect("valid pattern"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-_]+").expect("valid pattern"));

/// Target casing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// `firstName`
    Camel,
    /// `first-name`
    Kebab,
    /// `first.name`
    Dot,
}

impl CaseStyle {
    /// Convert a string to this case
    pub fn convert(&self, input: &str) -> Result<String> {
        let words = split_words(input)?;
        Ok(match self {
            CaseStyle::Camel => words
                .iter()
                .enumerate()
                .map(|(i, word)| {
                    let lower = word.to_lowercase();
                    if i == 0 {
                        lower
                    } else {
                        capitalize(&lower)
                    }
                })
                .collect(),
            CaseStyle::Kebab => join_lowercase(&words, "-"),
            CaseStyle::Dot => join_lowercase(&words, "."),
        })
    }

    /// Convert an untyped JSON value, rejecting null and non-string input
    pub fn convert_value(&self, value: &serde_json::Value) -> Result<String> {
        match value {
            serde_json::Value::Null => Err(AnythinkError::Validation(
                "Input cannot be null or undefined".to_string(),
            )),
            serde_json::Value::String(s) => self.convert(s),
            _ => Err(AnythinkError::Validation(
                "Input must be a string".to_string(),
            )),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Camel => write!(f, "camel"),
            CaseStyle::Kebab => write!(f, "kebab"),
            CaseStyle::Dot => write!(f, "dot"),
        }
    }
}

impl FromStr for CaseStyle {
    type Err = AnythinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "camel" | "camelCase" => Ok(CaseStyle::Camel),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dot" | "dot.case" => Ok(CaseStyle::Dot),
            other => Err(AnythinkError::Validation(format!(
                "Unknown case style: {}",
                other
            ))),
        }
    }
}

/// `"first name"` -> `"firstName"`
pub fn to_camel_case(input: &str) -> Result<String> {
    CaseStyle::Camel.convert(input)
}

/// `"Hello World"` -> `"hello-world"`
pub fn to_kebab_case(input: &str) -> Result<String> {
    CaseStyle::Kebab.convert(input)
}

/// `"SCREEN_NAME"` -> `"screen.name"`
pub fn to_dot_case(input: &str) -> Result<String> {
    CaseStyle::Dot.convert(input)
}

fn split_words(input: &str) -> Result<Vec<&str>> {
    if !ALLOWED.is_match(input) {
        return Err(AnythinkError::Validation(
            "Input contains invalid characters".to_string(),
        ));
    }

    let words: Vec<&str> = SEPARATORS
        .split(input.trim())
        .filter(|word| !word.is_empty())
        .collect();

    if words.is_empty() {
        return Err(AnythinkError::Validation(
            "Input must contain at least one word".to_string(),
        ));
    }

    Ok(words)
}

fn join_lowercase(words: &[&str], separator: &str) -> String {
    words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("first name").unwrap(), "firstName");
        assert_eq!(to_camel_case("user_id").unwrap(), "userId");
        assert_eq!(to_camel_case("SCREEN_NAME").unwrap(), "screenName");
        assert_eq!(to_camel_case("mobile-number").unwrap(), "mobileNumber");
        assert_eq!(to_camel_case("sum sum soo").unwrap(), "sumSumSoo");
    }

    #[test]
    fn test_dot_case() {
        assert_eq!(to_dot_case("first name").unwrap(), "first.name");
        assert_eq!(to_dot_case("user_id").unwrap(), "user.id");
        assert_eq!(to_dot_case("SCREEN_NAME").unwrap(), "screen.name");
        assert_eq!(to_dot_case("mobile-number").unwrap(), "mobile.number");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("Hello World").unwrap(), "hello-world");
        assert_eq!(
            to_kebab_case("JavaScript Programming Language").unwrap(),
            "javascript-programming-language"
        );
        assert_eq!(to_kebab_case("single").unwrap(), "single");
        assert_eq!(to_kebab_case("Multiple   Spaces").unwrap(), "multiple-spaces");
    }

    #[test]
    fn test_mixed_separators_collapse() {
        assert_eq!(to_camel_case("  a -_ b  ").unwrap(), "aB");
        assert_eq!(to_dot_case("a__b--c").unwrap(), "a.b.c");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(to_camel_case("address line 2").unwrap(), "addressLine2");
    }

    #[test]
    fn test_invalid_characters() {
        for input in ["82&*)73", "a&b", "name!", "", "héllo"] {
            let err = to_camel_case(input).unwrap_err();
            assert_eq!(err.detail(), "Input contains invalid characters");
            assert!(to_dot_case(input).is_err());
            assert!(to_kebab_case(input).is_err());
        }
    }

    #[test]
    fn test_no_words() {
        for input in ["   ", "---", "_ -"] {
            let err = to_dot_case(input).unwrap_err();
            assert_eq!(err.detail(), "Input must contain at least one word");
        }
    }

    #[test]
    fn test_convert_value() {
        assert_eq!(
            CaseStyle::Camel.convert_value(&json!("first name")).unwrap(),
            "firstName"
        );
        assert_eq!(
            CaseStyle::Camel.convert_value(&json!(null)).unwrap_err().detail(),
            "Input cannot be null or undefined"
        );
        assert_eq!(
            CaseStyle::Dot.convert_value(&json!(42)).unwrap_err().detail(),
            "Input must be a string"
        );
    }

    #[test]
    fn test_case_style_from_str() {
        assert_eq!("camel".parse::<CaseStyle>().unwrap(), CaseStyle::Camel);
        assert_eq!("kebab-case".parse::<CaseStyle>().unwrap(), CaseStyle::Kebab);
        assert_eq!("dot".parse::<CaseStyle>().unwrap(), CaseStyle::Dot);
        assert!("snake".parse::<CaseStyle>().is_err());
    }
}
