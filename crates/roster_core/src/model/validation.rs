//! Field-level input validation for ids and display names.
//!
//! Runs before the store is invoked; repositories trust their inputs.

use crate::model::id::ID_LEN;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static ENTITY_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8}$").expect("valid entity id regex"));
static NAME_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}+$").expect("valid name word regex"));

/// Rejected input, mapped to the `ValidationFailed` error kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Id is not exactly eight ASCII digits.
    MalformedId(String),
    /// Name is empty or whitespace only.
    EmptyName,
    /// Name contains a word with non-letter characters.
    NonLetterName(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedId(id) => {
                write!(f, "id `{id}` must be exactly {ID_LEN} decimal digits")
            }
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NonLetterName(word) => {
                write!(f, "name word `{word}` must contain letters only")
            }
        }
    }
}

impl Error for ValidationError {}

/// Checks that `id` is an 8-digit decimal string.
pub fn validate_entity_id(id: &str) -> Result<(), ValidationError> {
    if ENTITY_ID_RE.is_match(id) {
        Ok(())
    } else {
        Err(ValidationError::MalformedId(id.to_string()))
    }
}

/// Checks that `name` is non-blank and every whitespace-separated word is
/// made of Unicode letters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let mut words = name.split_whitespace().peekable();
    if words.peek().is_none() {
        return Err(ValidationError::EmptyName);
    }

    for word in words {
        if !NAME_WORD_RE.is_match(word) {
            return Err(ValidationError::NonLetterName(word.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_entity_id, validate_name, ValidationError};

    #[test]
    fn entity_id_requires_eight_ascii_digits() {
        assert!(validate_entity_id("12345678").is_ok());
        assert!(validate_entity_id("00000000").is_ok());

        for bad in ["1234567", "123456789", "1234567a", "", " 2345678", "１２３４５６７８"] {
            assert_eq!(
                validate_entity_id(bad),
                Err(ValidationError::MalformedId(bad.to_string()))
            );
        }
    }

    #[test]
    fn name_accepts_multi_word_unicode_letters() {
        assert!(validate_name("Parham Alvani").is_ok());
        assert!(validate_name("Internet   Engineering").is_ok());
        assert!(validate_name("Émile Zoë").is_ok());
    }

    #[test]
    fn name_rejects_blank_and_non_letter_words() {
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
        assert_eq!(validate_name("   "), Err(ValidationError::EmptyName));
        assert_eq!(
            validate_name("Operating Systems 2"),
            Err(ValidationError::NonLetterName("2".to_string()))
        );
        assert_eq!(
            validate_name("C++"),
            Err(ValidationError::NonLetterName("C++".to_string()))
        );
    }
}
