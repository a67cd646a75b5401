use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

pub const MAX_SYMBOL_LEN: usize = 10;

/// Check a symbol against the ticker format rules.
///
/// The input is taken as-is; callers normalize case and whitespace first
/// (see [`Symbol::parse`]).
pub fn validate(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    for (index, ch) in input.chars().enumerate() {
        if ch != '.' && !ch.is_ascii_alphanumeric() {
            return Err(ValidationError::InvalidCharacters { ch, index });
        }
    }

    // Periods alone are not a ticker.
    if input.chars().all(|ch| ch == '.') {
        return Err(ValidationError::InvalidCharacters { ch: '.', index: 0 });
    }

    let len = input.chars().count();
    if len > MAX_SYMBOL_LEN {
        return Err(ValidationError::TooLong {
            len,
            max: MAX_SYMBOL_LEN,
        });
    }

    Ok(())
}

/// Normalized market symbol/ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Trim, uppercase, then validate.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        validate(&normalized)?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
