//! Field-level validation rules shared by every record gateway.
//!
//! Rules: names are letters and spaces, phone numbers are exactly 11 digits,
//! emails have an `a@b.c` shape, and dosages start with a non-negative
//! number. Failures are collected so the user sees every problem at once.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static PERSON_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{11}$").unwrap());

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Stricter shape used for account emails (lowercase only).
static ACCOUNT_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap());

/// Leading number of a dosage such as "2.5 ml".
static DOSAGE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+))").unwrap());

/// One or more field validation failures.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", .messages.join(", "))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

impl ValidationError {
    /// Single-message validation failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }
}

/// Accumulates validation failures.
#[derive(Debug, Default)]
pub struct Validator {
    messages: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` unless `ok`.
    pub fn check(&mut self, ok: bool, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.messages.push(message.into());
        }
        self
    }

    /// Record `message` if `value` is blank.
    pub fn require(&mut self, value: &str, message: impl Into<String>) -> &mut Self {
        self.check(!value.trim().is_empty(), message)
    }

    /// Record `message` if an optional phone number is present but malformed.
    pub fn optional_phone(&mut self, value: Option<&str>, message: impl Into<String>) -> &mut Self {
        self.check(value.map_or(true, is_phone_number), message)
    }

    /// Record `message` if an optional email is present but malformed.
    pub fn optional_email(&mut self, value: Option<&str>, message: impl Into<String>) -> &mut Self {
        self.check(value.map_or(true, is_email), message)
    }

    /// Ok if nothing was recorded.
    pub fn finish(&mut self) -> Result<(), ValidationError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                messages: std::mem::take(&mut self.messages),
            })
        }
    }
}

/// Letters and spaces only, at least one character.
pub fn is_person_name(value: &str) -> bool {
    PERSON_NAME.is_match(value)
}

/// Exactly 11 ASCII digits.
pub fn is_phone_number(value: &str) -> bool {
    PHONE_NUMBER.is_match(value)
}

/// Loose `local@domain.tld` shape.
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Lowercase `local@domain.tld` with a TLD of two or more letters.
pub fn is_account_email(value: &str) -> bool {
    ACCOUNT_EMAIL.is_match(value)
}

/// Leading numeric amount of a dosage string, if any.
pub fn dosage_amount(dosage: &str) -> Option<f64> {
    DOSAGE_AMOUNT
        .captures(dosage)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Trim an optional form field; blank becomes `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
