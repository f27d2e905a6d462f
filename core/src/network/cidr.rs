//! # CIDR Prefix Model
//!
//! Validates and normalizes prefix-length input into a [`CidrPrefix`].
//!
//! Input arrives from the boundary either as raw text (possibly with a
//! leading `/` and surrounding whitespace, e.g. `"/24"`, `" 16 "`) or as an
//! already-numeric value. Both routes end in the same range check.

use std::fmt;

use crate::error::CidrError;

/// Shortest prefix length accepted.
pub const PREFIX_MIN: u8 = 1;

/// Longest prefix length accepted.
pub const PREFIX_MAX: u8 = 32;

/// Prefix-length input as it crosses the boundary: raw text or a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CidrInput {
    Text(String),
    Number(i64),
}

impl From<&str> for CidrInput {
    fn from(text: &str) -> Self {
        CidrInput::Text(text.to_owned())
    }
}

impl From<String> for CidrInput {
    fn from(text: String) -> Self {
        CidrInput::Text(text)
    }
}

impl From<i64> for CidrInput {
    fn from(value: i64) -> Self {
        CidrInput::Number(value)
    }
}

/// A validated CIDR prefix length, always within `1..=32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CidrPrefix(u8);

impl CidrPrefix {
    /// Validates a numeric prefix length.
    pub fn new(len: u8) -> Result<Self, CidrError> {
        Self::from_number(i64::from(len))
    }

    /// Parses and validates prefix-length input.
    ///
    /// Text input is stripped of surrounding whitespace and one optional
    /// leading `/`, then must be plain ASCII digits. Signs, decimals and
    /// exponents are all rejected as [`CidrError::NonNumeric`].
    pub fn parse(input: impl Into<CidrInput>) -> Result<Self, CidrError> {
        match input.into() {
            CidrInput::Text(text) => Self::from_text(&text),
            CidrInput::Number(value) => Self::from_number(value),
        }
    }

    /// The prefix length as a plain integer.
    pub fn get(&self) -> u8 {
        self.0
    }

    fn from_text(text: &str) -> Result<Self, CidrError> {
        let trimmed = text.trim();
        let stripped = trimmed.strip_prefix('/').unwrap_or(trimmed);

        if stripped.is_empty() {
            return Err(CidrError::MissingValue);
        }
        if !stripped.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CidrError::NonNumeric(stripped.to_owned()));
        }

        // A digit run too long for i64 can only be far above the range.
        let value: i64 = stripped.parse().unwrap_or(i64::MAX);
        Self::from_number(value)
    }

    fn from_number(value: i64) -> Result<Self, CidrError> {
        if value < i64::from(PREFIX_MIN) {
            return Err(CidrError::BelowMinimum(value));
        }
        if value > i64::from(PREFIX_MAX) {
            return Err(CidrError::AboveMaximum(value));
        }
        Ok(CidrPrefix(value as u8))
    }
}

impl fmt::Display for CidrPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
