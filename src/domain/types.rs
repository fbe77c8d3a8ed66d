//! Strongly-typed value objects used by the table layer.
//!
//! These wrappers enforce basic invariants (e.g., positive page numbers,
//! identifier-shaped column keys) so that once a value reaches the domain
//! layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided page number is zero.
    #[error("page number must be greater than zero")]
    NonPositivePage,
    /// Provided page size is zero or above the configured maximum.
    #[error("page size must be between 1 and {max}")]
    PageSizeOutOfRange { max: usize },
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Column key contained characters other than `[a-z0-9_]`.
    #[error("invalid column key: {0}")]
    InvalidColumnKey(String),
    /// Sort direction was neither `asc` nor `desc`.
    #[error("invalid sort direction: {0}")]
    InvalidSortDirection(String),
    /// Two columns of a table share the same key.
    #[error("duplicate column key: {0}")]
    DuplicateColumn(String),
}

/// Macro to generate lightweight newtypes for positive counters.
macro_rules! positive_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            /// Returns the raw `usize` backing this value.
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

positive_newtype!(PageNumber, "One-based page number.");
positive_newtype!(PerPage, "Number of items shown on a single page.");

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Creates a page number ensuring it is greater than zero.
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositivePage)
        }
    }

    /// Offset of the first item on this page.
    pub fn offset(self, per_page: PerPage) -> usize {
        (self.0 - 1).saturating_mul(per_page.0)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<usize> for PageNumber {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for PageNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = usize::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl PerPage {
    /// Creates a page size in `1..=max`.
    pub fn new(value: usize, max: usize) -> Result<Self, TypeConstraintError> {
        if (1..=max).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::PageSizeOutOfRange { max })
        }
    }

    /// Creates a page size, lowering `value` to `max` when it is larger.
    pub fn clamped(value: usize, max: usize) -> Result<Self, TypeConstraintError> {
        Self::new(value.min(max), max)
    }

    /// Number of pages needed to show `total` items.
    pub fn total_pages(self, total: usize) -> usize {
        total.div_ceil(self.0)
    }
}

/// Identifier of a table column, used in query strings and record lookups.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnKey(String);

impl ColumnKey {
    /// Trims the value and accepts only lowercase ASCII letters, digits and `_`.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let valid = trimmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid {
            return Err(TypeConstraintError::InvalidColumnKey(trimmed));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ColumnKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ColumnKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ColumnKey {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ColumnKey {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColumnKey> for String {
    fn from(value: ColumnKey) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_number_rejects_zero() {
        assert_eq!(PageNumber::new(0), Err(TypeConstraintError::NonPositivePage));
        assert_eq!(PageNumber::new(3).map(PageNumber::get), Ok(3));
    }

    #[test]
    fn page_number_deserialization_rejects_zero() {
        assert_eq!(serde_json::from_str::<PageNumber>("4").unwrap().get(), 4);
        assert!(serde_json::from_str::<PageNumber>("0").is_err());
    }

    #[test]
    fn page_offset_uses_page_size() {
        let per_page = PerPage::new(20, 100).unwrap();

        assert_eq!(PageNumber::FIRST.offset(per_page), 0);
        assert_eq!(PageNumber::new(3).unwrap().offset(per_page), 40);
    }

    #[test]
    fn per_page_bounds() {
        assert_eq!(
            PerPage::new(0, 100),
            Err(TypeConstraintError::PageSizeOutOfRange { max: 100 })
        );
        assert!(PerPage::new(101, 100).is_err());
        assert_eq!(PerPage::clamped(500, 100).map(PerPage::get), Ok(100));
    }

    #[test]
    fn total_pages_rounds_up() {
        let per_page = PerPage::new(20, 100).unwrap();

        assert_eq!(per_page.total_pages(0), 0);
        assert_eq!(per_page.total_pages(20), 1);
        assert_eq!(per_page.total_pages(21), 2);
    }

    #[test]
    fn column_key_is_trimmed_and_checked() {
        assert_eq!(ColumnKey::new("  created_at ").unwrap().as_str(), "created_at");
        assert_eq!(ColumnKey::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(
            ColumnKey::new("Name"),
            Err(TypeConstraintError::InvalidColumnKey("Name".to_string()))
        );
    }
}
