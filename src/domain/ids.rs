//! Domain identifier types
//!
//! Newtype wrapper for the book identifiers carried through probe scenarios.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Book identifier newtype wrapper
///
/// Represents the opaque `_id` value of a book document as returned by the
/// listing endpoint. The value is treated as an opaque string; the only
/// requirement is that it is non-empty, since it is interpolated into
/// dependent probe paths.
///
/// # Examples
///
/// ```
/// use auractl::domain::ids::BookId;
/// use std::str::FromStr;
///
/// let id = BookId::from_str("507f1f77bcf86cd799439011").unwrap();
/// assert_eq!(id.as_str(), "507f1f77bcf86cd799439011");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(String);

impl BookId {
    /// Creates a new BookId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Book ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the book ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
