//! Catalog entry name representation
//!
//! A Name stores an uppercase-normalized Pokemon name. Unlike classic Wordle
//! there is no fixed word length: "MEW" and "CHARIZARD" are both playable, so
//! the type keeps the full string and offers byte-wise positional access for
//! feedback scoring.

use std::fmt;

/// An uppercase-normalized catalog name
///
/// Normalization is trim + ASCII uppercase. Hyphens and digits survive
/// normalization because the catalog contains names like "MR-MIME" and
/// "PORYGON2".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Normalize raw user or API text into a Name
    ///
    /// # Examples
    /// ```
    /// use pokedle::core::Name;
    ///
    /// let name = Name::normalize("  pikachu ");
    /// assert_eq!(name.text(), "PIKACHU");
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_ascii_uppercase())
    }

    /// Get the normalized name as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Length in bytes (the catalog is ASCII-only)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the name is empty after normalization
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Byte at a position, or None past the end of the name
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<u8> {
        self.0.as_bytes().get(position).copied()
    }

    /// Check if the name contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.0.as_bytes().contains(&letter)
    }

    /// Iterate over the name's bytes
    #[inline]
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
