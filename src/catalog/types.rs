//! Catalog entry attribute bundle.

use serde::{Deserialize, Serialize};

/// One catalog entry: a creature's name plus the attributes the game shows
/// as hints and sidebar cards.
///
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Canonical uppercase name.
    pub name: String,
    /// Type tags in catalog order, e.g. `["grass", "poison"]`.
    pub types: Vec<String>,
    /// Generation label, e.g. "GENERATION I".
    pub generation: String,
    /// Small sprite image URL, if the catalog has one.
    pub sprite: Option<String>,
    /// High-resolution official artwork URL, if the catalog has one.
    pub official_art: Option<String>,
}

impl Entry {
    /// Well-defined stand-in used when a details fetch fails.
    ///
    /// Gameplay continues with this bundle instead of blocking on the
    /// failure; see the DetailsUnavailable error kind.
    #[must_use]
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_uppercase(),
            types: vec!["unknown".to_string()],
            generation: "unknown".to_string(),
            sprite: None,
            official_art: None,
        }
    }

    /// True if this bundle is the degraded placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.generation == "unknown" && self.types == ["unknown"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_uppercases_and_marks_unknown() {
        let entry = Entry::placeholder("pikachu");
        assert_eq!(entry.name, "PIKACHU");
        assert_eq!(entry.types, vec!["unknown"]);
        assert_eq!(entry.generation, "unknown");
        assert!(entry.sprite.is_none());
        assert!(entry.official_art.is_none());
        assert!(entry.is_placeholder());
    }

    #[test]
    fn real_entry_is_not_placeholder() {
        let entry = Entry {
            name: "BULBASAUR".to_string(),
            types: vec!["grass".to_string(), "poison".to_string()],
            generation: "GENERATION I".to_string(),
            sprite: None,
            official_art: None,
        };
        assert!(!entry.is_placeholder());
    }
}
