//! In-memory catalog backend.
//!
//! Serves two purposes: `--offline` play from an embedded Generation-I name
//! list, and a controllable stand-in for the engine's tests (failure
//! injection for both the listing and the details lookup).

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use super::types::Entry;
use super::{Catalog, CatalogError};

/// The original 151, in PokeAPI naming (lowercase, hyphenated forms).
pub const KANTO: &[&str] = &[
    "bulbasaur", "ivysaur", "venusaur", "charmander", "charmeleon", "charizard",
    "squirtle", "wartortle", "blastoise", "caterpie", "metapod", "butterfree",
    "weedle", "kakuna", "beedrill", "pidgey", "pidgeotto", "pidgeot",
    "rattata", "raticate", "spearow", "fearow", "ekans", "arbok",
    "pikachu", "raichu", "sandshrew", "sandslash", "nidoran-f", "nidorina",
    "nidoqueen", "nidoran-m", "nidorino", "nidoking", "clefairy", "clefable",
    "vulpix", "ninetales", "jigglypuff", "wigglytuff", "zubat", "golbat",
    "oddish", "gloom", "vileplume", "paras", "parasect", "venonat",
    "venomoth", "diglett", "dugtrio", "meowth", "persian", "psyduck",
    "golduck", "mankey", "primeape", "growlithe", "arcanine", "poliwag",
    "poliwhirl", "poliwrath", "abra", "kadabra", "alakazam", "machop",
    "machoke", "machamp", "bellsprout", "weepinbell", "victreebel", "tentacool",
    "tentacruel", "geodude", "graveler", "golem", "ponyta", "rapidash",
    "slowpoke", "slowbro", "magnemite", "magneton", "farfetchd", "doduo",
    "dodrio", "seel", "dewgong", "grimer", "muk", "shellder",
    "cloyster", "gastly", "haunter", "gengar", "onix", "drowzee",
    "hypno", "krabby", "kingler", "voltorb", "electrode", "exeggcute",
    "exeggutor", "cubone", "marowak", "hitmonlee", "hitmonchan", "lickitung",
    "koffing", "weezing", "rhyhorn", "rhydon", "chansey", "tangela",
    "kangaskhan", "horsea", "seadra", "goldeen", "seaking", "staryu",
    "starmie", "mr-mime", "scyther", "jynx", "electabuzz", "magmar",
    "pinsir", "tauros", "magikarp", "gyarados", "lapras", "ditto",
    "eevee", "vaporeon", "jolteon", "flareon", "porygon", "omanyte",
    "omastar", "kabuto", "kabutops", "aerodactyl", "snorlax", "articuno",
    "zapdos", "moltres", "dratini", "dragonair", "dragonite", "mewtwo",
    "mew",
];

/// Catalog backed by a fixed set of entries.
pub struct StaticCatalog {
    entries: FxHashMap<String, Entry>,
    fail_listing: AtomicBool,
    fail_details: AtomicBool,
}

impl StaticCatalog {
    /// Build a catalog from explicit entries, keyed by normalized name.
    #[must_use]
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let mut map = FxHashMap::default();
        for entry in entries {
            map.insert(entry.name.to_uppercase(), entry);
        }
        Self {
            entries: map,
            fail_listing: AtomicBool::new(false),
            fail_details: AtomicBool::new(false),
        }
    }

    /// The embedded Generation-I catalog used for offline play.
    ///
    /// Type tags are not embedded, so offline details degrade to an
    /// "unknown" type hint; the generation label is accurate by
    /// construction.
    #[must_use]
    pub fn kanto() -> Self {
        let entries = KANTO
            .iter()
            .map(|&name| Entry {
                name: name.to_uppercase(),
                types: vec!["unknown".to_string()],
                generation: "GENERATION I".to_string(),
                sprite: None,
                official_art: None,
            })
            .collect();
        Self::with_entries(entries)
    }

    /// Make every subsequent `list_names` call fail.
    pub fn set_fail_listing(&self, fail: bool) {
        self.fail_listing.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `get_details` call fail.
    pub fn set_fail_details(&self, fail: bool) {
        self.fail_details.store(fail, Ordering::SeqCst);
    }

    /// Number of entries in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn list_names(&self) -> Result<FxHashMap<String, String>, CatalogError> {
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(CatalogError::Unavailable("listing disabled".to_string()));
        }

        Ok(self
            .entries
            .keys()
            .map(|name| (name.clone(), format!("memory:{name}")))
            .collect())
    }

    async fn get_details(&self, name: &str) -> Result<Entry, CatalogError> {
        if self.fail_details.load(Ordering::SeqCst) {
            return Err(CatalogError::Unavailable("details disabled".to_string()));
        }

        self.entries
            .get(&name.to_uppercase())
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kanto_has_all_151() {
        assert_eq!(KANTO.len(), 151);
        assert_eq!(StaticCatalog::kanto().len(), 151);
    }

    #[test]
    fn kanto_names_are_api_style() {
        for &name in KANTO {
            assert!(
                name.chars()
                    .all(|c| c.is_ascii_lowercase() || c == '-' || c.is_ascii_digit()),
                "name '{name}' is not in API naming style"
            );
        }
    }

    #[tokio::test]
    async fn lists_normalized_names() {
        let catalog = StaticCatalog::kanto();
        let names = catalog.list_names().await.unwrap();
        assert!(names.contains_key("PIKACHU"));
        assert!(names.contains_key("MR-MIME"));
        assert_eq!(names.len(), 151);
    }

    #[tokio::test]
    async fn details_lookup_is_case_insensitive() {
        let catalog = StaticCatalog::kanto();
        let entry = catalog.get_details("pikachu").await.unwrap();
        assert_eq!(entry.name, "PIKACHU");
        assert_eq!(entry.generation, "GENERATION I");
    }

    #[tokio::test]
    async fn unknown_name_is_not_found() {
        let catalog = StaticCatalog::kanto();
        let err = catalog.get_details("missingno").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn failure_injection() {
        let catalog = StaticCatalog::kanto();

        catalog.set_fail_listing(true);
        assert!(catalog.list_names().await.is_err());
        catalog.set_fail_listing(false);
        assert!(catalog.list_names().await.is_ok());

        catalog.set_fail_details(true);
        assert!(catalog.get_details("mew").await.is_err());
    }
}
