//! Caught-Pokemon registry
//!
//! Holds the full record of every Pokemon caught during this session, keyed
//! by name. Only the successful catch path writes to it; `inspect` and the
//! `pokedex` listing read from it. Lives for the process lifetime; nothing
//! is persisted.

use std::collections::HashMap;

use crate::api::Pokemon;

/// In-memory registry of caught Pokemon
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: HashMap<String, Pokemon>,
}

impl Pokedex {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught Pokemon under its name, replacing any previous record
    pub fn add(&mut self, pokemon: Pokemon) {
        self.entries.insert(pokemon.name.clone(), pokemon);
    }

    /// Looks up a caught Pokemon by name
    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.entries.get(name)
    }

    /// Returns `true` if a Pokemon with this name has been caught
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the names of all caught Pokemon, sorted for stable output
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns `true` if nothing has been caught yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Pokemon;

    fn sample(name: &str, base_experience: i64) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            base_experience: Some(base_experience),
            height: 7,
            weight: 69,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let pokedex = Pokedex::new();

        assert!(pokedex.is_empty());
        assert!(!pokedex.contains("pikachu"));
        assert!(pokedex.get("pikachu").is_none());
    }

    #[test]
    fn test_add_then_get_and_contains() {
        let mut pokedex = Pokedex::new();
        pokedex.add(sample("pikachu", 112));

        assert!(pokedex.contains("pikachu"));
        let entry = pokedex.get("pikachu").expect("should be present");
        assert_eq!(entry.base_experience, Some(112));
    }

    #[test]
    fn test_add_replaces_existing_record() {
        let mut pokedex = Pokedex::new();
        pokedex.add(sample("pikachu", 112));
        pokedex.add(sample("pikachu", 130));

        assert_eq!(
            pokedex.get("pikachu").map(|p| p.base_experience),
            Some(Some(130))
        );
        assert_eq!(pokedex.names().len(), 1);
    }

    #[test]
    fn test_names_are_sorted() {
        let mut pokedex = Pokedex::new();
        pokedex.add(sample("zubat", 49));
        pokedex.add(sample("caterpie", 39));
        pokedex.add(sample("pidgey", 50));

        assert_eq!(pokedex.names(), vec!["caterpie", "pidgey", "zubat"]);
    }
}
