//! PokeAPI response models and client
//!
//! This module contains the data types for the three PokeAPI response shapes
//! the application consumes: paged location-area listings, per-area encounter
//! details, and full Pokemon records. The HTTP client lives in the `client`
//! submodule.

pub mod client;

pub use client::{ApiClient, ApiError};

use serde::{Deserialize, Serialize};

/// A named API resource with a link to its full record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. "canalave-city-area"
    pub name: String,
    /// URL of the full resource
    pub url: String,
}

/// A bare name reference nested inside other records
///
/// PokeAPI nests these with a `url` alongside; only the name is used here,
/// and serde ignores the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Named {
    pub name: String,
}

/// One page of the location-area listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas in the catalog
    pub count: u32,
    /// URL of the next page, absent on the last page
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page
    pub previous: Option<String>,
    /// The location areas on this page
    pub results: Vec<NamedResource>,
}

/// Encounter listing for a single location area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaDetail {
    /// The Pokemon that can be encountered in this area
    #[serde(rename = "pokemon_encounters")]
    pub encounters: Vec<Encounter>,
}

/// A single possible encounter within a location area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encounter {
    /// The Pokemon encountered
    pub pokemon: Named,
}

/// A full Pokemon record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    /// Pokemon name, e.g. "pikachu"
    pub name: String,
    /// Base experience granted for defeating it; null in the API for some
    /// special forms, which counts as zero for the catch-chance math
    pub base_experience: Option<i64>,
    /// Height in decimetres
    pub height: i64,
    /// Weight in hectograms
    pub weight: i64,
    /// Base stat values
    pub stats: Vec<PokemonStat>,
    /// Type slots
    pub types: Vec<PokemonType>,
}

/// One base stat entry of a Pokemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    /// The stat value
    pub base_stat: i64,
    /// Which stat this is, e.g. "speed"
    pub stat: Named,
}

/// One type slot of a Pokemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    /// The type, e.g. "electric"
    #[serde(rename = "type")]
    pub kind: Named,
}
