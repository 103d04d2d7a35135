//! Wire types for the PokeAPI REST surface
//!
//! These records mirror the subset of the service's JSON payloads the
//! catalog reads. Serde skips any fields not declared here, so payload
//! additions on the service side do not break decoding.

use serde::{Deserialize, Serialize};

/// A name and URL pair referencing an API resource
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    /// Resource name
    pub name: String,
    /// Canonical URL of the full resource
    pub url: String,
}

/// One page of the pokemon listing
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonPage {
    /// Total number of pokemon across all pages
    #[serde(default)]
    pub count: u32,
    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,
    /// Entries on this page
    pub results: Vec<NamedResource>,
}

/// A full pokemon record
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pokemon {
    /// National dex number
    pub id: u32,
    /// Pokemon name
    pub name: String,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Sprite image links
    pub sprites: Sprites,
    /// Type slots in display order
    pub types: Vec<TypeSlot>,
    /// Ability slots in display order
    pub abilities: Vec<AbilitySlot>,
    /// Base stat entries
    pub stats: Vec<StatSlot>,
}

impl Pokemon {
    /// Look up a base stat by name
    #[must_use]
    pub fn base_stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|slot| slot.stat.name == name)
            .map(|slot| slot.base_stat)
    }

    /// Type names in display order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|slot| slot.kind.name.as_str())
    }

    /// Ability names in display order
    pub fn ability_names(&self) -> impl Iterator<Item = &str> {
        self.abilities.iter().map(|slot| slot.ability.name.as_str())
    }
}

/// Sprite image links for a pokemon
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sprites {
    /// Default front-facing sprite, if the service has one
    #[serde(default)]
    pub front_default: Option<String>,
}

/// A type entry on a pokemon record
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSlot {
    /// The referenced type resource
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// An ability entry on a pokemon record
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbilitySlot {
    /// The referenced ability resource
    pub ability: NamedResource,
}

/// A base stat entry on a pokemon record
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatSlot {
    /// Base value for this stat
    pub base_stat: u32,
    /// The referenced stat resource
    pub stat: NamedResource,
}
