//! Reference archetypes used when composing synthesis reports.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZodiacSign {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub keywords: Vec<String>,
    pub archetype: String,
    pub essence: String,
    #[serde(rename = "evolutionaryTeaching")]
    pub evolutionary_teaching: String,
    #[serde(rename = "shadowAspects")]
    pub shadow_aspects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub archetype: String,
    pub description: String,
}

/// Two planets studied as one cycle. Planets are referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryPair {
    pub id: String,
    pub slug: String,
    pub planet1: String,
    pub planet2: String,
    pub theme: String,
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<String>,
}

/// On-disk layout of `data/archetypes.json`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ArchetypeCatalog {
    pub signs: Vec<ZodiacSign>,
    pub planets: Vec<Planet>,
    pub pairs: Vec<PlanetaryPair>,
}
