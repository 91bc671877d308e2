pub mod types;

use types::ArchetypeCatalog;
pub use types::{Planet, PlanetaryPair, ZodiacSign};

const CATALOG_JSON: &str = include_str!("../../data/archetypes.json");

lazy_static::lazy_static! {
    static ref CATALOG: ArchetypeCatalog =
        serde_json::from_str(CATALOG_JSON).expect("embedded archetypes.json is malformed");
}

pub fn zodiac_signs() -> &'static [ZodiacSign] {
    CATALOG.signs.as_slice()
}

pub fn planets() -> &'static [Planet] {
    CATALOG.planets.as_slice()
}

pub fn planetary_pairs() -> &'static [PlanetaryPair] {
    CATALOG.pairs.as_slice()
}

pub fn get_zodiac_sign_by_id(id: &str) -> Option<&'static ZodiacSign> {
    CATALOG.signs.iter().find(|sign| sign.id == id)
}

pub fn get_planet_by_id(id: &str) -> Option<&'static Planet> {
    CATALOG.planets.iter().find(|planet| planet.id == id)
}

pub fn get_planetary_pair_by_id(id: &str) -> Option<&'static PlanetaryPair> {
    CATALOG.pairs.iter().find(|pair| pair.id == id)
}

pub fn get_planetary_pair_by_slug(slug: &str) -> Option<&'static PlanetaryPair> {
    CATALOG.pairs.iter().find(|pair| pair.slug == slug)
}

impl PlanetaryPair {
    /// Both planets of the pair, if their ids are known.
    pub fn planets(&self) -> Option<(&'static Planet, &'static Planet)> {
        Some((get_planet_by_id(&self.planet1)?, get_planet_by_id(&self.planet2)?))
    }
}
