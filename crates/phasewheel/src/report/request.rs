use crate::archetypes::{get_planetary_pair_by_id, get_zodiac_sign_by_id, Planet, PlanetaryPair, ZodiacSign};
use crate::resolver::{calculate_phase_and_aspect, PhaseAspectResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating a report request
#[derive(Error, Debug, PartialEq)]
pub enum ReportError {
    #[error("Invalid degree separation (must be 0-360): {0}")]
    InvalidDegreeSeparation(f64),
    #[error("Unknown planetary pair: {0}")]
    UnknownPair(String),
    #[error("Unknown zodiac sign: {0}")]
    UnknownSign(String),
    #[error("Planetary pair {pair} references unknown planet")]
    IncompletePair { pair: String },
}

/// A request for a synthesis report on one planetary pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "pairId")]
    pub pair_id: String,
    #[serde(rename = "planet1Sign")]
    pub planet1_sign: String,
    #[serde(rename = "planet2Sign")]
    pub planet2_sign: String,
    #[serde(rename = "degreeSeparation", default, skip_serializing_if = "Option::is_none")]
    pub degree_separation: Option<f64>,
}

/// A request whose ids have been resolved against the archetype catalog
#[derive(Debug, Clone)]
pub struct ValidatedReport {
    pub pair: &'static PlanetaryPair,
    pub planet1: &'static Planet,
    pub planet2: &'static Planet,
    pub sign1: &'static ZodiacSign,
    pub sign2: &'static ZodiacSign,
    /// Present only when the request carried a degree separation
    pub phase_context: Option<PhaseAspectResult<'static>>,
}

impl ReportRequest {
    pub fn new(pair_id: &str, planet1_sign: &str, planet2_sign: &str) -> Self {
        Self {
            pair_id: pair_id.to_string(),
            planet1_sign: planet1_sign.to_string(),
            planet2_sign: planet2_sign.to_string(),
            degree_separation: None,
        }
    }

    pub fn with_degree_separation(mut self, degrees: f64) -> Self {
        self.degree_separation = Some(degrees);
        self
    }

    /// Check the degree range first, then resolve pair and sign ids.
    pub fn validate(&self) -> Result<ValidatedReport, ReportError> {
        if let Some(degrees) = self.degree_separation {
            if !degrees.is_finite() || !(0.0..=360.0).contains(&degrees) {
                return Err(ReportError::InvalidDegreeSeparation(degrees));
            }
        }

        let pair = get_planetary_pair_by_id(&self.pair_id)
            .ok_or_else(|| ReportError::UnknownPair(self.pair_id.clone()))?;
        let sign1 = get_zodiac_sign_by_id(&self.planet1_sign)
            .ok_or_else(|| ReportError::UnknownSign(self.planet1_sign.clone()))?;
        let sign2 = get_zodiac_sign_by_id(&self.planet2_sign)
            .ok_or_else(|| ReportError::UnknownSign(self.planet2_sign.clone()))?;
        let (planet1, planet2) = pair.planets().ok_or_else(|| ReportError::IncompletePair {
            pair: pair.id.clone(),
        })?;

        let phase_context = self.degree_separation.map(calculate_phase_and_aspect);

        Ok(ValidatedReport {
            pair,
            planet1,
            planet2,
            sign1,
            sign2,
            phase_context,
        })
    }
}
