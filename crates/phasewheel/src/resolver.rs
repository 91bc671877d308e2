//! Classifies a degree separation into a phase and, when one is in orb, an aspect.

use crate::aspects::{all_aspects, find_aspect_in, Aspect};
use crate::phases::{all_phases, find_phase_in, Phase};
use serde::Serialize;

pub const OUT_OF_RANGE_MESSAGE: &str = "Degree out of valid range (0-360)";
pub const NO_ASPECT_MESSAGE: &str = "No specific aspect detected (between major aspects)";

/// Distances strictly below this count as exact.
pub const EXACT_THRESHOLD: f64 = 1.0;

/// Map any finite degree value into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Outcome of resolving one degree separation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseAspectResult<'a> {
    pub phase: Option<&'a Phase>,
    pub aspect: Option<&'a Aspect>,
    pub is_exact: bool,
    pub degree_from_aspect: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Resolver over a pair of borrowed tables
#[derive(Debug, Clone, Copy)]
pub struct PhaseAspectResolver<'a> {
    aspects: &'a [Aspect],
    phases: &'a [Phase],
}

impl PhaseAspectResolver<'static> {
    /// Resolver over the built-in aspect and phase tables
    pub fn standard() -> Self {
        Self::new(all_aspects(), all_phases())
    }
}

impl Default for PhaseAspectResolver<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> PhaseAspectResolver<'a> {
    pub fn new(aspects: &'a [Aspect], phases: &'a [Phase]) -> Self {
        Self { aspects, phases }
    }

    pub fn resolve(&self, degree_separation: f64) -> PhaseAspectResult<'a> {
        if !degree_separation.is_finite() {
            log::debug!("Non-finite degree separation: {}", degree_separation);
        }

        let normalized = normalize_degrees(degree_separation);

        // Phase is the primary classification, the aspect is supporting detail
        let phase = find_phase_in(self.phases, normalized);
        let aspect = find_aspect_in(self.aspects, normalized);

        let degree_from_aspect = aspect.map(|a| a.distance_to(normalized));
        let is_exact = matches!(degree_from_aspect, Some(d) if d < EXACT_THRESHOLD);

        let message = if phase.is_none() {
            Some(OUT_OF_RANGE_MESSAGE)
        } else if aspect.is_none() {
            Some(NO_ASPECT_MESSAGE)
        } else {
            None
        };

        PhaseAspectResult {
            phase,
            aspect,
            is_exact,
            degree_from_aspect,
            message,
        }
    }
}

/// Resolve against the built-in tables.
pub fn calculate_phase_and_aspect(degree_separation: f64) -> PhaseAspectResult<'static> {
    PhaseAspectResolver::standard().resolve(degree_separation)
}

/// Shorthand for [`calculate_phase_and_aspect`].
pub fn resolve(degree_separation: f64) -> PhaseAspectResult<'static> {
    calculate_phase_and_aspect(degree_separation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(365.0), 5.0);
        assert_eq!(normalize_degrees(-5.0), 355.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
        assert_eq!(normalize_degrees(51.25), 51.25);
    }

    #[test]
    fn test_normalize_tiny_negative_stays_in_range() {
        let n = normalize_degrees(-1e-20);
        assert!((0.0..360.0).contains(&n));
    }

    #[test]
    fn test_non_finite_input_degrades() {
        let result = resolve(f64::NAN);
        assert!(result.phase.is_none());
        assert!(result.aspect.is_none());
        assert!(!result.is_exact);
        assert_eq!(result.message, Some(OUT_OF_RANGE_MESSAGE));
    }

    #[test]
    fn test_empty_tables() {
        let resolver = PhaseAspectResolver::new(&[], &[]);
        let result = resolver.resolve(90.0);
        assert!(result.phase.is_none());
        assert_eq!(result.degree_from_aspect, None);
        assert_eq!(result.message, Some(OUT_OF_RANGE_MESSAGE));
    }
}
