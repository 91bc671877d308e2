use serde::{Deserialize, Serialize};

/// Whether an aspect belongs to the classical set or the harmonic extras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectCategory {
    Major,
    Minor,
}

/// A named angle between two bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    /// Stable identifier: "conjunction", "bi-septile", etc.
    pub id: String,
    pub name: String,
    /// Display glyph, when one is assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Nominal angle in degrees
    pub degrees: f64,
    /// Tolerance around `degrees`, inclusive
    pub orb: f64,
    pub category: AspectCategory,
}

impl Aspect {
    pub fn new(id: &str, name: &str, degrees: f64, orb: f64, category: AspectCategory) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            symbol: None,
            degrees,
            orb,
            category,
        }
    }

    /// Distance from `degree` to the nominal angle. No circular wrap is applied.
    pub fn distance_to(&self, degree: f64) -> f64 {
        (degree - self.degrees).abs()
    }

    /// True when `degree` falls inside the orb window.
    pub fn contains(&self, degree: f64) -> bool {
        self.distance_to(degree) <= self.orb
    }

    pub fn is_major(&self) -> bool {
        self.category == AspectCategory::Major
    }
}
