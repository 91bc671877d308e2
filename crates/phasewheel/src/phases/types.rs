use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity of a phase slice. Alternates around the wheel starting with Yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Yang => write!(f, "Yang"),
            Polarity::Yin => write!(f, "Yin"),
        }
    }
}

/// Half-open interval `[start, end)` in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeRange {
    pub start: f64,
    pub end: f64,
}

impl DegreeRange {
    pub fn contains(&self, degree: f64) -> bool {
        degree >= self.start && degree < self.end
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// One evolutionary stage of a two-body cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub name: String,
    #[serde(rename = "zodiacSign")]
    pub zodiac_sign: String,
    pub element: Polarity,
    #[serde(rename = "degreeRange")]
    pub degree_range: DegreeRange,
    pub keyword: String,
    pub description: String,
    #[serde(rename = "evolutionaryFocus")]
    pub evolutionary_focus: String,
}
