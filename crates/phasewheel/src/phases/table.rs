//! The eight-phase partition of the 0–360° cycle.
//!
//! Each phase owns a 45° half-open slice. The slices are contiguous and cover
//! the whole circle, which `validate_phase_coverage` checks for any table.

use crate::phases::types::{DegreeRange, Phase, Polarity};
use crate::resolver::normalize_degrees;
use thiserror::Error;

/// Ways a phase table can fail to partition the circle
#[derive(Error, Debug, PartialEq)]
pub enum PhaseTableError {
    #[error("Expected {expected} phases, found {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("Phase table must start at 0, starts at {0}")]
    BadStart(f64),
    #[error("Phase table must end at 360, ends at {0}")]
    BadEnd(f64),
    #[error("Gap or overlap between {previous} (ends {end}) and {next} (starts {start})")]
    Discontinuity {
        previous: String,
        end: f64,
        next: String,
        start: f64,
    },
}

pub const PHASE_COUNT: usize = 8;

struct PhaseSeed {
    id: &'static str,
    name: &'static str,
    sign: &'static str,
    keyword: &'static str,
    focus: &'static str,
    description: &'static str,
}

const PHASE_SEEDS: [PhaseSeed; PHASE_COUNT] = [
    PhaseSeed {
        id: "new",
        name: "New Phase",
        sign: "Aries",
        keyword: "Initiation Beginning",
        focus: "Instinctual action and self-discovery",
        description: "The beginning of a cycle. Action is instinctual. Absolute freedom is required. The question is, \"Who am I?\" The actions one takes brings feedback.",
    },
    PhaseSeed {
        id: "crescent",
        name: "Crescent Phase",
        sign: "Taurus",
        keyword: "Internalization of New Phase, Withdrawal, Struggle",
        focus: "Withdrawing to understand identity",
        description: "The feedback has been obtained. The need is to withdraw and to come to an understanding of who one is.",
    },
    PhaseSeed {
        id: "first-quarter",
        name: "First Quarter Phase",
        sign: "Gemini",
        keyword: "Choices to be Made, Crisis in Action",
        focus: "Building foundations through action",
        description: "One now has an understanding of who one is. Now the question is, \"What specific form do I take?\" A time of intense activity. Building one's foundations in terms of who one is.",
    },
    PhaseSeed {
        id: "gibbous",
        name: "Gibbous Phase",
        sign: "Virgo",
        keyword: "Humbling and Adjusting",
        focus: "Re-evaluating egocentric patterns",
        description: "The old (egocentric) ways are no longer working. The need to re-evaluate. The realization that it is not about \"me\" anymore.",
    },
    PhaseSeed {
        id: "full",
        name: "Full Phase",
        sign: "Libra",
        keyword: "Entering the Social Sphere, Socialization",
        focus: "Integrating purpose into social sphere",
        description: "The dilemma is now in the full light of day. This is me vs what is required of me in the social sphere. Comparing and contrasting self to everyone else. The necessary feedback from significant others in one's life to begin the process of integrating oneself/one's sense of purpose into the social sphere.",
    },
    PhaseSeed {
        id: "disseminating",
        name: "Disseminating Phase",
        sign: "Capricorn",
        keyword: "Totality of Society, Integration of Purpose",
        focus: "Contributing learned wisdom to society",
        description: "Fully integrating oneself/one's sense of purpose into the social sphere. What has been learned enters the mainstream.",
    },
    PhaseSeed {
        id: "last-quarter",
        name: "Last Quarter Phase",
        sign: "Aquarius",
        keyword: "Breaking Free, Rebelling from All That Has Come Before, Crisis in Belief",
        focus: "Detaching from conditioned beliefs",
        description: "Questioning the underlying beliefs that have underpinned all prior actions. Detaching from what one has created and the social sphere in which one has participated.",
    },
    PhaseSeed {
        id: "balsamic",
        name: "Balsamic Phase",
        sign: "Pisces",
        keyword: "Culmination of the Entire Cycle, It Dissolves Back Into From Whence It Came",
        focus: "Spiritual completion and dissolution",
        description: "Attunement to the Divine. Understanding oneself in the context of the Divine and the corresponding expansion of consciousness. Letting go of all that has come before that hinders this attunement. The beginnings of new imaginings for a new cycle.",
    },
];

const PHASE_WIDTH: f64 = 360.0 / PHASE_COUNT as f64;

lazy_static::lazy_static! {
    static ref PHASES: Vec<Phase> = PHASE_SEEDS
        .iter()
        .enumerate()
        .map(|(index, seed)| Phase {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            zodiac_sign: seed.sign.to_string(),
            element: if index % 2 == 0 { Polarity::Yang } else { Polarity::Yin },
            degree_range: DegreeRange {
                start: index as f64 * PHASE_WIDTH,
                end: (index + 1) as f64 * PHASE_WIDTH,
            },
            keyword: seed.keyword.to_string(),
            description: seed.description.to_string(),
            evolutionary_focus: seed.focus.to_string(),
        })
        .collect();
}

/// The built-in phase table, ordered by range start.
pub fn all_phases() -> &'static [Phase] {
    PHASES.as_slice()
}

pub fn get_phase_by_id(id: &str) -> Option<&'static Phase> {
    PHASES.iter().find(|phase| phase.id == id)
}

/// Phase whose `[start, end)` range holds `degree`, from the built-in table.
pub fn get_phase_for_degree(degree: f64) -> Option<&'static Phase> {
    find_phase_in(all_phases(), degree)
}

/// Phase whose `[start, end)` range holds the normalized `degree`.
///
/// A boundary value belongs to the phase starting there.
pub fn find_phase_in(table: &[Phase], degree: f64) -> Option<&Phase> {
    let normalized = normalize_degrees(degree);
    table.iter().find(|phase| phase.degree_range.contains(normalized))
}

/// Check that `table` partitions [0, 360) into exactly eight contiguous slices.
pub fn validate_phase_coverage(table: &[Phase]) -> Result<(), PhaseTableError> {
    if table.len() != PHASE_COUNT {
        return Err(PhaseTableError::WrongCount {
            expected: PHASE_COUNT,
            found: table.len(),
        });
    }

    let mut sorted: Vec<&Phase> = table.iter().collect();
    sorted.sort_by(|a, b| a.degree_range.start.total_cmp(&b.degree_range.start));

    let first = sorted[0].degree_range.start;
    if first != 0.0 {
        return Err(PhaseTableError::BadStart(first));
    }
    let last = sorted[sorted.len() - 1].degree_range.end;
    if last != 360.0 {
        return Err(PhaseTableError::BadEnd(last));
    }

    for pair in sorted.windows(2) {
        let (previous, next) = (pair[0], pair[1]);
        if previous.degree_range.end != next.degree_range.start {
            return Err(PhaseTableError::Discontinuity {
                previous: previous.id.clone(),
                end: previous.degree_range.end,
                next: next.id.clone(),
                start: next.degree_range.start,
            });
        }
    }

    Ok(())
}
