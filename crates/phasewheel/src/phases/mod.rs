pub mod table;
pub mod types;

pub use table::{
    all_phases, find_phase_in, get_phase_by_id, get_phase_for_degree, validate_phase_coverage,
    PhaseTableError, PHASE_COUNT,
};
pub use types::{DegreeRange, Phase, Polarity};
