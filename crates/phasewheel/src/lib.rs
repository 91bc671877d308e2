pub mod archetypes;
pub mod aspects;
pub mod phases;
pub mod quota;
pub mod report;
pub mod resolver;

pub use aspects::{get_aspect_by_id, get_aspect_for_degree, Aspect, AspectCategory};
pub use phases::{get_phase_by_id, get_phase_for_degree, Phase, Polarity};
pub use resolver::{
    calculate_phase_and_aspect, normalize_degrees, resolve, PhaseAspectResolver, PhaseAspectResult,
};
