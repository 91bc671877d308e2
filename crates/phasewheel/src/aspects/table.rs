use crate::aspects::types::{Aspect, AspectCategory};
use crate::resolver::normalize_degrees;

// Declaration order matters: ties on distance go to the earlier entry.
lazy_static::lazy_static! {
    static ref ASPECTS: Vec<Aspect> = vec![
        Aspect::new("conjunction", "Conjunction", 0.0, 10.0, AspectCategory::Major),
        Aspect::new("semi-sextile", "Semi-Sextile", 30.0, 3.0, AspectCategory::Minor),
        Aspect::new("novile", "Novile", 40.0, 2.0, AspectCategory::Minor),
        Aspect::new("semisquare", "Semisquare", 45.0, 3.0, AspectCategory::Minor),
        Aspect::new("septile", "Septile", 51.25, 2.0, AspectCategory::Minor),
        Aspect::new("sextile", "Sextile", 60.0, 4.0, AspectCategory::Major),
        Aspect::new("quintile", "Quintile", 72.0, 3.0, AspectCategory::Minor),
        Aspect::new("square", "Square", 90.0, 10.0, AspectCategory::Major),
        Aspect::new("bi-septile", "Bi-Septile", 102.5, 2.0, AspectCategory::Minor),
        Aspect::new("trine", "Trine", 120.0, 10.0, AspectCategory::Major),
        Aspect::new("sesquiquadrate", "Sesquiquadrate", 135.0, 5.0, AspectCategory::Minor),
        Aspect::new("bi-quintile", "Bi-Quintile", 144.0, 3.0, AspectCategory::Minor),
        Aspect::new("inconjunct", "Inconjunct/Quincunx", 150.0, 5.0, AspectCategory::Minor),
        Aspect::new("tri-septile", "Tri-Septile", 154.0, 2.0, AspectCategory::Minor),
        Aspect::new("opposition", "Opposition", 180.0, 10.0, AspectCategory::Major),
    ];
}

/// The built-in aspect table, in declaration order.
pub fn all_aspects() -> &'static [Aspect] {
    ASPECTS.as_slice()
}

pub fn get_aspect_by_id(id: &str) -> Option<&'static Aspect> {
    ASPECTS.iter().find(|aspect| aspect.id == id)
}

/// Closest aspect whose orb contains `degree`, from the built-in table.
pub fn get_aspect_for_degree(degree: f64) -> Option<&'static Aspect> {
    find_aspect_in(all_aspects(), degree)
}

/// Closest aspect whose orb contains `degree`.
///
/// The degree is normalized into [0, 360) first. Candidates are compared by
/// absolute distance to their nominal angle; on an exact tie the entry that
/// appears first in `table` is kept.
pub fn find_aspect_in(table: &[Aspect], degree: f64) -> Option<&Aspect> {
    let normalized = normalize_degrees(degree);

    let mut closest: Option<&Aspect> = None;
    let mut min_distance = f64::INFINITY;

    for aspect in table {
        let distance = aspect.distance_to(normalized);
        if distance <= aspect.orb && distance < min_distance {
            closest = Some(aspect);
            min_distance = distance;
        }
    }

    closest
}
