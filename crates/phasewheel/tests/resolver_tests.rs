use phasewheel::aspects::{Aspect, AspectCategory};
use phasewheel::phases::all_phases;
use phasewheel::resolver::{NO_ASPECT_MESSAGE, OUT_OF_RANGE_MESSAGE};
use phasewheel::{calculate_phase_and_aspect, resolve, PhaseAspectResolver};

fn ids(degree: f64) -> (Option<String>, Option<String>) {
    let result = resolve(degree);
    (
        result.phase.map(|p| p.id.clone()),
        result.aspect.map(|a| a.id.clone()),
    )
}

#[test]
fn test_inconjunct_in_gibbous() {
    let result = calculate_phase_and_aspect(150.0);
    assert_eq!(result.phase.unwrap().id, "gibbous");
    assert_eq!(result.phase.unwrap().name, "Gibbous Phase");
    assert_eq!(result.aspect.unwrap().id, "inconjunct");
    assert_eq!(result.degree_from_aspect, Some(0.0));
    assert!(result.is_exact);
    assert_eq!(result.message, None);
}

#[test]
fn test_square_in_first_quarter() {
    let result = resolve(90.0);
    assert_eq!(result.phase.unwrap().id, "first-quarter");
    assert_eq!(result.aspect.unwrap().id, "square");
    assert_eq!(result.degree_from_aspect, Some(0.0));
    assert!(result.is_exact);
}

#[test]
fn test_negative_input_wraps() {
    let result = resolve(-10.0);
    assert_eq!(result.phase.unwrap().id, "balsamic");
    assert_eq!(result, resolve(350.0));
}

#[test]
fn test_past_full_circle_matches_small_angle() {
    assert_eq!(resolve(365.0), resolve(5.0));
    let result = resolve(5.0);
    assert_eq!(result.phase.unwrap().id, "new");
    assert_eq!(result.aspect.unwrap().id, "conjunction");
    assert_eq!(result.degree_from_aspect, Some(5.0));
    assert!(!result.is_exact);
}

#[test]
fn test_zero_and_full_circle_are_identical() {
    assert_eq!(resolve(0.0), resolve(360.0));
    assert!(resolve(0.0).is_exact);
}

#[test]
fn test_boundary_45_is_crescent() {
    let result = resolve(45.0);
    assert_eq!(result.phase.unwrap().id, "crescent");
    assert_eq!(result.aspect.unwrap().id, "semisquare");
}

#[test]
fn test_periodicity() {
    for degree in [0.0, 12.5, 45.0, 90.5, 150.0, 222.25, 315.0, 359.5] {
        let base = ids(degree);
        for k in [-3.0, -1.0, 1.0, 2.0, 5.0] {
            assert_eq!(ids(degree + 360.0 * k), base, "{} + 360*{}", degree, k);
        }
    }
}

#[test]
fn test_exactness_threshold_is_strict() {
    let one_off = resolve(91.0);
    assert_eq!(one_off.aspect.unwrap().id, "square");
    assert_eq!(one_off.degree_from_aspect, Some(1.0));
    assert!(!one_off.is_exact);

    let half_off = resolve(90.5);
    assert_eq!(half_off.degree_from_aspect, Some(0.5));
    assert!(half_off.is_exact);
}

#[test]
fn test_gap_between_minor_windows() {
    let result = resolve(55.0);
    assert!(result.aspect.is_none());
    assert_eq!(result.degree_from_aspect, None);
    assert!(!result.is_exact);
    assert_eq!(result.phase.unwrap().id, "crescent");
    assert_eq!(result.message, Some(NO_ASPECT_MESSAGE));
}

#[test]
fn test_tie_break_through_resolver() {
    let aspects = vec![
        Aspect::new("declared-first", "Declared First", 120.0, 8.0, AspectCategory::Major),
        Aspect::new("declared-second", "Declared Second", 120.0, 8.0, AspectCategory::Major),
    ];
    let resolver = PhaseAspectResolver::new(&aspects, all_phases());
    let result = resolver.resolve(123.0);
    assert_eq!(result.aspect.unwrap().id, "declared-first");
    assert_eq!(result.degree_from_aspect, Some(3.0));
}

#[test]
fn test_missing_phase_reports_out_of_range() {
    let phases: Vec<_> = all_phases()[1..].to_vec();
    let resolver = PhaseAspectResolver::new(phasewheel::aspects::all_aspects(), &phases);
    let result = resolver.resolve(5.0);
    assert!(result.phase.is_none());
    // the aspect still resolves; the phase message takes precedence
    assert_eq!(result.aspect.unwrap().id, "conjunction");
    assert_eq!(result.message, Some(OUT_OF_RANGE_MESSAGE));
}

#[test]
fn test_result_json_shape() {
    let json = serde_json::to_value(resolve(150.0)).unwrap();
    assert_eq!(json["phase"]["id"], "gibbous");
    assert_eq!(json["aspect"]["id"], "inconjunct");
    assert_eq!(json["isExact"], true);
    assert_eq!(json["degreeFromAspect"], 0.0);
    assert!(json.get("message").is_none());

    let gap = serde_json::to_value(resolve(200.0)).unwrap();
    assert!(gap["aspect"].is_null());
    assert!(gap["degreeFromAspect"].is_null());
    assert_eq!(gap["message"], NO_ASPECT_MESSAGE);
}

#[test]
fn test_concurrent_callers_agree() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || resolve(i as f64 * 45.0 + 1.0)))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result, resolve(i as f64 * 45.0 + 1.0));
    }
}
