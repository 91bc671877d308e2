use phasewheel::aspects::{all_aspects, find_aspect_in, get_aspect_by_id, get_aspect_for_degree, Aspect, AspectCategory};

#[test]
fn test_exact_hits_for_every_entry() {
    for aspect in all_aspects() {
        let found = get_aspect_for_degree(aspect.degrees).unwrap();
        assert_eq!(found.id, aspect.id);
    }
}

#[test]
fn test_conjunction_at_zero_and_full_circle() {
    assert_eq!(get_aspect_for_degree(0.0).unwrap().id, "conjunction");
    assert_eq!(get_aspect_for_degree(360.0).unwrap().id, "conjunction");
}

#[test]
fn test_wrapped_inputs_match_their_equivalent() {
    let five = get_aspect_for_degree(5.0).unwrap();
    assert_eq!(get_aspect_for_degree(365.0).unwrap(), five);
    assert_eq!(get_aspect_for_degree(-355.0).unwrap(), five);
}

#[test]
fn test_closest_candidate_wins() {
    // 47 sits inside semisquare (45±3) and is outside septile (51.25±2)
    assert_eq!(get_aspect_for_degree(47.0).unwrap().id, "semisquare");
    // 148 is past the bi-quintile window (144±3)
    assert_eq!(get_aspect_for_degree(148.0).unwrap().id, "inconjunct");
    // 153 lies in inconjunct (150±5) and tri-septile (154±2); tri-septile is closer
    assert_eq!(get_aspect_for_degree(153.0).unwrap().id, "tri-septile");
    // 140 lies in sesquiquadrate (135±5) and is 4 from bi-quintile (144±3, outside)
    assert_eq!(get_aspect_for_degree(140.0).unwrap().id, "sesquiquadrate");
}

#[test]
fn test_sparse_gaps_return_none() {
    for degree in [35.0, 55.0, 66.0, 77.0, 107.0, 165.0, 200.0, 355.0] {
        assert!(get_aspect_for_degree(degree).is_none(), "{} should not match", degree);
    }
}

#[test]
fn test_no_wrap_for_distances_near_full_circle() {
    // 350 is 10 away from 360 but the table is compared linearly
    assert!(get_aspect_for_degree(350.0).is_none());
}

#[test]
fn test_tie_goes_to_first_declared() {
    let table = vec![
        Aspect::new("first", "First", 90.0, 5.0, AspectCategory::Major),
        Aspect::new("second", "Second", 90.0, 5.0, AspectCategory::Minor),
    ];
    assert_eq!(find_aspect_in(&table, 92.0).unwrap().id, "first");

    let reversed: Vec<Aspect> = table.iter().rev().cloned().collect();
    assert_eq!(find_aspect_in(&reversed, 92.0).unwrap().id, "second");
}

#[test]
fn test_equidistant_neighbours_keep_earlier_entry() {
    let table = vec![
        Aspect::new("low", "Low", 80.0, 10.0, AspectCategory::Major),
        Aspect::new("high", "High", 100.0, 10.0, AspectCategory::Major),
    ];
    assert_eq!(find_aspect_in(&table, 90.0).unwrap().id, "low");
}

#[test]
fn test_major_minor_split() {
    let majors: Vec<&str> = all_aspects()
        .iter()
        .filter(|a| a.is_major())
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(majors, vec!["conjunction", "sextile", "square", "trine", "opposition"]);
    assert_eq!(get_aspect_by_id("inconjunct").unwrap().name, "Inconjunct/Quincunx");
}

#[test]
fn test_serializes_category_lowercase() {
    let json = serde_json::to_value(get_aspect_by_id("square").unwrap()).unwrap();
    assert_eq!(json["category"], "major");
    assert_eq!(json["degrees"], 90.0);
    assert!(json.get("symbol").is_none());
}
