// Unit tests for Relief Match

use relief_match::core::{
    availability::availability_overlap,
    scoring::{calculate_match_score, MIN_MATCH_SCORE},
    similarity::word_overlap_similarity,
};
use relief_match::models::{Availability, ScoringWeights, Skill, Volunteer};

fn availability(days: &[(&str, &[&str])]) -> Availability {
    days.iter()
        .map(|(day, slots)| {
            (
                day.to_string(),
                slots.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn test_heuristic_stays_in_band() {
    let texts = [
        "",
        "Plant Trees",
        "plant trees",
        "Certified Nurse",
        "Deliver water to shelters",
        "water",
        "  spaced   out  words ",
        "Ünïcödé Tëxt",
    ];

    for a in &texts {
        for b in &texts {
            let score = word_overlap_similarity(a, b);
            assert!(
                (0.3..=0.8).contains(&score),
                "similarity({:?}, {:?}) = {} outside [0.3, 0.8]",
                a,
                b,
                score
            );
        }
    }
}

#[test]
fn test_heuristic_is_case_insensitive() {
    assert_eq!(
        word_overlap_similarity("Sort Donations", "sort donations"),
        word_overlap_similarity("sort donations", "sort donations")
    );
}

#[test]
fn test_score_never_below_floor() {
    let weights = ScoringWeights::default();
    let samples = [0.0, 0.1, 0.25, 0.5, 0.75, 1.0];

    for &similarity in &samples {
        for &urgency in &samples {
            for &overlap in &samples {
                for &required in &[true, false] {
                    let score = calculate_match_score(similarity, urgency, overlap, required, false, &weights);
                    assert!(score >= MIN_MATCH_SCORE, "score {} below floor", score);
                }
            }
        }
    }
}

#[test]
fn test_specialty_penalty_strictly_lower() {
    let weights = ScoringWeights::default();

    let penalized = calculate_match_score(0.8, 0.6, 0.7, true, false, &weights);
    let specialist = calculate_match_score(0.8, 0.6, 0.7, true, true, &weights);

    assert!(penalized < specialist);
}

#[test]
fn test_example_scenario_score() {
    let similarity = word_overlap_similarity("Plant Trees", "Replant Garden Area");
    assert!((similarity - 0.3).abs() < 1e-9);

    let score = calculate_match_score(similarity, 5.0 / 10.0, 1.0, false, false, &ScoringWeights::default());
    assert!((score - 0.555).abs() < 1e-9, "Expected 0.555, got {}", score);
}

#[test]
fn test_overlap_no_requester_availability() {
    let volunteer = availability(&[("Monday", &["morning", "evening"])]);
    assert_eq!(availability_overlap(&volunteer, &Availability::new()), 0.0);
}

#[test]
fn test_overlap_full_coverage() {
    let volunteer = availability(&[("Saturday", &["morning", "afternoon", "evening"])]);
    let requester = availability(&[("Saturday", &["morning", "evening"])]);
    assert_eq!(availability_overlap(&volunteer, &requester), 1.0);
}

#[test]
fn test_overlap_volunteer_unavailable() {
    let requester = availability(&[("Saturday", &["morning"])]);
    assert_eq!(availability_overlap(&Availability::new(), &requester), 0.0);
}

#[test]
fn test_volunteer_json_shape() {
    let volunteer: Volunteer = serde_json::from_str(
        r#"{
            "_id": "v42",
            "availability": { "Monday": ["morning", "evening"] },
            "tasksWilling": [{ "title": "Certified First Aid" }, { "title": "Driving" }]
        }"#,
    )
    .unwrap();

    assert_eq!(volunteer.id, "v42");
    assert_eq!(volunteer.availability["Monday"].len(), 2);
    assert!(volunteer.specialist());

    let plain = Volunteer {
        tasks_willing: vec![Skill { title: "Driving".to_string() }],
        ..volunteer
    };
    assert!(!plain.specialist());
}
