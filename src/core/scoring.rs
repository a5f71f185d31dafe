use crate::models::ScoringWeights;

/// Minimum final score for any evaluated task
pub const MIN_MATCH_SCORE: f64 = 0.15;

/// Factor applied to similarity when credentials are required but missing
pub const SPECIALTY_PENALTY: f64 = 0.5;

/// Similarity after the specialty penalty
#[inline]
pub fn apply_specialty_penalty(similarity: f64, specialty_required: bool, volunteer_specialist: bool) -> f64 {
    if specialty_required && !volunteer_specialist {
        similarity * SPECIALTY_PENALTY
    } else {
        similarity
    }
}

/// Calculate the final match score for one (skill, task) pairing
///
/// Scoring formula:
/// score = max(
///     similarity * 0.60 +    # Task-content fit, halved on missing credentials
///     urgency * 0.05 +       # Normalized urgency (urgency / 10)
///     overlap * 0.35,        # Availability overlap
///     0.15
/// )
pub fn calculate_match_score(
    similarity: f64,
    normalized_urgency: f64,
    overlap: f64,
    specialty_required: bool,
    volunteer_specialist: bool,
    weights: &ScoringWeights,
) -> f64 {
    let similarity = apply_specialty_penalty(similarity, specialty_required, volunteer_specialist);

    let score = similarity * weights.similarity
        + normalized_urgency * weights.urgency
        + overlap * weights.availability;

    score.max(MIN_MATCH_SCORE)
}
