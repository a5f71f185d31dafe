use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Lower bound of the word-overlap heuristic
pub const HEURISTIC_FLOOR: f64 = 0.3;

/// Width of the band the heuristic maps overlap into
pub const HEURISTIC_SPAN: f64 = 0.5;

/// Errors a similarity provider can report
#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("Similarity provider unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid similarity response: {0}")]
    InvalidResponse(String),

    #[error("Similarity score out of range: {0}")]
    OutOfRange(f64),
}

/// Scores how closely a volunteer skill matches a task title
#[async_trait]
pub trait SimilarityProvider: Send + Sync {
    async fn similarity(&self, skill: &str, task: &str) -> Result<f64, SimilarityError>;

    /// Short backend name for logs and health output
    fn name(&self) -> &'static str;
}

/// Whether a provider score can be used as-is
#[inline]
pub fn is_valid_score(score: f64) -> bool {
    score.is_finite() && (0.0..=1.0).contains(&score)
}

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Word-overlap similarity in [0.3, 0.8]
///
/// Jaccard overlap of the lower-cased whitespace tokens, mapped linearly
/// into the heuristic band. An empty union counts as size 1.
pub fn word_overlap_similarity(skill: &str, task: &str) -> f64 {
    let skill_words = word_set(skill);
    let task_words = word_set(task);

    let common = skill_words.intersection(&task_words).count();
    let union = skill_words.union(&task_words).count().max(1);

    let overlap = common as f64 / union as f64;
    (HEURISTIC_FLOOR + overlap * HEURISTIC_SPAN).clamp(0.0, 1.0)
}

/// Deterministic provider backed by [`word_overlap_similarity`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSimilarity;

#[async_trait]
impl SimilarityProvider for HeuristicSimilarity {
    async fn similarity(&self, skill: &str, task: &str) -> Result<f64, SimilarityError> {
        Ok(word_overlap_similarity(skill, task))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Similarity estimator with transparent fallback
///
/// Asks the primary provider first. A provider error or a score outside
/// [0, 1] switches that single comparison to the word-overlap heuristic;
/// there are no retries. `estimate` never fails.
#[derive(Clone)]
pub struct SimilarityEstimator {
    primary: Option<Arc<dyn SimilarityProvider>>,
    fallback: HeuristicSimilarity,
}

impl SimilarityEstimator {
    pub fn new(primary: Arc<dyn SimilarityProvider>) -> Self {
        Self {
            primary: Some(primary),
            fallback: HeuristicSimilarity,
        }
    }

    pub fn heuristic_only() -> Self {
        Self {
            primary: None,
            fallback: HeuristicSimilarity,
        }
    }

    /// Name of the provider tried first
    pub fn backend(&self) -> &'static str {
        self.primary
            .as_ref()
            .map(|p| p.name())
            .unwrap_or_else(|| self.fallback.name())
    }

    pub async fn estimate(&self, skill: &str, task: &str) -> f64 {
        if let Some(primary) = &self.primary {
            match primary.similarity(skill, task).await {
                Ok(score) if is_valid_score(score) => {
                    tracing::debug!(
                        backend = primary.name(),
                        skill,
                        task,
                        score,
                        "similarity estimated"
                    );
                    return score;
                }
                Ok(score) => {
                    tracing::warn!(
                        backend = primary.name(),
                        skill,
                        task,
                        "{}, using heuristic",
                        SimilarityError::OutOfRange(score)
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        backend = primary.name(),
                        skill,
                        task,
                        "{}, using heuristic",
                        e
                    );
                }
            }
        }

        let score = word_overlap_similarity(skill, task);
        tracing::debug!(backend = self.fallback.name(), skill, task, score, "similarity estimated");
        score
    }
}

impl Default for SimilarityEstimator {
    fn default() -> Self {
        Self::heuristic_only()
    }
}

impl std::fmt::Debug for SimilarityEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityEstimator")
            .field("backend", &self.backend())
            .finish()
    }
}
