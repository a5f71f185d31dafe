// Core algorithm exports
pub mod availability;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use availability::availability_overlap;
pub use matcher::Matcher;
pub use scoring::{apply_specialty_penalty, calculate_match_score, MIN_MATCH_SCORE, SPECIALTY_PENALTY};
pub use similarity::{word_overlap_similarity, HeuristicSimilarity, SimilarityError, SimilarityEstimator, SimilarityProvider};
