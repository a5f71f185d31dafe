//! Relief Match - volunteer-to-task matching service for disaster relief coordination
//!
//! This library scores how well a volunteer fits the tasks posted by requesters
//! and organizations, blending skill similarity, urgency and schedule overlap.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, SimilarityEstimator, SimilarityProvider, availability_overlap, calculate_match_score, word_overlap_similarity};
pub use models::{MatchResult, Requester, ScoringWeights, TaskRequest, Volunteer};
