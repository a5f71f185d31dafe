use crate::core::{
    availability::availability_overlap,
    scoring::{apply_specialty_penalty, calculate_match_score, MIN_MATCH_SCORE},
    similarity::SimilarityEstimator,
};
use crate::models::{MatchKind, MatchResult, Requester, ScoringWeights, Volunteer};
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};

/// Default cap on in-flight similarity comparisons per run
pub const DEFAULT_MAX_CONCURRENT_COMPARISONS: usize = 8;

/// Main matching orchestrator - enumerates every (record, task, skill) triple
///
/// # Pipeline Stages
/// 1. Collect the distinct (skill, task title) pairs of the run
/// 2. Estimate each pair once, with bounded concurrency
/// 3. Availability overlap per record, urgency per task
/// 4. Score every skill against the task and keep the best
///
/// Results follow input order and are neither sorted nor truncated.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    estimator: SimilarityEstimator,
    max_concurrent: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, estimator: SimilarityEstimator) -> Self {
        Self {
            weights,
            estimator,
            max_concurrent: DEFAULT_MAX_CONCURRENT_COMPARISONS,
        }
    }

    /// Heuristic similarity with default weights
    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default(), SimilarityEstimator::heuristic_only())
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    pub fn estimator(&self) -> &SimilarityEstimator {
        &self.estimator
    }

    /// Best score per requester task. Every task is returned, at worst at
    /// the match floor.
    pub async fn match_requester_tasks(
        &self,
        volunteer: &Volunteer,
        requesters: &[Requester],
    ) -> Vec<MatchResult> {
        self.enumerate(volunteer, requesters, MatchKind::Requester).await
    }

    /// Best score per organization task. Tasks where no skill produced any
    /// similarity after the specialty penalty are dropped.
    pub async fn match_organization_tasks(
        &self,
        volunteer: &Volunteer,
        organizations: &[Requester],
    ) -> Vec<MatchResult> {
        self.enumerate(volunteer, organizations, MatchKind::Organization).await
    }

    async fn enumerate(
        &self,
        volunteer: &Volunteer,
        records: &[Requester],
        kind: MatchKind,
    ) -> Vec<MatchResult> {
        let skills: Vec<&str> = volunteer.skill_titles().collect();
        let specialist = volunteer.specialist();
        let similarities = self.estimate_pairs(&skills, records).await;

        let mut results = Vec::new();

        for record in records {
            let overlap = availability_overlap(&volunteer.availability, &record.availability);

            for task in &record.tasks_requested {
                let urgency = task.normalized_urgency();
                let mut best_score = MIN_MATCH_SCORE;
                let mut best_similarity = 0.0_f64;

                for skill in &skills {
                    let similarity = similarities
                        .get(&(*skill, task.title.as_str()))
                        .copied()
                        .unwrap_or_default();

                    best_similarity = best_similarity.max(apply_specialty_penalty(
                        similarity,
                        task.specialty_required,
                        specialist,
                    ));

                    let score = calculate_match_score(
                        similarity,
                        urgency,
                        overlap,
                        task.specialty_required,
                        specialist,
                        &self.weights,
                    );
                    best_score = best_score.max(score);
                }

                if kind == MatchKind::Organization && best_similarity <= 0.0 {
                    tracing::trace!("Skipping organization task '{}' with no viable skill", task.title);
                    continue;
                }

                results.push(MatchResult {
                    kind,
                    requester_id: record.id.clone(),
                    name: record.name.clone(),
                    address: record.address.clone(),
                    task_title: task.title.clone(),
                    urgency: task.urgency,
                    specialty_required: task.specialty_required,
                    category: task.category.clone(),
                    final_score: best_score,
                });
            }
        }

        tracing::debug!(
            "Enumerated {} {:?} matches from {} records and {} skills",
            results.len(),
            kind,
            records.len(),
            skills.len()
        );

        results
    }

    /// Estimate every distinct (skill, task title) pair of the run once
    async fn estimate_pairs<'a>(
        &self,
        skills: &[&'a str],
        records: &'a [Requester],
    ) -> HashMap<(&'a str, &'a str), f64> {
        let pairs: HashSet<(&'a str, &'a str)> = records
            .iter()
            .flat_map(|record| record.tasks_requested.iter())
            .flat_map(move |task| skills.iter().map(move |skill| (*skill, task.title.as_str())))
            .collect();

        tracing::debug!("Estimating {} distinct similarity pairs", pairs.len());

        let estimator = &self.estimator;
        stream::iter(pairs)
            .map(move |(skill, task)| async move { ((skill, task), estimator.estimate(skill, task).await) })
            .buffer_unordered(self.max_concurrent)
            .collect()
            .await
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
