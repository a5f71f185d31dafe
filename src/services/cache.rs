use crate::core::similarity::{is_valid_score, SimilarityError, SimilarityProvider};
use async_trait::async_trait;
use std::time::Duration;

/// Caching decorator for a similarity provider
///
/// Keeps in-range provider scores keyed on (skill, task) for a bounded
/// time. Errors and out-of-range scores are never cached, so a transient
/// failure does not pin the heuristic value.
pub struct CachedSimilarity<P> {
    inner: P,
    cache: moka::future::Cache<(String, String), f64>,
}

impl<P: SimilarityProvider> CachedSimilarity<P> {
    pub fn new(inner: P, capacity: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner, cache }
    }
}

#[async_trait]
impl<P: SimilarityProvider> SimilarityProvider for CachedSimilarity<P> {
    async fn similarity(&self, skill: &str, task: &str) -> Result<f64, SimilarityError> {
        let key = (skill.to_string(), task.to_string());

        if let Some(score) = self.cache.get(&key).await {
            tracing::trace!("Similarity cache hit: {:?}", key);
            return Ok(score);
        }

        let score = self.inner.similarity(skill, task).await?;
        if is_valid_score(score) {
            self.cache.insert(key, score).await;
        }

        Ok(score)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
