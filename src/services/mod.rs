// Service exports
pub mod cache;
pub mod llm;

pub use cache::CachedSimilarity;
pub use llm::{LlmClient, LlmError};
