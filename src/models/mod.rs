// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Availability, MatchKind, MatchResult, Requester, ScoringWeights, Skill, TaskRequest, Volunteer, SPECIALTY_KEYWORDS};
pub use requests::{OrganizationMatchRequest, RequesterMatchRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse};
