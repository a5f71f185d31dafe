use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ErrorResponse, FindMatchesResponse, HealthResponse, MatchResult, OrganizationMatchRequest,
    RequesterMatchRequest,
};
use crate::core::Matcher;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
}

impl AppState {
    /// Requested limit, falling back to the default and capped at the max
    fn effective_limit(&self, requested: Option<u16>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit) as usize
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/requesters", web::post().to(match_requesters))
        .route("/matches/organizations", web::post().to(match_organizations));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        similarity_backend: state.matcher.estimator().backend().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed for match request: field_errors={:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Sort by score (descending) and keep the top `limit`
pub fn rank_matches(mut matches: Vec<MatchResult>, limit: usize) -> Vec<MatchResult> {
    matches.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(limit);
    matches
}

fn ranked_response(matches: Vec<MatchResult>, limit: usize) -> FindMatchesResponse {
    let total_results = matches.len();
    FindMatchesResponse {
        run_id: uuid::Uuid::new_v4().to_string(),
        matches: rank_matches(matches, limit),
        total_results,
    }
}

/// Match a volunteer against requester tasks
///
/// POST /api/v1/matches/requesters
///
/// Request body:
/// ```json
/// {
///   "volunteer": { "availability": {}, "tasksWilling": [{ "title": "string" }] },
///   "requesters": [{ "_id": "string", "name": "string", "tasksRequested": [] }],
///   "limit": 5
/// }
/// ```
async fn match_requesters(
    state: web::Data<AppState>,
    req: web::Json<RequesterMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let limit = state.effective_limit(req.limit);

    tracing::info!(
        "Matching volunteer {} against {} requesters, limit: {}",
        req.volunteer.id,
        req.requesters.len(),
        limit
    );

    let matches = state
        .matcher
        .match_requester_tasks(&req.volunteer, &req.requesters)
        .await;

    let response = ranked_response(matches, limit);

    tracing::info!(
        "Returning {} requester matches for volunteer {} (from {} tasks), run {}",
        response.matches.len(),
        req.volunteer.id,
        response.total_results,
        response.run_id
    );

    HttpResponse::Ok().json(response)
}

/// Match a volunteer against organization tasks
///
/// POST /api/v1/matches/organizations
///
/// Same shape as the requester endpoint with `organizations` in place of
/// `requesters`. Tasks with no viable skill are left out.
async fn match_organizations(
    state: web::Data<AppState>,
    req: web::Json<OrganizationMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let limit = state.effective_limit(req.limit);

    tracing::info!(
        "Matching volunteer {} against {} organizations, limit: {}",
        req.volunteer.id,
        req.organizations.len(),
        limit
    );

    let matches = state
        .matcher
        .match_organization_tasks(&req.volunteer, &req.organizations)
        .await;

    let response = ranked_response(matches, limit);

    tracing::info!(
        "Returning {} organization matches for volunteer {} (from {} tasks), run {}",
        response.matches.len(),
        req.volunteer.id,
        response.total_results,
        response.run_id
    );

    HttpResponse::Ok().json(response)
}
