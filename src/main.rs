use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use relief_match::config::Settings;
use relief_match::core::{Matcher, SimilarityEstimator, SimilarityProvider};
use relief_match::models::ScoringWeights;
use relief_match::routes::{self, matches::AppState};
use relief_match::services::{CachedSimilarity, LlmClient};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Build the similarity estimator from config: remote model (optionally
/// cached) with heuristic fallback, or heuristic only without an API key.
fn build_estimator(settings: &Settings) -> SimilarityEstimator {
    if !settings.llm.enabled() {
        info!("No LLM API key configured, using heuristic similarity only");
        return SimilarityEstimator::heuristic_only();
    }

    let client = match LlmClient::new(
        settings.llm.endpoint.clone(),
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
        settings.llm.timeout(),
    ) {
        Ok(client) => client,
        Err(e) => {
            warn!("Failed to build LLM client ({}), using heuristic similarity only", e);
            return SimilarityEstimator::heuristic_only();
        }
    };

    info!("LLM similarity enabled (model: {}, endpoint: {})", settings.llm.model, settings.llm.endpoint);

    let provider: Arc<dyn SimilarityProvider> = if settings.cache.enabled {
        info!(
            "Similarity cache enabled ({} entries, TTL: {}s)",
            settings.cache.capacity, settings.cache.ttl_secs
        );
        Arc::new(CachedSimilarity::new(client, settings.cache.capacity, settings.cache.ttl_secs))
    } else {
        Arc::new(client)
    };

    SimilarityEstimator::new(provider)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    // Initialize logging (LOG_LEVEL / LOG_FORMAT override the config file)
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    info!("Starting Relief Match service...");
    info!("Configuration loaded successfully");

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let matcher = Matcher::new(weights, build_estimator(&settings))
        .with_max_concurrent(settings.matching.max_concurrent_comparisons);

    info!(
        "Matcher initialized with weights: {:?}, max concurrent comparisons: {}",
        weights, settings.matching.max_concurrent_comparisons
    );

    let app_state = AppState {
        matcher,
        default_limit: settings.matching.default_limit,
        max_limit: settings.matching.max_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().limit(4 * 1024 * 1024).error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
