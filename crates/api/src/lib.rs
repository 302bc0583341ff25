mod config;
mod rate_limit;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{body::Body, Router};
use itinera_core::{known_cities, ItineraryGenerator, PlannerConfig, RngSampler, TripInput};
use itinera_observability::{MetricsSnapshot, PlannerMetrics};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

pub use crate::config::ApiConfig;
use crate::rate_limit::{ClientRateLimiter, RateDecision};

const MAX_BODY_BYTES: usize = 64 * 1024;
const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct ApiState {
    pub generator: Arc<ItineraryGenerator>,
    pub metrics: Arc<PlannerMetrics>,
    pub api_key: Arc<str>,
    pub allowed_origins: Arc<Vec<String>>,
    limiter: ClientRateLimiter,
}

impl ApiState {
    pub fn new(config: &ApiConfig, planner: PlannerConfig) -> Self {
        Self {
            generator: Arc::new(ItineraryGenerator::new(planner)),
            metrics: PlannerMetrics::shared(),
            api_key: Arc::from(config.api_key.as_str()),
            allowed_origins: Arc::new(config.allowed_origins.clone()),
            limiter: ClientRateLimiter::new(config.rate_limit_window, config.rate_limit_max),
        }
    }
}

/// Request body for `/v1/plan`: the trip input plus optional replay controls.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    #[serde(flatten)]
    pub input: TripInput,
    /// Fixed seed for a reproducible plan.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Marks a re-roll of a previously shown plan.
    #[serde(default)]
    pub regenerate: bool,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: MetricsSnapshot,
}

#[derive(Debug, Serialize)]
struct CitiesResponse {
    cities: Vec<&'static str>,
}

/// Router for an already-loaded [`ApiConfig`]; planner settings come from the environment.
pub fn build_app(config: &ApiConfig) -> Result<Router> {
    let planner = PlannerConfig::from_env().context("invalid planner configuration")?;
    Ok(build_router(ApiState::new(config, planner)))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/cities", get(cities))
        .route("/v1/plan", post(plan))
        .layer(cors_layer(&state.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

async fn cities() -> impl IntoResponse {
    Json(CitiesResponse {
        cities: known_cities(),
    })
}

#[instrument(skip_all)]
async fn plan(
    State(state): State<ApiState>,
    body: Result<Json<PlanRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return error_response(rejection.status(), "invalid_body", &rejection.body_text());
        }
    };

    let started = Instant::now();
    state.metrics.inc_request();
    if request.regenerate {
        state.metrics.inc_regeneration();
    }

    let (plan, outcome) = match request.seed {
        Some(seed) => state
            .generator
            .generate_with_outcome(&request.input, &mut RngSampler::seeded(seed)),
        None => state
            .generator
            .generate_with_outcome(&request.input, &mut RngSampler::from_entropy()),
    };

    state
        .metrics
        .record_plan(outcome.known_city, outcome.extended_trip);
    state.metrics.observe_latency(started.elapsed());
    info!(
        seeded = request.seed.is_some(),
        regenerate = request.regenerate,
        known_city = outcome.known_city,
        "plan served"
    );

    (StatusCode::OK, Json(plan)).into_response()
}

fn error_response(status: StatusCode, error: &str, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": error,
            "message": message
        })),
    )
        .into_response()
}

/// Preflight requests and the health probe bypass both key and quota checks.
fn bypasses_guards(request: &Request<Body>) -> bool {
    request.method() == Method::OPTIONS || request.uri().path() == "/health"
}

fn has_valid_key(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|presented| presented == expected)
}

async fn api_key_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if bypasses_guards(&request) || has_valid_key(request.headers(), &state.api_key) {
        return next.run(request).await;
    }

    error_response(
        StatusCode::UNAUTHORIZED,
        "unauthorized",
        "missing or invalid x-api-key",
    )
}

async fn rate_limit_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if bypasses_guards(&request) {
        return next.run(request).await;
    }

    let client = client_key(request.headers());
    let RateDecision::Limited { retry_after } = state.limiter.check(&client) else {
        return next.run(request).await;
    };

    let mut response = error_response(
        StatusCode::TOO_MANY_REQUESTS,
        "rate_limited",
        "too many plan requests from this client",
    );
    if let Ok(value) = HeaderValue::from_str(&retry_after.as_secs().max(1).to_string()) {
        response.headers_mut().insert(header::RETRY_AFTER, value);
    }
    response
}

/// First hop of `x-forwarded-for`, or a shared bucket for direct callers.
fn client_key(headers: &HeaderMap) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .unwrap_or_default();

    if forwarded.is_empty() {
        "local".to_string()
    } else {
        forwarded.to_string()
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(API_KEY_HEADER)])
}
