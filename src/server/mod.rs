//! HTTP surface of the analyzer.
//!
//! Routes:
//! - `POST /api/v1/analyze` - classify `{"text": ...}`
//! - `GET /health` - liveness payload
//!
//! Validation failures answer 422 and unexpected failures (panics included)
//! answer an opaque 500, both with a `{"detail": ...}` body.

pub mod dto;
pub mod error;
pub mod handlers;

use std::any::Any;
use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::core::Settings;
use crate::pipelines::sentiment_analysis_pipeline::{
    RuleBasedModel, SentimentAnalysisPipeline, SentimentAnalysisPipelineBuilder,
};

pub use dto::{ErrorBody, HealthResponse, SentimentRequest, SentimentResponse};
pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SentimentAnalysisPipeline<RuleBasedModel>>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build the default rule-based pipeline from `settings`.
    pub fn from_settings(settings: Settings) -> anyhow::Result<Self> {
        let pipeline = SentimentAnalysisPipelineBuilder::rule_based()
            .config(settings.analyzer_config())
            .build()?;
        Ok(Self {
            pipeline: Arc::new(pipeline),
            settings: Arc::new(settings),
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/v1/analyze", post(handlers::analyze_sentiment))
        .with_state(state);
    with_middleware(routes)
}

/// Wrap `router` in tracing, permissive CORS and panic-to-500 handling.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(AnyOrigin)
                    .allow_methods(AnyOrigin)
                    .allow_headers(AnyOrigin),
            )
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(anyhow::anyhow!("handler panicked: {message}")).into_response()
}
