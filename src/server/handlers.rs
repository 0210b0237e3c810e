use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use super::dto::{HealthResponse, SentimentRequest, SentimentResponse};
use super::error::ApiError;
use super::AppState;

/// Liveness probe. Never touches the analyzer.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Analyze the sentiment of the provided text.
pub async fn analyze_sentiment(
    State(state): State<AppState>,
    payload: Result<Json<SentimentRequest>, JsonRejection>,
) -> Result<Json<SentimentResponse>, ApiError> {
    let Json(request) = payload?;
    validate_text(&request.text, state.settings.max_text_length)?;

    tracing::info!(
        "Analyzing sentiment for text of length {}",
        request.text.chars().count()
    );
    let result = state.pipeline.predict(&request.text);

    Ok(Json(SentimentResponse::new(request.text, result)))
}

fn validate_text(text: &str, max_len: usize) -> Result<(), ApiError> {
    if text.is_empty() {
        return Err(ApiError::Validation(
            "text: must contain at least 1 character".to_string(),
        ));
    }
    let len = text.chars().count();
    if len > max_len {
        return Err(ApiError::Validation(format!(
            "text: must contain at most {max_len} characters, got {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_text_bounds() {
        assert!(validate_text("a", 1).is_ok());
        assert!(matches!(validate_text("", 10), Err(ApiError::Validation(_))));
        assert!(matches!(validate_text("ab", 1), Err(ApiError::Validation(_))));
        // counted in characters, not bytes
        assert!(validate_text("éé", 2).is_ok());
    }
}
