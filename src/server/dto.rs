use serde::{Deserialize, Serialize};

use crate::core::{SentimentResult, SentimentType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRequest {
    /// The text to analyze for sentiment.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResponse {
    /// The original text analyzed.
    pub text: String,
    pub sentiment: SentimentType,
    pub confidence: f64,
}

impl SentimentResponse {
    pub fn new(text: String, result: SentimentResult) -> Self {
        Self {
            text,
            sentiment: result.sentiment,
            confidence: result.confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
