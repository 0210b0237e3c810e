#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Polarity assigned to a piece of text.
pub enum SentimentType {
    /// More positive than negative evidence.
    Positive,
    /// More negative than positive evidence, or a negated tie.
    Negative,
    /// No usable evidence either way.
    Neutral,
}

impl SentimentType {
    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentType::Positive => "positive",
            SentimentType::Negative => "negative",
            SentimentType::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Outcome of scoring a single text.
pub struct SentimentResult {
    pub sentiment: SentimentType,
    /// Heuristic strength in `[0.5, 0.95]`; not a calibrated probability.
    pub confidence: f64,
}

impl SentimentResult {
    pub const NEUTRAL: SentimentResult = SentimentResult {
        sentiment: SentimentType::Neutral,
        confidence: 0.5,
    };

    pub fn new(sentiment: SentimentType, confidence: f64) -> Self {
        Self {
            sentiment,
            confidence,
        }
    }
}

impl From<SentimentResult> for (SentimentType, f64) {
    fn from(result: SentimentResult) -> Self {
        (result.sentiment, result.confidence)
    }
}
