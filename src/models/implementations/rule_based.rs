//! Rule-based sentiment scorer.
//!
//! Scores text by counting lexicon hits after normalization, flipping polarity
//! while a negation is active. A negation stays active until the scan reaches a
//! token index that is a nonzero multiple of the configured window, so the
//! effective span after a negation word varies between 1 and `window` tokens
//! depending on where it falls.

use std::sync::Arc;

use crate::core::{AnalyzerConfig, SentimentResult, SentimentType};
use crate::models::lexicon::{Lexicon, WordClass};
use crate::pipelines::sentiment_analysis_pipeline::SentimentAnalysisModel;

const MIN_POLAR_CONFIDENCE: f64 = 0.6;
const MAX_CONFIDENCE: f64 = 0.95;
const NEGATED_TIE_CONFIDENCE: f64 = 0.6;

/// Options for [`RuleBasedModel`].
#[derive(Debug, Clone)]
pub struct RuleBasedOptions {
    pub lexicon: Arc<Lexicon>,
    pub config: AnalyzerConfig,
}

impl Default for RuleBasedOptions {
    fn default() -> Self {
        Self {
            lexicon: Arc::new(Lexicon::english()),
            config: AnalyzerConfig::default(),
        }
    }
}

/// Raw counts gathered by a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub tokens: usize,
    pub positive: usize,
    pub negative: usize,
    pub saw_negation: bool,
}

#[derive(Debug, Clone)]
pub struct RuleBasedModel {
    lexicon: Arc<Lexicon>,
    config: AnalyzerConfig,
}

impl RuleBasedModel {
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Walk the tokens, counting polar words with negation applied.
    pub fn tally(&self, tokens: &[String]) -> Tally {
        let window = self.config.negation_window;
        let mut tally = Tally {
            tokens: tokens.len(),
            ..Tally::default()
        };
        let mut negated = false;

        for (i, token) in tokens.iter().enumerate() {
            let class = self.lexicon.classify(token);
            if class == Some(WordClass::Negation) {
                negated = true;
                tally.saw_negation = true;
                continue;
            }

            if negated && i > 0 && i % window == 0 {
                negated = false;
            }

            match (class, negated) {
                (Some(WordClass::Positive), false) | (Some(WordClass::Negative), true) => {
                    tally.positive += 1
                }
                (Some(WordClass::Positive), true) | (Some(WordClass::Negative), false) => {
                    tally.negative += 1
                }
                _ => {}
            }
        }

        tally
    }
}

impl SentimentAnalysisModel for RuleBasedModel {
    type Options = RuleBasedOptions;

    fn new(options: Self::Options) -> anyhow::Result<Self> {
        options.config.validate()?;
        Ok(Self {
            lexicon: options.lexicon,
            config: options.config,
        })
    }

    fn predict(&self, text: &str) -> SentimentResult {
        if text.is_empty() {
            tracing::warn!("Empty text provided for sentiment analysis");
            return SentimentResult::NEUTRAL;
        }

        let tokens = tokenize(text);
        if tokens.is_empty() {
            tracing::info!("No words found after normalization, classifying as neutral");
            return SentimentResult::NEUTRAL;
        }

        let tally = self.tally(&tokens);
        tracing::debug!(
            tokens = tally.tokens,
            positive = tally.positive,
            negative = tally.negative,
            negation = tally.saw_negation,
            "scanned text"
        );

        if tally.positive == 0 && tally.negative == 0 {
            tracing::info!("No sentiment words found, classifying as neutral");
        }

        classify(&tally)
    }
}

/// Lowercase `text`, blank out everything but alphanumerics and whitespace, and
/// split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Turn scan counts into a label and confidence.
pub fn classify(tally: &Tally) -> SentimentResult {
    let margin = |winner: usize, loser: usize| {
        let raw = (winner - loser) as f64 / tally.tokens.max(1) as f64;
        (0.5 + raw).clamp(MIN_POLAR_CONFIDENCE, MAX_CONFIDENCE)
    };

    if tally.positive > tally.negative {
        SentimentResult::new(
            SentimentType::Positive,
            margin(tally.positive, tally.negative),
        )
    } else if tally.negative > tally.positive {
        SentimentResult::new(
            SentimentType::Negative,
            margin(tally.negative, tally.positive),
        )
    } else if tally.saw_negation && (tally.positive > 0 || tally.negative > 0) {
        SentimentResult::new(SentimentType::Negative, NEGATED_TIE_CONFIDENCE)
    } else {
        SentimentResult::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_window(window: usize) -> RuleBasedModel {
        RuleBasedModel::new(RuleBasedOptions {
            config: AnalyzerConfig {
                negation_window: window,
            },
            ..RuleBasedOptions::default()
        })
        .unwrap()
    }

    fn tokens(text: &str) -> Vec<String> {
        tokenize(text)
    }

    #[test]
    fn tokenize_strips_punctuation_and_case() {
        assert_eq!(tokens("Good, GREAT!"), vec!["good", "great"]);
        assert_eq!(tokens("it's fine"), vec!["it", "s", "fine"]);
        assert_eq!(tokens("a\tb\nc"), vec!["a", "b", "c"]);
        assert!(tokens(" ... !!! ").is_empty());
    }

    #[test]
    fn tokenize_keeps_digits_and_unicode_letters() {
        assert_eq!(tokens("Café 42x"), vec!["café", "42x"]);
    }

    #[test]
    fn negation_inverts_following_word() {
        let model = model_with_window(4);
        let tally = model.tally(&tokens("not good"));
        assert_eq!(tally.positive, 0);
        assert_eq!(tally.negative, 1);
        assert!(tally.saw_negation);
    }

    #[test]
    fn negation_resets_at_window_boundary() {
        let model = model_with_window(4);
        // "not" at 2, "good" at 4 is past the reset at index 4
        let tally = model.tally(&tokens("it is not really good"));
        assert_eq!((tally.positive, tally.negative), (1, 0));

        // "not" at 0, "good" at 3 is still inside the window
        let tally = model.tally(&tokens("not very very good"));
        assert_eq!((tally.positive, tally.negative), (0, 1));
    }

    #[test]
    fn negation_word_at_multiple_of_window_is_not_reset() {
        let model = model_with_window(4);
        // "not" sits at index 4; the reset check only applies to non-negation tokens
        let tally = model.tally(&tokens("a b c d not good"));
        assert_eq!((tally.positive, tally.negative), (0, 1));
    }

    #[test]
    fn window_of_three_changes_span() {
        // "not" at 1, "good" at 3
        let text = "it not really good";
        assert_eq!(model_with_window(4).tally(&tokens(text)).negative, 1);
        assert_eq!(model_with_window(3).tally(&tokens(text)).positive, 1);
    }

    #[test]
    fn negated_negative_counts_positive() {
        let model = model_with_window(4);
        let tally = model.tally(&tokens("never bad"));
        assert_eq!((tally.positive, tally.negative), (1, 0));
    }

    #[test]
    fn classify_tie_breaks() {
        let negated_tie = Tally {
            tokens: 5,
            positive: 1,
            negative: 1,
            saw_negation: true,
        };
        assert_eq!(
            classify(&negated_tie),
            SentimentResult::new(SentimentType::Negative, 0.6)
        );

        let plain_tie = Tally {
            saw_negation: false,
            ..negated_tie
        };
        assert_eq!(classify(&plain_tie), SentimentResult::NEUTRAL);

        let only_negation = Tally {
            tokens: 2,
            saw_negation: true,
            ..Tally::default()
        };
        assert_eq!(classify(&only_negation), SentimentResult::NEUTRAL);
    }

    #[test]
    fn classify_confidence_floor_and_ceiling() {
        let weak = Tally {
            tokens: 100,
            positive: 1,
            ..Tally::default()
        };
        assert_eq!(classify(&weak).confidence, 0.6);

        let strong = Tally {
            tokens: 2,
            negative: 2,
            ..Tally::default()
        };
        assert_eq!(
            classify(&strong),
            SentimentResult::new(SentimentType::Negative, 0.95)
        );
    }

    #[test]
    fn classify_confidence_in_between() {
        let tally = Tally {
            tokens: 4,
            positive: 1,
            ..Tally::default()
        };
        let result = classify(&tally);
        assert_eq!(result.sentiment, SentimentType::Positive);
        assert!((result.confidence - 0.75).abs() < 1e-12);
    }

    #[test]
    fn zero_window_is_rejected() {
        let result = RuleBasedModel::new(RuleBasedOptions {
            config: AnalyzerConfig { negation_window: 0 },
            ..RuleBasedOptions::default()
        });
        assert!(result.is_err());
    }
}
