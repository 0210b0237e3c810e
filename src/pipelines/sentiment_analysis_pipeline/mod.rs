//! Sentiment analysis pipeline for classifying text emotional tone.
//!
//! This module provides functionality for classifying text as positive,
//! negative or neutral together with a heuristic confidence. The default model
//! is a lexicon scanner with negation handling; it is a pure function of its
//! input, so one pipeline can be shared freely across threads.
//!
//! ## Main Types
//!
//! - [`SentimentAnalysisPipeline`] - High-level interface for sentiment classification
//! - [`SentimentAnalysisPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`SentimentAnalysisModel`] - Trait for sentiment analysis model implementations
//! - [`RuleBasedModel`] - Lexicon-driven scorer
//!
//! ## Usage Example
//!
//! ```rust
//! use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::*;
//!
//! let pipeline = SentimentAnalysisPipelineBuilder::rule_based().build()?;
//!
//! let result = pipeline.predict("I love this product!");
//! println!("Sentiment: {} (confidence: {:.2})", result.sentiment, result.confidence);
//! assert_eq!(result.sentiment, SentimentType::Positive);
//! # anyhow::Ok(())
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use model::SentimentAnalysisModel;
pub use pipeline::SentimentAnalysisPipeline;

pub use crate::core::{AnalyzerConfig, SentimentResult, SentimentType};
pub use crate::models::implementations::rule_based::{RuleBasedModel, RuleBasedOptions};
pub use crate::models::lexicon::Lexicon;

pub use anyhow::Result;
