pub mod core;
pub mod models;
pub mod pipelines;
pub mod server;

// Re-export core types
pub use crate::core::{AnalyzerConfig, ConfigError, SentimentResult, SentimentType, Settings};

// Re-export model types for easier access
pub use crate::models::{Lexicon, RuleBasedModel, RuleBasedOptions};
