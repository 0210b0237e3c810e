pub mod config;
pub mod error;
pub mod sentiment;

pub use config::{AnalyzerConfig, Settings};
pub use error::ConfigError;
pub use sentiment::{SentimentResult, SentimentType};
