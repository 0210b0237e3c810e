use std::sync::Arc;

use super::model::SentimentAnalysisModel;
use super::pipeline::SentimentAnalysisPipeline;
use crate::core::AnalyzerConfig;
use crate::models::implementations::rule_based::{RuleBasedModel, RuleBasedOptions};
use crate::models::lexicon::Lexicon;

pub struct SentimentAnalysisPipelineBuilder<M: SentimentAnalysisModel> {
    options: M::Options,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipelineBuilder<M> {
    pub fn new(options: M::Options) -> Self {
        Self { options }
    }

    pub fn build(self) -> anyhow::Result<SentimentAnalysisPipeline<M>> {
        tracing::debug!(options = ?self.options, "building sentiment analysis pipeline");
        let model = M::new(self.options)?;
        Ok(SentimentAnalysisPipeline { model })
    }
}

impl SentimentAnalysisPipelineBuilder<RuleBasedModel> {
    /// Rule-based scorer over the built-in English lexicon.
    pub fn rule_based() -> Self {
        Self::new(RuleBasedOptions::default())
    }

    /// Replace the word lists.
    pub fn lexicon(mut self, lexicon: impl Into<Arc<Lexicon>>) -> Self {
        self.options.lexicon = lexicon.into();
        self
    }

    pub fn negation_window(mut self, window: usize) -> Self {
        self.options.config.negation_window = window;
        self
    }

    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.options.config = config;
        self
    }
}
