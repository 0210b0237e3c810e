use super::model::SentimentAnalysisModel;
use crate::core::SentimentResult;

#[derive(Debug, Clone)]
pub struct SentimentAnalysisPipeline<M: SentimentAnalysisModel> {
    pub(crate) model: M,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipeline<M> {
    /// Predict sentiment with a structured result containing label and confidence.
    pub fn predict(&self, text: &str) -> SentimentResult {
        self.model.predict(text)
    }

    /// Score several texts independently, preserving order.
    pub fn predict_all<'a, I>(&self, texts: I) -> Vec<SentimentResult>
    where
        I: IntoIterator<Item = &'a str>,
    {
        texts.into_iter().map(|text| self.predict(text)).collect()
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}
