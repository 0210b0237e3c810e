use crate::core::SentimentResult;

pub trait SentimentAnalysisModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options) -> anyhow::Result<Self>
    where
        Self: Sized;

    /// Score `text`. Total over all inputs: there is no error channel.
    fn predict(&self, text: &str) -> SentimentResult;
}
