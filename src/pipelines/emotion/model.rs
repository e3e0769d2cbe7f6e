use crate::error::Result;
use crate::summary::Prediction;

/// A classifier that assigns a confidence in `[0, 1]` to each of its labels.
///
/// Labels must come back in the classifier's own order; the pipeline never re-sorts them.
/// Implemented for any `Fn(&str) -> Result<Vec<Prediction>>`.
pub trait EmotionModel {
    /// Classify one text.
    fn predict_scores(&self, text: &str) -> Result<Vec<Prediction>>;

    /// Classify several texts. One result per input, in input order.
    fn predict_scores_batch(&self, texts: &[&str]) -> Result<Vec<Result<Vec<Prediction>>>> {
        Ok(texts.iter().map(|text| self.predict_scores(text)).collect())
    }
}

impl<F> EmotionModel for F
where
    F: Fn(&str) -> Result<Vec<Prediction>>,
{
    fn predict_scores(&self, text: &str) -> Result<Vec<Prediction>> {
        self(text)
    }
}
