use crate::error::Result;
use crate::summary::PolarityScores;

/// A lexicon scorer that produces a four-way polarity vector for a text.
///
/// Implemented for any `Fn(&str) -> Result<PolarityScores>`, so an adapter around an
/// already-loaded analyzer can be passed straight to the pipeline builder.
pub trait PolarityModel {
    /// Score one text.
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores>;

    /// Score several texts. One result per input, in input order.
    fn polarity_scores_batch(&self, texts: &[&str]) -> Result<Vec<Result<PolarityScores>>> {
        Ok(texts
            .iter()
            .map(|text| self.polarity_scores(text))
            .collect())
    }
}

impl<F> PolarityModel for F
where
    F: Fn(&str) -> Result<PolarityScores>,
{
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
        self(text)
    }
}
