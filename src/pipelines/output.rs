use crate::error::{PipelineError, Result};
use crate::pipelines::stats::PipelineStats;

/// Single-text output from `run()`.
#[derive(Debug)]
pub struct Output<S> {
    /// Summary for the text.
    pub summary: S,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Single result in batch output.
#[derive(Debug)]
pub struct BatchResult<S> {
    /// Input text.
    pub text: String,
    /// Summary or error for this input.
    pub summary: Result<S>,
}

/// Batch output from `run()`.
#[derive(Debug)]
pub struct BatchOutput<S> {
    /// Results for each input, in input order.
    pub results: Vec<BatchResult<S>>,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Picks the output shape of `run()` from the input type: one text gives [`Output`],
/// a slice or array of texts gives [`BatchOutput`].
#[doc(hidden)]
pub trait TextInput<'a> {
    /// Output type for `.run()`, parameterized by the summary it carries.
    type Output<S>;

    #[doc(hidden)]
    fn into_texts(self) -> Vec<&'a str>;
    #[doc(hidden)]
    fn collect_output<S>(
        texts: Vec<&'a str>,
        summaries: Vec<Result<S>>,
        stats: PipelineStats,
    ) -> Result<Self::Output<S>>;
}

impl<'a> TextInput<'a> for &'a str {
    type Output<S> = Output<S>;

    fn into_texts(self) -> Vec<&'a str> {
        vec![self]
    }

    fn collect_output<S>(
        _texts: Vec<&'a str>,
        mut summaries: Vec<Result<S>>,
        stats: PipelineStats,
    ) -> Result<Self::Output<S>> {
        let summary = summaries
            .pop()
            .ok_or_else(|| PipelineError::Unexpected("No summaries returned".into()))??;
        Ok(Output { summary, stats })
    }
}

impl<'a> TextInput<'a> for &'a [&'a str] {
    type Output<S> = BatchOutput<S>;

    fn into_texts(self) -> Vec<&'a str> {
        self.to_vec()
    }

    fn collect_output<S>(
        texts: Vec<&'a str>,
        summaries: Vec<Result<S>>,
        stats: PipelineStats,
    ) -> Result<Self::Output<S>> {
        let results = texts
            .into_iter()
            .zip(summaries)
            .map(|(text, summary)| BatchResult {
                text: text.to_string(),
                summary,
            })
            .collect();
        Ok(BatchOutput { results, stats })
    }
}

impl<'a, const N: usize> TextInput<'a> for &'a [&'a str; N] {
    type Output<S> = BatchOutput<S>;

    fn into_texts(self) -> Vec<&'a str> {
        self.as_slice().to_vec()
    }

    fn collect_output<S>(
        texts: Vec<&'a str>,
        summaries: Vec<Result<S>>,
        stats: PipelineStats,
    ) -> Result<Self::Output<S>> {
        <&'a [&'a str]>::collect_output(texts, summaries, stats)
    }
}
