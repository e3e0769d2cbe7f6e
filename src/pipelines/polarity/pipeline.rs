use super::model::PolarityModel;
use crate::error::Result;
use crate::pipelines::output::TextInput;
use crate::pipelines::stats::PipelineStats;
use crate::pipelines::utils::{predict_checked, report_failure, PipelineOptions};
use crate::summary::{classify_polarity, PolaritySummary};

// ============ Pipeline ============

/// Labels text as Positive, Neutral or Negative from a lexicon scorer's polarity vector.
///
/// Construct with [`PolarityPipelineBuilder`](super::PolarityPipelineBuilder).
///
/// # Examples
///
/// ```rust
/// # use mood_pipelines::polarity::PolarityPipelineBuilder;
/// # use mood_pipelines::error::Result;
/// # use mood_pipelines::summary::PolarityScores;
/// # fn main() -> Result<()> {
/// let scorer = |_: &str| -> Result<PolarityScores> { Ok(PolarityScores::new(0.0, 0.412, 0.588, 0.62)) };
/// let pipeline = PolarityPipelineBuilder::new(scorer).build();
///
/// // Single text - direct access
/// let output = pipeline.run("The service was excellent!")?;
/// println!("{} ({:.4})", output.summary.mood.with_emoji(), output.summary.compound);
///
/// // Batch - results include input text
/// let output = pipeline.run(&["Great!", "Terrible."])?;
/// for r in output.results {
///     println!("{} → {}", r.text, r.summary?.mood);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PolarityPipeline<M: PolarityModel> {
    pub(crate) model: M,
    pub(crate) options: PipelineOptions,
}

impl<M: PolarityModel> PolarityPipeline<M> {
    /// Score and label text.
    ///
    /// Single input → [`Output`](super::Output), batch → [`BatchOutput`](super::BatchOutput).
    ///
    /// # Errors
    ///
    /// For a single text, any per-text failure ([`EmptyText`](crate::error::PipelineError::EmptyText)
    /// or a model error) is returned directly. For a batch, per-text failures are kept in each
    /// [`BatchResult`](super::BatchResult) and only whole-batch failures are returned.
    pub fn run<'a, I: TextInput<'a>>(&self, input: I) -> Result<I::Output<PolaritySummary>> {
        let stats_builder = PipelineStats::start();
        let texts = input.into_texts();
        let item_count = texts.len();

        let results = predict_checked(&texts, &self.options, |accepted| {
            self.model.polarity_scores_batch(accepted)
        })?;

        let summaries: Vec<Result<PolaritySummary>> = results
            .into_iter()
            .map(|result| {
                result
                    .inspect_err(|e| report_failure("polarity scoring failed", e))
                    .map(classify_polarity)
            })
            .collect();

        let stats = stats_builder.finish(item_count);
        tracing::debug!(
            items = item_count,
            elapsed = ?stats.total_time,
            "polarity pipeline run finished"
        );
        I::collect_output(texts, summaries, stats)
    }

    /// Returns the injected scorer.
    pub fn model(&self) -> &M {
        &self.model
    }
}
