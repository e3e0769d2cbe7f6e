use super::model::EmotionModel;
use crate::error::Result;
use crate::pipelines::output::TextInput;
use crate::pipelines::stats::PipelineStats;
use crate::pipelines::utils::{predict_checked, report_failure, PipelineOptions};
use crate::summary::{summarize_multi_label, Summary};

// ============ Pipeline ============

/// Picks the dominant emotion from a classifier's per-label confidences.
///
/// Construct with [`EmotionPipelineBuilder`](super::EmotionPipelineBuilder).
///
/// # Examples
///
/// ```rust
/// # use mood_pipelines::emotion::EmotionPipelineBuilder;
/// # use mood_pipelines::error::Result;
/// # use mood_pipelines::summary::Prediction;
/// # fn main() -> Result<()> {
/// let classifier = |_: &str| -> Result<Vec<Prediction>> {
///     Ok(vec![Prediction::new("joy", 0.91), Prediction::new("sadness", 0.09)])
/// };
/// let pipeline = EmotionPipelineBuilder::new(classifier).build();
///
/// // Single text - direct access
/// let output = pipeline.run("I got the job!")?;
/// println!("{}: {:.2}%", output.summary.primary_label, output.summary.primary_confidence);
///
/// // Batch - results include input text
/// let output = pipeline.run(&["Yay!", "Oh no."])?;
/// for r in output.results {
///     println!("{} → {}", r.text, r.summary?.primary_label);
/// }
/// # Ok(())
/// # }
/// ```
pub struct EmotionPipeline<M: EmotionModel> {
    pub(crate) model: M,
    pub(crate) options: PipelineOptions,
}

impl<M: EmotionModel> EmotionPipeline<M> {
    /// Classify text and summarize the scores.
    ///
    /// Single input → [`Output`](super::Output), batch → [`BatchOutput`](super::BatchOutput).
    ///
    /// # Errors
    ///
    /// Per-text failures are [`EmptyText`](crate::error::PipelineError::EmptyText), a model
    /// error, or the summarizer's [`EmptyInput`](crate::error::PipelineError::EmptyInput) /
    /// [`InvalidScore`](crate::error::PipelineError::InvalidScore) when the classifier output
    /// is unusable. For a single text they are returned directly; for a batch they are kept in
    /// each [`BatchResult`](super::BatchResult).
    pub fn run<'a, I: TextInput<'a>>(&self, input: I) -> Result<I::Output<Summary>> {
        let stats_builder = PipelineStats::start();
        let texts = input.into_texts();
        let item_count = texts.len();

        let results = predict_checked(&texts, &self.options, |accepted| {
            self.model.predict_scores_batch(accepted)
        })?;

        let summaries: Vec<Result<Summary>> = results
            .into_iter()
            .map(|result| {
                result
                    .and_then(|scores| summarize_multi_label(&scores))
                    .inspect_err(|e| report_failure("emotion classification failed", e))
            })
            .collect();

        let stats = stats_builder.finish(item_count);
        tracing::debug!(
            items = item_count,
            elapsed = ?stats.total_time,
            "emotion pipeline run finished"
        );
        I::collect_output(texts, summaries, stats)
    }

    /// Returns the injected classifier.
    pub fn model(&self) -> &M {
        &self.model
    }
}
