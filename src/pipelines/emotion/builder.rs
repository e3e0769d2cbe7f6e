use super::model::EmotionModel;
use super::pipeline::EmotionPipeline;
use crate::pipelines::utils::PipelineOptions;

/// Builder for creating [`EmotionPipeline`] instances.
///
/// # Examples
///
/// ```rust
/// # use mood_pipelines::emotion::EmotionPipelineBuilder;
/// # use mood_pipelines::error::Result;
/// # use mood_pipelines::summary::Prediction;
/// let classifier = |_: &str| -> Result<Vec<Prediction>> { Ok(vec![Prediction::new("neutral", 1.0)]) };
/// let pipeline = EmotionPipelineBuilder::new(classifier).build();
/// assert!(pipeline.run("   ").is_err());
/// ```
pub struct EmotionPipelineBuilder<M: EmotionModel> {
    model: M,
    options: PipelineOptions,
}

impl<M: EmotionModel> EmotionPipelineBuilder<M> {
    /// Starts a builder around an already-loaded classifier.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: PipelineOptions::default(),
        }
    }

    /// Pass empty or whitespace-only text to the classifier instead of rejecting it.
    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.options.allow_blank = allow;
        self
    }

    /// Builds the pipeline with configured settings.
    pub fn build(self) -> EmotionPipeline<M> {
        EmotionPipeline {
            model: self.model,
            options: self.options,
        }
    }
}
