use super::model::PolarityModel;
use super::pipeline::PolarityPipeline;
use crate::pipelines::utils::PipelineOptions;

/// Builder for creating [`PolarityPipeline`] instances.
///
/// The scorer is handed in already constructed; the pipeline never loads or caches models.
///
/// # Examples
///
/// ```rust
/// # use mood_pipelines::error::Result;
/// # use mood_pipelines::polarity::PolarityPipelineBuilder;
/// # use mood_pipelines::summary::PolarityScores;
/// let neutral = |_: &str| -> Result<PolarityScores> { Ok(PolarityScores::new(0.0, 1.0, 0.0, 0.0)) };
/// let pipeline = PolarityPipelineBuilder::new(neutral)
///     .allow_blank(true)
///     .build();
/// assert!(pipeline.run("").is_ok());
/// ```
pub struct PolarityPipelineBuilder<M: PolarityModel> {
    model: M,
    options: PipelineOptions,
}

impl<M: PolarityModel> PolarityPipelineBuilder<M> {
    /// Starts a builder around `model`.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: PipelineOptions::default(),
        }
    }

    /// Pass empty or whitespace-only text to the model instead of rejecting it.
    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.options.allow_blank = allow;
        self
    }

    /// Builds the pipeline with configured settings.
    pub fn build(self) -> PolarityPipeline<M> {
        PolarityPipeline {
            model: self.model,
            options: self.options,
        }
    }
}
