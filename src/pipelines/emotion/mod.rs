//! Emotion classification pipeline.
//!
//! Feed text to a multi-label classifier (joy, sadness, anger, ...) and get back the
//! dominant emotion with its confidence, plus every label's confidence as a percentage.
//!
//! # Quick Start
//!
//! ```rust
//! use mood_pipelines::emotion::EmotionPipelineBuilder;
//! use mood_pipelines::error::Result;
//! use mood_pipelines::summary::Prediction;
//!
//! # fn main() -> Result<()> {
//! let classifier = |_: &str| -> Result<Vec<Prediction>> {
//!     Ok(vec![
//!         Prediction::new("joy", 0.91),
//!         Prediction::new("sadness", 0.02),
//!         Prediction::new("surprise", 0.07),
//!     ])
//! };
//! let pipeline = EmotionPipelineBuilder::new(classifier).build();
//!
//! let output = pipeline.run("We won the championship!")?;
//! assert_eq!(output.summary.primary_label, "Joy");
//! assert_eq!(output.summary.primary_confidence, 91.0);
//!
//! // Breakdown keeps the classifier's order.
//! for p in &output.summary.breakdown {
//!     println!("{}: {:.2}%", p.label, p.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Ties
//!
//! When several labels share the top percentage, the one the classifier listed first wins.

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::pipelines::stats::PipelineStats;
pub use builder::EmotionPipelineBuilder;
pub use model::EmotionModel;
pub use pipeline::EmotionPipeline;

/// Single-text output from [`EmotionPipeline::run`].
pub type Output = crate::pipelines::output::Output<crate::summary::Summary>;
/// Batch output from [`EmotionPipeline::run`].
pub type BatchOutput = crate::pipelines::output::BatchOutput<crate::summary::Summary>;
/// Single result in a [`BatchOutput`].
pub type BatchResult = crate::pipelines::output::BatchResult<crate::summary::Summary>;

#[doc(hidden)]
pub use crate::pipelines::output::TextInput;
