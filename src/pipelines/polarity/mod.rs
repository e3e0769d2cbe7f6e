//! Polarity pipeline.
//!
//! Label text as `Positive`, `Neutral` or `Negative` from a lexicon scorer's
//! `neg`/`neu`/`pos`/`compound` vector. The scores are echoed back untouched next to the mood.
//!
//! # Quick Start
//!
//! ```rust
//! use mood_pipelines::error::Result;
//! use mood_pipelines::polarity::PolarityPipelineBuilder;
//! use mood_pipelines::summary::{Mood, PolarityScores};
//!
//! # fn main() -> Result<()> {
//! // Any scorer works; here a fixed stub stands in for a loaded analyzer.
//! let scorer = |_: &str| -> Result<PolarityScores> {
//!     Ok(PolarityScores::new(0.0, 0.412, 0.588, 0.62))
//! };
//! let pipeline = PolarityPipelineBuilder::new(scorer).build();
//!
//! let output = pipeline.run("The service was excellent, but the price was a bit high.")?;
//! assert_eq!(output.summary.mood, Mood::Positive);
//! assert_eq!(output.summary.compound, 0.62);
//! # Ok(())
//! # }
//! ```
//!
//! # Decision Rule
//!
//! | compound | mood |
//! |----------|------|
//! | `>= 0.05` | Positive |
//! | `<= -0.05` | Negative |
//! | otherwise | Neutral |

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::pipelines::stats::PipelineStats;
pub use builder::PolarityPipelineBuilder;
pub use model::PolarityModel;
pub use pipeline::PolarityPipeline;

/// Single-text output from [`PolarityPipeline::run`].
pub type Output = crate::pipelines::output::Output<crate::summary::PolaritySummary>;
/// Batch output from [`PolarityPipeline::run`].
pub type BatchOutput = crate::pipelines::output::BatchOutput<crate::summary::PolaritySummary>;
/// Single result in a [`BatchOutput`].
pub type BatchResult = crate::pipelines::output::BatchResult<crate::summary::PolaritySummary>;

#[doc(hidden)]
pub use crate::pipelines::output::TextInput;
