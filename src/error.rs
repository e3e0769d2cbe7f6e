//! Error types for this crate.
//!
//! All fallible operations return [`Result<T>`] which uses [`PipelineError`] as the error type.

use thiserror::Error;

/// A [`Result`](std::result::Result) alias using [`PipelineError`] as the error type.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The unified error type for all crate errors.
///
/// # Example
///
/// ```rust
/// use mood_pipelines::error::PipelineError;
///
/// fn handle_error(e: PipelineError) {
///     match &e {
///         PipelineError::EmptyInput | PipelineError::EmptyText => {
///             // Nothing to show - skip display
///         }
///         PipelineError::InvalidScore { label, score } => {
///             // Upstream model produced garbage - warn the user
///             eprintln!("bad score for {label}: {score}");
///         }
///         PipelineError::Model(_) => {
///             // Classifier failed - let the user retry
///         }
///         _ => {
///             eprintln!("Internal error: {e}");
///         }
///     }
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PipelineError {
    /// No label/confidence pairs were supplied.
    #[error("no classification scores supplied")]
    EmptyInput,

    /// A confidence was outside `[0, 1]` or not finite. Points at upstream corruption.
    #[error("invalid confidence {score} for label '{label}': expected a finite value in [0, 1]")]
    InvalidScore {
        /// Label carrying the bad value.
        label: String,
        /// The offending confidence, as received.
        score: f64,
    },

    /// Input text was empty or whitespace only.
    #[error("input text is empty")]
    EmptyText,

    /// The injected model failed to classify the text.
    #[error("{0}")]
    Model(String),

    /// Internal error. Report if seen.
    #[error("{0}")]
    Unexpected(String),
}

impl PipelineError {
    /// Wraps any displayable model failure.
    pub fn model(err: impl std::fmt::Display) -> Self {
        PipelineError::Model(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::PipelineError;

    #[test]
    fn invalid_score_message_names_label_and_value() {
        let err = PipelineError::InvalidScore {
            label: "anger".into(),
            score: 1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("anger"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn model_helper_keeps_message() {
        let err = PipelineError::model("weights not loaded");
        assert_eq!(err, PipelineError::Model("weights not loaded".into()));
    }
}
