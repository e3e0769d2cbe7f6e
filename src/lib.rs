//! Turn raw sentiment and emotion classifier output into displayable summaries.
//!
//! The models themselves are not part of this crate: hand in any lexicon scorer or
//! transformer classifier that is already loaded, and the pipelines reduce its raw scores
//! to a mood (polarity) or a dominant emotion with a percentage breakdown (multi-label).
//!
//! - [`summary`]: the pure decision rules, usable without any pipeline.
//! - [`polarity`]: text → lexicon scorer → Positive / Neutral / Negative.
//! - [`emotion`]: text → multi-label classifier → top emotion + breakdown.
//! - [`history`]: a caller-owned log of past results for a session.

#![deny(missing_docs)]

// ============ Internal API ============

pub(crate) mod pipelines;

// ============ Public API ============

pub mod error;
pub mod history;
pub mod summary;

pub use pipelines::{emotion, polarity};
