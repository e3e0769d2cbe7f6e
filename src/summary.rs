//! Turn raw classifier output into display-ready summaries.
//!
//! Two shapes of model output are supported:
//!
//! - a four-way polarity vector (`neg`, `neu`, `pos`, `compound`) from a lexicon scorer,
//!   reduced to a [`Mood`] by [`classify_polarity`];
//! - an ordered list of per-label confidences from a transformer classifier, reduced to
//!   a top label plus percentage breakdown by [`summarize_multi_label`].
//!
//! Everything here is pure: no I/O, no logging, no shared state.
//!
//! ```rust
//! use mood_pipelines::summary::{classify_polarity, summarize_pairs, Mood, PolarityScores};
//!
//! # fn main() -> mood_pipelines::error::Result<()> {
//! let summary = classify_polarity(PolarityScores::new(0.0, 0.412, 0.588, 0.62));
//! assert_eq!(summary.mood, Mood::Positive);
//!
//! let summary = summarize_pairs([("joy", 0.91), ("sadness", 0.09)])?;
//! assert_eq!(summary.primary_label, "Joy");
//! assert_eq!(summary.primary_confidence, 91.0);
//! # Ok(())
//! # }
//! ```

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound scores at or above this are [`Mood::Positive`].
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this are [`Mood::Negative`].
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Decimal places kept when converting confidences to percentages.
pub const PERCENT_DECIMALS: i32 = 2;

// ============ Polarity ============

/// Raw output of a lexicon polarity scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Proportion of negative sentiment (0.0 to 1.0).
    pub neg: f64,
    /// Proportion of neutral sentiment (0.0 to 1.0).
    pub neu: f64,
    /// Proportion of positive sentiment (0.0 to 1.0).
    pub pos: f64,
    /// Normalized overall polarity (-1.0 to 1.0).
    pub compound: f64,
}

impl PolarityScores {
    /// Bundle the four scores.
    pub fn new(neg: f64, neu: f64, pos: f64, compound: f64) -> Self {
        Self {
            neg,
            neu,
            pos,
            compound,
        }
    }
}

/// Overall mood derived from a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    /// `compound >= 0.05`
    Positive,
    /// Strictly between the two thresholds.
    Neutral,
    /// `compound <= -0.05`
    Negative,
}

impl Mood {
    /// Apply the fixed threshold rule. Both thresholds are inclusive.
    ///
    /// NaN satisfies neither comparison and lands on [`Mood::Neutral`].
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Mood::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "Positive",
            Mood::Neutral => "Neutral",
            Mood::Negative => "Negative",
        }
    }

    /// Face shown next to the mood name.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Positive => "😊",
            Mood::Neutral => "😐",
            Mood::Negative => "😞",
        }
    }

    /// Name followed by its face, e.g. `"Positive 😊"`.
    pub fn with_emoji(&self) -> String {
        format!("{} {}", self.as_str(), self.emoji())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity scores echoed unchanged, plus the derived mood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolaritySummary {
    /// Mood picked from `compound`.
    pub mood: Mood,
    /// Negative proportion, as received.
    pub neg: f64,
    /// Neutral proportion, as received.
    pub neu: f64,
    /// Positive proportion, as received.
    pub pos: f64,
    /// Compound score, as received.
    pub compound: f64,
}

impl PolaritySummary {
    /// Mood name (`"Positive"`, `"Neutral"` or `"Negative"`).
    pub fn label(&self) -> &'static str {
        self.mood.as_str()
    }

    /// Proportions in display order: positive, neutral, negative. Values are untouched.
    pub fn shares(&self) -> Vec<Prediction> {
        vec![
            Prediction::new(Mood::Positive.as_str(), self.pos),
            Prediction::new(Mood::Neutral.as_str(), self.neu),
            Prediction::new(Mood::Negative.as_str(), self.neg),
        ]
    }
}

/// Label a polarity vector.
///
/// Total over its domain: out-of-range values are passed through, never clamped or rounded.
pub fn classify_polarity(scores: PolarityScores) -> PolaritySummary {
    PolaritySummary {
        mood: Mood::from_compound(scores.compound),
        neg: scores.neg,
        neu: scores.neu,
        pos: scores.pos,
        compound: scores.compound,
    }
}

// ============ Multi-label ============

/// A label with a confidence score.
///
/// Classifier output carries raw confidences (0.0 to 1.0); a [`Summary`] breakdown
/// carries percentages (0.0 to 100.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Label name.
    pub label: String,
    /// Confidence score.
    pub score: f64,
}

impl Prediction {
    /// Pair a label with its score.
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

impl<L: Into<String>> From<(L, f64)> for Prediction {
    fn from((label, score): (L, f64)) -> Self {
        Prediction::new(label, score)
    }
}

/// Top label and percentage breakdown of one multi-label classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Title-cased label of the highest-scoring entry.
    pub primary_label: String,
    /// Percentage of the highest-scoring entry.
    pub primary_confidence: f64,
    /// Every entry in classifier order, scores converted to percentages.
    pub breakdown: Vec<Prediction>,
}

/// Reduce per-label confidences to a top label and a percentage breakdown.
///
/// Each confidence becomes `score * 100` rounded to [`PERCENT_DECIMALS`] places, half away
/// from zero. The primary entry is the first one holding the maximum percentage.
///
/// # Errors
///
/// - [`PipelineError::EmptyInput`] if `scores` is empty.
/// - [`PipelineError::InvalidScore`] if any confidence is non-finite or outside `[0, 1]`.
pub fn summarize_multi_label(scores: &[Prediction]) -> Result<Summary> {
    if scores.is_empty() {
        return Err(PipelineError::EmptyInput);
    }
    if let Some(bad) = scores
        .iter()
        .find(|p| !p.score.is_finite() || !(0.0..=1.0).contains(&p.score))
    {
        return Err(PipelineError::InvalidScore {
            label: bad.label.clone(),
            score: bad.score,
        });
    }

    let breakdown: Vec<Prediction> = scores
        .iter()
        .map(|p| Prediction::new(p.label.clone(), to_percent(p.score)))
        .collect();

    // strict `>` keeps the earliest entry on ties
    let mut top = &breakdown[0];
    for p in &breakdown[1..] {
        if p.score > top.score {
            top = p;
        }
    }

    Ok(Summary {
        primary_label: title_case(&top.label),
        primary_confidence: top.score,
        breakdown,
    })
}

/// [`summarize_multi_label`] over plain `(label, confidence)` pairs.
pub fn summarize_pairs<I, L>(scores: I) -> Result<Summary>
where
    I: IntoIterator<Item = (L, f64)>,
    L: Into<String>,
{
    let scores: Vec<Prediction> = scores.into_iter().map(Prediction::from).collect();
    summarize_multi_label(&scores)
}

/// Confidence in `[0, 1]` to a percentage with two decimals.
pub fn to_percent(score: f64) -> f64 {
    let scale = 10f64.powi(PERCENT_DECIMALS);
    (score * 100.0 * scale).round() / scale
}

/// Upper-case the first letter of every word, lower-case the rest.
///
/// A word starts after any non-alphabetic character, so `"very_happy"` becomes `"Very_Happy"`.
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut at_word_start = true;
    for c in label.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
