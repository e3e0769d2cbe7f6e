use crate::error::{PipelineError, Result};

/// Options shared by every pipeline builder.
#[derive(Debug, Clone, Default)]
pub(crate) struct PipelineOptions {
    pub(crate) allow_blank: bool,
}

/// Rejects empty or whitespace-only text unless the pipeline allows it.
pub(crate) fn check_text(text: &str, options: &PipelineOptions) -> Result<()> {
    if !options.allow_blank && text.trim().is_empty() {
        return Err(PipelineError::EmptyText);
    }
    Ok(())
}

/// Whether a per-item failure is worth a warning.
///
/// Blank texts are rejected before the model is called, so there is nothing to report.
pub(crate) fn is_reportable(err: &PipelineError) -> bool {
    !matches!(err, PipelineError::EmptyText)
}

/// Logs a per-item failure at `warn` level if [`is_reportable`].
pub(crate) fn report_failure(what: &str, err: &PipelineError) {
    if is_reportable(err) {
        tracing::warn!(error = %err, "{what}");
    }
}

/// Runs `predict` on the texts that pass [`check_text`], keeping one result per input.
///
/// Rejected texts never reach the model; their slot holds the rejection error.
pub(crate) fn predict_checked<T, F>(
    texts: &[&str],
    options: &PipelineOptions,
    predict: F,
) -> Result<Vec<Result<T>>>
where
    F: FnOnce(&[&str]) -> Result<Vec<Result<T>>>,
{
    let checks: Vec<Result<()>> = texts.iter().map(|t| check_text(t, options)).collect();
    let accepted: Vec<&str> = texts
        .iter()
        .zip(&checks)
        .filter(|(_, check)| check.is_ok())
        .map(|(text, _)| *text)
        .collect();

    let predicted = if accepted.is_empty() {
        Vec::new()
    } else {
        predict(&accepted)?
    };
    if predicted.len() != accepted.len() {
        return Err(PipelineError::Unexpected(format!(
            "model returned {} results for {} texts",
            predicted.len(),
            accepted.len()
        )));
    }

    let mut predicted = predicted.into_iter();
    let mut results = Vec::with_capacity(texts.len());
    for check in checks {
        match check {
            Ok(()) => match predicted.next() {
                Some(result) => results.push(result),
                None => {
                    return Err(PipelineError::Unexpected("No predictions returned".into()));
                }
            },
            Err(e) => results.push(Err(e)),
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_rejected_by_default() {
        let options = PipelineOptions::default();
        assert_eq!(check_text("", &options), Err(PipelineError::EmptyText));
        assert_eq!(check_text(" \n\t", &options), Err(PipelineError::EmptyText));
        assert!(check_text("fine", &options).is_ok());
    }

    #[test]
    fn blank_text_allowed_when_configured() {
        let options = PipelineOptions { allow_blank: true };
        assert!(check_text("", &options).is_ok());
    }

    #[test]
    fn rejected_texts_skip_the_model() {
        let options = PipelineOptions::default();
        let mut seen = Vec::new();
        let results = predict_checked(&["a", "", "bc"], &options, |texts| {
            seen.extend(texts.iter().map(|t| t.to_string()));
            Ok(texts.iter().map(|t| Ok(t.len())).collect())
        })
        .unwrap();

        assert_eq!(seen, vec!["a", "bc"]);
        assert_eq!(results, vec![Ok(1), Err(PipelineError::EmptyText), Ok(2)]);
    }

    #[test]
    fn blank_rejections_are_not_reported() {
        assert!(!is_reportable(&PipelineError::EmptyText));
        assert!(is_reportable(&PipelineError::model("classifier crashed")));
        assert!(is_reportable(&PipelineError::EmptyInput));
        assert!(is_reportable(&PipelineError::InvalidScore {
            label: "anger".into(),
            score: 1.5,
        }));
    }

    #[test]
    fn short_model_output_is_an_error() {
        let options = PipelineOptions::default();
        let err = predict_checked::<usize, _>(&["a", "b"], &options, |_| Ok(vec![Ok(1)]))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Unexpected(_)));
    }
}
