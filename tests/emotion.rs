use mood_pipelines::emotion::EmotionPipelineBuilder;
use mood_pipelines::error::{PipelineError, Result};
use mood_pipelines::summary::{summarize_multi_label, summarize_pairs, Prediction};

const EMOTIONS: [&str; 7] = ["joy", "sadness", "anger", "fear", "surprise", "neutral", "disgust"];

fn joyful_scores() -> Vec<Prediction> {
    EMOTIONS
        .iter()
        .zip([0.91, 0.02, 0.01, 0.01, 0.03, 0.01, 0.01])
        .map(|(label, score)| Prediction::new(*label, score))
        .collect()
}

fn stub_classifier(text: &str) -> Result<Vec<Prediction>> {
    match text {
        "broken" => Ok(vec![Prediction::new("anger", 1.5)]),
        "silent" => Ok(Vec::new()),
        "down" => Err(PipelineError::model("classifier crashed")),
        "tie" => Ok(vec![
            Prediction::new("joy", 0.5001),
            Prediction::new("surprise", 0.5001),
        ]),
        _ => Ok(joyful_scores()),
    }
}

#[test]
fn end_to_end_joyful_text() -> Result<()> {
    let pipeline = EmotionPipelineBuilder::new(stub_classifier).build();

    let output = pipeline.run("I got the job!")?;
    let summary = output.summary;
    assert_eq!(summary.primary_label, "Joy");
    assert_eq!(summary.primary_confidence, 91.0);

    let labels: Vec<&str> = summary.breakdown.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, EMOTIONS);
    let scores: Vec<f64> = summary.breakdown.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![91.0, 2.0, 1.0, 1.0, 3.0, 1.0, 1.0]);
    Ok(())
}

#[test]
fn primary_is_max_of_breakdown() -> Result<()> {
    let summary = summarize_multi_label(&joyful_scores())?;
    let max = summary
        .breakdown
        .iter()
        .map(|p| p.score)
        .fold(f64::MIN, f64::max);
    assert_eq!(summary.primary_confidence, max);
    assert!(summary
        .breakdown
        .iter()
        .any(|p| p.label.eq_ignore_ascii_case(&summary.primary_label)));
    Ok(())
}

#[test]
fn first_listed_wins_a_tie() -> Result<()> {
    let pipeline = EmotionPipelineBuilder::new(stub_classifier).build();
    let output = pipeline.run("tie")?;
    assert_eq!(output.summary.primary_label, "Joy");
    assert_eq!(output.summary.primary_confidence, 50.01);
    Ok(())
}

#[test]
fn percentages_use_two_decimals() -> Result<()> {
    let summary = summarize_pairs([("fear", 0.6834), ("neutral", 0.3166)])?;
    assert_eq!(summary.breakdown[0].score, 68.34);
    assert_eq!(summary.breakdown[1].score, 31.66);
    assert_eq!(summary.primary_label, "Fear");
    Ok(())
}

#[test]
fn bad_classifier_output_is_reported_per_item() -> Result<()> {
    let pipeline = EmotionPipelineBuilder::new(stub_classifier).build();

    let output = pipeline.run(&["broken", "silent", "down", "fine", ""])?;
    let r = &output.results;
    assert_eq!(
        r[0].summary,
        Err(PipelineError::InvalidScore {
            label: "anger".into(),
            score: 1.5,
        })
    );
    assert_eq!(r[1].summary, Err(PipelineError::EmptyInput));
    assert_eq!(r[2].summary, Err(PipelineError::Model("classifier crashed".into())));
    assert_eq!(
        r[3].summary.as_ref().map(|s| s.primary_label.as_str()),
        Ok("Joy")
    );
    assert_eq!(r[4].summary, Err(PipelineError::EmptyText));
    assert_eq!(r[4].text, "");
    Ok(())
}

#[test]
fn single_text_validation_errors_surface() {
    let pipeline = EmotionPipelineBuilder::new(stub_classifier).build();

    assert!(matches!(pipeline.run("silent"), Err(PipelineError::EmptyInput)));
    assert!(matches!(
        pipeline.run("broken"),
        Err(PipelineError::InvalidScore { .. })
    ));
}

#[test]
fn empty_and_out_of_range_inputs_fail() {
    assert_eq!(summarize_multi_label(&[]), Err(PipelineError::EmptyInput));
    assert!(matches!(
        summarize_pairs([("anger", 1.5)]),
        Err(PipelineError::InvalidScore { .. })
    ));
}

#[test]
fn labels_are_title_cased() -> Result<()> {
    let classifier = |_: &str| -> Result<Vec<Prediction>> {
        Ok(vec![
            Prediction::new("SADNESS", 0.8),
            Prediction::new("joy", 0.2),
        ])
    };
    let pipeline = EmotionPipelineBuilder::new(classifier).build();

    let summary = pipeline.run("rainy day")?.summary;
    assert_eq!(summary.primary_label, "Sadness");
    assert_eq!(summary.breakdown[0].label, "SADNESS");
    Ok(())
}

#[test]
fn summary_serializes_for_presentation() -> Result<()> {
    let summary = summarize_multi_label(&joyful_scores())?;
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["primary_label"], "Joy");
    assert_eq!(json["breakdown"].as_array().map(Vec::len), Some(7));
    assert_eq!(json["breakdown"][4]["label"], "surprise");

    let back: mood_pipelines::summary::Summary = serde_json::from_value(json).unwrap();
    assert_eq!(back, summary);
    Ok(())
}
