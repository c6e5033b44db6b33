use std::sync::Arc;

use serde_json::json;
use verdict_core::{json_to_text, AnnotatorKind, Example, ExperimentRun, VerdictError};
use verdict_eval::{Evaluator, RelevanceEvaluator};
use verdict_models::{FixedResponseModel, ScriptedModel};

fn field<'a>(prompt: &'a str, prefix: &str) -> &'a str {
    prompt
        .lines()
        .filter(|line| line.starts_with(prefix))
        .last()
        .map(|line| &line[prefix.len()..])
        .unwrap()
}

#[test]
fn default_extractors_fill_query_and_response() {
    let model = Arc::new(FixedResponseModel::new("It answers directly.\nLABEL: true"));
    let evaluator = RelevanceEvaluator::new(model.clone());

    let result = evaluator
        .evaluate(
            &Example::new("What is the capital of France?"),
            &ExperimentRun::new("\"Paris\""),
        )
        .unwrap();

    assert_eq!(result.score(), 1.0);
    let prompt = model.last_prompt().unwrap();
    assert_eq!(field(&prompt, "QUERY: "), "What is the capital of France?");
    assert_eq!(field(&prompt, "RESPONSE: "), "Paris");
    assert!(prompt.ends_with("EXPLANATION: "));
}

#[test]
fn structured_input_is_rendered_as_json() {
    let model = Arc::new(FixedResponseModel::new("LABEL: true"));
    let evaluator = RelevanceEvaluator::new(model.clone());

    evaluator
        .evaluate(
            &Example::new(json!({"question": "2+2?"})),
            &ExperimentRun::new("4"),
        )
        .unwrap();

    let prompt = model.last_prompt().unwrap();
    assert_eq!(field(&prompt, "QUERY: "), "{\"question\":\"2+2?\"}");
    assert_eq!(field(&prompt, "RESPONSE: "), "4");
}

#[test]
fn custom_query_changes_only_query() {
    let example = Example::new(json!({"question": "2+2?"}));
    let run = ExperimentRun::new("4");

    let default_model = Arc::new(FixedResponseModel::new("LABEL: true"));
    RelevanceEvaluator::new(default_model.clone())
        .evaluate(&example, &run)
        .unwrap();
    let default_prompt = default_model.last_prompt().unwrap();

    let custom_model = Arc::new(FixedResponseModel::new("LABEL: true"));
    RelevanceEvaluator::new(custom_model.clone())
        .with_get_query(|example, _run| Ok(json_to_text(&example.input["question"])))
        .evaluate(&example, &run)
        .unwrap();
    let custom_prompt = custom_model.last_prompt().unwrap();

    assert_eq!(field(&custom_prompt, "QUERY: "), "2+2?");
    assert_ne!(field(&default_prompt, "QUERY: "), "2+2?");
    assert_eq!(
        field(&custom_prompt, "RESPONSE: "),
        field(&default_prompt, "RESPONSE: ")
    );
}

#[tokio::test]
async fn custom_response_changes_only_response() {
    let example = Example::new("Where is Paris?");
    let run = ExperimentRun::new(json!({"answer": "France", "confidence": 0.9}));

    let model = Arc::new(FixedResponseModel::new("LABEL: false"));
    let evaluator = RelevanceEvaluator::new(model.clone())
        .with_get_response(|_example, run| Ok(json_to_text(&run.result()?["answer"])));

    let result = evaluator.async_evaluate(&example, &run).await.unwrap();

    assert_eq!(result.score(), 0.0);
    let prompt = model.last_prompt().unwrap();
    assert_eq!(field(&prompt, "QUERY: "), "Where is Paris?");
    assert_eq!(field(&prompt, "RESPONSE: "), "France");
}

#[tokio::test]
async fn missing_output_fails_before_extractors_run() {
    let model = Arc::new(ScriptedModel::new(["LABEL: true"]));
    let evaluator = RelevanceEvaluator::new(model.clone())
        .with_get_response(|_example, _run| Ok("ignored".to_string()));

    let err = evaluator
        .async_evaluate(&Example::new("q"), &ExperimentRun::failed("boom"))
        .await
        .unwrap_err();

    assert!(matches!(err, VerdictError::Precondition(_)));
    assert!(model.prompts().is_empty());
}

#[test]
fn extractor_errors_propagate() {
    let model = Arc::new(ScriptedModel::new(["LABEL: true"]));
    let evaluator = RelevanceEvaluator::new(model)
        .with_get_query(|_example, _run| Err(VerdictError::Config("no query field".into())));

    let err = evaluator
        .evaluate(&Example::new("q"), &ExperimentRun::new("r"))
        .unwrap_err();

    assert!(matches!(err, VerdictError::Config(_)));
}

#[test]
fn unparsable_relevance_response_errors() {
    let model = Arc::new(ScriptedModel::new(["The response is on topic."]));
    let evaluator = RelevanceEvaluator::new(model);

    let err = evaluator
        .evaluate(&Example::new("q"), &ExperimentRun::new("r"))
        .unwrap_err();

    match err {
        VerdictError::UnparsableOutput { response } => {
            assert_eq!(response, "The response is on topic.")
        }
        other => panic!("expected unparsable output, got {other:?}"),
    }
}

#[test]
fn name_defaults_and_overrides() {
    let model = Arc::new(FixedResponseModel::new("LABEL: true"));
    let evaluator = RelevanceEvaluator::new(model.clone());
    assert_eq!(evaluator.name(), "RelevanceEvaluator");
    assert_eq!(evaluator.annotator_kind(), AnnotatorKind::Llm);

    let renamed = RelevanceEvaluator::new(model).with_name("Relevance");
    assert_eq!(renamed.name(), "Relevance");
}
