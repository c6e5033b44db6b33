use std::collections::HashMap;

use verdict_core::VerdictError;
use verdict_prompts::{PromptError, PromptTemplate};

#[test]
fn renders_all_variables() {
    let template = PromptTemplate::new("Is the text {{criteria}}? TEXT: {{ text }}");
    let values = HashMap::from([
        ("criteria".to_string(), "concise".to_string()),
        ("text".to_string(), "Paris.".to_string()),
    ]);

    let rendered = template.render(&values).expect("should render");

    assert_eq!(rendered, "Is the text concise? TEXT: Paris.");
}

#[test]
fn returns_missing_variable_error() {
    let template = PromptTemplate::new("TEXT: {{text}}");
    let values = HashMap::new();

    let err = template.render(&values).expect_err("should fail");

    match err {
        PromptError::MissingVariable(name) => assert_eq!(name, "text"),
    }
}

#[test]
fn missing_variable_converts_to_prompt_error() {
    let err: VerdictError = PromptError::MissingVariable("query".into()).into();
    assert!(matches!(err, VerdictError::Prompt(msg) if msg.contains("query")));
}

#[test]
fn substituted_values_are_not_rescanned() {
    let template = PromptTemplate::new("TEXT: {{ text }}");
    let values = HashMap::from([("text".to_string(), "{{ text }} and {{ other }}".to_string())]);

    let rendered = template.render(&values).unwrap();

    assert_eq!(rendered, "TEXT: {{ text }} and {{ other }}");
}

#[test]
fn unterminated_placeholder_is_copied_through() {
    let template = PromptTemplate::new("Hello {{ name");
    let rendered = template.render(&HashMap::new()).unwrap();
    assert_eq!(rendered, "Hello {{ name");
}
