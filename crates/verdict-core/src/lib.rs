use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerdictError {
    #[error("precondition violated: {0}")]
    Precondition(String),
    #[error("could not parse LLM evaluation: {response}")]
    UnparsableOutput { response: String },
    #[error("model error: {0}")]
    Model(String),
    #[error("prompt error: {0}")]
    Prompt(String),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VerdictError>;

/// A text-generation client that can be driven both blocking and async.
///
/// Both entry points must have identical semantics: given a fully resolved
/// prompt, return the model's completion. Retries, timeouts and rate limits
/// are the implementor's business.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String>;

    async fn async_generate(&self, prompt: &str) -> Result<String>;
}

/// Identifies how an evaluation result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotatorKind {
    #[serde(rename = "LLM")]
    Llm,
    #[serde(rename = "CODE")]
    Code,
    #[serde(rename = "HUMAN")]
    Human,
}

impl AnnotatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotatorKind::Llm => "LLM",
            AnnotatorKind::Code => "CODE",
            AnnotatorKind::Human => "HUMAN",
        }
    }
}

impl fmt::Display for AnnotatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dataset record. Evaluators only read `input`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub id: Option<String>,
    pub input: Value,
    #[serde(default)]
    pub output: Option<Value>,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl Example {
    pub fn new(input: impl Into<Value>) -> Self {
        Self {
            id: None,
            input: input.into(),
            output: None,
            metadata: HashMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_output(mut self, output: impl Into<Value>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRunOutput {
    pub result: Value,
}

/// The recorded output of running the system under test on an [`Example`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRun {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub example_id: Option<String>,
    #[serde(default)]
    pub output: Option<ExperimentRunOutput>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ExperimentRun {
    pub fn new(result: impl Into<Value>) -> Self {
        Self {
            id: None,
            example_id: None,
            output: Some(ExperimentRunOutput {
                result: result.into(),
            }),
            error: None,
        }
    }

    /// A run that produced no output, e.g. because the task errored.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            id: None,
            example_id: None,
            output: None,
            error: Some(error.into()),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_example_id(mut self, example_id: impl Into<String>) -> Self {
        self.example_id = Some(example_id.into());
        self
    }

    /// The recorded result, or a precondition error if the run has no output.
    pub fn result(&self) -> Result<&Value> {
        self.output
            .as_ref()
            .map(|output| &output.result)
            .ok_or_else(|| {
                VerdictError::Precondition(format!(
                    "experiment run {} has no output",
                    self.id.as_deref().unwrap_or("<unnamed>")
                ))
            })
    }
}

/// Decode one level of JSON string encoding.
///
/// If `value` is a string whose contents parse as JSON, the decoded value is
/// returned. Anything else comes back unchanged.
pub fn unwrap_json(value: &Value) -> Value {
    if let Value::String(encoded) = value {
        if let Ok(decoded) = serde_json::from_str::<Value>(encoded) {
            return decoded;
        }
    }
    value.clone()
}

/// Render a JSON value as prompt text: strings verbatim, everything else as
/// compact JSON.
pub fn json_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
