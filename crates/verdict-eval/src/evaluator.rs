use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use verdict_core::{AnnotatorKind, Example, ExperimentRun, Result};

/// Result of a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    score: f64,
    explanation: String,
    #[serde(default)]
    metadata: HashMap<String, Value>,
}

impl EvaluationResult {
    pub fn new(score: f64, explanation: impl Into<String>) -> Self {
        Self {
            score,
            explanation: explanation.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry to this result.
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// 1.0 when the judge answered `true`, 0.0 when it answered `false`.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// The judge's full, unmodified response.
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn metadata(&self) -> &HashMap<String, Value> {
        &self.metadata
    }
}

/// Trait for judging an experiment run against the example it was run on.
///
/// Implementations hold no per-call state, so one instance can serve many
/// concurrent evaluations.
#[async_trait]
pub trait Evaluator: Send + Sync {
    fn name(&self) -> &str;

    fn annotator_kind(&self) -> AnnotatorKind;

    /// Evaluate, blocking the calling thread on the model call.
    fn evaluate(&self, example: &Example, run: &ExperimentRun) -> Result<EvaluationResult>;

    /// Evaluate, suspending at the model call.
    async fn async_evaluate(
        &self,
        example: &Example,
        run: &ExperimentRun,
    ) -> Result<EvaluationResult>;
}
