use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use verdict_core::{
    json_to_text, unwrap_json, AnnotatorKind, Example, ExperimentRun, LanguageModel, Result,
};
use verdict_prompts::PromptTemplate;

use crate::evaluator::{EvaluationResult, Evaluator};
use crate::label::parse_eval_output;
use crate::template::relevance_template;

/// Pulls one prompt field out of an example and its run.
pub type Extractor = Arc<dyn Fn(&Example, &ExperimentRun) -> Result<String> + Send + Sync>;

/// Evaluator that asks an LLM whether a run's response is relevant to the
/// example's query.
pub struct RelevanceEvaluator {
    model: Arc<dyn LanguageModel>,
    name: String,
    template: PromptTemplate,
    get_query: Extractor,
    get_response: Extractor,
}

impl RelevanceEvaluator {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            name: "RelevanceEvaluator".to_string(),
            template: relevance_template(),
            get_query: Arc::new(default_get_query),
            get_response: Arc::new(default_get_response),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace how the query is extracted. Defaults to the example input.
    pub fn with_get_query<F>(mut self, get_query: F) -> Self
    where
        F: Fn(&Example, &ExperimentRun) -> Result<String> + Send + Sync + 'static,
    {
        self.get_query = Arc::new(get_query);
        self
    }

    /// Replace how the response is extracted. Defaults to the run's result.
    pub fn with_get_response<F>(mut self, get_response: F) -> Self
    where
        F: Fn(&Example, &ExperimentRun) -> Result<String> + Send + Sync + 'static,
    {
        self.get_response = Arc::new(get_response);
        self
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    fn format_eval_template(&self, example: &Example, run: &ExperimentRun) -> Result<String> {
        run.result()?;
        let query = (self.get_query)(example, run)?;
        let response = (self.get_response)(example, run)?;
        let prompt = self.template.render(&HashMap::from([
            ("query".to_string(), query),
            ("response".to_string(), response),
        ]))?;
        Ok(prompt)
    }
}

fn default_get_query(example: &Example, _run: &ExperimentRun) -> Result<String> {
    Ok(json_to_text(&example.input))
}

fn default_get_response(_example: &Example, run: &ExperimentRun) -> Result<String> {
    Ok(json_to_text(&unwrap_json(run.result()?)))
}

#[async_trait]
impl Evaluator for RelevanceEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn annotator_kind(&self) -> AnnotatorKind {
        AnnotatorKind::Llm
    }

    fn evaluate(&self, example: &Example, run: &ExperimentRun) -> Result<EvaluationResult> {
        let prompt = self.format_eval_template(example, run)?;
        tracing::debug!(evaluator = %self.name, prompt_len = prompt.len(), "calling judge model");
        let response = self.model.generate(&prompt)?;
        parse_eval_output(&self.name, response)
    }

    async fn async_evaluate(
        &self,
        example: &Example,
        run: &ExperimentRun,
    ) -> Result<EvaluationResult> {
        let prompt = self.format_eval_template(example, run)?;
        tracing::debug!(evaluator = %self.name, prompt_len = prompt.len(), "calling judge model");
        let response = self.model.async_generate(&prompt).await?;
        parse_eval_output(&self.name, response)
    }
}
