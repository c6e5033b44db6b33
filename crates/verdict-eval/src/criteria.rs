use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use verdict_core::{
    json_to_text, unwrap_json, AnnotatorKind, Example, ExperimentRun, LanguageModel, Result,
};
use verdict_prompts::PromptTemplate;

use crate::builtin::BuiltinCriteria;
use crate::config::CriteriaConfig;
use crate::evaluator::{EvaluationResult, Evaluator};
use crate::label::parse_eval_output;
use crate::template::build_criteria_template;

/// Evaluator that asks an LLM whether a run's output meets a criterion.
///
/// The judge prompt is built once at construction; each call only fills in
/// the run's output text.
pub struct CriteriaEvaluator {
    model: Arc<dyn LanguageModel>,
    criteria: String,
    description: String,
    name: String,
    template: PromptTemplate,
}

impl CriteriaEvaluator {
    pub fn new(
        model: Arc<dyn LanguageModel>,
        criteria: impl Into<String>,
        description: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let criteria = criteria.into();
        let description = description.into();
        let template = build_criteria_template(&criteria, &description);
        Self::with_template(model, criteria, description, name.into(), template)
    }

    /// Build from a config, reusing a built-in template when the config
    /// describes a built-in criterion.
    pub fn from_config(model: Arc<dyn LanguageModel>, config: &CriteriaConfig) -> Result<Self> {
        config.validate()?;
        let builtin = BuiltinCriteria::ALL.into_iter().find(|builtin| {
            builtin.criteria() == config.criteria && builtin.description() == config.description
        });
        let template = match builtin {
            Some(builtin) => builtin.template().clone(),
            None => build_criteria_template(&config.criteria, &config.description),
        };
        Ok(Self::with_template(
            model,
            config.criteria.clone(),
            config.description.clone(),
            config.name().to_string(),
            template,
        ))
    }

    pub(crate) fn with_template(
        model: Arc<dyn LanguageModel>,
        criteria: String,
        description: String,
        name: String,
        template: PromptTemplate,
    ) -> Self {
        Self {
            model,
            criteria,
            description,
            name,
            template,
        }
    }

    pub fn criteria(&self) -> &str {
        &self.criteria
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    fn format_eval_template(&self, run: &ExperimentRun) -> Result<String> {
        let text = json_to_text(&unwrap_json(run.result()?));
        let prompt = self
            .template
            .render(&HashMap::from([("text".to_string(), text)]))?;
        Ok(prompt)
    }
}

#[async_trait]
impl Evaluator for CriteriaEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn annotator_kind(&self) -> AnnotatorKind {
        AnnotatorKind::Llm
    }

    fn evaluate(&self, _example: &Example, run: &ExperimentRun) -> Result<EvaluationResult> {
        let prompt = self.format_eval_template(run)?;
        tracing::debug!(evaluator = %self.name, prompt_len = prompt.len(), "calling judge model");
        let response = self.model.generate(&prompt)?;
        parse_eval_output(&self.name, response)
    }

    async fn async_evaluate(
        &self,
        _example: &Example,
        run: &ExperimentRun,
    ) -> Result<EvaluationResult> {
        let prompt = self.format_eval_template(run)?;
        tracing::debug!(evaluator = %self.name, prompt_len = prompt.len(), "calling judge model");
        let response = self.model.async_generate(&prompt).await?;
        parse_eval_output(&self.name, response)
    }
}
