use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use verdict_core::{LanguageModel, VerdictError};
use verdict_prompts::PromptTemplate;

use crate::criteria::CriteriaEvaluator;
use crate::template::build_criteria_template;

/// The criteria evaluators that ship preconfigured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinCriteria {
    Conciseness,
    Helpfulness,
    Coherence,
}

static TEMPLATES: [OnceLock<PromptTemplate>; 3] = [const { OnceLock::new() }; 3];

impl BuiltinCriteria {
    pub const ALL: [BuiltinCriteria; 3] = [
        BuiltinCriteria::Conciseness,
        BuiltinCriteria::Helpfulness,
        BuiltinCriteria::Coherence,
    ];

    pub fn criteria(&self) -> &'static str {
        match self {
            BuiltinCriteria::Conciseness => "concise",
            BuiltinCriteria::Helpfulness => "helpful",
            BuiltinCriteria::Coherence => "coherent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BuiltinCriteria::Conciseness => "is just a few sentences and easy to follow",
            BuiltinCriteria::Helpfulness => "provides useful information",
            BuiltinCriteria::Coherence => "is coherent, well-structured, and logically sound",
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            BuiltinCriteria::Conciseness => "Conciseness",
            BuiltinCriteria::Helpfulness => "Helpfulness",
            BuiltinCriteria::Coherence => "Coherence",
        }
    }

    /// The judge prompt for this criterion, built on first use and shared
    /// by every evaluator of this kind.
    pub fn template(&self) -> &'static PromptTemplate {
        TEMPLATES[*self as usize]
            .get_or_init(|| build_criteria_template(self.criteria(), self.description()))
    }

    pub fn evaluator(&self, model: Arc<dyn LanguageModel>) -> CriteriaEvaluator {
        self.evaluator_with_name(model, self.default_name())
    }

    pub fn evaluator_with_name(
        &self,
        model: Arc<dyn LanguageModel>,
        name: impl Into<String>,
    ) -> CriteriaEvaluator {
        CriteriaEvaluator::with_template(
            model,
            self.criteria().to_string(),
            self.description().to_string(),
            name.into(),
            self.template().clone(),
        )
    }
}

impl fmt::Display for BuiltinCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

impl FromStr for BuiltinCriteria {
    type Err = VerdictError;

    /// Accepts the criterion word or the default name, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BuiltinCriteria::ALL
            .into_iter()
            .find(|builtin| {
                builtin.criteria().eq_ignore_ascii_case(wanted)
                    || builtin.default_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| VerdictError::Config(format!("unknown built-in criteria: {wanted:?}")))
    }
}

pub fn conciseness_evaluator(model: Arc<dyn LanguageModel>) -> CriteriaEvaluator {
    BuiltinCriteria::Conciseness.evaluator(model)
}

pub fn helpfulness_evaluator(model: Arc<dyn LanguageModel>) -> CriteriaEvaluator {
    BuiltinCriteria::Helpfulness.evaluator(model)
}

pub fn coherence_evaluator(model: Arc<dyn LanguageModel>) -> CriteriaEvaluator {
    BuiltinCriteria::Coherence.evaluator(model)
}
