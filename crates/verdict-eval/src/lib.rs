//! LLM-as-judge evaluators.
//!
//! Each evaluator renders a judge prompt from an experiment run, asks a
//! [`LanguageModel`](verdict_core::LanguageModel) for a step-by-step
//! explanation ending in `LABEL: true` or `LABEL: false`, and reduces the
//! reply to a score of 1.0 or 0.0.

mod builtin;
mod config;
mod criteria;
mod evaluator;
mod label;
mod relevance;
mod template;

pub use builtin::{
    coherence_evaluator, conciseness_evaluator, helpfulness_evaluator, BuiltinCriteria,
};
pub use config::CriteriaConfig;
pub use criteria::CriteriaEvaluator;
pub use evaluator::{EvaluationResult, Evaluator};
pub use label::{parse_label_from_explanation, snap_to_rail, BINARY_RAILS};
pub use relevance::{Extractor, RelevanceEvaluator};
pub use template::{build_criteria_template, relevance_template, RELEVANCE_TEMPLATE};
