//! Verdict: LLM-as-judge evaluators for experiment runs.
//!
//! This crate re-exports the Verdict sub-crates for single-import usage.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use verdict::core::{Example, ExperimentRun};
//! use verdict::eval::{conciseness_evaluator, Evaluator};
//!
//! tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
//!
//! let evaluator = conciseness_evaluator(Arc::new(my_model));
//! let result = evaluator
//!     .async_evaluate(&Example::new("What is 2+2?"), &ExperimentRun::new("4"))
//!     .await?;
//! println!("{} scored {}", evaluator.name(), result.score());
//! ```

/// Core traits and types: LanguageModel, Example, ExperimentRun, VerdictError.
pub use verdict_core as core;

/// Prompt templates with `{{ variable }}` placeholders and partial binding.
#[cfg(feature = "prompts")]
pub use verdict_prompts as prompts;

/// Test doubles: ScriptedModel, FixedResponseModel.
#[cfg(feature = "models")]
pub use verdict_models as models;

/// Evaluators: Evaluator trait, CriteriaEvaluator, RelevanceEvaluator, BuiltinCriteria.
#[cfg(feature = "eval")]
pub use verdict_eval as eval;
