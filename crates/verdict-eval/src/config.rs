use serde::{Deserialize, Serialize};
use verdict_core::{Result, VerdictError};

/// Declarative description of a criteria evaluator.
///
/// ```json
/// { "criteria": "polite", "description": "uses courteous language", "name": "Politeness" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaConfig {
    pub criteria: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl CriteriaConfig {
    pub fn new(criteria: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            criteria: criteria.into(),
            description: description.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Evaluator name, falling back to the criterion word.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.criteria)
    }

    pub fn validate(&self) -> Result<()> {
        if self.criteria.trim().is_empty() {
            return Err(VerdictError::Config("criteria must not be empty".to_string()));
        }
        Ok(())
    }
}
