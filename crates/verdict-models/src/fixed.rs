use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use verdict_core::{LanguageModel, Result, VerdictError};

/// Always replies with the same text, recording every prompt it is sent.
#[derive(Clone)]
pub struct FixedResponseModel {
    response: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl FixedResponseModel {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts
            .lock()
            .ok()
            .and_then(|prompts| prompts.last().cloned())
    }

    fn respond(&self, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .map_err(|_| VerdictError::Model("fixed model lock poisoned".to_string()))?
            .push(prompt.to_string());
        Ok(self.response.clone())
    }
}

#[async_trait]
impl LanguageModel for FixedResponseModel {
    fn generate(&self, prompt: &str) -> Result<String> {
        self.respond(prompt)
    }

    async fn async_generate(&self, prompt: &str) -> Result<String> {
        self.respond(prompt)
    }
}
