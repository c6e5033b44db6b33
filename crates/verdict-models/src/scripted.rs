use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use verdict_core::{LanguageModel, Result, VerdictError};

/// Replies with queued responses in order and errors once they run out.
///
/// Blocking and async calls draw from the same queue.
#[derive(Clone)]
pub struct ScriptedModel {
    responses: Arc<Mutex<VecDeque<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedModel {
    pub fn new<S: Into<String>>(responses: impl IntoIterator<Item = S>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().map(Into::into).collect())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }

    pub fn remaining(&self) -> usize {
        self.responses
            .lock()
            .map(|responses| responses.len())
            .unwrap_or_default()
    }

    fn next_response(&self, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .map_err(|_| VerdictError::Model("scripted model lock poisoned".to_string()))?
            .push(prompt.to_string());
        let mut responses = self
            .responses
            .lock()
            .map_err(|_| VerdictError::Model("scripted model lock poisoned".to_string()))?;
        responses
            .pop_front()
            .ok_or_else(|| VerdictError::Model("scripted model exhausted responses".to_string()))
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    fn generate(&self, prompt: &str) -> Result<String> {
        self.next_response(prompt)
    }

    async fn async_generate(&self, prompt: &str) -> Result<String> {
        self.next_response(prompt)
    }
}
