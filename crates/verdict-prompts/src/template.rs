use std::collections::HashMap;

use thiserror::Error;
use verdict_core::VerdictError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("missing variable: {0}")]
    MissingVariable(String),
}

impl From<PromptError> for VerdictError {
    fn from(err: PromptError) -> Self {
        VerdictError::Prompt(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Variable(String),
}

/// A string template with `{{ name }}` placeholders.
///
/// The template is parsed once. Substituted values, whether baked in with
/// [`partial`](Self::partial) or supplied to [`render`](Self::render), are
/// always literal text: braces inside a value never open a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    parts: Vec<Part>,
    text: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self::from_parts(parse(&template.into()))
    }

    fn from_parts(parts: Vec<Part>) -> Self {
        let mut text = String::new();
        for part in &parts {
            match part {
                Part::Literal(literal) => text.push_str(literal),
                Part::Variable(name) => {
                    text.push_str("{{ ");
                    text.push_str(name);
                    text.push_str(" }}");
                }
            }
        }
        Self { parts, text }
    }

    /// Bake `values` into the template, leaving every other placeholder open.
    pub fn partial(&self, values: &HashMap<String, String>) -> PromptTemplate {
        let mut parts: Vec<Part> = Vec::with_capacity(self.parts.len());
        for part in &self.parts {
            let part = match part {
                Part::Variable(name) => match values.get(name) {
                    Some(value) => Part::Literal(value.clone()),
                    None => part.clone(),
                },
                Part::Literal(_) => part.clone(),
            };
            if let (Some(Part::Literal(previous)), Part::Literal(literal)) =
                (parts.last_mut(), &part)
            {
                previous.push_str(literal);
                continue;
            }
            parts.push(part);
        }
        Self::from_parts(parts)
    }

    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut output = String::with_capacity(self.text.len());
        for part in &self.parts {
            match part {
                Part::Literal(literal) => output.push_str(literal),
                Part::Variable(name) => {
                    let value = values
                        .get(name)
                        .ok_or_else(|| PromptError::MissingVariable(name.clone()))?;
                    output.push_str(value);
                }
            }
        }
        Ok(output)
    }

    /// Names of the placeholders still open, in order of first appearance.
    pub fn input_variables(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for part in &self.parts {
            if let Part::Variable(name) = part {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
        names
    }

    /// The template text, with open placeholders written as `{{ name }}`.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn parse(template: &str) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        literal.push_str(&rest[..start]);
        let after_start = &rest[start + 2..];
        if let Some(end) = after_start.find("}}") {
            if !literal.is_empty() {
                parts.push(Part::Literal(std::mem::take(&mut literal)));
            }
            parts.push(Part::Variable(after_start[..end].trim().to_string()));
            rest = &after_start[end + 2..];
        } else {
            literal.push_str(&rest[start..]);
            rest = "";
            break;
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        parts.push(Part::Literal(literal));
    }
    parts
}
