use std::sync::LazyLock;

use regex::Regex;
use verdict_core::{Result, VerdictError};

use crate::evaluator::EvaluationResult;

static LABEL_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\W*label\W*").expect("label delimiter is a valid regex"));

/// The values a judge's label must snap to.
pub const BINARY_RAILS: [&str; 2] = ["true", "false"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Delimiter(&'a str),
}

/// Split on the label delimiter, keeping delimiters as their own segments.
fn split_keeping_delimiters(raw: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in LABEL_DELIMITER.find_iter(raw) {
        segments.push(Segment::Text(&raw[last..m.start()]));
        segments.push(Segment::Delimiter(m.as_str()));
        last = m.end();
    }
    segments.push(Segment::Text(&raw[last..]));
    segments
}

/// Pull the candidate label out of a free-form judge response.
///
/// Returns the trimmed text after the last `label` delimiter, or the whole
/// response when it contains none.
pub fn parse_label_from_explanation(raw: &str) -> &str {
    let segments = split_keeping_delimiters(raw);
    if segments.len() > 1 {
        for index in (1..segments.len()).rev() {
            if let (Segment::Delimiter(delimiter), Segment::Text(text)) =
                (segments[index - 1], segments[index])
            {
                tracing::trace!(delimiter = %delimiter.trim(), "label delimiter found");
                return text.trim();
            }
        }
    }
    raw
}

/// Snap a candidate label onto one of `rails`.
///
/// A case-insensitive exact match wins. Otherwise the candidate is split into
/// word tokens and exactly one rail value must occur among them; none or
/// several is no match.
pub fn snap_to_rail<'r>(candidate: &str, rails: &[&'r str]) -> Option<&'r str> {
    let normalized = candidate.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    if let Some(rail) = rails
        .iter()
        .copied()
        .find(|rail| rail.to_lowercase() == normalized)
    {
        return Some(rail);
    }

    let tokens: Vec<&str> = normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();
    let mut found = rails.iter().copied().filter(|rail| {
        let rail = rail.to_lowercase();
        tokens.iter().any(|token| *token == rail)
    });
    match (found.next(), found.next()) {
        (Some(rail), None) => Some(rail),
        _ => None,
    }
}

/// Turn a raw judge response into a binary result.
pub(crate) fn parse_eval_output(evaluator: &str, response: String) -> Result<EvaluationResult> {
    let raw_label = parse_label_from_explanation(&response);
    let score = match snap_to_rail(raw_label, &BINARY_RAILS) {
        Some("true") => 1.0,
        Some("false") => 0.0,
        _ => {
            tracing::warn!(evaluator = %evaluator, raw_label = %raw_label, "unparsable judge response");
            return Err(VerdictError::UnparsableOutput { response });
        }
    };
    tracing::debug!(evaluator = %evaluator, score = score, "judge response parsed");
    Ok(EvaluationResult::new(score, response))
}
