//! Defensive decoding of provider responses.
//!
//! Provider output is never partially trusted: anything that does not parse
//! into the exact shape expected for the tool decodes to `None`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::result::{GenerationResult, TrendingTopics};
use crate::tool::ToolId;

/// Strip a surrounding markdown code fence, if present.
///
/// Handles a leading ```` ```json ```` (or bare ```` ``` ````) and a trailing
/// ```` ``` ````; text without a fence is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```json") {
        body = rest;
    } else if let Some(rest) = body.strip_prefix("```") {
        // Skip an optional language tag on the fence line.
        body = match rest.find('\n') {
            Some(newline) if is_language_tag(&rest[..newline]) => &rest[newline + 1..],
            _ => rest,
        };
    }

    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }

    body.trim()
}

/// An empty fence line, or one naming a language such as `javascript`.
fn is_language_tag(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Parse JSON from a possibly fenced response, logging and returning `None`
/// on failure.
pub fn decode_json<T: DeserializeOwned>(text: &str) -> Option<T> {
    let cleaned = strip_code_fence(text);
    match serde_json::from_str(cleaned) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, response_len = text.len(), "Failed to parse JSON response");
            None
        }
    }
}

/// Decode a raw provider response into the result shape for `tool`.
///
/// The description tool returns raw text unmodified; all others expect JSON.
pub fn decode_result(tool: ToolId, text: &str) -> Option<GenerationResult> {
    if tool == ToolId::Description {
        return Some(GenerationResult::Description(text.to_string()));
    }

    let value: Value = decode_json(text)?;
    let result = GenerationResult::from_value(tool, value);
    if result.is_none() {
        warn!(tool = %tool, "Response JSON does not match the expected shape");
    }
    result
}

/// Decode the trending-topics response.
pub fn decode_trending(text: &str) -> Option<TrendingTopics> {
    decode_json(text)
}
