//! Tool-specific prompt construction.

use serde_json::{json, Value};

use crate::request::GenerationRequest;
use crate::tool::ToolId;

/// How the provider is asked to format its answer.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    /// Free text, returned as-is.
    Text,
    /// JSON, described only by the prompt wording.
    Json,
    /// JSON constrained by a declared schema (OpenAPI subset, upper-case types).
    JsonSchema(Value),
}

impl OutputFormat {
    /// Whether the answer is expected to be JSON.
    pub fn is_json(&self) -> bool {
        !matches!(self, OutputFormat::Text)
    }
}

/// A natural-language prompt plus its output format.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub text: String,
    pub format: OutputFormat,
}

impl Prompt {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: OutputFormat::Text,
        }
    }

    pub fn json(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: OutputFormat::Json,
        }
    }

    pub fn with_schema(text: impl Into<String>, schema: Value) -> Self {
        Self {
            text: text.into(),
            format: OutputFormat::JsonSchema(schema),
        }
    }
}

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// Build the prompt for a generation request.
///
/// Empty inputs are interpolated as-is; callers decide whether to block them.
pub fn build_prompt(request: &GenerationRequest) -> Prompt {
    let inputs = &request.inputs;
    let subject = inputs.input1.as_str();

    match request.tool {
        ToolId::Title => Prompt::json(format!(
            "Generate 7 catchy, SEO-friendly YouTube titles for a video about \"{}\". \
             The titles should be engaging and curiosity-driven. Return as a JSON array of strings.",
            subject
        )),
        ToolId::Description => Prompt::text(format!(
            "Write an SEO-optimized YouTube description for a video titled or about \"{}\". \
             Include relevant keywords, a compelling intro, and a few relevant hashtags at the end. \
             The description should be well-structured and around 200-300 words.",
            subject
        )),
        ToolId::Username => Prompt::json(format!(
            "Generate 10 stylish and creative usernames with a \"{}\" theme. \
             They should be unique and memorable. Return as a JSON array of strings.",
            subject
        )),
        ToolId::Slogan => Prompt::json(format!(
            "Generate 5 short, powerful, and memorable slogans or taglines for a brand, channel, \
             or niche focused on \"{}\". Return as a JSON array of strings.",
            subject
        )),
        ToolId::Hashtag => Prompt::with_schema(
            format!(
                "Generate a list of the best hashtags for a social media post about \"{}\". \
                 Categorize them into 'high' (very popular), 'medium' (niche but popular), and \
                 'low' (very specific) competition. Provide 5-7 hashtags for each category.",
                subject
            ),
            json!({
                "type": "OBJECT",
                "properties": {
                    "high": string_array(),
                    "medium": string_array(),
                    "low": string_array(),
                },
            }),
        ),
        ToolId::Optimizer => Prompt::with_schema(
            format!(
                "Generate a complete SEO package for a YouTube video about \"{}\". This should \
                 include an optimized title, a detailed and keyword-rich description (around 200 \
                 words), and a list of 15 relevant tags.",
                subject
            ),
            json!({
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "tags": string_array(),
                },
            }),
        ),
        ToolId::Score => Prompt::with_schema(
            format!(
                "Analyze the following YouTube video content: Title: \"{}\", Description: \"{}\", \
                 Tags: \"{}\". Provide an estimated SEO score from 0 to 100, and a list of 3-5 \
                 concise, actionable improvement tips.",
                inputs.input1, inputs.input2, inputs.input3
            ),
            json!({
                "type": "OBJECT",
                "properties": {
                    "score": { "type": "NUMBER" },
                    "tips": string_array(),
                },
            }),
        ),
    }
}

/// Prompt for the trending-topics widget.
pub fn trending_prompt() -> Prompt {
    Prompt::with_schema(
        "What are the top 5 trending topics on YouTube and Instagram for general audiences \
         today? Provide distinct lists for each platform.",
        json!({
            "type": "OBJECT",
            "properties": {
                "youtube": string_array(),
                "instagram": string_array(),
            },
        }),
    )
}
