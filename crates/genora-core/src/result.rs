//! Generation result types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::tool::ToolId;

/// Hashtags grouped by competition level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagCategories {
    /// Very popular tags.
    pub high: Vec<String>,
    /// Niche but popular tags.
    pub medium: Vec<String>,
    /// Very specific tags.
    pub low: Vec<String>,
}

/// A full SEO package for a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoOptimization {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// An SEO score with improvement tips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoScore {
    /// Estimated score, 0 to 100.
    #[serde(deserialize_with = "deserialize_score")]
    pub score: u8,
    pub tips: Vec<String>,
}

/// Trending topics per platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingTopics {
    pub youtube: Vec<String>,
    pub instagram: Vec<String>,
}

/// Models sometimes answer `82.0` or `82.5` for a numeric schema field.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || !(0.0..=100.0).contains(&raw) {
        return Err(serde::de::Error::custom(format!(
            "score out of range: {}",
            raw
        )));
    }
    Ok(raw.round() as u8)
}

/// The result of one generation, tagged by the tool that produced it.
///
/// Serializes to the bare payload (an array, a string, or an object) so
/// persisted history keeps the provider's shape; deserialization therefore
/// needs the tool id, see [`GenerationResult::from_value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Titles(Vec<String>),
    Description(String),
    Usernames(Vec<String>),
    Slogans(Vec<String>),
    Hashtags(HashtagCategories),
    Optimization(SeoOptimization),
    Score(SeoScore),
}

impl GenerationResult {
    /// The tool this result belongs to.
    pub fn tool_id(&self) -> ToolId {
        match self {
            GenerationResult::Titles(_) => ToolId::Title,
            GenerationResult::Description(_) => ToolId::Description,
            GenerationResult::Usernames(_) => ToolId::Username,
            GenerationResult::Slogans(_) => ToolId::Slogan,
            GenerationResult::Hashtags(_) => ToolId::Hashtag,
            GenerationResult::Optimization(_) => ToolId::Optimizer,
            GenerationResult::Score(_) => ToolId::Score,
        }
    }

    /// Decode a bare payload using the shape expected for `tool`.
    ///
    /// Returns `None` when the payload does not match that shape.
    pub fn from_value(tool: ToolId, value: Value) -> Option<Self> {
        let result = match tool {
            ToolId::Title => serde_json::from_value(value).map(GenerationResult::Titles),
            ToolId::Description => serde_json::from_value(value).map(GenerationResult::Description),
            ToolId::Username => serde_json::from_value(value).map(GenerationResult::Usernames),
            ToolId::Slogan => serde_json::from_value(value).map(GenerationResult::Slogans),
            ToolId::Hashtag => serde_json::from_value(value).map(GenerationResult::Hashtags),
            ToolId::Optimizer => serde_json::from_value(value).map(GenerationResult::Optimization),
            ToolId::Score => serde_json::from_value(value).map(GenerationResult::Score),
        };
        result.ok()
    }

    /// Whether the result carries anything worth showing or saving.
    pub fn is_usable(&self) -> bool {
        match self {
            GenerationResult::Titles(items)
            | GenerationResult::Usernames(items)
            | GenerationResult::Slogans(items) => !items.is_empty(),
            GenerationResult::Description(text) => !text.trim().is_empty(),
            GenerationResult::Hashtags(tags) => {
                !(tags.high.is_empty() && tags.medium.is_empty() && tags.low.is_empty())
            }
            GenerationResult::Optimization(seo) => !seo.title.trim().is_empty(),
            GenerationResult::Score(_) => true,
        }
    }

    /// Plain-text rendering used for copy-to-clipboard.
    pub fn copy_text(&self) -> String {
        match self {
            GenerationResult::Titles(items)
            | GenerationResult::Usernames(items)
            | GenerationResult::Slogans(items) => items.join("\n"),
            GenerationResult::Description(text) => text.clone(),
            GenerationResult::Hashtags(tags) => tags
                .high
                .iter()
                .chain(&tags.medium)
                .chain(&tags.low)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            GenerationResult::Optimization(seo) => format!(
                "{}\n\n{}\n\n{}",
                seo.title,
                seo.description,
                seo.tags.join(", ")
            ),
            GenerationResult::Score(score) => {
                format!("SEO score: {}/100\n{}", score.score, score.tips.join("\n"))
            }
        }
    }
}
