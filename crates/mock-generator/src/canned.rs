//! Canned generator implementation - plausible offline answers per tool.

use genora_core::{
    async_trait, decode_result, decode_trending, GenerationError, GenerationRequest,
    GenerationResult, Generator, Prompt, ToolId, TrendingTopics,
};
use serde_json::json;

/// A generator that answers every tool with a fixed, input-aware response
/// without any network access.
///
/// Responses are rendered as the provider would send them (JSON for the
/// structured tools, plain text for descriptions) and go through the same
/// decoding as live answers.
#[derive(Debug, Clone, Default)]
pub struct CannedGenerator;

impl CannedGenerator {
    /// Create a new CannedGenerator.
    pub fn new() -> Self {
        Self
    }

    /// The raw response text this generator produces for a request.
    pub fn response_for(&self, request: &GenerationRequest) -> String {
        let subject = request.inputs.input1.trim();
        let tag = hashtag(subject);

        match request.tool {
            ToolId::Title => json!([
                format!("I Tried {} for 30 Days", subject),
                format!("The Truth About {}", subject),
                format!("{}: What Nobody Tells You", subject),
                format!("Beginner's Guide to {}", subject),
                format!("{} in 10 Minutes", subject),
                format!("Why Everyone Is Talking About {}", subject),
                format!("Stop Doing {} Wrong", subject),
            ])
            .to_string(),
            ToolId::Description => format!(
                "Welcome back to the channel! Today we are diving into {subject}. \
                 We cover the basics, the mistakes to avoid and the tricks that \
                 actually work.\n\nIf this helped, like and subscribe for more.\n\n\
                 #{tag} #howto #tutorial"
            ),
            ToolId::Username => json!([
                format!("the{}", tag),
                format!("{}hq", tag),
                format!("{}_daily", tag),
                format!("its{}", tag),
                format!("{}.lab", tag),
                format!("real{}", tag),
                format!("{}nation", tag),
                format!("just{}", tag),
                format!("{}_studio", tag),
                format!("{}verse", tag),
            ])
            .to_string(),
            ToolId::Slogan => json!([
                format!("{}, done right.", capitalize(subject)),
                format!("Live the {} life.", subject),
                format!("More {}. Less noise.", subject),
                format!("Your daily dose of {}.", subject),
                format!("Think {}.", subject),
            ])
            .to_string(),
            ToolId::Hashtag => json!({
                "high": [format!("#{tag}"), "#viral", "#trending", "#fyp", "#explore"],
                "medium": [format!("#{tag}life"), format!("#{tag}tips"), format!("#{tag}community"),
                           "#creators", "#contentcreator"],
                "low": [format!("#{tag}forbeginners"), format!("#{tag}daily"),
                        format!("#{tag}journey"), format!("#learn{tag}"), format!("#{tag}2024")],
            })
            .to_string(),
            ToolId::Optimizer => json!({
                "title": format!("{}: The Complete Guide", capitalize(subject)),
                "description": format!(
                    "Everything you need to know about {subject}, from first steps to advanced \
                     techniques. Timestamps below."
                ),
                "tags": [subject, format!("{subject} guide"), format!("{subject} tutorial"),
                         format!("{subject} tips"), format!("how to {subject}")],
            })
            .to_string(),
            ToolId::Score => {
                let inputs = &request.inputs;
                let tags = inputs.input3.split(',').filter(|t| !t.trim().is_empty()).count();
                let score = (inputs.input1.len().min(60)
                    + inputs.input2.len().min(300) / 10
                    + tags.min(10)
                    + 10)
                    .min(100);
                json!({
                    "score": score,
                    "tips": [
                        "Put the main keyword in the first 60 characters of the title.",
                        "Add timestamps to the description.",
                        "Use 10 to 15 specific tags.",
                    ],
                })
                .to_string()
            }
        }
    }
}

fn hashtag(subject: &str) -> String {
    let tag: String = subject
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    if tag.is_empty() {
        "creator".to_string()
    } else {
        tag
    }
}

fn capitalize(subject: &str) -> String {
    let mut chars = subject.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[async_trait]
impl Generator for CannedGenerator {
    async fn complete(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        Ok(format!("Canned completion ({} characters of prompt)", prompt.text.len()))
    }

    fn name(&self) -> &str {
        "CannedGenerator"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Option<GenerationResult>, GenerationError> {
        Ok(decode_result(request.tool, &self.response_for(request)))
    }

    async fn trending_topics(&self) -> Result<Option<TrendingTopics>, GenerationError> {
        let text = json!({
            "youtube": ["AI video tools", "Budget travel vlogs", "Speedrun records",
                        "Home workouts", "Retro gaming"],
            "instagram": ["Photo dumps", "Slow living", "Street style",
                          "Minimal desk setups", "Plant care"],
        })
        .to_string();
        Ok(decode_trending(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genora_core::{ToolInputs, TOOLS};

    #[tokio::test]
    async fn test_every_tool_decodes() {
        let generator = CannedGenerator::new();
        for tool in TOOLS.iter() {
            let request = GenerationRequest::new(
                tool.id,
                ToolInputs::new("Home Espresso", "A long description", "coffee,espresso"),
            );
            let result = generator.generate(&request).await.unwrap().unwrap();
            assert_eq!(result.tool_id(), tool.id);
            assert!(result.is_usable());
        }
    }

    #[tokio::test]
    async fn test_titles_use_subject() {
        let generator = CannedGenerator::new();
        let request = GenerationRequest::new(ToolId::Title, ToolInputs::primary("cats"));
        match generator.generate(&request).await.unwrap() {
            Some(GenerationResult::Titles(titles)) => {
                assert_eq!(titles.len(), 7);
                assert!(titles.iter().all(|t| t.contains("cats")));
            }
            other => panic!("Expected titles, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_score_in_range() {
        let generator = CannedGenerator::new();
        let long = "x".repeat(5000);
        let request = GenerationRequest::new(ToolId::Score, ToolInputs::new(&long, &long, "a,b"));
        match generator.generate(&request).await.unwrap() {
            Some(GenerationResult::Score(score)) => {
                assert!(score.score <= 100);
                assert_eq!(score.tips.len(), 3);
            }
            other => panic!("Expected score, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_trending_topics() {
        let topics = CannedGenerator::new().trending_topics().await.unwrap().unwrap();
        assert_eq!(topics.youtube.len(), 5);
        assert_eq!(topics.instagram.len(), 5);
    }

    #[test]
    fn test_hashtag_normalization() {
        assert_eq!(hashtag("Home Espresso!"), "homeespresso");
        assert_eq!(hashtag("   "), "creator");
    }
}
