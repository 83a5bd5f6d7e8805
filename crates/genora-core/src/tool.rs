//! The fixed catalog of content tools.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of one of the seven content tools.
///
/// The string form (`youtube-title`, `seo-score`, ...) is used in storage
/// keys and on the command line, so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolId {
    #[serde(rename = "youtube-title")]
    Title,
    #[serde(rename = "youtube-description")]
    Description,
    #[serde(rename = "username")]
    Username,
    #[serde(rename = "slogan")]
    Slogan,
    #[serde(rename = "hashtag")]
    Hashtag,
    #[serde(rename = "seo-optimizer")]
    Optimizer,
    #[serde(rename = "seo-score")]
    Score,
}

impl ToolId {
    /// All tool ids in catalog order.
    pub const ALL: [ToolId; 7] = [
        ToolId::Title,
        ToolId::Description,
        ToolId::Username,
        ToolId::Slogan,
        ToolId::Hashtag,
        ToolId::Optimizer,
        ToolId::Score,
    ];

    /// Stable string form of the id.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::Title => "youtube-title",
            ToolId::Description => "youtube-description",
            ToolId::Username => "username",
            ToolId::Slogan => "slogan",
            ToolId::Hashtag => "hashtag",
            ToolId::Optimizer => "seo-optimizer",
            ToolId::Score => "seo-score",
        }
    }

    /// The catalog descriptor for this id.
    pub fn tool(&self) -> &'static Tool {
        // TOOLS is declared in the same order as ALL.
        &TOOLS[*self as usize]
    }

    /// Input fields the tool collects, in order (`input1`, `input2`, `input3`).
    pub fn fields(&self) -> &'static [InputField] {
        match self {
            ToolId::Score => &SCORE_FIELDS,
            ToolId::Username => &USERNAME_FIELDS,
            ToolId::Slogan => &SLOGAN_FIELDS,
            _ => &TOPIC_FIELDS,
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tool id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool: {0}")]
pub struct UnknownTool(pub String);

impl FromStr for ToolId {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

/// Immutable descriptor of a content tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub id: ToolId,
    pub title: &'static str,
    pub description: &'static str,
    /// Icon reference used by front ends.
    pub icon: &'static str,
}

/// One text field of a tool's input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputField {
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Long-form text (rendered as a text area).
    pub multiline: bool,
}

const TOPIC_FIELDS: [InputField; 1] = [InputField {
    label: "topic",
    placeholder: "Enter a topic or keyword...",
    multiline: false,
}];

const USERNAME_FIELDS: [InputField; 1] = [InputField {
    label: "theme",
    placeholder: "Enter a theme (e.g., gaming, luxury)...",
    multiline: false,
}];

const SLOGAN_FIELDS: [InputField; 1] = [InputField {
    label: "brand",
    placeholder: "Enter your brand or niche...",
    multiline: false,
}];

const SCORE_FIELDS: [InputField; 3] = [
    InputField {
        label: "title",
        placeholder: "Enter video title...",
        multiline: false,
    },
    InputField {
        label: "description",
        placeholder: "Paste description...",
        multiline: true,
    },
    InputField {
        label: "tags",
        placeholder: "Enter tags (comma separated)...",
        multiline: false,
    },
];

/// The tool catalog, in display order.
pub static TOOLS: [Tool; 7] = [
    Tool {
        id: ToolId::Title,
        title: "YouTube Title Generator",
        description: "Generate catchy titles for your videos.",
        icon: "title",
    },
    Tool {
        id: ToolId::Description,
        title: "YouTube Description Generator",
        description: "Create optimized and rich descriptions.",
        icon: "description",
    },
    Tool {
        id: ToolId::Username,
        title: "Username Generator",
        description: "Find stylish and unique usernames.",
        icon: "username",
    },
    Tool {
        id: ToolId::Slogan,
        title: "Slogan/Tagline Generator",
        description: "Craft powerful slogans for your brand.",
        icon: "slogan",
    },
    Tool {
        id: ToolId::Hashtag,
        title: "Hashtag Generator",
        description: "Discover the best hashtags for your content.",
        icon: "hashtag",
    },
    Tool {
        id: ToolId::Optimizer,
        title: "YouTube SEO Optimizer",
        description: "Get a full SEO-optimized package.",
        icon: "optimizer",
    },
    Tool {
        id: ToolId::Score,
        title: "SEO Score Checker",
        description: "Analyze and improve your SEO score.",
        icon: "score",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_ids() {
        for id in ToolId::ALL {
            assert_eq!(id.tool().id, id);
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for id in ToolId::ALL {
            assert_eq!(id.as_str().parse::<ToolId>().unwrap(), id);
        }
        assert!("youtube-thumbnail".parse::<ToolId>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&ToolId::Optimizer).unwrap();
        assert_eq!(json, "\"seo-optimizer\"");
        let parsed: ToolId = serde_json::from_str("\"seo-score\"").unwrap();
        assert_eq!(parsed, ToolId::Score);
    }

    #[test]
    fn test_fields() {
        assert_eq!(ToolId::Score.fields().len(), 3);
        assert!(ToolId::Score.fields()[1].multiline);
        assert_eq!(ToolId::Title.fields().len(), 1);
        assert_eq!(ToolId::Username.fields()[0].label, "theme");
    }
}
