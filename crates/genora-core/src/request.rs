//! Generation request types.

use serde::{Deserialize, Serialize};

use crate::tool::ToolId;

/// The free-text fields of a tool form.
///
/// `input1` is the primary subject. `input2` (long-form description) and
/// `input3` (comma-separated tags) are only used by the SEO score checker.
/// Missing fields deserialize as empty strings so older saved snapshots
/// stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInputs {
    #[serde(default)]
    pub input1: String,
    #[serde(default)]
    pub input2: String,
    #[serde(default)]
    pub input3: String,
}

impl ToolInputs {
    /// Inputs with only the primary field set.
    pub fn primary(input1: impl Into<String>) -> Self {
        Self {
            input1: input1.into(),
            ..Default::default()
        }
    }

    /// Inputs with all three fields set.
    pub fn new(
        input1: impl Into<String>,
        input2: impl Into<String>,
        input3: impl Into<String>,
    ) -> Self {
        Self {
            input1: input1.into(),
            input2: input2.into(),
            input3: input3.into(),
        }
    }

    /// Whether the primary field has non-whitespace content.
    pub fn has_primary(&self) -> bool {
        !self.input1.trim().is_empty()
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.input1.is_empty() && self.input2.is_empty() && self.input3.is_empty()
    }
}

/// One request for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub tool: ToolId,
    pub inputs: ToolInputs,
}

impl GenerationRequest {
    pub fn new(tool: ToolId, inputs: ToolInputs) -> Self {
        Self { tool, inputs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let inputs: ToolInputs = serde_json::from_str(r#"{"input1":"cats"}"#).unwrap();
        assert_eq!(inputs, ToolInputs::primary("cats"));
    }

    #[test]
    fn test_has_primary() {
        assert!(ToolInputs::primary("cats").has_primary());
        assert!(!ToolInputs::primary("   ").has_primary());
        assert!(ToolInputs::default().is_empty());
    }
}
