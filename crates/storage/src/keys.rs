//! Storage key namespace.
//!
//! Keys are namespaced per tool and per concern so inputs and history of
//! different tools never collide.

use genora_core::ToolId;

/// Key holding the user-submitted reviews.
pub const USER_REVIEWS_KEY: &str = "genora-user-reviews";

/// Key holding the theme preference (raw `dark` / `light`, not JSON).
pub const THEME_KEY: &str = "theme";

/// Key holding the last submitted inputs for a tool.
pub fn inputs_key(tool: ToolId) -> String {
    format!("genora-inputs-{}", tool.as_str())
}

/// Key holding the history list for a tool.
pub fn history_key(tool: ToolId) -> String {
    format!("genora-history-{}", tool.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(inputs_key(ToolId::Title), "genora-inputs-youtube-title");
        assert_eq!(history_key(ToolId::Score), "genora-history-seo-score");

        let mut seen = HashSet::new();
        for tool in ToolId::ALL {
            assert!(seen.insert(inputs_key(tool)));
            assert!(seen.insert(history_key(tool)));
        }
        assert!(!seen.contains(USER_REVIEWS_KEY));
        assert!(!seen.contains(THEME_KEY));
    }
}
