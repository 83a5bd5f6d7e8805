//! Last-submitted inputs per tool.

use genora_core::{ToolId, ToolInputs};

use crate::keys::inputs_key;
use crate::kv::{read_json, write_json, SharedStore};
use crate::Result;

/// Remembers the inputs last submitted for each tool, so reopening a tool
/// restores them.
#[derive(Clone)]
pub struct InputStore {
    store: SharedStore,
}

impl InputStore {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Saved inputs for a tool; empty when nothing (or nothing readable) is saved.
    pub fn load(&self, tool: ToolId) -> ToolInputs {
        read_json(self.store.as_ref(), &inputs_key(tool)).unwrap_or_default()
    }

    pub fn save(&self, tool: ToolId, inputs: &ToolInputs) -> Result<()> {
        write_json(self.store.as_ref(), &inputs_key(tool), inputs)
    }

    pub fn clear(&self, tool: ToolId) -> Result<()> {
        self.store.remove(&inputs_key(tool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    #[test]
    fn test_round_trip() {
        let inputs = InputStore::new(MemoryStore::shared());
        let saved = ToolInputs::new("x", "y", "");

        inputs.save(ToolId::Score, &saved).unwrap();
        assert_eq!(inputs.load(ToolId::Score), saved);
        assert_eq!(inputs.load(ToolId::Title), ToolInputs::default());
    }

    #[test]
    fn test_clear() {
        let inputs = InputStore::new(MemoryStore::shared());
        inputs.save(ToolId::Slogan, &ToolInputs::primary("coffee")).unwrap();
        inputs.clear(ToolId::Slogan).unwrap();
        assert_eq!(inputs.load(ToolId::Slogan), ToolInputs::default());
    }

    #[test]
    fn test_malformed_inputs_load_empty() {
        let memory = Arc::new(MemoryStore::new());
        memory.set(&inputs_key(ToolId::Hashtag), "[1, 2, 3]").unwrap();

        let inputs = InputStore::new(memory);
        assert_eq!(inputs.load(ToolId::Hashtag), ToolInputs::default());
    }

    #[test]
    fn test_partial_snapshot_fills_defaults() {
        let memory = Arc::new(MemoryStore::new());
        memory
            .set(&inputs_key(ToolId::Title), r#"{"input1": "cats"}"#)
            .unwrap();

        let inputs = InputStore::new(memory);
        assert_eq!(inputs.load(ToolId::Title), ToolInputs::primary("cats"));
    }
}
