//! Per-tool generation history.

use chrono::Utc;
use genora_core::{GenerationResult, HistoryItem, ToolId, ToolInputs};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::keys::history_key;
use crate::kv::{read_json, write_json, SharedStore};
use crate::{Result, StoreError};

/// Maximum number of items kept per tool.
pub const MAX_HISTORY_ITEMS: usize = 50;

/// History item as persisted; the result shape is only known per tool.
#[derive(Debug, Deserialize)]
struct StoredItem {
    id: String,
    timestamp: i64,
    #[serde(default)]
    inputs: ToolInputs,
    result: Value,
}

/// Ordered, size-bounded history lists, one per tool, newest first.
///
/// Appending past the bound evicts the oldest entry. Read-modify-write is not
/// atomic; a single user in a single process is assumed.
#[derive(Clone)]
pub struct HistoryStore {
    store: SharedStore,
    max_items: usize,
}

impl HistoryStore {
    /// Create a history store with the default bound.
    pub fn new(store: SharedStore) -> Self {
        Self::with_limit(store, MAX_HISTORY_ITEMS)
    }

    /// Create a history store with a custom bound.
    pub fn with_limit(store: SharedStore, max_items: usize) -> Self {
        Self { store, max_items }
    }

    /// Maximum number of items kept per tool.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Load the history for a tool, newest first.
    ///
    /// A missing key or a value that is not a well-formed array yields an
    /// empty list. Items whose result does not match the tool's shape are
    /// dropped.
    pub fn load(&self, tool: ToolId) -> Vec<HistoryItem> {
        let Some(stored) = read_json::<Vec<StoredItem>>(self.store.as_ref(), &history_key(tool))
        else {
            return Vec::new();
        };

        let total = stored.len();
        let items: Vec<HistoryItem> = stored
            .into_iter()
            .filter_map(|item| {
                let result = GenerationResult::from_value(tool, item.result)?;
                Some(HistoryItem {
                    id: item.id,
                    timestamp: item.timestamp,
                    inputs: item.inputs,
                    result,
                })
            })
            .collect();

        if items.len() != total {
            warn!(
                tool = %tool,
                dropped = total - items.len(),
                "Dropped history items with mismatched result shape"
            );
        }

        items
    }

    /// Load every non-empty history list, in catalog order.
    pub fn load_all(&self) -> Vec<(ToolId, Vec<HistoryItem>)> {
        ToolId::ALL
            .iter()
            .map(|&tool| (tool, self.load(tool)))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    /// Record a new result at the current time.
    pub fn append(
        &self,
        tool: ToolId,
        inputs: &ToolInputs,
        result: GenerationResult,
    ) -> Result<HistoryItem> {
        self.append_at(tool, inputs, result, Utc::now().timestamp_millis())
    }

    /// Record a new result with an explicit epoch-millisecond timestamp.
    ///
    /// The item id is the timestamp; if that id is already taken in the
    /// tool's list a numeric suffix is added.
    pub fn append_at(
        &self,
        tool: ToolId,
        inputs: &ToolInputs,
        result: GenerationResult,
        timestamp: i64,
    ) -> Result<HistoryItem> {
        if result.tool_id() != tool {
            return Err(StoreError::ResultMismatch {
                expected: tool,
                actual: result.tool_id(),
            });
        }

        let mut items = self.load(tool);
        let item = HistoryItem {
            id: unique_id(&items, timestamp),
            timestamp,
            inputs: inputs.clone(),
            result,
        };

        items.insert(0, item.clone());
        if items.len() > self.max_items {
            let evicted = items.len() - self.max_items;
            items.truncate(self.max_items);
            debug!(tool = %tool, evicted, "Evicted oldest history items");
        }

        write_json(self.store.as_ref(), &history_key(tool), &items)?;
        debug!(tool = %tool, id = %item.id, "Appended history item");

        Ok(item)
    }

    /// Remove one item from a tool's history. Unknown ids are ignored.
    pub fn remove(&self, tool: ToolId, item_id: &str) -> Result<()> {
        let mut items = self.load(tool);
        let before = items.len();
        items.retain(|item| item.id != item_id);

        if items.len() == before {
            debug!(tool = %tool, id = %item_id, "History item not found");
        }

        write_json(self.store.as_ref(), &history_key(tool), &items)
    }

    /// Erase the history of every tool.
    ///
    /// Callers are responsible for asking the user for confirmation first.
    pub fn clear_all(&self) -> Result<()> {
        for tool in ToolId::ALL {
            self.store.remove(&history_key(tool))?;
        }
        info!("Cleared all generation history");
        Ok(())
    }
}

fn unique_id(items: &[HistoryItem], timestamp: i64) -> String {
    let base = timestamp.to_string();
    let taken = |candidate: &str| items.iter().any(|item| item.id == candidate);

    if !taken(&base) {
        return base;
    }

    let mut n = 1;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
