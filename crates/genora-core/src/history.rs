//! Generation history records.

use serde::Serialize;

use crate::request::ToolInputs;
use crate::result::GenerationResult;
use crate::tool::ToolId;

/// One past generation, kept in its tool's history list.
///
/// Items are created on a successful generation and are never mutated;
/// they are only removed individually or by clearing the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryItem {
    /// Unique within the tool's list; derived from the creation time.
    pub id: String,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
    /// Snapshot of the inputs that produced the result.
    pub inputs: ToolInputs,
    pub result: GenerationResult,
}

impl HistoryItem {
    /// The tool whose list this item belongs to.
    pub fn tool_id(&self) -> ToolId {
        self.result.tool_id()
    }
}
