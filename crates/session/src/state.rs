//! Session states and change notifications.

use std::fmt;

use genora_core::ToolId;

/// Where a tool session is in its input, generate and display cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Editing inputs, nothing displayed.
    #[default]
    Idle,
    /// A generation request is in flight.
    Submitting,
    /// The last submission produced a result.
    Success,
    /// The last submission failed; the generic error message is displayed.
    Failed,
}

impl SessionState {
    /// Whether a new submission may start from this state.
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, SessionState::Submitting)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Submitting => "submitting",
            SessionState::Success => "success",
            SessionState::Failed => "failed",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification emitted by a session that has an event channel attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session moved to a new state.
    StateChanged { tool: ToolId, state: SessionState },
    /// A successful result was recorded in the tool's history.
    HistoryAppended { tool: ToolId, item_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_submitting_blocks() {
        assert!(SessionState::Idle.accepts_submit());
        assert!(!SessionState::Submitting.accepts_submit());
        assert!(SessionState::Success.accepts_submit());
        assert!(SessionState::Failed.accepts_submit());
    }

    #[test]
    fn test_display() {
        assert_eq!(SessionState::default().to_string(), "idle");
        assert_eq!(SessionState::Failed.to_string(), "failed");
    }
}
