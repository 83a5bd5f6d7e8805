//! The per-tool session controller.

use std::sync::Arc;
use std::time::Duration;

use genora_core::{
    GenerationError, GenerationRequest, GenerationResult, Generator, ToolId, ToolInputs,
};
use storage::{HistoryStore, InputStore, SharedStore};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::state::{SessionEvent, SessionState};

/// The only failure message shown to the user.
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

/// Drives one tool through input, generation and display.
///
/// The session:
/// - Restores the tool's last submitted inputs when opened
/// - Persists the inputs on every submission, whatever the outcome
/// - Sends exactly one generation request per submission
/// - Records usable results in the tool's history
/// - Collapses every failure into [`GENERIC_ERROR`]
///
/// `submit` takes `&mut self`, so a session has at most one request in
/// flight. A submission whose future is dropped before it finishes leaves the
/// session in [`SessionState::Submitting`]; further submissions are refused
/// with [`SessionError::Busy`] until [`clear`](Self::clear) is called.
pub struct ToolSession {
    tool: ToolId,
    inputs: ToolInputs,
    state: SessionState,
    result: Option<GenerationResult>,
    error: Option<&'static str>,
    input_store: InputStore,
    history: HistoryStore,
    generator: Arc<dyn Generator>,
    timeout: Option<Duration>,
    events: Option<UnboundedSender<SessionEvent>>,
}

impl ToolSession {
    /// Open a session for a tool, restoring its saved inputs.
    pub fn open(tool: ToolId, store: SharedStore, generator: Arc<dyn Generator>) -> Self {
        Self::with_history(tool, store.clone(), HistoryStore::new(store), generator)
    }

    /// Open a session that records into the given history store.
    pub fn with_history(
        tool: ToolId,
        store: SharedStore,
        history: HistoryStore,
        generator: Arc<dyn Generator>,
    ) -> Self {
        let input_store = InputStore::new(store);
        let inputs = input_store.load(tool);

        debug!(
            tool = %tool,
            generator = generator.name(),
            restored = !inputs.is_empty(),
            "Opened tool session"
        );

        Self {
            tool,
            inputs,
            state: SessionState::Idle,
            result: None,
            error: None,
            input_store,
            history,
            generator,
            timeout: None,
            events: None,
        }
    }

    /// Bound each submission by a deadline, after which it fails.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send state changes and history appends to the given channel.
    pub fn with_events(mut self, events: UnboundedSender<SessionEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn tool(&self) -> ToolId {
        self.tool
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The displayed result, present only in [`SessionState::Success`].
    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    /// The displayed error, present only in [`SessionState::Failed`].
    pub fn error_message(&self) -> Option<&str> {
        self.error
    }

    pub fn inputs(&self) -> &ToolInputs {
        &self.inputs
    }

    pub fn set_input1(&mut self, value: impl Into<String>) {
        self.inputs.input1 = value.into();
    }

    pub fn set_input2(&mut self, value: impl Into<String>) {
        self.inputs.input2 = value.into();
    }

    pub fn set_input3(&mut self, value: impl Into<String>) {
        self.inputs.input3 = value.into();
    }

    /// Replace all three inputs at once.
    pub fn set_inputs(&mut self, inputs: ToolInputs) {
        self.inputs = inputs;
    }

    /// Whether the primary input has content.
    ///
    /// Submission does not require it; front ends may use it to block
    /// empty requests.
    pub fn has_primary_input(&self) -> bool {
        self.inputs.has_primary()
    }

    /// Whether [`submit`](Self::submit) would start a request.
    pub fn can_submit(&self) -> bool {
        self.state.accepts_submit()
    }

    /// Submit the current inputs.
    ///
    /// Returns the state the session settled in: `Success` or `Failed`.
    pub async fn submit(&mut self) -> Result<SessionState, SessionError> {
        if !self.can_submit() {
            return Err(SessionError::Busy);
        }

        if let Err(e) = self.input_store.save(self.tool, &self.inputs) {
            warn!(tool = %self.tool, "Failed to save inputs: {}", e);
        }

        self.result = None;
        self.error = None;
        self.transition(SessionState::Submitting);

        let request = GenerationRequest::new(self.tool, self.inputs.clone());
        info!(
            tool = %self.tool,
            generator = self.generator.name(),
            "Submitting generation request"
        );

        let outcome = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.generator.generate(&request))
                .await
                .unwrap_or_else(|_| Err(GenerationError::Timeout)),
            None => self.generator.generate(&request).await,
        };

        match outcome {
            Ok(Some(result)) if result.is_usable() => self.succeed(request.inputs, result),
            Ok(Some(_)) => {
                warn!(tool = %self.tool, "Generator returned an empty result");
                self.fail();
            }
            Ok(None) => {
                warn!(tool = %self.tool, "Generator response could not be decoded");
                self.fail();
            }
            Err(e) => {
                warn!(tool = %self.tool, "Generation failed: {}", e);
                self.fail();
            }
        }

        Ok(self.state)
    }

    /// Reset the form: empty inputs, nothing displayed, saved inputs erased.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.inputs = ToolInputs::default();
        self.result = None;
        self.error = None;
        self.transition(SessionState::Idle);
        self.input_store.clear(self.tool)?;
        Ok(())
    }

    fn succeed(&mut self, inputs: ToolInputs, result: GenerationResult) {
        match self.history.append(self.tool, &inputs, result.clone()) {
            Ok(item) => self.emit(SessionEvent::HistoryAppended {
                tool: self.tool,
                item_id: item.id,
            }),
            Err(e) => warn!(tool = %self.tool, "Failed to record history: {}", e),
        }

        self.result = Some(result);
        self.transition(SessionState::Success);
    }

    fn fail(&mut self) {
        self.error = Some(GENERIC_ERROR);
        self.transition(SessionState::Failed);
    }

    fn transition(&mut self, state: SessionState) {
        if self.state != state {
            debug!(tool = %self.tool, from = %self.state, to = %state, "Session state change");
        }
        self.state = state;
        self.emit(SessionEvent::StateChanged {
            tool: self.tool,
            state,
        });
    }

    fn emit(&mut self, event: SessionEvent) {
        let delivered = match &self.events {
            Some(events) => events.send(event).is_ok(),
            None => return,
        };
        if !delivered {
            debug!("Session event receiver dropped");
            self.events = None;
        }
    }
}
