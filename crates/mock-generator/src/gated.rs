//! Gated generator - holds every call until it is let through.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use genora_core::{async_trait, GenerationError, Generator, Prompt};
use tokio::sync::{Notify, Semaphore};

#[derive(Debug)]
struct GateState {
    permits: Semaphore,
    waiting: AtomicUsize,
    arrived: Notify,
}

/// Handle controlling a [`GatedGenerator`] from the outside.
///
/// Clones share the same gate.
#[derive(Debug, Clone)]
pub struct Gate {
    state: Arc<GateState>,
}

impl Gate {
    /// Let one held (or future) call through.
    pub fn release(&self) {
        self.state.permits.add_permits(1);
    }

    /// Let every call through, now and from here on.
    pub fn open(&self) {
        self.state.permits.close();
    }

    /// Number of calls currently held at the gate.
    pub fn waiting(&self) -> usize {
        self.state.waiting.load(Ordering::SeqCst)
    }

    /// Resolve once at least one call is held at the gate.
    pub async fn entered(&self) {
        loop {
            let arrived = self.state.arrived.notified();
            if self.waiting() > 0 {
                return;
            }
            arrived.await;
        }
    }
}

/// Decrements the waiting count when a held call ends or is dropped.
struct Waiting<'a>(&'a GateState);

impl Drop for Waiting<'_> {
    fn drop(&mut self) {
        self.0.waiting.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A generator that parks each call until its [`Gate`] releases it, then
/// answers from the wrapped generator.
///
/// Lets tests hold a submission in flight for exactly as long as they need,
/// without sleeping.
///
/// # Example
///
/// ```rust
/// use mock_generator::{GatedGenerator, Generator, Prompt, ScriptedGenerator};
///
/// # #[tokio::main]
/// # async fn main() {
/// let generator = GatedGenerator::new(ScriptedGenerator::with_response("ok"));
/// let gate = generator.gate();
///
/// gate.release();
/// assert_eq!(generator.complete(&Prompt::text("x")).await.unwrap(), "ok");
/// # }
/// ```
#[derive(Debug)]
pub struct GatedGenerator<G: Generator> {
    inner: G,
    gate: Gate,
}

impl<G: Generator> GatedGenerator<G> {
    /// Wrap `inner` behind a closed gate.
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            gate: Gate {
                state: Arc::new(GateState {
                    permits: Semaphore::new(0),
                    waiting: AtomicUsize::new(0),
                    arrived: Notify::new(),
                }),
            },
        }
    }

    /// A handle to this generator's gate.
    pub fn gate(&self) -> Gate {
        self.gate.clone()
    }

    /// The wrapped generator.
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

#[async_trait]
impl<G: Generator> Generator for GatedGenerator<G> {
    async fn complete(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        let state = &self.gate.state;
        {
            state.waiting.fetch_add(1, Ordering::SeqCst);
            let _waiting = Waiting(state);
            state.arrived.notify_waiters();

            // A closed semaphore means the gate is open for good.
            if let Ok(permit) = state.permits.acquire().await {
                permit.forget();
            }
        }
        self.inner.complete(prompt).await
    }

    fn name(&self) -> &str {
        "GatedGenerator"
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }
}
