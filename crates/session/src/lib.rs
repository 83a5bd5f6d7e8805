//! Tool session controller for the Genora content tools.
//!
//! This crate provides the [`ToolSession`] type which drives one tool
//! through its input, generate and display cycle.
//!
//! # Features
//!
//! - Restores a tool's last submitted inputs when the session opens
//! - One generation request in flight per session
//! - Usable results recorded in the tool's history (newest first, capped)
//! - Every failure shown as a single generic message, cause only logged
//! - Optional per-submission deadline and state-change events
//!
//! # Lifecycle
//!
//! ```text
//!            submit()                 usable result
//!   Idle ──────────────▶ Submitting ─────────────────▶ Success
//!    ▲                       │                            │
//!    │                       │ error / undecodable /      │
//!    │                       │ empty result               │
//!    │                       ▼                            │
//!    │ clear()            Failed ◀──── submit() again ────┘
//!    └───────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use genora_core::ToolId;
//! use mock_generator::CannedGenerator;
//! use session::{SessionState, ToolSession};
//! use storage::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MemoryStore::shared();
//!     let mut session = ToolSession::open(ToolId::Title, store, Arc::new(CannedGenerator::new()));
//!
//!     session.set_input1("home espresso");
//!     let state = session.submit().await?;
//!
//!     assert_eq!(state, SessionState::Success);
//!     println!("{}", session.result().map(|r| r.copy_text()).unwrap_or_default());
//!     Ok(())
//! }
//! ```

mod error;
mod session;
mod state;

// Public exports
pub use error::SessionError;
pub use session::{ToolSession, GENERIC_ERROR};
pub use state::{SessionEvent, SessionState};
