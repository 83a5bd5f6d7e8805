//! Key-value persistence layer for Genora.
//!
//! Everything the app remembers lives in one synchronous string-keyed store
//! ([`KeyValueStore`]) with JSON values, namespaced per tool and per concern:
//!
//! | key | value |
//! |-----|-------|
//! | `genora-inputs-<tool>` | last submitted [`ToolInputs`](genora_core::ToolInputs) |
//! | `genora-history-<tool>` | history list, newest first, at most 50 |
//! | `genora-user-reviews` | user-submitted reviews |
//! | `theme` | `dark` or `light` |
//!
//! Stored values are untrusted: malformed content is logged and treated as
//! absent, never raised.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use genora_core::{GenerationResult, ToolId, ToolInputs};
//! use storage::{FileStore, HistoryStore};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(FileStore::open(".genora")?);
//!     let history = HistoryStore::new(store);
//!
//!     let result = GenerationResult::Titles(vec!["Cats vs. cucumbers".to_string()]);
//!     history.append(ToolId::Title, &ToolInputs::primary("cats"), result)?;
//!
//!     for item in history.load(ToolId::Title) {
//!         println!("{} {}", item.id, item.inputs.input1);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod file;
pub mod history;
pub mod inputs;
pub mod keys;
pub mod kv;
pub mod reviews;
pub mod theme;
pub mod validation;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use history::{HistoryStore, MAX_HISTORY_ITEMS};
pub use inputs::InputStore;
pub use kv::{read_json, write_json, KeyValueStore, MemoryStore, SharedStore};
pub use reviews::{seed_reviews, ReviewDraft, ReviewError, ReviewStore};
pub use theme::ThemeSettings;
pub use validation::ValidationError;
