//! Core types and traits for the Genora content tools.
//!
//! This crate provides the shared vocabulary for every generator backend
//! and for the persistence and session layers built on top of it:
//!
//! - [`ToolId`] / [`Tool`] / [`TOOLS`] - The seven fixed content tools
//! - [`GenerationRequest`] / [`ToolInputs`] - What the user asked for
//! - [`GenerationResult`] - Tagged result, one variant per tool
//! - [`Generator`] - The trait every generation backend implements
//! - [`GenerationError`] - Error types for generation calls
//! - [`Prompt`] / [`build_prompt`] - Tool-specific prompt construction
//! - [`decode_json`] / [`decode_result`] - Defensive response decoding
//!
//! # Example
//!
//! ```rust
//! use genora_core::{async_trait, GenerationError, Generator, Prompt};
//!
//! struct FixedGenerator;
//!
//! #[async_trait]
//! impl Generator for FixedGenerator {
//!     async fn complete(&self, _prompt: &Prompt) -> Result<String, GenerationError> {
//!         Ok(r#"["One", "Two"]"#.to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FixedGenerator"
//!     }
//! }
//! ```

mod decode;
mod error;
mod history;
mod prompt;
mod request;
mod result;
pub mod reveal;
mod review;
mod theme;
mod tool;
mod trait_def;

pub use decode::{decode_json, decode_result, decode_trending, strip_code_fence};
pub use error::GenerationError;
pub use history::HistoryItem;
pub use prompt::{build_prompt, trending_prompt, OutputFormat, Prompt};
pub use request::{GenerationRequest, ToolInputs};
pub use result::{GenerationResult, HashtagCategories, SeoOptimization, SeoScore, TrendingTopics};
pub use reveal::Reveal;
pub use review::Review;
pub use theme::{Theme, UnknownTheme};
pub use tool::{InputField, Tool, ToolId, UnknownTool, TOOLS};
pub use trait_def::Generator;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
