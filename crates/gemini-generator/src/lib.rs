//! Google Gemini-based generator implementation.
//!
//! This crate provides a [`Generator`] that sends tool prompts to the Gemini
//! `generateContent` REST endpoint.
//!
//! # Features
//!
//! - JSON mode and declared response schemas for structured tools
//! - One attempt per call, bounded by a configurable timeout
//! - Provider failures mapped onto [`GenerationError`] variants
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_generator::{GeminiGenerator, GenerationRequest, Generator, ToolId, ToolInputs};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = GeminiGenerator::from_env()?;
//!     let request = GenerationRequest::new(ToolId::Slogan, ToolInputs::primary("coffee"));
//!     if let Some(result) = generator.generate(&request).await? {
//!         println!("{}", result.copy_text());
//!     }
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod generator;

pub use config::{GeminiGeneratorConfig, GeminiGeneratorConfigBuilder};
pub use generator::GeminiGenerator;

// Re-export genora-core types for convenience
pub use genora_core::{
    async_trait, GenerationError, GenerationRequest, GenerationResult, Generator, Prompt, ToolId,
    ToolInputs,
};
