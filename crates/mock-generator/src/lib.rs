//! Mock generator implementations for the Genora content tools.
//!
//! This crate provides mock implementations of the `Generator` trait for testing
//! and offline use:
//! - `ScriptedGenerator` - Replays queued responses and records prompts
//! - `FailingGenerator` - Fails every call with a chosen error
//! - `GatedGenerator` - Holds calls in flight until a test releases them
//! - `CannedGenerator` - Plausible per-tool answers without network access
//!
//! For live generation, use the `gemini-generator` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_generator::{GenerationRequest, Generator, ScriptedGenerator, ToolId, ToolInputs};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_generator::GenerationError> {
//!     let generator = ScriptedGenerator::with_response(r#"["neonfox", "pixelpilot"]"#);
//!
//!     let request = GenerationRequest::new(ToolId::Username, ToolInputs::primary("gaming"));
//!
//!     let result = generator.generate(&request).await?;
//!     println!("Result: {:?}", result);
//!     Ok(())
//! }
//! ```

// Mock implementations
mod canned;
mod failing;
mod gated;
mod scripted;

// Re-export genora-core types for convenience
pub use genora_core::{
    async_trait, GenerationError, GenerationRequest, GenerationResult, Generator, Prompt, ToolId,
    ToolInputs,
};

// Export mock implementations
pub use canned::CannedGenerator;
pub use failing::{FailingGenerator, FailureKind};
pub use gated::{Gate, GatedGenerator};
pub use scripted::ScriptedGenerator;
