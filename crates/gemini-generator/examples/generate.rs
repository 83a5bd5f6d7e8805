//! Run one tool against the live Gemini API.
//!
//! Run with: cargo run -p gemini-generator --example generate -- title "home espresso"
//! The first argument is the tool id, the rest is the primary input.
//!
//! Make sure to set environment variables in .env:
//!   GEMINI_API_KEY - Gemini API key for authentication

use gemini_generator::{GeminiGenerator, GenerationRequest, Generator, ToolId, ToolInputs};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let tool: ToolId = match args.first() {
        Some(id) => id.parse()?,
        None => ToolId::Title,
    };
    let subject = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "learning Rust in 30 days".to_string()
    };

    println!("Initializing GeminiGenerator...");
    let generator = GeminiGenerator::from_env()?;

    println!("Generator initialized: {}", generator.name());
    println!("API URL: {}", generator.config().api_url);
    println!("Model: {}", generator.config().model);
    println!("Timeout: {:?}", generator.config().timeout);
    println!();

    let request = GenerationRequest::new(tool, ToolInputs::primary(subject));
    println!("Tool: {} ({})", tool.tool().title, tool);
    println!("Input: \"{}\"", request.inputs.input1);
    println!("Waiting for response...\n");

    match generator.generate(&request).await? {
        Some(result) => {
            println!("=== Result ===");
            println!("{}", serde_json::to_string_pretty(&result)?);
            println!("==============");
        }
        None => println!("The response could not be decoded for this tool."),
    }

    Ok(())
}
