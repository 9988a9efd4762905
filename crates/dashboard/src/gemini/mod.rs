//! Gemini AI integration.
//!
//! Two operations are exposed: product copy generation and store
//! performance analysis. Both send a schema-constrained prompt and parse
//! the structured JSON reply; the rest of the app never sees raw model
//! output.

mod client;
mod error;
pub mod prompts;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
