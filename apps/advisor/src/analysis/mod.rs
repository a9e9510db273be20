// Resume analysis pipeline.
// Implements: PDF text extraction, truncation, prompt building, the analysis handler.
// All completion calls go through llm_client — no direct Groq calls here.

pub mod handlers;
pub mod pdf;
pub mod prompts;
pub mod truncate;
