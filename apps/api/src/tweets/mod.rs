// Tweet generation: form collection, prompt rendering, the model call,
// and the preview board for editing and copying results.
// All model calls go through llm_client; nothing here talks to Gemini directly.

pub mod form;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod preview;
pub mod prompts;
pub mod session;
