//! Tweet generation: renders the prompt, calls the model once, parses the reply.
//!
//! Flow: build_tweet_prompt → TextGenerator::generate_text → extract_json_array →
//!       serde parse → return as-is.
//!
//! The model's numbers are trusted. Nothing here re-counts characters or clamps scores.

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::llm_client::{LlmError, TextGenerator};
use crate::tweets::models::{GeneratedTweet, TweetFormData};
use crate::tweets::prompts::build_tweet_prompt;

/// Why a generation produced no tweets.
///
/// Callers may match on the kind, but users only ever see one generic message.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model call failed: {0}")]
    Service(#[from] LlmError),

    #[error("model reply contained no JSON array")]
    MissingPayload,

    #[error("model reply JSON did not match the tweet schema: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Generates candidate tweets for one form snapshot.
#[instrument(skip_all, fields(topic = %form.topic))]
pub async fn generate_tweets(
    generator: &dyn TextGenerator,
    form: &TweetFormData,
) -> Result<Vec<GeneratedTweet>, GenerationError> {
    let prompt = build_tweet_prompt(form);
    debug!("Prompt rendered ({} chars)", prompt.len());

    let reply = generator.generate_text(&prompt).await?;
    let tweets = parse_generated_tweets(&reply)?;

    info!("Model returned {} tweets", tweets.len());
    Ok(tweets)
}

/// Parses a raw model reply into tweets.
pub fn parse_generated_tweets(reply: &str) -> Result<Vec<GeneratedTweet>, GenerationError> {
    let payload = extract_json_array(reply).ok_or(GenerationError::MissingPayload)?;
    Ok(serde_json::from_str(payload)?)
}

/// Returns the slice from the first `[` to the last `]`, inclusive.
///
/// Models like to wrap JSON in prose or code fences; everything outside the
/// outermost brackets is dropped.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
