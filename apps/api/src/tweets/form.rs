//! Form collector: field-level edits to a `TweetFormData` and snapshots of it.

use serde::Deserialize;

use crate::tweets::models::{ContentType, Sentiment, Tone, TweetFormData, MAX_KEYWORDS};

/// One field-level edit, as sent by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FormUpdate {
    SetTopic { value: String },
    SetKeyword { index: usize, value: String },
    AddKeyword,
    SetTone { value: Tone },
    SetTargetAudience { value: String },
    SetContentType { value: ContentType },
    SetSentiment { value: Sentiment },
    ToggleCallToAction,
    ToggleIncludeEmojis,
}

/// Editable form state. Mutated field by field, snapshotted on submit.
#[derive(Debug, Clone, Default)]
pub struct TweetForm {
    data: TweetFormData,
}

impl TweetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &TweetFormData {
        &self.data
    }

    /// Owned copy handed to the generator; later edits do not affect it.
    pub fn snapshot(&self) -> TweetFormData {
        self.data.clone()
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.data.topic = topic.into();
    }

    /// Replaces the keyword at `index`. Out-of-range indexes are ignored.
    pub fn set_keyword(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.data.keywords.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn can_add_keyword(&self) -> bool {
        self.data.keywords.len() < MAX_KEYWORDS
    }

    /// Appends an empty keyword slot. Returns `false` once the form is full.
    pub fn add_keyword(&mut self) -> bool {
        if !self.can_add_keyword() {
            return false;
        }
        self.data.keywords.push(String::new());
        true
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.data.tone = tone;
    }

    pub fn set_target_audience(&mut self, audience: impl Into<String>) {
        self.data.target_audience = audience.into();
    }

    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.data.content_type = content_type;
    }

    pub fn set_sentiment(&mut self, sentiment: Sentiment) {
        self.data.sentiment = sentiment;
    }

    pub fn toggle_call_to_action(&mut self) {
        self.data.call_to_action = !self.data.call_to_action;
    }

    pub fn toggle_include_emojis(&mut self) {
        self.data.include_emojis = !self.data.include_emojis;
    }

    pub fn apply(&mut self, update: FormUpdate) {
        match update {
            FormUpdate::SetTopic { value } => self.set_topic(value),
            FormUpdate::SetKeyword { index, value } => self.set_keyword(index, value),
            FormUpdate::AddKeyword => {
                self.add_keyword();
            }
            FormUpdate::SetTone { value } => self.set_tone(value),
            FormUpdate::SetTargetAudience { value } => self.set_target_audience(value),
            FormUpdate::SetContentType { value } => self.set_content_type(value),
            FormUpdate::SetSentiment { value } => self.set_sentiment(value),
            FormUpdate::ToggleCallToAction => self.toggle_call_to_action(),
            FormUpdate::ToggleIncludeEmojis => self.toggle_include_emojis(),
        }
    }
}

/// The only check made before submitting: a topic is required.
pub fn validate_for_submit(form: &TweetFormData) -> Result<(), String> {
    if form.topic.trim().is_empty() {
        return Err("topic cannot be empty".to_string());
    }
    Ok(())
}
