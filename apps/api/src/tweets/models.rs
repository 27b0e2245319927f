//! Wire and domain types for tweet generation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hard platform limit shown next to every generated tweet.
pub const MAX_TWEET_LENGTH: u32 = 280;

/// Top of the engagement scale the model is asked to score on.
pub const MAX_ENGAGEMENT_SCORE: i64 = 10;

/// Keyword slots a form may hold.
pub const MAX_KEYWORDS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Casual,
    Professional,
    Humorous,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Statement,
    Question,
    Poll,
    Thread,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    #[default]
    Positive,
    Neutral,
    Controversial,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Professional => "professional",
            Tone::Humorous => "humorous",
        }
    }
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Statement => "statement",
            ContentType::Question => "question",
            ContentType::Poll => "poll",
            ContentType::Thread => "thread",
        }
    }
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Controversial => "controversial",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_keywords() -> Vec<String> {
    vec![String::new()]
}

fn default_max_length() -> u32 {
    MAX_TWEET_LENGTH
}

fn default_language_style() -> String {
    "default".to_string()
}

/// Everything the user asked for in one submission.
///
/// Empty keyword slots are kept as-is; they are part of what the user submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetFormData {
    pub topic: String,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub call_to_action: bool,
    #[serde(default)]
    pub include_emojis: bool,
    /// Collected but not used by the prompt.
    #[serde(default = "default_language_style")]
    pub language_style: String,
}

impl Default for TweetFormData {
    fn default() -> Self {
        Self {
            topic: String::new(),
            keywords: default_keywords(),
            tone: Tone::default(),
            target_audience: String::new(),
            max_length: MAX_TWEET_LENGTH,
            content_type: ContentType::default(),
            sentiment: Sentiment::default(),
            call_to_action: false,
            include_emojis: false,
            language_style: default_language_style(),
        }
    }
}

/// One candidate tweet as returned by the model.
///
/// `engagement_score` (nominally 1–10) and `character_count` are the model's
/// claims. They are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTweet {
    pub content: String,
    pub hashtags: Vec<String>,
    pub engagement_score: i64,
    pub character_count: i64,
}

impl GeneratedTweet {
    /// Hashtags as displayed: one leading `#`, whatever the model sent.
    pub fn display_hashtags(&self) -> Vec<String> {
        self.hashtags
            .iter()
            .map(|tag| format!("#{}", tag.strip_prefix('#').unwrap_or(tag)))
            .collect()
    }

    /// Character counter as displayed, e.g. `"142/280"`.
    pub fn character_label(&self) -> String {
        format!("{}/{}", self.character_count, MAX_TWEET_LENGTH)
    }

    /// Engagement metric as displayed, e.g. `"8/10"`.
    pub fn engagement_label(&self) -> String {
        format!("{}/{}", self.engagement_score, MAX_ENGAGEMENT_SCORE)
    }
}
