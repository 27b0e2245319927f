//! Preview board: generated tweets as the user sees, edits and copies them.
//!
//! Edits are local. They are never re-validated and never sent back to the model.

use serde::Serialize;

use crate::tweets::models::GeneratedTweet;

pub const RESET_NOTICE: &str = "Tweets cleared! Ready for new ideas ✨";
pub const COPY_NOTICE: &str = "Tweet copied to clipboard! ✨";

/// One generated tweet plus its local edit state.
#[derive(Debug, Clone)]
pub struct TweetPreview {
    tweet: GeneratedTweet,
    content: String,
    editing: bool,
}

impl TweetPreview {
    pub fn new(tweet: GeneratedTweet) -> Self {
        let content = tweet.content.clone();
        Self {
            tweet,
            content,
            editing: false,
        }
    }

    /// The tweet exactly as the model returned it.
    pub fn original(&self) -> &GeneratedTweet {
        &self.tweet
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Edit ↔ Save.
    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// What lands on the clipboard: the current text, edited or not.
    pub fn copy_text(&self) -> &str {
        &self.content
    }

    pub fn view(&self, index: usize) -> TweetPreviewView {
        TweetPreviewView {
            index,
            content: self.content.clone(),
            original_content: self.original().content.clone(),
            edited: self.content != self.original().content,
            editing: self.is_editing(),
            hashtags: self.tweet.display_hashtags(),
            engagement_score: self.tweet.engagement_score,
            engagement_label: self.tweet.engagement_label(),
            character_count: self.tweet.character_count,
            character_label: self.tweet.character_label(),
        }
    }
}

/// Serializable card for one preview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetPreviewView {
    pub index: usize,
    pub content: String,
    pub original_content: String,
    pub edited: bool,
    pub editing: bool,
    pub hashtags: Vec<String>,
    pub engagement_score: i64,
    pub engagement_label: String,
    /// Model-reported; not recomputed after edits.
    pub character_count: i64,
    pub character_label: String,
}

/// The result list for one session. Replaced wholesale by each successful generation.
#[derive(Debug, Clone, Default)]
pub struct PreviewBoard {
    previews: Vec<TweetPreview>,
}

impl PreviewBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }

    /// Drops the previous batch (and its edits) and shows the new one.
    pub fn replace(&mut self, tweets: Vec<GeneratedTweet>) {
        self.previews = tweets.into_iter().map(TweetPreview::new).collect();
    }

    pub fn reset(&mut self) {
        self.previews.clear();
    }

    pub fn get(&self, index: usize) -> Option<&TweetPreview> {
        self.previews.get(index)
    }

    /// Replaces the content of the tweet at `index`. Returns `None` if there is no such tweet.
    pub fn edit(&mut self, index: usize, content: impl Into<String>) -> Option<&TweetPreview> {
        let preview = self.previews.get_mut(index)?;
        preview.set_content(content);
        Some(preview)
    }

    pub fn toggle_editing(&mut self, index: usize) -> Option<&TweetPreview> {
        let preview = self.previews.get_mut(index)?;
        preview.toggle_editing();
        Some(preview)
    }

    pub fn copy(&self, index: usize) -> Option<&str> {
        self.get(index).map(TweetPreview::copy_text)
    }

    pub fn views(&self) -> Vec<TweetPreviewView> {
        self.previews
            .iter()
            .enumerate()
            .map(|(i, p)| p.view(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweet(content: &str) -> GeneratedTweet {
        GeneratedTweet {
            content: content.to_string(),
            hashtags: vec!["#rust".to_string(), "async".to_string()],
            engagement_score: 8,
            character_count: content.chars().count() as i64,
        }
    }

    #[test]
    fn test_copy_after_edit_copies_edited_text() {
        let mut board = PreviewBoard::new();
        board.replace(vec![tweet("original"), tweet("second")]);

        board.edit(0, "edited by hand");

        assert_eq!(board.copy(0), Some("edited by hand"));
        assert_eq!(board.copy(1), Some("second"));
        assert_eq!(board.get(0).unwrap().original().content, "original");
    }

    #[test]
    fn test_copy_without_edit_copies_model_text() {
        let mut board = PreviewBoard::new();
        board.replace(vec![tweet("as generated")]);
        assert_eq!(board.copy(0), Some("as generated"));
    }

    #[test]
    fn test_out_of_range_index_is_none() {
        let mut board = PreviewBoard::new();
        board.replace(vec![tweet("only")]);
        assert!(board.copy(3).is_none());
        assert!(board.edit(3, "x").is_none());
        assert!(board.toggle_editing(3).is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = PreviewBoard::new();
        board.replace(vec![tweet("a"), tweet("b"), tweet("c")]);
        board.reset();
        assert!(board.is_empty());
        assert!(board.views().is_empty());
    }

    #[test]
    fn test_replace_discards_previous_edits() {
        let mut board = PreviewBoard::new();
        board.replace(vec![tweet("first batch")]);
        board.edit(0, "my edit");
        board.replace(vec![tweet("second batch")]);
        assert_eq!(board.len(), 1);
        assert_eq!(board.copy(0), Some("second batch"));
    }

    #[test]
    fn test_toggle_editing_flips_flag() {
        let mut board = PreviewBoard::new();
        board.replace(vec![tweet("a")]);
        assert!(board.toggle_editing(0).unwrap().is_editing());
        assert!(!board.toggle_editing(0).unwrap().is_editing());
    }

    #[test]
    fn test_view_reports_edit_state_and_display_fields() {
        let mut board = PreviewBoard::new();
        board.replace(vec![tweet("hello")]);
        board.edit(0, "hello there");

        let views = board.views();
        let view = &views[0];
        assert_eq!(view.index, 0);
        assert_eq!(view.content, "hello there");
        assert_eq!(view.original_content, "hello");
        assert!(view.edited);
        assert_eq!(view.hashtags, vec!["#rust", "#async"]);
        // counter stays at the model's figure after an edit
        assert_eq!(view.character_label, "5/280");
        assert_eq!(view.engagement_label, "8/10");
    }
}
