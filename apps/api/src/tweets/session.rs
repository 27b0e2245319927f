//! Sessions: one form, one preview board, one in-flight generation at most.
//!
//! A session is the server-side counterpart of a browser tab. Sessions never
//! share state and live only in memory.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::tweets::form::TweetForm;
use crate::tweets::models::{GeneratedTweet, TweetFormData};
use crate::tweets::preview::{PreviewBoard, TweetPreviewView};

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub form: TweetForm,
    pub board: PreviewBoard,
    loading: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            form: TweetForm::new(),
            board: PreviewBoard::new(),
            loading: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Enters the loading state and returns the snapshot to generate from.
    /// Returns `None` while another generation is still in flight.
    pub fn begin_generation(&mut self) -> Option<TweetFormData> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.form.snapshot())
    }

    /// Leaves the loading state. A successful batch replaces the board;
    /// a failure leaves the previous results in place.
    pub fn finish_generation(&mut self, outcome: Option<Vec<GeneratedTweet>>) {
        self.loading = false;
        if let Some(tweets) = outcome {
            self.board.replace(tweets);
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            created_at: self.created_at,
            form: self.form.data().clone(),
            can_add_keyword: self.form.can_add_keyword(),
            loading: self.is_loading(),
            tweets: self.board.views(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub form: TweetFormData,
    pub can_add_keyword: bool,
    pub loading: bool,
    pub tweets: Vec<TweetPreviewView>,
}

/// In-memory session registry shared by all handlers.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> SessionView {
        let session = Session::new();
        let view = session.view();
        self.inner.write().await.insert(session.id, session);
        view
    }

    pub async fn view(&self, id: Uuid) -> Option<SessionView> {
        self.inner.read().await.get(&id).map(Session::view)
    }

    /// Runs `f` against the session under the write lock.
    /// Keep `f` synchronous: the lock must not be held across a model call.
    pub async fn with_session<T>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> T) -> Option<T> {
        let mut sessions = self.inner.write().await;
        sessions.get_mut(&id).map(f)
    }

    /// Drops the session and everything it holds.
    pub async fn remove(&self, id: Uuid) -> Option<Session> {
        self.inner.write().await.remove(&id)
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweet(content: &str) -> GeneratedTweet {
        GeneratedTweet {
            content: content.to_string(),
            hashtags: vec![],
            engagement_score: 5,
            character_count: content.len() as i64,
        }
    }

    #[test]
    fn test_second_begin_is_refused_while_loading() {
        let mut session = Session::new();
        session.form.set_topic("Rust");
        assert!(session.begin_generation().is_some());
        assert!(session.is_loading());
        assert!(session.begin_generation().is_none());

        session.finish_generation(None);
        assert!(!session.is_loading());
        assert!(session.begin_generation().is_some());
    }

    #[test]
    fn test_failed_generation_keeps_previous_results() {
        let mut session = Session::new();
        session.board.replace(vec![tweet("keep me")]);
        session.begin_generation();
        session.finish_generation(None);
        assert_eq!(session.board.copy(0), Some("keep me"));
    }

    #[test]
    fn test_reset_leaves_form_untouched() {
        let mut session = Session::new();
        session.form.set_topic("AI tools");
        session.form.add_keyword();
        session.form.set_keyword(1, "llm");
        session.form.toggle_include_emojis();
        let before = session.form.snapshot();

        session.begin_generation();
        session.finish_generation(Some(vec![tweet("a"), tweet("b")]));
        session.board.reset();

        assert!(session.board.is_empty());
        assert_eq!(session.form.snapshot(), before);
    }

    #[tokio::test]
    async fn test_store_sessions_are_independent() {
        let store = SessionStore::new();
        let a = store.create().await;
        let b = store.create().await;
        assert_ne!(a.id, b.id);

        store
            .with_session(a.id, |s| s.form.set_topic("only in a"))
            .await
            .unwrap();

        assert_eq!(store.view(a.id).await.unwrap().form.topic, "only in a");
        assert_eq!(store.view(b.id).await.unwrap().form.topic, "");
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_unknown_session_is_none() {
        let store = SessionStore::new();
        assert!(store.view(Uuid::new_v4()).await.is_none());
        assert!(store.with_session(Uuid::new_v4(), |_| ()).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_frees_the_session() {
        let store = SessionStore::new();
        let kept = store.create().await;
        let closed = store.create().await;

        let removed = store.remove(closed.id).await.unwrap();
        assert_eq!(removed.id, closed.id);
        assert_eq!(store.count().await, 1);
        assert!(store.view(closed.id).await.is_none());
        assert!(store.view(kept.id).await.is_some());
        assert!(store.remove(closed.id).await.is_none());
    }
}
