//! Axum route handlers for the Tweets API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::tweets::form::{validate_for_submit, FormUpdate};
use crate::tweets::generator::generate_tweets;
use crate::tweets::models::{GeneratedTweet, TweetFormData};
use crate::tweets::preview::{TweetPreviewView, COPY_NOTICE, RESET_NOTICE};
use crate::tweets::session::SessionView;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateTweetsResponse {
    pub tweets: Vec<GeneratedTweet>,
}

#[derive(Debug, Deserialize)]
pub struct EditTweetRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CopyTweetResponse {
    pub text: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub session: SessionView,
    pub message: &'static str,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

fn tweet_not_found(index: usize) -> AppError {
    AppError::NotFound(format!("Tweet {index} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/tweets/generate
///
/// One-shot generation from a complete form. No session involved.
pub async fn handle_generate_tweets(
    State(state): State<AppState>,
    Json(form): Json<TweetFormData>,
) -> Result<Json<GenerateTweetsResponse>, AppError> {
    validate_for_submit(&form).map_err(AppError::Validation)?;

    let tweets = generate_tweets(state.generator.as_ref(), &form).await?;
    Ok(Json(GenerateTweetsResponse { tweets }))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let view = state.sessions.create().await;
    info!("Created session {}", view.id);
    (StatusCode::CREATED, Json(view))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    state
        .sessions
        .view(id)
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// PATCH /api/v1/sessions/:id/form
///
/// Applies one field-level edit. Edits are accepted while a generation is in
/// flight; the running generation keeps the snapshot it started with.
pub async fn handle_update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<FormUpdate>,
) -> Result<Json<SessionView>, AppError> {
    state
        .sessions
        .with_session(id, |session| {
            session.form.apply(update);
            session.view()
        })
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// POST /api/v1/sessions/:id/keywords
///
/// Adds an empty keyword slot. A full form (3 keywords) is left as-is.
pub async fn handle_add_keyword(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    state
        .sessions
        .with_session(id, |session| {
            session.form.add_keyword();
            session.view()
        })
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// POST /api/v1/sessions/:id/generate
///
/// Submits the session's current form. Rejected with 409 while a previous
/// submission is still running. The session lock is released during the model call.
pub async fn handle_generate_for_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let snapshot = state
        .sessions
        .with_session(id, |session| {
            validate_for_submit(session.form.data()).map_err(AppError::Validation)?;
            session
                .begin_generation()
                .ok_or_else(|| AppError::Conflict("A generation is already in progress".to_string()))
        })
        .await
        .ok_or_else(|| session_not_found(id))??;

    // The model call and the loading reset run as their own task, so a dropped
    // request cannot leave the session stuck in the loading state.
    let task = tokio::spawn(async move {
        let result = generate_tweets(state.generator.as_ref(), &snapshot).await;

        let (outcome, error) = match result {
            Ok(tweets) => (Some(tweets), None),
            Err(e) => (None, Some(e)),
        };

        let view = state
            .sessions
            .with_session(id, |session| {
                session.finish_generation(outcome);
                if session.board.is_empty() {
                    warn!("Session {id} has no tweets to show after generation");
                } else {
                    info!("Session {id} now shows {} tweets", session.board.len());
                }
                session.view()
            })
            .await;

        if let Some(e) = error {
            return Err(AppError::Generation(e));
        }

        view.ok_or_else(|| {
            warn!("Session {id} disappeared during generation");
            session_not_found(id)
        })
    });

    task.await
        .map_err(|e| AppError::Internal(format!("Generation task failed: {e}")))?
        .map(Json)
}

/// DELETE /api/v1/sessions/:id
///
/// Closes the session. A generation still running for it finishes and is discarded.
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .remove(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    info!("Closed session {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/sessions/:id/tweets/:index
///
/// Replaces one tweet's text locally. Not re-validated, not re-sent to the model.
pub async fn handle_edit_tweet(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(request): Json<EditTweetRequest>,
) -> Result<Json<TweetPreviewView>, AppError> {
    state
        .sessions
        .with_session(id, |session| {
            session
                .board
                .edit(index, request.content)
                .map(|preview| preview.view(index))
        })
        .await
        .ok_or_else(|| session_not_found(id))?
        .map(Json)
        .ok_or_else(|| tweet_not_found(index))
}

/// POST /api/v1/sessions/:id/tweets/:index/editing
///
/// Edit ↔ Save toggle for one tweet card.
pub async fn handle_toggle_editing(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<TweetPreviewView>, AppError> {
    state
        .sessions
        .with_session(id, |session| {
            session
                .board
                .toggle_editing(index)
                .map(|preview| preview.view(index))
        })
        .await
        .ok_or_else(|| session_not_found(id))?
        .map(Json)
        .ok_or_else(|| tweet_not_found(index))
}

/// POST /api/v1/sessions/:id/tweets/:index/copy
///
/// Returns the text to put on the clipboard: the current, possibly edited, content.
pub async fn handle_copy_tweet(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<CopyTweetResponse>, AppError> {
    let text = state
        .sessions
        .with_session(id, |session| session.board.copy(index).map(str::to_string))
        .await
        .ok_or_else(|| session_not_found(id))?
        .ok_or_else(|| tweet_not_found(index))?;

    Ok(Json(CopyTweetResponse {
        text,
        message: COPY_NOTICE,
    }))
}

/// DELETE /api/v1/sessions/:id/tweets
///
/// Clears all results. The form keeps its values.
pub async fn handle_reset_tweets(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResetResponse>, AppError> {
    let session = state
        .sessions
        .with_session(id, |session| {
            session.board.reset();
            session.view()
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(ResetResponse {
        session,
        message: RESET_NOTICE,
    }))
}
