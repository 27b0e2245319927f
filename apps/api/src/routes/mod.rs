pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::state::AppState;
use crate::tweets::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless generation
        .route("/api/v1/tweets/generate", post(handlers::handle_generate_tweets))
        // Sessions (form + preview board)
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/form", patch(handlers::handle_update_form))
        .route(
            "/api/v1/sessions/:id/keywords",
            post(handlers::handle_add_keyword),
        )
        .route(
            "/api/v1/sessions/:id/generate",
            post(handlers::handle_generate_for_session),
        )
        .route(
            "/api/v1/sessions/:id/tweets",
            delete(handlers::handle_reset_tweets),
        )
        .route(
            "/api/v1/sessions/:id/tweets/:index",
            patch(handlers::handle_edit_tweet),
        )
        .route(
            "/api/v1/sessions/:id/tweets/:index/editing",
            post(handlers::handle_toggle_editing),
        )
        .route(
            "/api/v1/sessions/:id/tweets/:index/copy",
            post(handlers::handle_copy_tweet),
        )
        .with_state(state)
}
