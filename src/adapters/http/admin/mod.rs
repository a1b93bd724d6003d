//! HTTP adapter for administrators, mounted at `/api/admin`.
//!
//! - `GET /members` - Non-admin members, newest first
//! - `GET /members/:user_id/follow-ups` - A member's follow-ups
//! - `POST /members/:user_id/follow-ups` - Schedule a follow-up for a member
//! - `DELETE /follow-ups/:id` - Remove a follow-up

mod handlers;

use axum::{
    routing::{delete, get},
    Router,
};

pub use handlers::AdminHandlers;

use handlers::{create_member_follow_up, delete_follow_up, list_member_follow_ups, list_members};

pub fn admin_routes(handlers: AdminHandlers) -> Router {
    Router::new()
        .route("/members", get(list_members))
        .route(
            "/members/:user_id/follow-ups",
            get(list_member_follow_ups).post(create_member_follow_up),
        )
        .route("/follow-ups/:id", delete(delete_follow_up))
        .with_state(handlers)
}
