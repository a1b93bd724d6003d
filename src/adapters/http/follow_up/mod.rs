//! HTTP adapter for follow-ups.
//!
//! Routes mounted at `/api/follow-ups`:
//! - `GET /` - Upcoming (with overdue flag) and completed follow-ups
//! - `POST /:id/complete` - Mark one of the member's follow-ups done

mod dto;
mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

pub use dto::{
    CreateFollowUpRequest, FollowUpOverviewResponse, FollowUpResponse, UpcomingFollowUpResponse,
};
pub use handlers::FollowUpHandlers;
pub(crate) use handlers::parse_follow_up_id;

use handlers::{complete_follow_up, list_follow_ups};

pub fn follow_up_routes(handlers: FollowUpHandlers) -> Router {
    Router::new()
        .route("/", get(list_follow_ups))
        .route("/:id/complete", post(complete_follow_up))
        .with_state(handlers)
}
