//! HTTP adapter for member profiles, mounted at `/api/profile`.

mod dto;
mod handlers;

use axum::{routing::get, Router};

pub use dto::{MemberSummaryResponse, ProfileResponse};
pub use handlers::ProfileHandlers;

use handlers::{get_profile, update_profile};

pub fn profile_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/", get(get_profile).put(update_profile))
        .with_state(handlers)
}
