//! HTTP adapter for progress tracking, mounted at `/api/progress`.

mod dto;
mod handlers;

use axum::{routing::get, Router};

pub use dto::ProgressEntryResponse;
pub use handlers::ProgressHandlers;

use handlers::{list_progress, record_progress};

pub fn progress_routes(handlers: ProgressHandlers) -> Router {
    Router::new()
        .route("/", get(list_progress).post(record_progress))
        .with_state(handlers)
}
