//! HTTP adapters - the JSON API.
//!
//! Each domain module has its own handler state and routes; `router`
//! assembles them under `/api` behind the auth middleware.

pub mod admin;
pub mod assessment;
pub mod dashboard;
pub mod error;
pub mod follow_up;
pub mod middleware;
pub mod profile;
pub mod progress;
pub mod recommendation;
pub mod router;

pub use error::{ApiError, ErrorResponse};
pub use router::{api_routes, app_router, ApiHandlers, AppPorts};
