//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - Access token validation (HS256 JWT, test mock)
//! - `http` - axum JSON API
//! - `memory` - In-memory stores for tests and local runs
//! - `postgres` - sqlx repositories and readers

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
