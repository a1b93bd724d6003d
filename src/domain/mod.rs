//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `prakriti` - Questions, answers, dosha scoring and the assessment flow
//! - `recommendation` - Diet and daily schedule tables, lookup key selection
//! - `follow_up` - Member reminders and their completion
//! - `progress` - Daily wellness tracking entries
//! - `profile` - Member profiles and the administrator flag
//! - `dashboard` - Per-member landing summary

pub mod dashboard;
pub mod follow_up;
pub mod foundation;
pub mod prakriti;
pub mod profile;
pub mod progress;
pub mod recommendation;
