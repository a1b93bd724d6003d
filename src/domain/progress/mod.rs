//! Progress tracking: daily energy, sleep, stress and weight.

mod entry;
mod errors;

pub use entry::{recent_first, ProgressEntry, ProgressInput, MAX_WEIGHT_KG, RECENT_ENTRY_LIMIT};
pub use errors::ProgressError;
