//! Follow-up domain module.
//!
//! Follow-ups are reminders scheduled for a member, either by the member's
//! own workflow or by an administrator. Members can only complete them;
//! administrators create and delete them.

mod aggregate;
mod errors;
mod overview;

pub use aggregate::{FollowUp, FollowUpType, MAX_TITLE_LENGTH};
pub use errors::FollowUpError;
pub use overview::{FollowUpOverview, UpcomingFollowUp};
