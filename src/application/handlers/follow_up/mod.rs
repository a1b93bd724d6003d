//! Follow-up command and query handlers.

mod admin;
mod complete_follow_up;
mod list_follow_ups;

pub use admin::{
    CreateFollowUpCommand, CreateFollowUpHandler, DeleteFollowUpCommand, DeleteFollowUpHandler,
    ListUserFollowUpsHandler, ListUserFollowUpsQuery,
};
pub use complete_follow_up::{CompleteFollowUpCommand, CompleteFollowUpHandler};
pub use list_follow_ups::{ListFollowUpsHandler, ListFollowUpsQuery};
