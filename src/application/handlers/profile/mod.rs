//! Profile and member administration handlers.

mod get_profile;
mod list_members;
mod update_profile;

pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use list_members::{ListMembersHandler, ListMembersQuery};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};
