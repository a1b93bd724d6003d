//! Member profiles.

mod errors;
#[allow(clippy::module_inception)]
mod profile;

pub use errors::ProfileError;
pub use profile::{
    normalize_list, Gender, Profile, ProfileUpdate, MAX_AGE, MAX_NAME_LENGTH, MIN_AGE,
};
