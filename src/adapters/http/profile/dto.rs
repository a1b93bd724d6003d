//! Request and response bodies for profile endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{Gender, Profile};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub medical_conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id().to_string(),
            full_name: profile.full_name().to_string(),
            email: profile.email().to_string(),
            age: profile.age(),
            gender: profile.gender(),
            height: profile.height(),
            weight: profile.weight(),
            medical_conditions: profile.medical_conditions().to_vec(),
            allergies: profile.allergies().to_vec(),
            is_admin: profile.is_admin(),
            created_at: profile.created_at().to_rfc3339(),
            updated_at: profile.updated_at().to_rfc3339(),
        }
    }
}

/// Member row in the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberSummaryResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub created_at: String,
}

impl From<&Profile> for MemberSummaryResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id().to_string(),
            full_name: profile.full_name().to_string(),
            email: profile.email().to_string(),
            created_at: profile.created_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::profile::ProfileUpdate;

    #[test]
    fn update_body_accepts_missing_lists() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"full_name": "Ravi", "age": 41, "gender": "male"}"#).unwrap();
        assert_eq!(update.gender, Some(Gender::Male));
        assert!(update.allergies.is_empty());
    }

    #[test]
    fn response_carries_admin_flag() {
        let profile = Profile::new(UserId::new("u1").unwrap(), "Ravi", "ravi@example.com")
            .with_admin(true);
        let json = serde_json::to_value(ProfileResponse::from(&profile)).unwrap();
        assert_eq!(json["is_admin"], true);
        assert_eq!(json["gender"], serde_json::Value::Null);
    }
}
