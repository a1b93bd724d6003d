//! Member profile: demographics, health notes and the administrator flag.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

pub const MIN_AGE: i32 = 1;
pub const MAX_AGE: i32 = 120;
pub const MAX_NAME_LENGTH: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(ValidationError::invalid_format(
                "gender",
                format!("unknown gender '{}'", other),
            )),
        }
    }
}

/// Fields a member may change on their own profile.
///
/// Every field is replaced as given; `None` clears an optional value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl ProfileUpdate {
    /// Checks ranges and normalizes list fields.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        self.full_name = self.full_name.trim().to_string();
        if self.full_name.is_empty() {
            return Err(ValidationError::empty_field("full_name"));
        }
        if self.full_name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::out_of_range(
                "full_name",
                1,
                MAX_NAME_LENGTH as i32,
                self.full_name.chars().count() as i32,
            ));
        }
        if let Some(age) = self.age {
            if !(MIN_AGE..=MAX_AGE).contains(&age) {
                return Err(ValidationError::out_of_range("age", MIN_AGE, MAX_AGE, age));
            }
        }
        positive("height", self.height)?;
        positive("weight", self.weight)?;

        self.medical_conditions = normalize_list(self.medical_conditions);
        self.allergies = normalize_list(self.allergies);
        Ok(self)
    }
}

fn positive(field: &str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(ValidationError::invalid_format(
            field,
            "must be greater than 0",
        )),
        _ => Ok(()),
    }
}

/// Trims entries, drops blanks and removes duplicates keeping first occurrence.
pub fn normalize_list(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty() && seen.insert(item.to_lowercase()))
        .collect()
}

/// A member profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    id: UserId,
    full_name: String,
    email: String,
    age: Option<i32>,
    gender: Option<Gender>,
    height: Option<f64>,
    weight: Option<f64>,
    medical_conditions: Vec<String>,
    allergies: Vec<String>,
    is_admin: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Profile {
    /// Creates the initial profile for a newly registered member.
    pub fn new(id: UserId, full_name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            full_name: full_name.into(),
            email: email.into(),
            age: None,
            gender: None,
            height: None,
            weight: None,
            medical_conditions: Vec::new(),
            allergies: Vec::new(),
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: UserId,
        full_name: String,
        email: String,
        age: Option<i32>,
        gender: Option<Gender>,
        height: Option<f64>,
        weight: Option<f64>,
        medical_conditions: Vec<String>,
        allergies: Vec<String>,
        is_admin: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            full_name,
            email,
            age,
            gender,
            height,
            weight,
            medical_conditions,
            allergies,
            is_admin,
            created_at,
            updated_at,
        }
    }

    /// Applies an already validated update and bumps `updated_at`.
    pub fn apply(&mut self, update: ProfileUpdate, now: Timestamp) {
        self.full_name = update.full_name;
        self.age = update.age;
        self.gender = update.gender;
        self.height = update.height;
        self.weight = update.weight;
        self.medical_conditions = update.medical_conditions;
        self.allergies = update.allergies;
        self.updated_at = now;
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn medical_conditions(&self) -> &[String] {
        &self.medical_conditions
    }

    pub fn allergies(&self) -> &[String] {
        &self.allergies
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update() -> ProfileUpdate {
        ProfileUpdate {
            full_name: "  Asha Rao ".to_string(),
            age: Some(34),
            gender: Some(Gender::Female),
            height: Some(162.0),
            weight: Some(58.5),
            medical_conditions: vec!["Asthma".to_string()],
            allergies: vec![],
        }
    }

    #[test]
    fn validate_trims_name() {
        assert_eq!(update().validate().unwrap().full_name, "Asha Rao");
    }

    #[test]
    fn validate_rejects_age_outside_bounds() {
        for age in [0, 121, -4] {
            let err = ProfileUpdate {
                age: Some(age),
                ..update()
            }
            .validate()
            .unwrap_err();
            assert_eq!(err, ValidationError::out_of_range("age", 1, 120, age));
        }
    }

    #[test]
    fn validate_rejects_non_positive_measurements() {
        let err = ProfileUpdate {
            height: Some(0.0),
            ..update()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field(), "height");

        let err = ProfileUpdate {
            weight: Some(-1.0),
            ..update()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field(), "weight");
    }

    #[test]
    fn validate_rejects_blank_name() {
        let err = ProfileUpdate {
            full_name: "  ".to_string(),
            ..update()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::empty_field("full_name"));
    }

    #[test]
    fn normalize_list_trims_and_dedupes() {
        let items = vec![
            " Peanuts ".to_string(),
            "".to_string(),
            "peanuts".to_string(),
            "Dairy".to_string(),
        ];
        assert_eq!(normalize_list(items), vec!["Peanuts", "Dairy"]);
    }

    #[test]
    fn apply_bumps_updated_at() {
        let mut profile = Profile::new(UserId::new("u1").unwrap(), "Old", "a@b.c");
        let later = profile.updated_at().plus_secs(60);
        profile.apply(update().validate().unwrap(), later);

        assert_eq!(profile.full_name(), "Asha Rao");
        assert_eq!(profile.age(), Some(34));
        assert_eq!(profile.updated_at(), &later);
        assert!(!profile.is_admin());
    }

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("unknown".parse::<Gender>().is_err());
    }
}
