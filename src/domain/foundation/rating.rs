//! Wellness rating value object (1 to 10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Self-reported level on a 1 (lowest) to 10 (highest) scale.
///
/// Used for energy, sleep quality and stress in progress entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct WellnessRating(u8);

/// Banding of a rating for display, matching the colour tiers of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingBand {
    Low,
    Moderate,
    High,
}

impl WellnessRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Creates a rating, returning error if outside 1..=10.
    pub fn try_new(value: i16) -> Result<Self, ValidationError> {
        Self::for_field("rating", value)
    }

    /// Same as [`WellnessRating::try_new`] but names the field in the error.
    pub fn for_field(field: &str, value: i16) -> Result<Self, ValidationError> {
        if value < i16::from(Self::MIN) || value > i16::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                field,
                i32::from(Self::MIN),
                i32::from(Self::MAX),
                i32::from(value),
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// 8 and up is high, 5 to 7 moderate, below 5 low.
    pub fn band(&self) -> RatingBand {
        match self.0 {
            8..=10 => RatingBand::High,
            5..=7 => RatingBand::Moderate,
            _ => RatingBand::Low,
        }
    }
}

impl Default for WellnessRating {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<i16> for WellnessRating {
    type Error = ValidationError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<WellnessRating> for i16 {
    fn from(rating: WellnessRating) -> Self {
        i16::from(rating.0)
    }
}

impl fmt::Display for WellnessRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}
