//! Diet recommendations and meal ordering.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::DietRecommendationId;
use crate::domain::prakriti::Dosha;

/// Meal slot a recommendation applies to.
///
/// Stored as free text; the four recognised values have a fixed daily
/// order, anything else is kept verbatim and sorts after them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Snack,
    Lunch,
    Dinner,
    Other(String),
}

impl MealType {
    /// Daily order of the recognised meal types.
    pub const ORDER: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Snack,
        MealType::Lunch,
        MealType::Dinner,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "snack" => MealType::Snack,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            _ => MealType::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Snack => "snack",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Other(raw) => raw,
        }
    }

    /// Position in the daily order; unrecognised types rank last.
    pub fn rank(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|m| m == self)
            .unwrap_or(Self::ORDER.len())
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MealType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MealType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(MealType::parse(&raw))
    }
}

/// Curated diet guidance for one dosha and meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRecommendation {
    pub id: DietRecommendationId,
    pub dosha: Dosha,
    pub meal_type: MealType,
    pub food_items: Vec<String>,
    pub foods_to_avoid: Vec<String>,
    pub portion_guidelines: Option<String>,
    pub timing: Option<String>,
}

/// Orders recommendations breakfast, snack, lunch, dinner, then any
/// unrecognised meal types. Stable, so ties keep storage order.
pub fn sort_by_meal_order(recommendations: &mut [DietRecommendation]) {
    recommendations.sort_by_key(|r| r.meal_type.rank());
}
