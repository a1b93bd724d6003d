//! Progress tracking entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProgressEntryId, Timestamp, UserId, ValidationError, WellnessRating};

/// Number of entries shown in the progress history.
pub const RECENT_ENTRY_LIMIT: usize = 30;

/// Upper bound for a recorded body weight, in kilograms.
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Raw values submitted for one day of tracking.
///
/// Ratings arrive as plain integers and are checked by
/// [`ProgressEntry::record`]. Missing ratings fall back to the midpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProgressInput {
    pub tracking_date: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub energy_level: Option<i16>,
    pub sleep_quality: Option<i16>,
    pub stress_level: Option<i16>,
    pub notes: Option<String>,
}

/// One recorded day of wellness metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    id: ProgressEntryId,
    user_id: UserId,
    tracking_date: NaiveDate,
    weight: Option<f64>,
    energy_level: WellnessRating,
    sleep_quality: WellnessRating,
    stress_level: WellnessRating,
    notes: Option<String>,
    created_at: Timestamp,
}

impl ProgressEntry {
    /// Validates `input` and builds a new entry.
    ///
    /// The tracking date defaults to the calendar date of `now`.
    pub fn record(
        user_id: UserId,
        input: ProgressInput,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let weight = match input.weight {
            Some(w) if !w.is_finite() || w <= 0.0 || w > MAX_WEIGHT_KG => {
                return Err(ValidationError::invalid_format(
                    "weight",
                    format!("must be greater than 0 and at most {} kg", MAX_WEIGHT_KG),
                ));
            }
            other => other,
        };

        let rating = |field: &str, value: Option<i16>| match value {
            Some(v) => WellnessRating::for_field(field, v),
            None => Ok(WellnessRating::default()),
        };

        Ok(Self {
            id: ProgressEntryId::new(),
            user_id,
            tracking_date: input.tracking_date.unwrap_or_else(|| now.date()),
            weight,
            energy_level: rating("energy_level", input.energy_level)?,
            sleep_quality: rating("sleep_quality", input.sleep_quality)?,
            stress_level: rating("stress_level", input.stress_level)?,
            notes: input
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            created_at: now,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ProgressEntryId,
        user_id: UserId,
        tracking_date: NaiveDate,
        weight: Option<f64>,
        energy_level: WellnessRating,
        sleep_quality: WellnessRating,
        stress_level: WellnessRating,
        notes: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            tracking_date,
            weight,
            energy_level,
            sleep_quality,
            stress_level,
            notes,
            created_at,
        }
    }

    pub fn id(&self) -> &ProgressEntryId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn tracking_date(&self) -> NaiveDate {
        self.tracking_date
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn energy_level(&self) -> WellnessRating {
        self.energy_level
    }

    pub fn sleep_quality(&self) -> WellnessRating {
        self.sleep_quality
    }

    pub fn stress_level(&self) -> WellnessRating {
        self.stress_level
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Orders entries newest tracking date first and keeps at most
/// [`RECENT_ENTRY_LIMIT`] of them.
pub fn recent_first(mut entries: Vec<ProgressEntry>) -> Vec<ProgressEntry> {
    entries.sort_by(|a, b| {
        b.tracking_date
            .cmp(&a.tracking_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    entries.truncate(RECENT_ENTRY_LIMIT);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("member-1").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn defaults_ratings_and_date() {
        let now = Timestamp::now();
        let entry = ProgressEntry::record(user(), ProgressInput::default(), now).unwrap();

        assert_eq!(entry.tracking_date(), now.date());
        assert_eq!(entry.energy_level().value(), 5);
        assert_eq!(entry.sleep_quality().value(), 5);
        assert_eq!(entry.stress_level().value(), 5);
        assert_eq!(entry.weight(), None);
    }

    #[test]
    fn rejects_rating_out_of_range() {
        let input = ProgressInput {
            sleep_quality: Some(0),
            ..Default::default()
        };
        let err = ProgressEntry::record(user(), input, Timestamp::now()).unwrap_err();
        assert_eq!(err.field(), "sleep_quality");
    }

    #[test]
    fn rejects_non_positive_weight() {
        for weight in [0.0, -2.5, f64::NAN] {
            let input = ProgressInput {
                weight: Some(weight),
                ..Default::default()
            };
            let err = ProgressEntry::record(user(), input, Timestamp::now()).unwrap_err();
            assert_eq!(err.field(), "weight");
        }
    }

    #[test]
    fn blank_notes_become_none() {
        let input = ProgressInput {
            notes: Some("   ".to_string()),
            ..Default::default()
        };
        let entry = ProgressEntry::record(user(), input, Timestamp::now()).unwrap();
        assert_eq!(entry.notes(), None);
    }

    #[test]
    fn recent_first_orders_and_truncates() {
        let now = Timestamp::now();
        let entries: Vec<_> = (0..40)
            .map(|i| {
                let input = ProgressInput {
                    tracking_date: Some(date(2024, 1, 1) + chrono::Days::new(i)),
                    ..Default::default()
                };
                ProgressEntry::record(user(), input, now).unwrap()
            })
            .collect();

        let recent = recent_first(entries);
        assert_eq!(recent.len(), RECENT_ENTRY_LIMIT);
        assert_eq!(recent[0].tracking_date(), date(2024, 2, 9));
        assert!(recent
            .windows(2)
            .all(|w| w[0].tracking_date() >= w[1].tracking_date()));
    }
}
