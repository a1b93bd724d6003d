//! Response bodies for progress endpoints. Requests deserialize straight
//! into [`ProgressInput`](crate::domain::progress::ProgressInput).

use serde::{Deserialize, Serialize};

use crate::domain::progress::ProgressEntry;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressEntryResponse {
    pub id: String,
    pub tracking_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub energy_level: u8,
    pub sleep_quality: u8,
    pub stress_level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
}

impl From<&ProgressEntry> for ProgressEntryResponse {
    fn from(entry: &ProgressEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            tracking_date: entry.tracking_date().format("%Y-%m-%d").to_string(),
            weight: entry.weight(),
            energy_level: entry.energy_level().value(),
            sleep_quality: entry.sleep_quality().value(),
            stress_level: entry.stress_level().value(),
            notes: entry.notes().map(str::to_string),
            created_at: entry.created_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, UserId};
    use crate::domain::progress::ProgressInput;
    use chrono::NaiveDate;

    #[test]
    fn response_formats_date_and_ratings() {
        let input = ProgressInput {
            tracking_date: NaiveDate::from_ymd_opt(2024, 2, 29),
            energy_level: Some(8),
            ..Default::default()
        };
        let entry = ProgressEntry::record(UserId::new("m").unwrap(), input, Timestamp::now()).unwrap();

        let json = serde_json::to_value(ProgressEntryResponse::from(&entry)).unwrap();
        assert_eq!(json["tracking_date"], "2024-02-29");
        assert_eq!(json["energy_level"], 8);
        assert_eq!(json["sleep_quality"], 5);
        assert!(json.get("weight").is_none());
    }
}
