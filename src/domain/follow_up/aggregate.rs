//! FollowUp aggregate - a scheduled reminder for one user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FollowUpError;
use crate::domain::foundation::{FollowUpId, Timestamp, UserId, ValidationError};

/// Maximum length for a follow-up title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Kind of follow-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpType {
    #[default]
    Reminder,
    CheckIn,
    Assessment,
}

impl FollowUpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowUpType::Reminder => "reminder",
            FollowUpType::CheckIn => "check_in",
            FollowUpType::Assessment => "assessment",
        }
    }
}

impl fmt::Display for FollowUpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FollowUpType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reminder" => Ok(FollowUpType::Reminder),
            "check_in" => Ok(FollowUpType::CheckIn),
            "assessment" => Ok(FollowUpType::Assessment),
            other => Err(ValidationError::invalid_format(
                "follow_up_type",
                format!("unknown type '{}'", other),
            )),
        }
    }
}

/// A follow-up reminder.
///
/// # Invariants
///
/// - `title` is non-empty and at most 200 characters
/// - `completed_at` is set exactly when `completed` is true
/// - a completed follow-up is never re-opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUp {
    id: FollowUpId,
    user_id: UserId,
    follow_up_type: FollowUpType,
    title: String,
    description: Option<String>,
    scheduled_date: Timestamp,
    completed: bool,
    completed_at: Option<Timestamp>,
    notes: Option<String>,
    created_by: Option<UserId>,
    created_at: Timestamp,
}

impl FollowUp {
    /// Schedules a new follow-up for `user_id`.
    ///
    /// `created_by` is the administrator who scheduled it, if any.
    pub fn schedule(
        user_id: UserId,
        follow_up_type: FollowUpType,
        title: impl Into<String>,
        description: Option<String>,
        scheduled_date: Timestamp,
        created_by: Option<UserId>,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ValidationError::out_of_range(
                "title",
                1,
                MAX_TITLE_LENGTH as i32,
                title.chars().count() as i32,
            ));
        }

        Ok(Self {
            id: FollowUpId::new(),
            user_id,
            follow_up_type,
            title,
            description: description.filter(|d| !d.trim().is_empty()),
            scheduled_date,
            completed: false,
            completed_at: None,
            notes: None,
            created_by,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a follow-up from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: FollowUpId,
        user_id: UserId,
        follow_up_type: FollowUpType,
        title: String,
        description: Option<String>,
        scheduled_date: Timestamp,
        completed: bool,
        completed_at: Option<Timestamp>,
        notes: Option<String>,
        created_by: Option<UserId>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            follow_up_type,
            title,
            description,
            scheduled_date,
            completed,
            completed_at,
            notes,
            created_by,
            created_at,
        }
    }

    /// Marks the follow-up as done at `now`.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if it was completed before
    pub fn complete(&mut self, now: Timestamp) -> Result<(), FollowUpError> {
        if self.completed {
            return Err(FollowUpError::AlreadyCompleted(self.id));
        }
        self.completed = true;
        self.completed_at = Some(now);
        Ok(())
    }

    /// Pending and scheduled before `now`.
    pub fn is_overdue(&self, now: &Timestamp) -> bool {
        !self.completed && self.scheduled_date.is_before(now)
    }

    /// Whether `user_id` owns this follow-up.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &FollowUpId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn follow_up_type(&self) -> FollowUpType {
        self.follow_up_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn scheduled_date(&self) -> &Timestamp {
        &self.scheduled_date
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_by(&self) -> Option<&UserId> {
        self.created_by.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("member-1").unwrap()
    }

    fn admin() -> UserId {
        UserId::new("admin-1").unwrap()
    }

    fn follow_up(scheduled: Timestamp) -> FollowUp {
        FollowUp::schedule(
            user(),
            FollowUpType::CheckIn,
            "Weekly check-in",
            Some("How is the new routine going?".to_string()),
            scheduled,
            Some(admin()),
        )
        .unwrap()
    }

    #[test]
    fn schedule_trims_title_and_starts_pending() {
        let f = FollowUp::schedule(
            user(),
            FollowUpType::Reminder,
            "  Drink warm water  ",
            Some("   ".to_string()),
            Timestamp::now(),
            None,
        )
        .unwrap();

        assert_eq!(f.title(), "Drink warm water");
        assert_eq!(f.description(), None);
        assert!(!f.is_completed());
        assert!(f.completed_at().is_none());
    }

    #[test]
    fn schedule_rejects_blank_title() {
        let result = FollowUp::schedule(
            user(),
            FollowUpType::Reminder,
            "   ",
            None,
            Timestamp::now(),
            None,
        );
        assert_eq!(result.unwrap_err(), ValidationError::empty_field("title"));
    }

    #[test]
    fn schedule_records_creator() {
        assert_eq!(follow_up(Timestamp::now()).created_by(), Some(&admin()));
    }

    #[test]
    fn complete_sets_completion_time() {
        let mut f = follow_up(Timestamp::now());
        let now = Timestamp::now();
        f.complete(now).unwrap();

        assert!(f.is_completed());
        assert_eq!(f.completed_at(), Some(&now));
    }

    #[test]
    fn completing_twice_is_rejected() {
        let mut f = follow_up(Timestamp::now());
        f.complete(Timestamp::now()).unwrap();
        assert_eq!(
            f.complete(Timestamp::now()),
            Err(FollowUpError::AlreadyCompleted(*f.id()))
        );
    }

    #[test]
    fn overdue_only_when_pending_and_past() {
        let now = Timestamp::now();
        let mut past = follow_up(now.minus_days(1));
        let future = follow_up(now.plus_days(1));

        assert!(past.is_overdue(&now));
        assert!(!future.is_overdue(&now));

        past.complete(now).unwrap();
        assert!(!past.is_overdue(&now));
    }

    #[test]
    fn follow_up_type_string_forms() {
        assert_eq!("check_in".parse::<FollowUpType>().unwrap(), FollowUpType::CheckIn);
        assert_eq!(FollowUpType::Assessment.to_string(), "assessment");
        assert!("call".parse::<FollowUpType>().is_err());
        assert_eq!(
            serde_json::to_string(&FollowUpType::CheckIn).unwrap(),
            "\"check_in\""
        );
    }
}
