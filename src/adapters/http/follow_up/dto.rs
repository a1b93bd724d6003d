//! Request and response bodies for follow-up endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::follow_up::{FollowUp, FollowUpOverview, FollowUpType, UpcomingFollowUp};
use crate::domain::foundation::Timestamp;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowUpResponse {
    pub id: String,
    pub user_id: String,
    pub follow_up_type: FollowUpType,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scheduled_date: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub created_at: String,
}

impl From<&FollowUp> for FollowUpResponse {
    fn from(follow_up: &FollowUp) -> Self {
        Self {
            id: follow_up.id().to_string(),
            user_id: follow_up.user_id().to_string(),
            follow_up_type: follow_up.follow_up_type(),
            title: follow_up.title().to_string(),
            description: follow_up.description().map(str::to_string),
            scheduled_date: follow_up.scheduled_date().to_rfc3339(),
            completed: follow_up.is_completed(),
            completed_at: follow_up.completed_at().map(Timestamp::to_rfc3339),
            notes: follow_up.notes().map(str::to_string),
            created_by: follow_up.created_by().map(ToString::to_string),
            created_at: follow_up.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpcomingFollowUpResponse {
    #[serde(flatten)]
    pub follow_up: FollowUpResponse,
    pub overdue: bool,
}

impl From<&UpcomingFollowUp> for UpcomingFollowUpResponse {
    fn from(upcoming: &UpcomingFollowUp) -> Self {
        Self {
            follow_up: (&upcoming.follow_up).into(),
            overdue: upcoming.overdue,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FollowUpOverviewResponse {
    pub upcoming: Vec<UpcomingFollowUpResponse>,
    pub completed: Vec<FollowUpResponse>,
    pub overdue_count: usize,
}

impl From<FollowUpOverview> for FollowUpOverviewResponse {
    fn from(overview: FollowUpOverview) -> Self {
        Self {
            upcoming: overview.upcoming.iter().map(Into::into).collect(),
            completed: overview.completed.iter().map(Into::into).collect(),
            overdue_count: overview.overdue_count(),
        }
    }
}

/// Body of `POST /api/admin/members/:user_id/follow-ups`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFollowUpRequest {
    #[serde(default)]
    pub follow_up_type: FollowUpType,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub scheduled_date: Timestamp,
}
