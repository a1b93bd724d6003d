//! Member-facing split of follow-ups into upcoming and completed.

use serde::Serialize;

use super::FollowUp;
use crate::domain::foundation::Timestamp;

/// A pending follow-up with its overdue flag evaluated at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingFollowUp {
    pub follow_up: FollowUp,
    pub overdue: bool,
}

/// Follow-ups partitioned for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FollowUpOverview {
    pub upcoming: Vec<UpcomingFollowUp>,
    pub completed: Vec<FollowUp>,
}

impl FollowUpOverview {
    /// Partitions follow-ups, keeping their incoming order within each group.
    pub fn build(follow_ups: Vec<FollowUp>, now: &Timestamp) -> Self {
        let mut overview = Self::default();
        for follow_up in follow_ups {
            if follow_up.is_completed() {
                overview.completed.push(follow_up);
            } else {
                let overdue = follow_up.is_overdue(now);
                overview.upcoming.push(UpcomingFollowUp { follow_up, overdue });
            }
        }
        overview
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.completed.is_empty()
    }

    pub fn overdue_count(&self) -> usize {
        self.upcoming.iter().filter(|u| u.overdue).count()
    }
}
