//! Per-member dashboard summary.

use serde::Serialize;

use crate::domain::prakriti::{Assessment, DominantDosha, DoshaScores};

/// What the member sees on landing: assessment status and pending work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub has_assessment: bool,
    pub dominant_dosha: Option<DominantDosha>,
    pub scores: Option<DoshaScores>,
    pub pending_follow_ups: u64,
}

impl DashboardSummary {
    pub fn build(current: Option<&Assessment>, pending_follow_ups: u64) -> Self {
        Self {
            has_assessment: current.is_some(),
            dominant_dosha: current.map(|a| a.dominant()),
            scores: current.map(|a| *a.scores()),
            pending_follow_ups,
        }
    }
}
