//! Daily schedule templates.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ScheduleTemplateId;
use crate::domain::prakriti::Dosha;

/// One recommended activity in a dosha's daily routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTemplate {
    pub id: ScheduleTemplateId,
    pub dosha: Dosha,
    /// Usually `morning`, `afternoon`, `evening` or `night`.
    pub time_of_day: String,
    pub activity: String,
    pub duration_minutes: Option<u32>,
    pub description: Option<String>,
    pub benefits: Option<String>,
    pub display_order: i32,
}

/// Activities sharing a time of day, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    pub time_of_day: String,
    pub activities: Vec<ScheduleTemplate>,
}

/// Orders templates by their explicit display order (stable).
pub fn sort_by_display_order(templates: &mut [ScheduleTemplate]) {
    templates.sort_by_key(|t| t.display_order);
}

/// Groups templates by time of day.
///
/// Blocks appear in the order their time of day is first seen, so
/// grouping already-sorted templates keeps the routine chronological.
pub fn group_by_time_of_day(templates: Vec<ScheduleTemplate>) -> Vec<ScheduleBlock> {
    let mut blocks: Vec<ScheduleBlock> = Vec::new();
    for template in templates {
        match blocks
            .iter_mut()
            .find(|b| b.time_of_day == template.time_of_day)
        {
            Some(block) => block.activities.push(template),
            None => blocks.push(ScheduleBlock {
                time_of_day: template.time_of_day.clone(),
                activities: vec![template],
            }),
        }
    }
    blocks
}
