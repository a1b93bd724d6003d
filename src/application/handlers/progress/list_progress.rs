//! ListProgressHandler - the member's recent tracking history.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::progress::{ProgressEntry, ProgressError, RECENT_ENTRY_LIMIT};
use crate::ports::ProgressRepository;

#[derive(Debug, Clone)]
pub struct ListProgressQuery {
    pub user_id: UserId,
}

pub struct ListProgressHandler {
    repository: Arc<dyn ProgressRepository>,
}

impl ListProgressHandler {
    pub fn new(repository: Arc<dyn ProgressRepository>) -> Self {
        Self { repository }
    }

    /// Newest tracking date first, capped at [`RECENT_ENTRY_LIMIT`].
    pub async fn handle(&self, query: ListProgressQuery) -> Result<Vec<ProgressEntry>, ProgressError> {
        Ok(self
            .repository
            .list_recent(&query.user_id, RECENT_ENTRY_LIMIT)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProgressRepository;
    use crate::domain::foundation::Timestamp;
    use crate::domain::progress::ProgressInput;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn caps_history_and_orders_newest_first() {
        let user = UserId::new("member-1").unwrap();
        let repo = Arc::new(InMemoryProgressRepository::new());
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        for day in 0..35u64 {
            let entry = ProgressEntry::record(
                user.clone(),
                ProgressInput {
                    tracking_date: Some(start + chrono::Days::new(day)),
                    ..Default::default()
                },
                Timestamp::now(),
            )
            .unwrap();
            repo.save(&entry).await.unwrap();
        }

        let history = ListProgressHandler::new(repo)
            .handle(ListProgressQuery { user_id: user })
            .await
            .unwrap();

        assert_eq!(history.len(), RECENT_ENTRY_LIMIT);
        assert_eq!(history[0].tracking_date(), start + chrono::Days::new(34));
    }
}
