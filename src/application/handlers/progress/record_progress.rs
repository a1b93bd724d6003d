//! RecordProgressHandler - Command handler for a day's tracking entry.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::progress::{ProgressEntry, ProgressError, ProgressInput};
use crate::ports::ProgressRepository;

#[derive(Debug, Clone)]
pub struct RecordProgressCommand {
    pub user_id: UserId,
    pub input: ProgressInput,
}

pub struct RecordProgressHandler {
    repository: Arc<dyn ProgressRepository>,
}

impl RecordProgressHandler {
    pub fn new(repository: Arc<dyn ProgressRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordProgressCommand) -> Result<ProgressEntry, ProgressError> {
        let entry = ProgressEntry::record(cmd.user_id, cmd.input, Timestamp::now())?;
        self.repository.save(&entry).await?;

        info!(
            user_id = %entry.user_id(),
            tracking_date = %entry.tracking_date(),
            "Progress recorded"
        );
        Ok(entry)
    }
}
