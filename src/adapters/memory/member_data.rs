//! In-memory repositories for per-member records.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::follow_up::FollowUp;
use crate::domain::foundation::{DomainError, ErrorCode, FollowUpId, UserId};
use crate::domain::prakriti::Assessment;
use crate::domain::profile::Profile;
use crate::domain::progress::{recent_first, ProgressEntry};
use crate::ports::{
    AccessChecker, AssessmentRepository, FollowUpRepository, ProfileRepository,
    ProgressRepository,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentRepository {
    assessments: Arc<RwLock<Vec<Assessment>>>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored assessments across all users.
    pub async fn count(&self) -> usize {
        self.assessments.read().await.len()
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        self.assessments.write().await.push(assessment.clone());
        Ok(())
    }

    async fn find_latest_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Assessment>, DomainError> {
        Ok(self
            .assessments
            .read()
            .await
            .iter()
            .filter(|a| a.user_id() == user_id)
            .max_by_key(|a| *a.assessed_at())
            .cloned())
    }

    async fn exists_for_user(&self, user_id: &UserId) -> Result<bool, DomainError> {
        Ok(self
            .assessments
            .read()
            .await
            .iter()
            .any(|a| a.user_id() == user_id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryFollowUpRepository {
    follow_ups: Arc<RwLock<HashMap<FollowUpId, FollowUp>>>,
}

impl InMemoryFollowUpRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: &FollowUpId) -> Option<FollowUp> {
        self.follow_ups.read().await.get(id).cloned()
    }
}

fn follow_up_not_found(id: &FollowUpId) -> DomainError {
    DomainError::new(
        ErrorCode::FollowUpNotFound,
        format!("Follow-up not found: {}", id),
    )
}

#[async_trait]
impl FollowUpRepository for InMemoryFollowUpRepository {
    async fn save(&self, follow_up: &FollowUp) -> Result<(), DomainError> {
        self.follow_ups
            .write()
            .await
            .insert(*follow_up.id(), follow_up.clone());
        Ok(())
    }

    async fn update(&self, follow_up: &FollowUp) -> Result<(), DomainError> {
        let mut follow_ups = self.follow_ups.write().await;
        match follow_ups.get_mut(follow_up.id()) {
            Some(existing) => {
                *existing = follow_up.clone();
                Ok(())
            }
            None => Err(follow_up_not_found(follow_up.id())),
        }
    }

    async fn find_by_id(&self, id: &FollowUpId) -> Result<Option<FollowUp>, DomainError> {
        Ok(self.get(id).await)
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<FollowUp>, DomainError> {
        let mut list: Vec<FollowUp> = self
            .follow_ups
            .read()
            .await
            .values()
            .filter(|f| f.user_id() == user_id)
            .cloned()
            .collect();
        list.sort_by_key(|f| *f.scheduled_date());
        Ok(list)
    }

    async fn count_pending(&self, user_id: &UserId) -> Result<u64, DomainError> {
        Ok(self
            .follow_ups
            .read()
            .await
            .values()
            .filter(|f| f.user_id() == user_id && !f.is_completed())
            .count() as u64)
    }

    async fn delete(&self, id: &FollowUpId) -> Result<(), DomainError> {
        match self.follow_ups.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(follow_up_not_found(id)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryProgressRepository {
    entries: Arc<RwLock<Vec<ProgressEntry>>>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn save(&self, entry: &ProgressEntry) -> Result<(), DomainError> {
        self.entries.write().await.push(entry.clone());
        Ok(())
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<ProgressEntry>, DomainError> {
        let owned = self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.user_id() == user_id)
            .cloned()
            .collect();
        let mut recent = recent_first(owned);
        recent.truncate(limit);
        Ok(recent)
    }
}

/// Profile table; also answers administrator lookups from the stored flag.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<UserId, Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a profile, as the sign-up hook would.
    pub async fn insert(&self, profile: Profile) {
        self.profiles
            .write()
            .await
            .insert(profile.id().clone(), profile);
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        match profiles.get_mut(profile.id()) {
            Some(existing) => {
                *existing = profile.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile not found: {}", profile.id()),
            )),
        }
    }

    async fn list_members(&self) -> Result<Vec<Profile>, DomainError> {
        let mut members: Vec<Profile> = self
            .profiles
            .read()
            .await
            .values()
            .filter(|p| !p.is_admin())
            .cloned()
            .collect();
        members.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(members)
    }
}

#[async_trait]
impl AccessChecker for InMemoryProfileRepository {
    async fn is_admin(&self, user_id: &UserId) -> Result<bool, DomainError> {
        Ok(self
            .profiles
            .read()
            .await
            .get(user_id)
            .map(|p| p.is_admin())
            .unwrap_or(false))
    }
}
