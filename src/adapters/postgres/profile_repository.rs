//! PostgreSQL implementation of ProfileRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error, parse_user_id_as_uuid, user_id_from_uuid};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::profile::{Gender, Profile};
use crate::ports::ProfileRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT id, full_name, email, age, gender, height, weight,
           medical_conditions, allergies, is_admin, created_at, updated_at
    FROM profiles
"#;

#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(parse_user_id_as_uuid(user_id)?)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch profile", e))?;

        row.as_ref().map(row_to_profile).transpose()
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE profiles SET
                full_name = $2,
                age = $3,
                gender = $4,
                height = $5,
                weight = $6,
                medical_conditions = $7,
                allergies = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(parse_user_id_as_uuid(profile.id())?)
        .bind(profile.full_name())
        .bind(profile.age())
        .bind(profile.gender().map(|g| g.as_str()))
        .bind(profile.height())
        .bind(profile.weight())
        .bind(profile.medical_conditions())
        .bind(profile.allergies())
        .bind(profile.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update profile", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile not found: {}", profile.id()),
            ));
        }
        Ok(())
    }

    async fn list_members(&self) -> Result<Vec<Profile>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE is_admin = false ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch members", e))?;

        rows.iter().map(row_to_profile).collect()
    }
}

fn row_to_profile(row: &PgRow) -> Result<Profile, DomainError> {
    let gender: Option<String> = column(row, "gender")?;
    let gender = gender
        .map(|g| g.parse::<Gender>())
        .transpose()
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Invalid gender: {}", e)))?;
    let medical_conditions: Option<Vec<String>> = column(row, "medical_conditions")?;
    let allergies: Option<Vec<String>> = column(row, "allergies")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(row, "updated_at")?;

    Ok(Profile::reconstitute(
        user_id_from_uuid(column(row, "id")?)?,
        column(row, "full_name")?,
        column(row, "email")?,
        column(row, "age")?,
        gender,
        column(row, "height")?,
        column(row, "weight")?,
        medical_conditions.unwrap_or_default(),
        allergies.unwrap_or_default(),
        column(row, "is_admin")?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
