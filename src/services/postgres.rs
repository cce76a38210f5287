use crate::models::{CandidateSkillProfile, MentorProfile};
use crate::services::store::{ProfileStore, StoreError};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

const CANDIDATE_QUERY: &str = r#"
    SELECT
        COALESCE(skills, '{}'::text[]) AS skills,
        industry
    FROM candidate_profiles
    WHERE user_id::text = $1
    LIMIT 1
"#;

// Capacity is compared in SQL here, unlike the REST store
const MENTOR_QUERY: &str = r#"
    SELECT
        id::text AS id,
        full_name,
        COALESCE(specializations, '{}'::text[]) AS specializations,
        COALESCE(industry, '') AS industry,
        COALESCE(years_experience, 0)::int4 AS years_experience,
        COALESCE(max_mentees, 0)::int4 AS max_mentees,
        COALESCE(current_mentees, 0)::int4 AS current_mentees,
        is_accepting_mentees,
        avg_rating::float8 AS avg_rating,
        COALESCE(total_observations, 0)::int4 AS total_observations,
        COALESCE(total_endorsements, 0)::int4 AS total_endorsements
    FROM mentor_profiles
    WHERE is_accepting_mentees = true
      AND COALESCE(current_mentees, 0) < COALESCE(max_mentees, 0)
    ORDER BY id
"#;

/// Profile store reading the backing Postgres database directly
///
/// Supabase projects expose their Postgres instance, so this talks to the same
/// tables as [`crate::services::SupabaseClient`] without going through PostgREST.
pub struct PostgresProfileStore {
    pool: PgPool,
}

impl PostgresProfileStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL profile store");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
        )
        .await
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn mentor_from_row(row: &PgRow) -> Result<MentorProfile, sqlx::Error> {
    Ok(MentorProfile {
        id: row.try_get("id")?,
        full_name: row.try_get("full_name")?,
        specializations: row.try_get("specializations")?,
        industry: row.try_get("industry")?,
        years_experience: row.try_get("years_experience")?,
        max_mentees: row.try_get("max_mentees")?,
        current_mentees: row.try_get("current_mentees")?,
        is_accepting_mentees: row.try_get("is_accepting_mentees")?,
        avg_rating: row.try_get("avg_rating")?,
        total_observations: row.try_get("total_observations")?,
        total_endorsements: row.try_get("total_endorsements")?,
    })
}

#[async_trait]
impl ProfileStore for PostgresProfileStore {
    async fn get_candidate_skill_profile(
        &self,
        candidate_id: &str,
    ) -> Result<Option<CandidateSkillProfile>, StoreError> {
        let row = sqlx::query(CANDIDATE_QUERY)
            .bind(candidate_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            tracing::debug!("No skill profile for candidate {}", candidate_id);
            return Ok(None);
        };

        Ok(Some(CandidateSkillProfile {
            skills: row.try_get("skills")?,
            industry: row.try_get("industry")?,
        }))
    }

    async fn list_accepting_mentors(&self) -> Result<Vec<MentorProfile>, StoreError> {
        let rows = sqlx::query(MENTOR_QUERY).fetch_all(&self.pool).await?;

        let mentors = rows
            .iter()
            .map(mentor_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Fetched {} accepting mentors with free slots", mentors.len());

        Ok(mentors)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
