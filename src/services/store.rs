use async_trait::async_trait;
use thiserror::Error;
use crate::models::{CandidateSkillProfile, MentorProfile};

/// Errors that can occur when reading from a profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Fixture error: {0}")]
    Fixture(String),
}

/// Read-only access to candidate and mentor profiles
///
/// Carried as `Arc<dyn ProfileStore>` so the backend can be picked at startup.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Skills and industry for a candidate. `Ok(None)` when the candidate has no profile.
    async fn get_candidate_skill_profile(
        &self,
        candidate_id: &str,
    ) -> Result<Option<CandidateSkillProfile>, StoreError>;

    /// Mentors with `is_accepting_mentees = true`, in a stable order.
    ///
    /// Implementations may also drop full mentors; callers filter again regardless.
    async fn list_accepting_mentors(&self) -> Result<Vec<MentorProfile>, StoreError>;

    /// Cheap liveness probe used by the health endpoint
    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
