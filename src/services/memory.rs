use crate::models::{CandidateSkillProfile, MentorProfile};
use crate::services::store::{ProfileStore, StoreError};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Fixture file layout for [`InMemoryProfileStore::from_json_file`]
///
/// ```json
/// {
///   "candidates": { "cand-1": { "skills": ["react"], "industry": "Software" } },
///   "mentors": [ { "id": "m1", "specializations": ["React"], ... } ]
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub candidates: HashMap<String, CandidateSkillProfile>,
    #[serde(default)]
    pub mentors: Vec<MentorProfile>,
}

/// Profile store backed by in-process data
///
/// Used for local development without a Supabase project, and in tests.
/// Mentors are returned in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    candidates: HashMap<String, CandidateSkillProfile>,
    mentors: Vec<MentorProfile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidate(mut self, candidate_id: impl Into<String>, profile: CandidateSkillProfile) -> Self {
        self.candidates.insert(candidate_id.into(), profile);
        self
    }

    pub fn with_mentor(mut self, mentor: MentorProfile) -> Self {
        self.mentors.push(mentor);
        self
    }

    pub fn with_mentors(mut self, mentors: impl IntoIterator<Item = MentorProfile>) -> Self {
        self.mentors.extend(mentors);
        self
    }

    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        Self {
            candidates: fixtures.candidates,
            mentors: fixtures.mentors,
        }
    }

    /// Load candidates and mentors from a JSON fixture file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Fixture(format!("{}: {}", path.display(), e)))?;
        let fixtures: Fixtures = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Fixture(format!("{}: {}", path.display(), e)))?;

        tracing::info!(
            "Loaded {} candidates and {} mentors from {}",
            fixtures.candidates.len(),
            fixtures.mentors.len(),
            path.display()
        );

        Ok(Self::from_fixtures(fixtures))
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_candidate_skill_profile(
        &self,
        candidate_id: &str,
    ) -> Result<Option<CandidateSkillProfile>, StoreError> {
        Ok(self.candidates.get(candidate_id).cloned())
    }

    async fn list_accepting_mentors(&self) -> Result<Vec<MentorProfile>, StoreError> {
        Ok(self
            .mentors
            .iter()
            .filter(|m| m.is_accepting_mentees)
            .cloned()
            .collect())
    }
}
