use crate::core::{filters::is_eligible, Matcher};
use crate::models::{MentorMatch, MentorProfile};
use crate::services::store::{ProfileStore, StoreError};
use std::sync::Arc;

/// Mentor matching backed by a profile store
///
/// Fetches candidate and mentor data, then hands it to the pure [`Matcher`].
/// Nothing is written back to the store.
#[derive(Clone)]
pub struct MentorMatchingService {
    store: Arc<dyn ProfileStore>,
    matcher: Matcher,
}

impl MentorMatchingService {
    pub fn new(store: Arc<dyn ProfileStore>, matcher: Matcher) -> Self {
        Self { store, matcher }
    }

    pub fn store(&self) -> &Arc<dyn ProfileStore> {
        &self.store
    }

    /// Rank mentors for a candidate, best first
    ///
    /// A candidate without a skill profile yields an empty list rather than an error.
    /// Store failures are returned as-is.
    pub async fn find_mentor_matches(
        &self,
        candidate_id: &str,
        limit: usize,
    ) -> Result<Vec<MentorMatch>, StoreError> {
        let (candidate, mentors) = tokio::try_join!(
            self.store.get_candidate_skill_profile(candidate_id),
            self.store.list_accepting_mentors(),
        )?;

        let Some(candidate) = candidate else {
            tracing::info!("No skill profile for candidate {}, nothing to match", candidate_id);
            return Ok(Vec::new());
        };

        let result = self.matcher.find_matches(&candidate, mentors, limit);

        tracing::info!(
            "Ranked {} of {} eligible mentors for candidate {} ({} fetched)",
            result.matches.len(),
            result.eligible_mentors,
            candidate_id,
            result.total_mentors
        );

        Ok(result.matches)
    }

    /// Mentors ordered by skill overlap alone, for candidates without a stored profile
    pub async fn quick_recommendations<S: AsRef<str> + Sync>(
        &self,
        candidate_skills: &[S],
        limit: usize,
    ) -> Result<Vec<MentorProfile>, StoreError> {
        let mentors = self.store.list_accepting_mentors().await?;
        let picks = self.matcher.quick_recommendations(candidate_skills, mentors, limit);

        tracing::debug!(
            "Quick recommendations: {} mentors for {} skills",
            picks.len(),
            candidate_skills.len()
        );

        Ok(picks)
    }

    /// Score one candidate/mentor pairing
    ///
    /// `Ok(None)` when the candidate has no profile, or the mentor is unknown,
    /// not accepting mentees, or full. Scores are per pair, so this matches the
    /// entry `find_mentor_matches` would produce for the same mentor.
    pub async fn check_compatibility(
        &self,
        candidate_id: &str,
        mentor_id: &str,
    ) -> Result<Option<MentorMatch>, StoreError> {
        let (candidate, mentors) = tokio::try_join!(
            self.store.get_candidate_skill_profile(candidate_id),
            self.store.list_accepting_mentors(),
        )?;

        let Some(candidate) = candidate else {
            return Ok(None);
        };

        let mentor = mentors
            .into_iter()
            .filter(is_eligible)
            .find(|m| m.id == mentor_id);

        Ok(mentor.map(|mentor| self.matcher.score_mentor(&candidate, mentor)))
    }
}
