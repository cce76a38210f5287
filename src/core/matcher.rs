use crate::models::{
    CandidateSkillProfile, CompatibilityLevel, MentorMatch, MentorProfile, ReasonThresholds,
    ScoringWeights,
};
use crate::core::{
    filters::{eligible_mentors, is_eligible},
    reasons::generate_match_reasons,
    scoring::calculate_match_score,
    skills::match_skills,
};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MentorMatch>,
    /// Mentors handed to the matcher
    pub total_mentors: usize,
    /// Mentors left after the capacity filter
    pub eligible_mentors: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Capacity filtering
/// 2. Per-mentor scoring (skill, industry, availability, experience, rating)
/// 3. Reason generation
/// 4. Stable sort by total and truncation
///
/// Pure: the caller fetches the candidate and the mentor pool.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    thresholds: ReasonThresholds,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, thresholds: ReasonThresholds) -> Self {
        Self { weights, thresholds }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            thresholds: ReasonThresholds::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single mentor against a candidate, without any eligibility check
    pub fn score_mentor(&self, candidate: &CandidateSkillProfile, mentor: MentorProfile) -> MentorMatch {
        let (score, matched_skills) = calculate_match_score(candidate, &mentor, &self.weights);
        let match_reasons = generate_match_reasons(&mentor, &score, &matched_skills, &self.thresholds);

        MentorMatch {
            compatibility_level: CompatibilityLevel::from_total(score.total),
            mentor,
            score,
            match_reasons,
        }
    }

    /// Rank mentors for a candidate
    ///
    /// # Arguments
    /// * `candidate` - The candidate's skills and optional industry
    /// * `mentors` - The mentor pool, in fetch order
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult with matches sorted by total score, descending. Ties keep fetch order.
    pub fn find_matches(
        &self,
        candidate: &CandidateSkillProfile,
        mentors: Vec<MentorProfile>,
        limit: usize,
    ) -> MatchResult {
        let total_mentors = mentors.len();

        let mut matches: Vec<MentorMatch> = eligible_mentors(mentors)
            .into_iter()
            .map(|mentor| self.score_mentor(candidate, mentor))
            .collect();

        let eligible_mentors = matches.len();

        // sort_by is stable, so equal totals stay in fetch order
        matches.sort_by(|a, b| {
            b.score
                .total
                .partial_cmp(&a.score.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches.truncate(limit);

        MatchResult {
            matches,
            total_mentors,
            eligible_mentors,
        }
    }

    /// Rank mentors by skill overlap alone
    ///
    /// Used when a candidate has no stored profile yet. Eligible mentors with no
    /// overlap are still returned, after every mentor that has some.
    pub fn quick_recommendations<S: AsRef<str>>(
        &self,
        candidate_skills: &[S],
        mentors: Vec<MentorProfile>,
        limit: usize,
    ) -> Vec<MentorProfile> {
        let mut scored: Vec<(f64, MentorProfile)> = mentors
            .into_iter()
            .filter(is_eligible)
            .map(|mentor| (match_skills(candidate_skills, &mentor.specializations).score, mentor))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);

        scored.into_iter().map(|(_, mentor)| mentor).collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
