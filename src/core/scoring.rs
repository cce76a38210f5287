use crate::core::{
    skills::match_skills,
    taxonomy::{contains_either, industry_groups, normalize},
};
use crate::models::{CandidateSkillProfile, MatchScore, MentorProfile, ScoringWeights};

/// Calculate the full score breakdown (0-100) for a mentor against a candidate
///
/// Scoring formula:
/// total = (
///     skill_match * 0.35 +         # Direct and category skill overlap
///     industry_match * 0.20 +      # Same industry or industry group
///     availability_score * 0.15 +  # Share of free mentee slots
///     experience_score * 0.15 +    # Mid-career mentors score highest
///     rating_score * 0.15          # Rating plus observation/endorsement volume
/// )
///
/// Also returns the candidate skills that directly matched, for reason generation.
pub fn calculate_match_score(
    candidate: &CandidateSkillProfile,
    mentor: &MentorProfile,
    weights: &ScoringWeights,
) -> (MatchScore, Vec<String>) {
    let skills = match_skills(&candidate.skills, &mentor.specializations);
    let industry_match = match_industry(candidate.industry.as_deref(), &mentor.industry);
    let availability_score = calculate_availability_score(mentor);
    let experience_score = calculate_experience_score(mentor.years_experience);
    let rating_score = calculate_rating_score(
        mentor.avg_rating,
        mentor.total_observations,
        mentor.total_endorsements,
    );

    let total = skills.score * weights.skill
        + industry_match * weights.industry
        + availability_score * weights.availability
        + experience_score * weights.experience
        + rating_score * weights.rating;

    let score = MatchScore {
        total: total.round().clamp(0.0, 100.0),
        skill_match: skills.score,
        industry_match,
        availability_score,
        experience_score,
        rating_score,
    };

    (score, skills.matched_skills)
}

/// Industry score (0-100)
///
/// - no candidate industry: 50
/// - either contains the other: 100
/// - same industry group: 75
/// - otherwise: 25
pub fn match_industry(candidate_industry: Option<&str>, mentor_industry: &str) -> f64 {
    let candidate = match candidate_industry.map(normalize) {
        Some(industry) if !industry.is_empty() => industry,
        _ => return 50.0,
    };
    let mentor = normalize(mentor_industry);

    if contains_either(&candidate, &mentor) {
        return 100.0;
    }

    let candidate_groups = industry_groups(&candidate);
    if !candidate_groups.is_empty()
        && !candidate_groups.is_disjoint(&industry_groups(&mentor))
    {
        return 75.0;
    }

    25.0
}

/// Availability score (0-100), proportional to the share of free slots
#[inline]
pub fn calculate_availability_score(mentor: &MentorProfile) -> f64 {
    if !mentor.is_accepting_mentees || mentor.max_mentees <= 0 {
        return 0.0;
    }

    let available = mentor.available_slots();
    if available <= 0 {
        return 0.0;
    }

    (available as f64 / mentor.max_mentees as f64 * 100.0).round().min(100.0)
}

/// Experience score (0-100)
///
/// Non-monotonic on purpose: 5-15 years scores highest.
#[inline]
pub fn calculate_experience_score(years_experience: i32) -> f64 {
    match years_experience {
        5..=15 => 100.0,
        16..=25 => 85.0,
        3..=4 => 80.0,
        y if y > 25 => 70.0,
        1..=2 => 60.0,
        _ => 40.0,
    }
}

/// Reputation score (0-100)
///
/// 50 base, up to 40 from the 0-5 rating, up to 10 from observation and endorsement volume.
#[inline]
pub fn calculate_rating_score(
    avg_rating: Option<f64>,
    total_observations: i32,
    total_endorsements: i32,
) -> f64 {
    let mut score = 50.0;

    if let Some(rating) = avg_rating.filter(|r| r.is_finite()) {
        score += rating.clamp(0.0, 5.0) / 5.0 * 40.0;
    }

    let activity = total_observations.max(0) as f64 + total_endorsements.max(0) as f64;
    score += (activity / 10.0).min(10.0);

    score.min(100.0).round()
}
