use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing field.
///
/// PostgREST returns `null` for unset array and integer columns, which
/// `#[serde(default)]` alone does not cover.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Skill and industry data read from a candidate record at match time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSkillProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, alias = "industry_hint", alias = "target_industry")]
    pub industry: Option<String>,
}

/// Mentor profile as stored in the profile store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorProfile {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specializations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub years_experience: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_mentees: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_mentees: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_accepting_mentees: bool,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_observations: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_endorsements: i32,
}

impl MentorProfile {
    /// Free mentee slots, never negative
    pub fn available_slots(&self) -> i32 {
        (self.max_mentees - self.current_mentees).max(0)
    }

    /// Whether the mentor can take on another mentee right now
    pub fn has_capacity(&self) -> bool {
        self.is_accepting_mentees && self.max_mentees > 0 && self.current_mentees < self.max_mentees
    }
}

/// Per-factor breakdown of a candidate/mentor pairing, every value in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub total: f64,
    #[serde(rename = "skillMatch")]
    pub skill_match: f64,
    #[serde(rename = "industryMatch")]
    pub industry_match: f64,
    #[serde(rename = "availabilityScore")]
    pub availability_score: f64,
    #[serde(rename = "experienceScore")]
    pub experience_score: f64,
    #[serde(rename = "ratingScore")]
    pub rating_score: f64,
}

/// Four-bucket label derived from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    Excellent,
    Good,
    Fair,
    Low,
}

impl CompatibilityLevel {
    pub fn from_total(total: f64) -> Self {
        if total >= 80.0 {
            CompatibilityLevel::Excellent
        } else if total >= 60.0 {
            CompatibilityLevel::Good
        } else if total >= 40.0 {
            CompatibilityLevel::Fair
        } else {
            CompatibilityLevel::Low
        }
    }
}

/// Ranked mentor with its score breakdown and human-readable reasons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorMatch {
    pub mentor: MentorProfile,
    pub score: MatchScore,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    #[serde(rename = "compatibilityLevel")]
    pub compatibility_level: CompatibilityLevel,
}

/// Scoring weights, expected to sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill: f64,
    pub industry: f64,
    pub availability: f64,
    pub experience: f64,
    pub rating: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.industry + self.availability + self.experience + self.rating
    }

    /// Check that every weight is non-negative and that they form a convex combination
    pub fn validate(&self) -> Result<(), String> {
        let all = [self.skill, self.industry, self.availability, self.experience, self.rating];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(format!("scoring weights must be non-negative: {:?}", self));
        }
        if (self.sum() - 1.0).abs() > 1e-6 {
            return Err(format!("scoring weights must sum to 1.0, got {}", self.sum()));
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.35,
            industry: 0.20,
            availability: 0.15,
            experience: 0.15,
            rating: 0.15,
        }
    }
}

/// Thresholds that decide which match reasons are emitted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReasonThresholds {
    pub strong_skill: f64,
    pub related_skill: f64,
    pub industry: f64,
    pub availability: f64,
    pub experience: f64,
    /// On the raw 0-5 rating scale
    pub rating: f64,
    pub endorsements: i32,
}

impl Default for ReasonThresholds {
    fn default() -> Self {
        Self {
            strong_skill: 70.0,
            related_skill: 40.0,
            industry: 75.0,
            availability: 70.0,
            experience: 80.0,
            rating: 4.5,
            endorsements: 5,
        }
    }
}
