use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank mentors for a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "candidate_id", rename = "candidateId")]
    pub candidate_id: String,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request for skill-only recommendations when no candidate profile exists yet
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuickRecommendationsRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Query for a single candidate/mentor pairing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatibilityQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "candidate_id", rename = "candidateId")]
    pub candidate_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "mentor_id", rename = "mentorId")]
    pub mentor_id: String,
}
