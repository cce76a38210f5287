use serde::{Deserialize, Serialize};
use crate::models::domain::{MentorMatch, MentorProfile};

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<MentorMatch>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for quick recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickRecommendationsResponse {
    pub mentors: Vec<MentorProfile>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
