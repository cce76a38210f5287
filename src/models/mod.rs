// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateSkillProfile, CompatibilityLevel, MatchScore, MentorMatch, MentorProfile,
    ReasonThresholds, ScoringWeights,
};
pub use requests::{CompatibilityQuery, FindMatchesRequest, QuickRecommendationsRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse, QuickRecommendationsResponse};
