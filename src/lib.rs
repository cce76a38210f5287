//! Academy Match - mentor matching service for The 3rd Academy
//!
//! This library ranks mentors against a candidate using weighted skill, industry,
//! availability, experience and reputation scores, and attaches human-readable
//! reasons to every match. Candidate and mentor data come from a pluggable
//! read-only profile store (Supabase REST, Postgres, or in-memory fixtures).

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{match_skills, Matcher, MatchResult};
pub use models::{
    CandidateSkillProfile, CompatibilityLevel, MatchScore, MentorMatch, MentorProfile,
    ReasonThresholds, ScoringWeights,
};
pub use services::{MentorMatchingService, ProfileStore, StoreError};
