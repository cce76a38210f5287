// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod reasons;
pub mod scoring;
pub mod skills;
pub mod taxonomy;

pub use filters::{eligible_mentors, is_eligible};
pub use matcher::{Matcher, MatchResult};
pub use reasons::generate_match_reasons;
pub use scoring::{
    calculate_availability_score, calculate_experience_score, calculate_match_score,
    calculate_rating_score, match_industry,
};
pub use skills::{match_skills, SkillMatch};
