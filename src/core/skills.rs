use std::collections::BTreeSet;
use crate::core::taxonomy::{contains_either, normalize, skill_categories};

/// Maximum points from direct skill hits
const DIRECT_MATCH_POINTS: f64 = 60.0;
/// Maximum points from shared skill categories
const CATEGORY_MATCH_POINTS: f64 = 40.0;

/// Outcome of comparing a candidate's skills against a mentor's specializations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillMatch {
    pub score: f64,
    /// Candidate skills (trimmed, original casing) that directly matched a specialization
    pub matched_skills: Vec<String>,
}

/// Score skill overlap on a 0-100 scale
///
/// score = min(direct / skills * 60, 60) + min(shared_categories / candidate_categories * 40, 40)
///
/// A candidate skill is a direct match when it and some specialization contain
/// one another after normalization. Category overlap is computed independently
/// from the keyword buckets in [`crate::core::taxonomy::SKILL_CATEGORIES`].
pub fn match_skills<S, T>(candidate_skills: &[S], mentor_specializations: &[T]) -> SkillMatch
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let candidate: Vec<(&str, String)> = candidate_skills
        .iter()
        .map(|s| (s.as_ref().trim(), normalize(s.as_ref())))
        .filter(|(_, norm)| !norm.is_empty())
        .collect();

    let specializations: Vec<String> = mentor_specializations
        .iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect();

    if candidate.is_empty() || specializations.is_empty() {
        return SkillMatch::default();
    }

    let matched_skills: Vec<String> = candidate
        .iter()
        .filter(|(_, skill)| specializations.iter().any(|spec| contains_either(skill, spec)))
        .map(|(original, _)| original.to_string())
        .collect();

    let candidate_categories: BTreeSet<&'static str> = candidate
        .iter()
        .flat_map(|(_, skill)| skill_categories(skill))
        .collect();

    let mentor_categories: BTreeSet<&'static str> = specializations
        .iter()
        .flat_map(|spec| skill_categories(spec))
        .collect();

    let shared_categories = candidate_categories.intersection(&mentor_categories).count();

    let direct_score = (matched_skills.len() as f64 / candidate.len() as f64 * DIRECT_MATCH_POINTS)
        .min(DIRECT_MATCH_POINTS);
    let category_score = (shared_categories as f64 / candidate_categories.len().max(1) as f64
        * CATEGORY_MATCH_POINTS)
        .min(CATEGORY_MATCH_POINTS);

    SkillMatch {
        score: (direct_score + category_score).round(),
        matched_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_score_zero() {
        let empty: Vec<String> = vec![];
        let result = match_skills(&empty, &["react", "node.js"]);
        assert_eq!(result.score, 0.0);
        assert!(result.matched_skills.is_empty());

        let result = match_skills(&["react"], &empty);
        assert_eq!(result, SkillMatch::default());
    }

    #[test]
    fn test_blank_strings_are_ignored() {
        let result = match_skills(&["  ", ""], &["react"]);
        assert_eq!(result.score, 0.0);

        // A blank specialization must not direct-match everything
        let result = match_skills(&["cooking"], &[""]);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_bidirectional_direct_match() {
        // javascript -> {programming, frontend}, react -> {frontend, mobile}
        // mentor -> {frontend} + {backend}
        // direct: 1/2 * 60 = 30, categories: 1/3 * 40 = 13.3
        let result = match_skills(&["javascript", "react"], &["Senior React Developer", "Node.js"]);
        assert_eq!(result.matched_skills, vec!["react"]);
        assert_eq!(result.score, 43.0);
    }

    #[test]
    fn test_shorter_specialization_matches_longer_skill() {
        let result = match_skills(&["React.js"], &["react"]);
        assert_eq!(result.matched_skills, vec!["React.js"]);
        // direct 60 + frontend/frontend 40
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_category_only_match() {
        // vue and angular share only the frontend bucket
        let result = match_skills(&["vue"], &["angular"]);
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.score, 40.0);
    }

    #[test]
    fn test_no_overlap() {
        let result = match_skills(&["pottery"], &["kubernetes"]);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let result = match_skills(&["  PYTHON "], &["python"]);
        assert_eq!(result.matched_skills, vec!["PYTHON"]);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_score_is_capped() {
        let skills: Vec<String> = (0..50).map(|i| format!("python {}", i)).collect();
        let result = match_skills(&skills, &["python"]);
        assert!(result.score <= 100.0);
    }
}
