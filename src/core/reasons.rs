use crate::models::{MatchScore, MentorProfile, ReasonThresholds};

/// How many matched skills a strong-skill reason names
const MAX_NAMED_SKILLS: usize = 3;

/// Build the ordered list of human-readable reasons for a match
///
/// Each condition contributes at most one reason, and every reason is backed by
/// the score it describes. The rating reason reads the raw 0-5 rating, not the
/// derived rating score.
pub fn generate_match_reasons(
    mentor: &MentorProfile,
    score: &MatchScore,
    matched_skills: &[String],
    thresholds: &ReasonThresholds,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if score.skill_match >= thresholds.strong_skill {
        if matched_skills.is_empty() {
            reasons.push("Strong skill alignment".to_string());
        } else {
            let named: Vec<&str> = matched_skills
                .iter()
                .take(MAX_NAMED_SKILLS)
                .map(String::as_str)
                .collect();
            reasons.push(format!("Strong skill match: {}", named.join(", ")));
        }
    } else if score.skill_match >= thresholds.related_skill {
        reasons.push("Related skill background".to_string());
    }

    let industry = mentor.industry.trim();
    if score.industry_match >= thresholds.industry && !industry.is_empty() {
        reasons.push(format!("Industry experience in {}", industry));
    }

    if score.availability_score >= thresholds.availability {
        reasons.push("Highly available for new mentees".to_string());
    }

    if score.experience_score >= thresholds.experience {
        let years = mentor.years_experience.max(0);
        let unit = if years == 1 { "year" } else { "years" };
        reasons.push(format!("{} {} of professional experience", years, unit));
    }

    if let Some(rating) = mentor.avg_rating {
        if rating >= thresholds.rating {
            reasons.push(format!("Highly rated mentor ({:.1}/5)", rating.min(5.0)));
        }
    }

    if mentor.total_endorsements >= thresholds.endorsements {
        reasons.push(format!("Endorsed {} times", mentor.total_endorsements));
    }

    reasons
}
